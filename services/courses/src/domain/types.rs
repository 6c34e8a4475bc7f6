use chrono::{DateTime, Utc};

/// State every new course starts in. No handler transitions it.
pub const DEFAULT_COURSE_STATE: &str = "Open";

/// Vote count of a freshly created course.
pub const INITIAL_VOTES: i32 = 1;

/// A registered user. `password_hash` is an Argon2 PHC string.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub email: String,
}

/// User fields before the row is inserted and an id is assigned.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
}

/// A votable course.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub state: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Course fields before the row is inserted and an id is assigned.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub summary: Option<String>,
    pub state: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl NewCourse {
    /// A course in the default state with the initial vote count, stamped `now`.
    pub fn open(title: String, summary: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            title,
            summary,
            state: DEFAULT_COURSE_STATE.to_owned(),
            votes: INITIAL_VOTES,
            created_at: now,
        }
    }
}

/// Returns `true` when a required string field is absent in practice (empty or whitespace).
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
