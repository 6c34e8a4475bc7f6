#![allow(async_fn_in_trait)]

use crate::domain::types::{Course, NewCourse, NewUser, User};
use crate::error::CoursesServiceError;

/// Repository for registered users.
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<User, CoursesServiceError>;

    /// Every user, ordered by id.
    async fn list(&self) -> Result<Vec<User>, CoursesServiceError>;
}

/// Repository for courses and their vote counters.
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: &NewCourse) -> Result<Course, CoursesServiceError>;

    /// Every course, ordered by id.
    async fn list(&self) -> Result<Vec<Course>, CoursesServiceError>;

    /// Delete a course together with its votes, notifications and merges.
    /// Returns `true` if the course existed.
    async fn delete(&self, id: i32) -> Result<bool, CoursesServiceError>;

    /// Atomically add one vote. Returns `true` if the course existed.
    async fn increment_votes(&self, id: i32) -> Result<bool, CoursesServiceError>;
}
