use axum_test::TestServer;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
use serde_json::{Value, json};

use coursevote_courses::router::build_router;
use coursevote_courses::state::AppState;
use coursevote_courses_migration::Migrator;
use coursevote_courses_schema::{courses, merges, notifications, users, votes};
use coursevote_testing::db::migrated_sqlite;

/// Router over a fresh migrated database, plus a handle to that database for direct checks.
pub async fn test_app() -> (TestServer, DatabaseConnection) {
    let db = migrated_sqlite::<Migrator>().await;
    let server = TestServer::new(build_router(AppState { db: db.clone() }))
        .expect("failed to build test server");
    (server, db)
}

/// POST a course and return its assigned id.
pub async fn create_course(server: &TestServer, title: &str, summary: Option<&str>) -> i64 {
    let resp = server
        .post("/courses")
        .json(&json!({ "title": title, "summary": summary }))
        .await;
    resp.assert_status(axum::http::StatusCode::CREATED);
    resp.json::<Value>()["course"]["id"]
        .as_i64()
        .expect("created course has an integer id")
}

/// GET /courses and return the `courses` array.
pub async fn list_courses(server: &TestServer) -> Vec<Value> {
    let resp = server.get("/courses").await;
    resp.assert_status_ok();
    resp.json::<Value>()["courses"]
        .as_array()
        .cloned()
        .expect("courses is an array")
}

/// Votes of the course with `id` as seen by GET /courses.
pub async fn votes_of(server: &TestServer, id: i64) -> i64 {
    list_courses(server)
        .await
        .into_iter()
        .find(|c| c["id"] == id)
        .and_then(|c| c["votes"].as_i64())
        .expect("course is listed")
}

/// Insert an open course directly, stamped with `at` for both timestamps.
pub async fn seed_course(
    db: &DatabaseConnection,
    title: &str,
    at: DateTime<Utc>,
) -> courses::Model {
    courses::ActiveModel {
        title: Set(title.into()),
        summary: Set(None),
        state: Set("Open".into()),
        votes: Set(1),
        created_at: Set(at),
        updated_at: Set(at),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert course")
}

/// Insert a vote, a notification and a self-referencing merge for `course_id`.
pub async fn seed_dependents(db: &DatabaseConnection, course_id: i32) {
    let now = Utc::now();
    let user = users::ActiveModel {
        username: Set("voter".into()),
        password: Set("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into()),
        email: Set("voter@example.com".into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert user");
    votes::ActiveModel {
        course_id: Set(course_id),
        user_id: Set(user.id),
        ip_address: Set("203.0.113.7".into()),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert vote");
    notifications::ActiveModel {
        user_id: Set(user.id),
        course_id: Set(course_id),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert notification");
    merges::ActiveModel {
        from_course_id: Set(course_id),
        to_course_id: Set(course_id),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert merge");
}
