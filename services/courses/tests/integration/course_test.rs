use axum::http::{HeaderName, HeaderValue, StatusCode};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{Value, json};

use coursevote_courses_schema::{courses, merges, notifications, votes};

use crate::helpers::{
    create_course, list_courses, seed_course, seed_dependents, test_app, votes_of,
};

#[tokio::test]
async fn should_follow_create_upvote_list_scenario() {
    let (server, _db) = test_app().await;

    let resp = server
        .post("/courses")
        .json(&json!({ "title": "Intro to Go", "summary": "basics" }))
        .await;
    resp.assert_status(StatusCode::CREATED);
    resp.assert_json(&json!({
        "course": { "id": 1, "title": "Intro to Go", "summary": "basics", "votes": 1 }
    }));

    let resp = server.post("/courses/1/upvote").await;
    resp.assert_status_ok();
    resp.assert_json(&json!({ "message": "Course upvoted!" }));

    assert_eq!(votes_of(&server, 1).await, 2);
}

#[tokio::test]
async fn should_create_course_without_summary() {
    let (server, _db) = test_app().await;

    let resp = server
        .post("/courses")
        .json(&json!({ "title": "Rust for beginners" }))
        .await;
    resp.assert_status(StatusCode::CREATED);
    let body: Value = resp.json();
    assert_eq!(body["course"]["summary"], Value::Null);
    assert_eq!(body["course"]["votes"], 1);
}

#[tokio::test]
async fn should_reject_course_without_title() {
    let (server, db) = test_app().await;

    let resp = server
        .post("/courses")
        .json(&json!({ "summary": "no title" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_BODY");
    assert!(body["message"].as_str().unwrap().contains("title"));
    assert_eq!(courses::Entity::find().count(&db).await.unwrap(), 0);

    let resp = server
        .post("/courses")
        .json(&json!({ "title": "" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.assert_json(&json!({ "kind": "MISSING_FIELD", "message": "missing field: title" }));
}

#[tokio::test]
async fn should_list_courses_with_all_fields() {
    let (server, _db) = test_app().await;
    create_course(&server, "Intro to Go", Some("basics")).await;
    create_course(&server, "Intro to Go", None).await;

    let courses = list_courses(&server).await;
    assert_eq!(courses.len(), 2, "duplicate titles are allowed");

    let first = &courses[0];
    let mut keys: Vec<&str> = first.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["created_at", "id", "state", "summary", "title", "updated_at", "votes"]
    );
    assert_eq!(first["state"], "Open");
    assert_eq!(first["votes"], 1);

    let created_at = first["created_at"].as_str().unwrap();
    assert!(created_at.ends_with('Z'));
    assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
    assert_eq!(first["created_at"], first["updated_at"]);
}

#[tokio::test]
async fn should_add_one_vote_per_sequential_upvote() {
    let (server, _db) = test_app().await;
    let id = create_course(&server, "Databases", None).await;

    for expected in 2..=5 {
        server
            .post(&format!("/courses/{id}/upvote"))
            .await
            .assert_status_ok();
        assert_eq!(votes_of(&server, id).await, expected);
    }
}

#[tokio::test]
async fn should_refresh_updated_at_on_upvote() {
    let (server, db) = test_app().await;
    let an_hour_ago = Utc::now() - Duration::hours(1);
    let before = seed_course(&db, "Compilers", an_hour_ago).await;

    server
        .post(&format!("/courses/{}/upvote", before.id))
        .await
        .assert_status_ok();

    let after = courses::Entity::find_by_id(before.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(
        after.updated_at > before.updated_at,
        "updated_at stayed at {}",
        after.updated_at
    );
    assert!(after.updated_at <= Utc::now());
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.votes, before.votes + 1);
}

#[tokio::test]
async fn should_not_touch_table_when_upvoting_missing_course() {
    let (server, _db) = test_app().await;
    create_course(&server, "Networks", None).await;
    let before = list_courses(&server).await;

    let resp = server.post("/courses/999/upvote").await;
    resp.assert_status_not_found();
    resp.assert_json(&json!({
        "kind": "COURSE_NOT_FOUND",
        "message": "Course not found!",
    }));

    assert_eq!(list_courses(&server).await, before);
}

#[tokio::test]
async fn should_treat_non_integer_id_as_not_found() {
    let (server, _db) = test_app().await;
    server
        .post("/courses/abc/upvote")
        .await
        .assert_status_not_found();
    server.delete("/courses/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn should_not_lose_concurrent_upvotes() {
    use std::future::IntoFuture;

    let (server, _db) = test_app().await;
    let id = create_course(&server, "Distributed systems", None).await;
    let path = format!("/courses/{id}/upvote");

    let responses = futures::future::join_all(
        (0..25).map(|_| server.post(&path).into_future()),
    )
    .await;

    for resp in &responses {
        resp.assert_status_ok();
    }
    assert_eq!(votes_of(&server, id).await, 26);
}

#[tokio::test]
async fn should_remove_deleted_course_from_listing() {
    let (server, _db) = test_app().await;
    let keep = create_course(&server, "Keep", None).await;
    let gone = create_course(&server, "Gone", None).await;

    let resp = server.delete(&format!("/courses/{gone}")).await;
    resp.assert_status_ok();
    resp.assert_json(&json!({ "message": "Course deleted successfully!" }));

    let ids: Vec<i64> = list_courses(&server)
        .await
        .iter()
        .filter_map(|c| c["id"].as_i64())
        .collect();
    assert_eq!(ids, [keep]);

    server
        .delete(&format!("/courses/{gone}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_course() {
    let (server, _db) = test_app().await;
    let resp = server.delete("/courses/41").await;
    resp.assert_status_not_found();
    resp.assert_json(&json!({
        "kind": "COURSE_NOT_FOUND",
        "message": "Course not found!",
    }));
}

#[tokio::test]
async fn should_delete_dependent_rows_with_course() {
    let (server, db) = test_app().await;
    let id = create_course(&server, "Operating systems", None).await;
    let other = create_course(&server, "Other", None).await;
    seed_dependents(&db, id as i32).await;
    seed_dependents(&db, other as i32).await;

    server
        .delete(&format!("/courses/{id}"))
        .await
        .assert_status_ok();

    assert_eq!(votes::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(notifications::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(merges::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn should_answer_health_probes() {
    let (server, _db) = test_app().await;
    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_echo_request_id() {
    let (server, _db) = test_app().await;
    let resp = server
        .get("/healthz")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-42"),
        )
        .await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "req-42");
}
