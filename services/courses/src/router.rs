use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use coursevote_core::health::healthz;
use coursevote_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    course::{create_course, delete_course, get_courses, upvote_course},
    health::readyz,
    user::{create_user, get_users},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", post(create_user))
        .route("/users", get(get_users))
        // Courses
        .route("/courses", post(create_course))
        .route("/courses", get(get_courses))
        .route("/courses/{course_id}", delete(delete_course))
        .route("/courses/{course_id}/upvote", post(upvote_course))
        .with_state(state)
        // Last layer runs first: assign the id, then trace, then echo it back.
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .layer(CorsLayer::permissive())
}
