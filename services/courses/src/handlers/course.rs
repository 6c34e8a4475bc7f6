use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::is_blank;
use crate::error::CoursesServiceError;
use crate::extract::{CourseId, JsonBody};
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::course::{
    CreateCourseInput, CreateCourseUseCase, DeleteCourseUseCase, ListCoursesUseCase,
    UpvoteCourseUseCase,
};

// ── POST /courses ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub summary: Option<String>,
}

#[derive(Serialize)]
pub struct CreatedCourse {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub votes: i32,
}

#[derive(Serialize)]
pub struct CreateCourseResponse {
    pub course: CreatedCourse,
}

pub async fn create_course(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CreateCourseResponse>), CoursesServiceError> {
    if is_blank(&body.title) {
        return Err(CoursesServiceError::MissingField("title"));
    }
    let usecase = CreateCourseUseCase {
        repo: state.course_repo(),
    };
    let course = usecase
        .execute(CreateCourseInput {
            title: body.title,
            summary: body.summary,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateCourseResponse {
            course: CreatedCourse {
                id: course.id,
                title: course.title,
                summary: course.summary,
                votes: course.votes,
            },
        }),
    ))
}

// ── GET /courses ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CourseResponse {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub state: String,
    pub votes: i32,
    #[serde(serialize_with = "coursevote_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "coursevote_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseResponse>,
}

pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, CoursesServiceError> {
    let usecase = ListCoursesUseCase {
        repo: state.course_repo(),
    };
    let courses = usecase
        .execute()
        .await?
        .into_iter()
        .map(|course| CourseResponse {
            id: course.id,
            title: course.title,
            summary: course.summary,
            state: course.state,
            votes: course.votes,
            created_at: course.created_at,
            updated_at: course.updated_at,
        })
        .collect();
    Ok(Json(CourseListResponse { courses }))
}

// ── DELETE /courses/{course_id} ──────────────────────────────────────────────

pub async fn delete_course(
    State(state): State<AppState>,
    CourseId(course_id): CourseId,
) -> Result<Json<MessageResponse>, CoursesServiceError> {
    let usecase = DeleteCourseUseCase {
        repo: state.course_repo(),
    };
    usecase.execute(course_id).await?;
    Ok(Json(MessageResponse {
        message: "Course deleted successfully!",
    }))
}

// ── POST /courses/{course_id}/upvote ─────────────────────────────────────────

pub async fn upvote_course(
    State(state): State<AppState>,
    CourseId(course_id): CourseId,
) -> Result<Json<MessageResponse>, CoursesServiceError> {
    let usecase = UpvoteCourseUseCase {
        repo: state.course_repo(),
    };
    usecase.execute(course_id).await?;
    Ok(Json(MessageResponse {
        message: "Course upvoted!",
    }))
}
