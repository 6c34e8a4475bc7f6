use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::is_blank;
use crate::error::CoursesServiceError;
use crate::extract::JsonBody;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::user::{CreateUserInput, CreateUserUseCase, ListUsersUseCase};

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl CreateUserRequest {
    fn validate(&self) -> Result<(), CoursesServiceError> {
        for (name, value) in [
            ("username", &self.username),
            ("password", &self.password),
            ("email", &self.email),
        ] {
            if is_blank(value) {
                return Err(CoursesServiceError::MissingField(name));
            }
        }
        Ok(())
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), CoursesServiceError> {
    body.validate()?;
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(CreateUserInput {
            username: body.username,
            password: body.password,
            email: body.email,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created!",
        }),
    ))
}

// ── GET /users ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, CoursesServiceError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase
        .execute()
        .await?
        .into_iter()
        .map(|user| UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
        })
        .collect();
    Ok(Json(UserListResponse { users }))
}
