use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Courses service error variants.
#[derive(Debug, thiserror::Error)]
pub enum CoursesServiceError {
    #[error("Course not found!")]
    CourseNotFound,
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("{0}")]
    InvalidBody(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CoursesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CoursesServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::CourseNotFound => StatusCode::NOT_FOUND,
            Self::MissingField(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are already visible through TraceLayer's response status.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = format_args!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
