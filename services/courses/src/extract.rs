//! Request extractors that reject with `CoursesServiceError` instead of axum's defaults.

use std::future::Future;

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::CoursesServiceError;

/// JSON body whose rejection (bad content type, malformed JSON, missing or
/// mistyped field) becomes a 400 `INVALID_BODY` error.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = CoursesServiceError;

    // Json ignores state; extracting against `()` keeps `&S` out of the future.
    fn from_request(
        req: Request,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Json(value) = Json::<T>::from_request(req, &())
                .await
                .map_err(|rejection| CoursesServiceError::InvalidBody(rejection.body_text()))?;
            Ok(Self(value))
        }
    }
}

/// `{course_id}` path segment. A non-integer id cannot name a course, so it
/// rejects as `CourseNotFound` rather than 400.
#[derive(Debug, Clone, Copy)]
pub struct CourseId(pub i32);

impl<S> FromRequestParts<S> for CourseId
where
    S: Send + Sync,
{
    type Rejection = CoursesServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(id) = Path::<i32>::from_request_parts(parts, &())
                .await
                .map_err(|_| CoursesServiceError::CourseNotFound)?;
            Ok(Self(id))
        }
    }
}
