pub mod course;
pub mod health;
pub mod user;

use serde::Serialize;

/// `{"message": "..."}` body returned by write endpoints.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
