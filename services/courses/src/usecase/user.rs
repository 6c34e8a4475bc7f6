use anyhow::{Context as _, anyhow};

use crate::domain::password::hash_password;
use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::CoursesServiceError;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub username: String,
    pub password: String,
    pub email: String,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, CoursesServiceError> {
        // Argon2 is CPU-bound; run it on the blocking pool.
        let password = input.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .context("join password hashing task")?
            .map_err(|e| anyhow!("hash password: {e}"))?;

        let user = self
            .repo
            .create(&NewUser {
                username: input.username,
                password_hash,
                email: input.email,
            })
            .await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, CoursesServiceError> {
        self.repo.list().await
    }
}
