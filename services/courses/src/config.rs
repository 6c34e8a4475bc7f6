use serde::Deserialize;

use coursevote_core::config::Config;

/// Courses service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct CoursesConfig {
    /// Database user. Env var: `DB_USER`.
    pub db_user: String,
    /// Database password. Env var: `DB_PASSWORD`.
    pub db_password: String,
    /// Database host. Env var: `DB_HOST`.
    pub db_host: String,
    /// Database port (default 5432). Env var: `DB_PORT`.
    #[serde(default = "default_db_port")]
    pub db_port: u16,
    /// Database name. Env var: `DB_NAME`.
    pub db_name: String,
    /// TCP port for the HTTP server (default 5000). Env var: `COURSES_PORT`.
    #[serde(default = "default_courses_port")]
    pub courses_port: u16,
}

fn default_db_port() -> u16 {
    5432
}

fn default_courses_port() -> u16 {
    5000
}

impl Config for CoursesConfig {}

impl CoursesConfig {
    /// PostgreSQL connection URL assembled from the `DB_*` variables.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}
