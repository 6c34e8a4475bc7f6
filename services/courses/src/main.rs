use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use coursevote_core::config::Config;
use coursevote_core::tracing::init_tracing;
use coursevote_courses::config::CoursesConfig;
use coursevote_courses::router::build_router;
use coursevote_courses::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info,tower_http=debug");

    let config = CoursesConfig::from_env().context("load configuration")?;

    let db = Database::connect(config.database_url())
        .await
        .context("connect to database")?;

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.courses_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("courses service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
