mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, logging, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cache = startup::connect_to_cache(&config).await?;
    let jwt = startup::setup_jwt(&config)?;

    let app = router::router(AppState::new(db, cache, jwt));

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    tracing::info!("Listening on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
