mod config;
mod error;
mod routes;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "coffeepaws failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr()?;

    let app = routes::app(&config.base_path)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, base_path = %config.base_path, "coffeepaws listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
