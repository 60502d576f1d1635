mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Missing .env is fine; real deployments set variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let app = routes::app().expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, api_base = %client::net::api::api_base(), "outreach dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
