mod config;
mod routes;

#[tokio::main]
async fn main() {
    // .env is optional.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    if config.api_url.is_none() {
        tracing::warn!("FINTRACK_API_URL not set; browser falls back to its build-time API origin");
    }

    let app = routes::app(&config).expect("leptos configuration");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "fintrack listening");
    axum::serve(listener, app).await.expect("server failed");
}
