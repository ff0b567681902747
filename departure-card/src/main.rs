use departure_card::web::{AppState, ServerConfig, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };

    let app = create_router(AppState::new());

    let addr = config.addr;
    info!(%addr, "Departure card listening");
    info!("  GET  /health       - Health check");
    info!("  GET  /card/size    - Layout size");
    info!("  PUT  /card/config  - Configure the card");
    info!("  POST /card/states  - Push a host snapshot");
    info!("  POST /card/render  - Render a card from config and states");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
