use tracing::info;
use tracing_subscriber::EnvFilter;

use subway_server::config::ServerConfig;
use subway_server::network::SubwayNetwork;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    // RUST_LOG wins over the configured default
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::new(SubwayNetwork::new());
    let app = create_router(state);

    let addr = config.bind_addr;
    info!("Subway line server listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET    /health              - Health check");
    info!("  POST   /stations            - Create a station");
    info!("  GET    /stations            - List stations");
    info!("  DELETE /stations/:id        - Delete a station");
    info!("  POST   /lines               - Create a line");
    info!("  GET    /lines               - List lines");
    info!("  GET    /lines/:id           - Show a line");
    info!("  PUT    /lines/:id           - Update a line");
    info!("  DELETE /lines/:id           - Delete a line");
    info!("  POST   /lines/:id/sections  - Add a section to a line");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
