use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bus_server::cache::{CacheConfig, CachedPlanner};
use bus_server::catalog::{Catalog, mangalore_network};
use bus_server::planner::{Planner, SearchConfig};
use bus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load the catalog from BUS_CATALOG if set, else use the built-in
    // network.
    let catalog = match std::env::var("BUS_CATALOG") {
        Ok(path) => {
            let catalog = Catalog::from_json_file(&path).expect("Failed to load catalog file");
            println!("Loaded {} lines from {path}", catalog.len());
            catalog
        }
        Err(_) => {
            let catalog = mangalore_network();
            println!("Using built-in network ({} lines)", catalog.len());
            catalog
        }
    };
    let catalog = Arc::new(catalog);

    let planner = Planner::new(catalog.clone(), SearchConfig::default());
    let cached = CachedPlanner::new(planner, &CacheConfig::default());

    let state = AppState::new(catalog, cached);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Bus Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /api/stops     - List all stops");
    println!("  GET  /api/lines     - List all lines");
    println!("  POST /journey/plan  - Plan a journey");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
