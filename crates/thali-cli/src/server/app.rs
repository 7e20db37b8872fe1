//! Axum application setup.

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Full snapshot
        .route("/dataset", get(handlers::get_dataset))
        // Headline metrics for the cards
        .route("/summary", get(handlers::get_summary))
        // Data-quality report
        .route("/quality", get(handlers::get_quality))
        // One section by name
        .route("/sections/:name", get(handlers::get_section));

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    println!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
