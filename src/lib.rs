//! In-memory CMS document server
//!
//! A minimal document repository over HTTP: create, fetch by id, list, and
//! poll for documents added since a client's last visit. All state lives in
//! memory and resets on restart.
//!
//! The library target exists so integration tests can build the router; the
//! server binary is in main.rs.

pub mod cms;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/cms/document", routes::documents::router())
        .nest("/cms/healthcheck", routes::health::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
