//! Web API module for Agora
//!
//! Provides REST API endpoints for:
//! - Law listing and detail (with the caller's recorded vote)
//! - Vote and comment submission
//! - Health checks

pub mod docs;
pub mod error;
pub mod health;
pub mod laws;

use axum::Router;

pub use docs::docs_routes;
pub use error::ApiError;
pub use health::health_routes;
pub use laws::laws_routes;

/// Create the API router with all endpoints
pub fn api_router() -> Router {
    Router::new()
        .merge(health_routes())
        .merge(docs_routes())
        .merge(laws_routes())
}
