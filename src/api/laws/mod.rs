//! Law API endpoints
//!
//! GET  /api/laws - List laws with tallies
//! GET  /api/laws/:id - Law detail plus the caller's recorded vote
//! POST /api/laws/:id - Cast a vote or post a comment

pub mod handlers;
pub mod types;


pub use handlers::{get_law, list_laws, submit};
pub use types::{law_to_view, ChoiceView, CommentView, LawView, SubmitRequest, UserLawView};

use axum::{routing::get, Router};

/// Create law routes
pub fn laws_routes() -> Router {
    Router::new()
        .route("/api/laws", get(list_laws))
        .route("/api/laws/:id", get(get_law).post(submit))
}
