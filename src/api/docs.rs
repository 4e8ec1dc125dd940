//! API Documentation - Swagger UI
//!
//! Provides OpenAPI documentation at /docs

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::laws::{ChoiceView, CommentView, LawView, SubmitRequest, UserLawView};
use super::laws::types::TallyView;

/// Agora API OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agora API",
        version = "1.0.0",
        description = "Civic law discussion platform REST API.

## Overview
Agora lets citizens:
- **Browse**: list proposed laws with their vote tallies
- **Vote**: cast a single yes/no vote per law
- **Comment**: post comments on a law's thread

Voter identifiers are browser-local tokens; there is no authentication.
",
        contact(
            name = "Agora Team",
            url = "https://github.com/agora-platform/agora"
        ),
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        crate::api::laws::handlers::list_laws,
        crate::api::laws::handlers::get_law,
        crate::api::laws::handlers::submit,
    ),
    components(
        schemas(
            LawView,
            TallyView,
            CommentView,
            UserLawView,
            SubmitRequest,
            ChoiceView,
        )
    ),
    tags(
        (name = "laws", description = "Law listing, voting, and comments"),
    )
)]
pub struct ApiDoc;

/// Create documentation routes
pub fn docs_routes() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
