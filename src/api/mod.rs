mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::suggestions::DomainSuggestion;
use crate::AppState;

pub use handlers::{generate, not_found, openapi};
pub use models::{ErrorResponse, SuggestionRequest, SuggestionResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "Domain Suggestions API", version = "1.0"),
    paths(handlers::generate),
    components(schemas(SuggestionRequest, SuggestionResponse, DomainSuggestion, ErrorResponse))
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/openapi.json", get(openapi))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
