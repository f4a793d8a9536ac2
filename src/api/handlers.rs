use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;
use utoipa::OpenApi;

use crate::error::ApiError;
use crate::suggestions;
use crate::AppState;

use super::models::{ErrorResponse, SuggestionRequest, SuggestionResponse};
use super::ApiDoc;

#[utoipa::path(
    post,
    path = "/generate",
    request_body = SuggestionRequest,
    responses(
        (status = 200, description = "Domain name suggestions", body = SuggestionResponse),
        (status = 422, description = "Request body does not match the schema", body = ErrorResponse),
        (status = 500, description = "Completion service failure", body = ErrorResponse),
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> Result<Json<SuggestionResponse>, ApiError> {
    let Json(payload) = payload?;
    let result = suggestions::suggest(
        state.completion.as_ref(),
        &state.instructions,
        &state.format,
        &payload.userinput,
        state.suggestion_count,
    )
    .await?;

    info!(
        suggestions = result.domains.len(),
        input_tokens = result.input_tokens,
        output_tokens = result.output_tokens,
        api_speed_sec = result.elapsed_secs,
        "generated suggestions"
    );

    Ok(Json(result.into()))
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: "Not Found".to_string(),
        }),
    )
        .into_response()
}
