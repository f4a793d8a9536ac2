use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::suggestions::{DomainSuggestion, Suggestions};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SuggestionRequest {
    /// Free-text description of the business.
    pub userinput: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionResponse {
    pub suggestions: Vec<DomainSuggestion>,
    pub input_tokens: u64,
    pub output_tokens: u64,
    /// Seconds the completion service spent on the call.
    pub api_speed_sec: f64,
}

impl From<Suggestions> for SuggestionResponse {
    fn from(s: Suggestions) -> Self {
        Self {
            suggestions: s.domains,
            input_tokens: s.input_tokens,
            output_tokens: s.output_tokens,
            api_speed_sec: s.elapsed_secs,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
