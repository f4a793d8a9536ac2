//! Domain name suggestions: the output schema the model must follow and the
//! decode-and-validate step applied to whatever comes back.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use utoipa::ToSchema;

use crate::completion::{
    Completion, CompletionError, CompletionRequest, CompletionService, OutputFormat,
};

/// A candidate brand name and why it fits the business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DomainSuggestion {
    pub name: String,
    /// Rationale for the suggestion.
    pub logic: String,
}

#[derive(Debug, Deserialize)]
struct DomainSuggestions {
    domains: Vec<DomainSuggestion>,
}

/// Suggestions plus the metadata reported for the completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions {
    pub domains: Vec<DomainSuggestion>,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub elapsed_secs: f64,
}

pub fn output_format() -> OutputFormat {
    OutputFormat {
        name: "domain_suggestions",
        schema: json!({
            "type": "object",
            "properties": {
                "domains": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "logic": { "type": "string" }
                        },
                        "required": ["name", "logic"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["domains"],
            "additionalProperties": false
        }),
    }
}

/// Asks the completion service for suggestions about `business`.
///
/// `expected` is only used to flag a count mismatch in the logs; the
/// suggestions are relayed as returned.
pub async fn suggest(
    service: &dyn CompletionService,
    instructions: &str,
    format: &OutputFormat,
    business: &str,
    expected: usize,
) -> Result<Suggestions, CompletionError> {
    let completion = service
        .complete(CompletionRequest {
            instructions,
            input: business,
            format,
        })
        .await?;

    let suggestions = decode(completion)?;
    if suggestions.domains.len() != expected {
        warn!(
            expected,
            received = suggestions.domains.len(),
            "model returned a different number of suggestions than requested"
        );
    }
    Ok(suggestions)
}

/// Validates the structured payload against the declared shape.
pub fn decode(completion: Completion) -> Result<Suggestions, CompletionError> {
    let elapsed_secs = completion.elapsed_secs();
    let parsed: DomainSuggestions = serde_json::from_value(completion.output)
        .map_err(|e| CompletionError::SchemaViolation(e.to_string()))?;

    if let Some(pos) = parsed
        .domains
        .iter()
        .position(|d| d.name.trim().is_empty() || d.logic.trim().is_empty())
    {
        return Err(CompletionError::SchemaViolation(format!(
            "suggestion {pos} has an empty name or logic"
        )));
    }

    Ok(Suggestions {
        domains: parsed.domains,
        input_tokens: completion.usage.input_tokens,
        output_tokens: completion.usage.output_tokens,
        elapsed_secs,
    })
}
