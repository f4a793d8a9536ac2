//! Seam to the external structured-completion service.
//!
//! A [`CompletionService`] takes instructions, free-text input and a declared
//! output schema, and hands back the raw structured payload together with
//! token usage and timestamps. Decoding that payload into domain types is the
//! caller's job.

use std::error::Error as StdError;

use async_trait::async_trait;
use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    #[error("completion service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("completion service error: {0}")]
    Upstream(String),

    #[error("model refused the request: {0}")]
    Refusal(String),

    #[error("upstream schema violation: {0}")]
    SchemaViolation(String),
}

impl CompletionError {
    /// Wraps a backend-specific network or I/O failure.
    pub fn transport(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Transport(err.into())
    }
}

/// Output shape the model is required to conform to.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    pub name: &'static str,
    pub schema: Value,
}

#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub instructions: &'a str,
    pub input: &'a str,
    pub format: &'a OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// A finished completion: the structured payload plus metadata.
#[derive(Debug, Clone)]
pub struct Completion {
    pub output: Value,
    pub usage: Usage,
    /// Unix timestamps in seconds, possibly fractional.
    pub created_at: f64,
    pub completed_at: f64,
}

impl Completion {
    /// Seconds between creation and completion. Clock skew on the provider
    /// side never yields a negative duration.
    pub fn elapsed_secs(&self) -> f64 {
        (self.completed_at - self.created_at).max(0.0)
    }
}

#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completion(created_at: f64, completed_at: f64) -> Completion {
        Completion {
            output: json!({}),
            usage: Usage::default(),
            created_at,
            completed_at,
        }
    }

    #[test]
    fn elapsed_is_fractional_seconds() {
        assert_eq!(completion(1000.0, 1001.5).elapsed_secs(), 1.5);
    }

    #[test]
    fn elapsed_never_negative() {
        assert_eq!(completion(1002.0, 1001.0).elapsed_secs(), 0.0);
    }

    #[test]
    fn transport_keeps_the_source_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = CompletionError::transport(io);
        assert_eq!(err.to_string(), "completion request failed: connection refused");
        assert!(err.source().is_some());
    }

    #[test]
    fn status_uses_http_status_code() {
        let err = CompletionError::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "slow down".into(),
        };
        assert_eq!(
            err.to_string(),
            "completion service returned 429 Too Many Requests: slow down"
        );
    }

    #[test]
    fn schema_violation_message_is_tagged() {
        let err = CompletionError::SchemaViolation("missing field `domains`".into());
        assert_eq!(
            err.to_string(),
            "upstream schema violation: missing field `domains`"
        );
    }
}
