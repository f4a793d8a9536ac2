//! OpenAI Responses API backend for [`CompletionService`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::completion::{
    Completion, CompletionError, CompletionRequest, CompletionService, Usage,
};
use crate::config::AppConfig;

pub struct OpenAiResponses {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiResponses {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(&cfg.base_url, &cfg.api_key, &cfg.model)
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    fn request_body(&self, request: &CompletionRequest<'_>) -> Value {
        json!({
            "model": self.model,
            "instructions": request.instructions,
            "input": request.input,
            "text": {
                "format": {
                    "type": "json_schema",
                    "name": request.format.name,
                    "strict": true,
                    "schema": request.format.schema,
                }
            }
        })
    }
}

#[async_trait]
impl CompletionService for OpenAiResponses {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, CompletionError> {
        let url = self.endpoint();
        debug!(%url, model = %self.model, input_len = request.input.len(), "sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(&request))
            .send()
            .await
            .map_err(CompletionError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(CompletionError::Status { status, body });
        }

        let body = response.text().await.map_err(CompletionError::transport)?;
        parse_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    created_at: f64,
    #[serde(default)]
    completed_at: Option<f64>,
    #[serde(default)]
    error: Option<ErrorObject>,
    #[serde(default)]
    usage: Option<Usage>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    OutputText { text: String },
    Refusal { refusal: String },
    #[serde(other)]
    Other,
}

/// Decodes a Responses API body into a [`Completion`], parsing the
/// concatenated output text as JSON.
fn parse_response(body: &str) -> Result<Completion, CompletionError> {
    let envelope: ResponseEnvelope = serde_json::from_str(body).map_err(|e| {
        CompletionError::SchemaViolation(format!("unreadable completion envelope: {e}"))
    })?;

    if let Some(err) = envelope.error {
        return Err(CompletionError::Upstream(match err.code {
            Some(code) => format!("{code}: {}", err.message),
            None => err.message,
        }));
    }

    let completed_at = envelope.completed_at.ok_or_else(|| {
        CompletionError::SchemaViolation("completion has no completed_at timestamp".to_string())
    })?;
    let usage = envelope.usage.ok_or_else(|| {
        CompletionError::SchemaViolation("completion carries no token usage".to_string())
    })?;

    let mut text = String::new();
    for part in envelope.output.into_iter().flat_map(|item| match item {
        OutputItem::Message { content } => content,
        OutputItem::Other => Vec::new(),
    }) {
        match part {
            ContentPart::OutputText { text: chunk } => text.push_str(&chunk),
            ContentPart::Refusal { refusal } => return Err(CompletionError::Refusal(refusal)),
            ContentPart::Other => {}
        }
    }

    if text.trim().is_empty() {
        return Err(CompletionError::SchemaViolation(
            "completion contains no output text".to_string(),
        ));
    }

    let output = serde_json::from_str(&text).map_err(|e| {
        CompletionError::SchemaViolation(format!("output text is not valid JSON: {e}"))
    })?;

    Ok(Completion {
        output,
        usage,
        created_at: envelope.created_at,
        completed_at,
    })
}
