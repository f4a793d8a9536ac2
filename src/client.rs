//! Example client: one fixed request against a locally running service.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use thiserror::Error;

use crate::api::SuggestionRequest;

pub const ENDPOINT: &str = "http://127.0.0.1:8000/generate";

pub const EXAMPLE_INPUT: &str = "We are the lighthouse in a sea of data, guiding your brand toward the shores of untapped potential.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Posts `userinput` to `url` and returns the report to print.
pub async fn send(url: &str, userinput: &str) -> Result<String, ClientError> {
    let response = Client::new()
        .post(url)
        .json(&SuggestionRequest {
            userinput: userinput.to_string(),
        })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    render(status, &body)
}

/// Formats a response: pretty JSON on 200, status code and raw body otherwise.
pub fn render(status: StatusCode, body: &str) -> Result<String, ClientError> {
    if status != StatusCode::OK {
        return Ok(format!("Error: {} {}", status.as_u16(), body));
    }

    let value: Value = serde_json::from_str(body)?;
    Ok(format!("Response JSON:\n{}", to_pretty_json(&value)?))
}

/// Four-space indentation, keys in received order, non-ASCII left as is.
fn to_pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
