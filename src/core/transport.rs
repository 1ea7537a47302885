//! HTTP transport: the only place that touches the network
//!
//! The client talks to the API through the [`Transport`] trait so tests
//! can substitute a mock. [`HttpTransport`] is the reqwest-backed
//! implementation; it owns the pooled connection and the configured
//! timeout. No retries happen here: every failure is surfaced to the
//! caller unchanged.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::core::command::{payload, Command};
use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TextitError};

/// Network seam between the client and the remote API.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send a single command and return its raw reply.
    async fn send_one(&self, command: &Command) -> Result<Value>;

    /// Send a batch of commands and return one raw reply per command,
    /// in the same order.
    async fn send_batch(&self, commands: &[Command]) -> Result<Vec<Value>>;
}

/// Reqwest-backed transport posting to the TextIT endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| TextitError::ConfigError {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// POST the payload and decode the array of per-command replies.
    async fn post(&self, commands: &[Command]) -> Result<Vec<Value>> {
        let body = payload(commands);
        debug!("Sending {} command(s) to {}", commands.len(), self.base_url);

        let mut request = self
            .client
            .post(&self.base_url)
            .header("Content-Type", "application/json")
            .json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| TextitError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .unwrap_or_default();
        let text = response
            .text()
            .await
            .map_err(|e| TextitError::NetworkError {
                message: e.to_string(),
            })?;

        debug!("Response [{status}]: {text}");
        check_reply(&content_type, status, &text)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_one(&self, command: &Command) -> Result<Value> {
        let mut replies = self.post(std::slice::from_ref(command)).await?;
        if replies.len() != 1 {
            return Err(TextitError::parse(format!(
                "expected one reply, got {}",
                replies.len()
            )));
        }
        Ok(replies.remove(0))
    }

    async fn send_batch(&self, commands: &[Command]) -> Result<Vec<Value>> {
        self.post(commands).await
    }
}

/// Validate a raw API response and decode the per-command replies.
///
/// A response is rejected when its content type is not `text/html` (the
/// service's own quirk), when the body carries the service's error
/// envelope (even on a 2xx status), when the HTTP status is outside the
/// success range, or when the body is not an array of replies.
fn check_reply(content_type: &str, status: u16, body: &str) -> Result<Vec<Value>> {
    if content_type != "text/html" {
        return Err(TextitError::NetworkError {
            message: format!("invalid response with content type {content_type}: {body:?}"),
        });
    }

    let parsed: Option<Value> = serde_json::from_str(body).ok();

    // The error envelope sometimes arrives wrapped in a one-element array.
    let envelope = match &parsed {
        Some(Value::Array(items)) => items.first(),
        Some(value) => Some(value),
        None => None,
    };
    if let Some(error) = envelope.and_then(|v| v.get("error")) {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown API error")
            .to_string();
        let error_status = error
            .get("status")
            .and_then(Value::as_u64)
            .unwrap_or(u64::from(status)) as u16;
        return Err(TextitError::ApiError {
            status: error_status,
            message,
        });
    }

    if !(200..=226).contains(&status) {
        return Err(TextitError::HttpError {
            status,
            body: body.to_string(),
        });
    }

    match parsed {
        Some(Value::Array(replies)) => Ok(replies),
        Some(other) => Err(TextitError::parse(format!(
            "expected an array of replies, got: {other}"
        ))),
        None => Err(TextitError::parse(format!(
            "response body is not valid JSON: {body:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_check_reply_decodes_reply_array() {
        let body = r#"[[{"word": "опечатка"}]]"#;
        let replies = check_reply("text/html", 200, body).unwrap();
        assert_eq!(replies, vec![json!([{"word": "опечатка"}])]);
    }

    #[test]
    fn test_check_reply_rejects_wrong_content_type() {
        let err = check_reply("application/json", 200, "[[]]").unwrap_err();
        assert!(matches!(err, TextitError::NetworkError { .. }));
    }

    #[test]
    fn test_check_reply_surfaces_error_envelope() {
        let body = r#"{"error": {"message": "unknown func", "status": 400}}"#;
        let err = check_reply("text/html", 200, body).unwrap_err();
        assert_eq!(
            err,
            TextitError::ApiError {
                status: 400,
                message: "unknown func".to_string(),
            }
        );
    }

    #[test]
    fn test_check_reply_unwraps_enveloped_array() {
        let body = r#"[{"error": {"message": "busy", "status": 503}}]"#;
        let err = check_reply("text/html", 200, body).unwrap_err();
        assert!(matches!(err, TextitError::ApiError { status: 503, .. }));
    }

    #[test]
    fn test_check_reply_maps_http_status() {
        let err = check_reply("text/html", 404, "not found").unwrap_err();
        assert_eq!(
            err,
            TextitError::HttpError {
                status: 404,
                body: "not found".to_string(),
            }
        );
    }

    #[test]
    fn test_check_reply_error_envelope_wins_over_status() {
        // The service reports its own status inside the envelope.
        let body = r#"{"error": {"message": "bad command", "status": 400}}"#;
        let err = check_reply("text/html", 500, body).unwrap_err();
        assert!(matches!(err, TextitError::ApiError { status: 400, .. }));
    }

    #[test]
    fn test_check_reply_rejects_non_array_body() {
        let err = check_reply("text/html", 200, r#"{"word": "слово"}"#).unwrap_err();
        assert!(matches!(err, TextitError::ParseError { .. }));
        let err = check_reply("text/html", 200, "not json at all").unwrap_err();
        assert!(matches!(err, TextitError::ParseError { .. }));
    }

    #[test]
    fn test_http_transport_builds_from_config() {
        let config = ClientConfig::default();
        assert!(HttpTransport::new(&config).is_ok());
    }
}
