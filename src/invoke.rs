//! The remote-procedure port the adapters call into.
//!
//! The backend process owns provider transport and authentication; this crate
//! only names a command and hands it JSON arguments.

use crate::error::{BridgeError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Executes a named backend command.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value>;
}

/// Reaches the backend over HTTP: `POST {base_url}/invoke/{command}` with the
/// arguments as the JSON body.
#[derive(Debug, Clone)]
pub struct HttpInvoker {
    base_url: String,
    client: reqwest::Client,
}

impl HttpInvoker {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn command_url(&self, command: &str) -> String {
        format!("{}/invoke/{}", self.base_url.trim_end_matches('/'), command)
    }
}

#[async_trait]
impl Invoker for HttpInvoker {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        let url = self.command_url(command);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&args)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = failure_message(status, response.text().await.ok());
            tracing::debug!(command, status = status.as_u16(), "Backend command failed");
            return Err(BridgeError::invoke(command, message));
        }

        Ok(response.json().await?)
    }
}

/// The backend's error text, or a placeholder naming the status when the body
/// is empty or unreadable.
fn failure_message(status: reqwest::StatusCode, body: Option<String>) -> String {
    match body {
        Some(body) if !body.trim().is_empty() => body,
        _ => format!("Unknown error (HTTP {status})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_url_trims_trailing_slash() {
        let invoker = HttpInvoker::with_client("http://127.0.0.1:4317/", reqwest::Client::new());
        assert_eq!(
            invoker.command_url("generate_openai_response"),
            "http://127.0.0.1:4317/invoke/generate_openai_response"
        );
    }

    #[test]
    fn test_failure_message_keeps_body() {
        let status = reqwest::StatusCode::INTERNAL_SERVER_ERROR;
        assert_eq!(
            failure_message(status, Some("API call failed".to_string())),
            "API call failed"
        );
    }

    #[test]
    fn test_failure_message_never_empty() {
        let status = reqwest::StatusCode::BAD_GATEWAY;
        let expected = "Unknown error (HTTP 502 Bad Gateway)";
        assert_eq!(failure_message(status, Some(String::new())), expected);
        assert_eq!(failure_message(status, Some(" \n".to_string())), expected);
        assert_eq!(failure_message(status, None), expected);
    }
}
