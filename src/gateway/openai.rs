//! OpenAI-compatible completion client
//!
//! Works with any API that implements the chat completions format. The
//! request shape is fixed: a system instruction plus the raw user text;
//! the reply is the first completion choice's content. No retries, no
//! caching - a failed call stays failed.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::GatewayError;

/// Instruction prepended to every relayed message.
const SYSTEM_INSTRUCTION: &str =
    "Ты дружелюбный ассистент в Telegram. Отвечай кратко и по-русски.";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Error response from the API
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Completion API configuration
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Base URL for the API (e.g. https://api.openai.com/v1)
    pub base_url: String,
    /// Bearer token for the API
    pub api_key: String,
    /// Model to request
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CompletionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: api_key.into(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Client for an OpenAI-compatible completion API
pub struct CompletionClient {
    config: CompletionConfig,
    client: Client,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self { config, client }
    }

    /// Send one message and return the model's reply.
    pub async fn complete(&self, text: &str) -> Result<String, GatewayError> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            temperature: 0.7,
            max_tokens: 1024,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Surface the API's own error message when the body carries one
            if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(GatewayError::InvalidResponse(format!(
                    "API error: {}",
                    error_resp.error.message
                )));
            }
            return Err(GatewayError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
            GatewayError::InvalidResponse(format!("Failed to parse response: {e}"))
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("No choices in response".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
