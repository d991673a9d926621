//! Completion gateway
//!
//! Outbound adapter for the hosted completion API used in relay mode.
//! One blocking round-trip per message; failures are fatal for that
//! message and propagate to the caller untouched.

mod openai;

use thiserror::Error;

pub use openai::{CompletionClient, CompletionConfig};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
