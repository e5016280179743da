//! Module containing everything pertaining to the hiring webhook endpoints.
use reqwest::StatusCode;
use thiserror::Error;

pub mod client;
pub mod request;
pub mod response;

/// The number of token characters that may appear in logs.
const VISIBLE_TOKEN_CHARS: usize = 20;

/// An error type for all errors that may happen while talking to the
/// webhook endpoints.
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Endpoint responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("No access token in webhook response")]
    MissingToken,
    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),
}

/// Shortens a token so that it can be logged.
pub fn redact_token(token: &str) -> String {
    let visible: String = token.chars().take(VISIBLE_TOKEN_CHARS).collect();

    format!("{visible}...")
}
