//! This module declares all types that may be used as response payloads.
use serde::{Deserialize, Serialize};

/// The body returned by the generation endpoint.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct WebhookResponse {
    /// The URL the service advertises for submissions. Only logged.
    #[serde(default)]
    pub webhook: Option<String>,
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
}

impl WebhookResponse {
    /// Returns the access token if one is present and not blank.
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }
}
