//! This module includes the calls made against the webhook endpoints.
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use tracing::{debug, instrument, warn};

use super::{
    request::{GenerateWebhookRequest, SubmitSolutionRequest},
    response::WebhookResponse,
    WebhookError,
};
use crate::config::Settings;

/// A blocking client for the generation and submission endpoints. The same
/// HTTP client is used for both requests.
#[derive(Debug)]
pub struct WebhookClient {
    http: Client,
    settings: Settings,
}

impl WebhookClient {
    /// Creates a new [`WebhookClient`] using the timeout from `settings`.
    pub fn new(settings: Settings) -> Result<Self, WebhookError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(WebhookClient { http, settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Sends the candidate's identity to the generation endpoint and parses
    /// the response.
    #[instrument(skip(self))]
    pub fn generate_webhook(&self) -> Result<WebhookResponse, WebhookError> {
        debug!("requesting webhook from {:?}", self.settings.generate_url);

        let res = self
            .http
            .post(&self.settings.generate_url)
            .json(&GenerateWebhookRequest::from(&self.settings.identity))
            .send()?;
        let res = check_status(res)?;

        Ok(res.json::<WebhookResponse>()?)
    }

    /// Fetches a new access token. A response without a usable token is an
    /// error.
    pub fn fetch_token(&self) -> Result<String, WebhookError> {
        let res = self.generate_webhook()?;

        if let Some(webhook) = &res.webhook {
            debug!("service advertised webhook {:?}", webhook);
        }

        res.token()
            .map(str::to_owned)
            .ok_or(WebhookError::MissingToken)
    }

    /// Submits the final query, authorizing with the raw access token.
    /// Returns the body of the endpoint's response.
    #[instrument(skip_all)]
    pub fn submit_solution(&self, token: &str, query: &str) -> Result<String, WebhookError> {
        debug!("submitting solution to {:?}", self.settings.submit_url);

        let res = self
            .http
            .post(&self.settings.submit_url)
            .header(AUTHORIZATION, token)
            .json(&SubmitSolutionRequest {
                final_query: query.to_owned(),
            })
            .send()?;
        let res = check_status(res)?;

        Ok(res.text()?)
    }
}

/// Turns a non-success response into a [`WebhookError::Status`] carrying the
/// response body.
fn check_status(res: Response) -> Result<Response, WebhookError> {
    let status = res.status();

    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().unwrap_or_else(|err| {
        warn!("failed to read error response body: {:?}", err);
        String::new()
    });

    Err(WebhookError::Status { status, body })
}
