//! The one-shot workflow: fetch a token, then submit the query with it.
use tracing::{error, info, instrument};

use crate::query::final_query;
use crate::webhook::{client::WebhookClient, redact_token};

/// Where a run of the workflow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The solution was accepted and the endpoint answered with `response`.
    Submitted { response: String },
    /// No usable token could be acquired, so nothing was submitted.
    TokenUnavailable,
    /// A token was acquired but the submission failed.
    SubmissionFailed,
}

/// Runs the workflow once. Failures are logged and reported through the
/// returned [`Outcome`], never propagated.
#[instrument(skip_all)]
pub fn run(client: &WebhookClient) -> Outcome {
    info!("starting webhook flow");

    let token = match client.fetch_token() {
        Ok(token) => token,
        Err(err) => {
            error!("failed to generate webhook or retrieve access token: {err}");
            return Outcome::TokenUnavailable;
        }
    };

    info!("webhook generated");
    info!("access token received: {}", redact_token(&token));

    let query = final_query();

    info!("sql query generated");

    match client.submit_solution(&token, query) {
        Ok(response) => {
            info!("solution submitted");
            info!("response: {response}");
            Outcome::Submitted { response }
        }
        Err(err) => {
            error!("error submitting solution: {err}");
            Outcome::SubmissionFailed
        }
    }
}
