//! This module declares all types that may be used as request payloads.
use serde::{Deserialize, Serialize};

use crate::config::Identity;

/// Identifies the candidate to the generation endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct GenerateWebhookRequest {
    pub name: String,
    #[serde(rename = "regNo")]
    pub reg_no: String,
    pub email: String,
}

impl From<&Identity> for GenerateWebhookRequest {
    fn from(identity: &Identity) -> Self {
        GenerateWebhookRequest {
            name: identity.name.clone(),
            reg_no: identity.reg_no.clone(),
            email: identity.email.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubmitSolutionRequest {
    #[serde(rename = "finalQuery")]
    pub final_query: String,
}
