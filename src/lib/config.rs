//! This module stores the settings for a workflow run.
use std::path::{Path, PathBuf};

use ::config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::webhook::WebhookError;

pub const DEFAULT_GENERATE_URL: &str =
    "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook/JAVA";
pub const DEFAULT_SUBMIT_URL: &str = "https://bfhldevapigw.healthrx.co.in/hiring/testWebhook/JAVA";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_NAME: &str = "John Doe";
const DEFAULT_REG_NO: &str = "REG12347";
const DEFAULT_EMAIL: &str = "john@example.com";

/// The identity sent to the generation endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub reg_no: String,
    pub email: String,
}

impl Default for Identity {
    fn default() -> Self {
        Identity {
            name: DEFAULT_NAME.to_string(),
            reg_no: DEFAULT_REG_NO.to_string(),
            email: DEFAULT_EMAIL.to_string(),
        }
    }
}

/// Endpoints, identity and HTTP timeout for a run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub generate_url: String,
    pub submit_url: String,
    pub timeout_secs: u64,
    pub identity: Identity,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            generate_url: DEFAULT_GENERATE_URL.to_string(),
            submit_url: DEFAULT_SUBMIT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            identity: Identity::default(),
        }
    }
}

impl Settings {
    /// Loads the settings, letting the user's config file override the
    /// compiled in defaults when it exists.
    pub fn load() -> Result<Self, WebhookError> {
        Self::load_from(config_file_path().as_deref())
    }

    /// Loads the settings from the defaults and an optional TOML file. A
    /// file that does not exist is skipped.
    pub fn load_from(path: Option<&Path>) -> Result<Self, WebhookError> {
        let mut builder = Config::builder()
            .set_default("generate_url", DEFAULT_GENERATE_URL)?
            .set_default("submit_url", DEFAULT_SUBMIT_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("identity.name", DEFAULT_NAME)?
            .set_default("identity.reg_no", DEFAULT_REG_NO)?
            .set_default("identity.email", DEFAULT_EMAIL)?;

        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path)
                    .required(false)
                    .format(FileFormat::Toml),
            );
        }

        Ok(builder.build()?.try_deserialize::<Settings>()?)
    }
}

/// Finds the location of this app's optional config file.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("webhook-sql").join("config.toml"))
}
