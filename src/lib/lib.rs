pub mod config;
pub mod flow;
pub mod query;
pub mod webhook;

pub use config::Settings;
pub use flow::{run, Outcome};
pub use webhook::{client::WebhookClient, WebhookError};
