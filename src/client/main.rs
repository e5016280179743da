//! Runs the hiring webhook workflow once: an access token is requested from
//! the generation endpoint, then the SQL answer is submitted with that token
//! as its authorization.
use anyhow::Context;
use tracing::{debug, error};
use webhook_sql::{flow, Settings, WebhookClient};

/// Loads the settings and builds the client used for both requests.
fn setup() -> anyhow::Result<WebhookClient> {
    let settings = Settings::load().context("failed to load settings")?;
    let client = WebhookClient::new(settings).context("failed to build http client")?;

    debug!("generate url: {:?}", client.settings().generate_url);
    debug!("submit url: {:?}", client.settings().submit_url);

    Ok(client)
}

fn main() {
    // setup logging
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("webhook_sql=info")
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("failed to set global default");

    let client = match setup() {
        Ok(client) => client,
        Err(err) => {
            error!("{err:#}");
            return;
        }
    };

    let outcome = flow::run(&client);

    debug!("workflow finished: {:?}", outcome);
}
