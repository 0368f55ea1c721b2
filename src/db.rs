use std::time::Duration;

use anyhow::Context;
use mongodb::{Client, bson::doc, options::ClientOptions};
use tracing::info;

/// Establish the process-wide MongoDB client and verify reachability with a
/// `ping`. Any failure here is fatal to the caller.
pub async fn connect(uri: &str, timeout: Duration) -> anyhow::Result<Client> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("invalid MongoDB connection string")?;
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .context("failed to ping MongoDB")?;

    info!(msg = "Connected to MongoDB", uri = %uri);

    Ok(client)
}
