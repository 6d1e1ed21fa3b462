//! One-time registration of the command descriptor table with Discord.
//!
//! Run from the command line with `DISCORD_TOKEN` and
//! `DISCORD_APPLICATION_ID` set; not part of request serving.

use anyhow::Context;
use std::env;
use tracing::info;

use imagine::clients::DiscordClient;
use imagine::core::commands::registration_payload;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let token =
        env::var("DISCORD_TOKEN").context("The DISCORD_TOKEN environment variable is required")?;
    let application_id = env::var("DISCORD_APPLICATION_ID")
        .context("The DISCORD_APPLICATION_ID environment variable is required")?;

    let commands = registration_payload();
    info!(
        "Registering {} commands for application {}",
        commands.as_array().map_or(0, |c| c.len()),
        application_id
    );

    let client = DiscordClient::new(token);
    let registered = client
        .register_commands(&application_id, &commands)
        .await
        .context("Error registering commands")?;

    println!("{}", serde_json::to_string_pretty(&registered)?);
    info!("Registered all commands");

    Ok(())
}
