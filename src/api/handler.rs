//! API Lambda handler - verifies inbound interactions and routes them.
//!
//! This module handles:
//! - Health/identity check (`GET /`)
//! - Signature verification (Ed25519, rejecting with 401 before any handler)
//! - Ping acknowledgment
//! - Command dispatch: `/ai` synchronously, `/imagine` as a deferred
//!   background task

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use super::helpers::{channel_message, deferred_message, err_response, pong, text_response};
use super::{parsing, signature};
use crate::clients::{DiscordClient, OpenAiClient};
use crate::commands::{ai, imagine};
use crate::core::commands::{self, AiParams, ImagineParams};
use crate::core::config::AppConfig;
use crate::core::models::{
    INTERACTION_TYPE_APPLICATION_COMMAND, INTERACTION_TYPE_PING, Interaction,
};

pub use self::function_handler as handler;

/// Lambda handler for the webhook entrypoint.
///
/// # Errors
///
/// Fails only when configuration is missing from the environment; every
/// request-level problem is turned into an HTTP error response instead.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    Ok(route(&config, &event.payload).await)
}

/// Route one event payload to a response value.
///
/// Split out from the Lambda wrapper so tests can drive it with an explicit
/// config instead of process environment.
pub async fn route(config: &AppConfig, payload: &Value) -> Value {
    let method = parsing::request_method(payload).unwrap_or("POST");
    let path = parsing::request_path(payload).unwrap_or("/");

    if path != "/" {
        return text_response(404, "Not Found.");
    }

    match method {
        "GET" => text_response(200, &format!("👋 {}", config.discord_application_id)),
        "POST" => handle_interaction(config, payload).await,
        _ => text_response(404, "Not Found."),
    }
}

async fn handle_interaction(config: &AppConfig, payload: &Value) -> Value {
    let Some(body) = parsing::request_body(payload) else {
        error!("Request missing body");
        return err_response(400, "Missing body");
    };

    // ========================================================================
    // Verify Discord signature
    // ========================================================================

    let headers = payload.get("headers").cloned().unwrap_or_default();

    let Some(sig) = parsing::get_header_value(&headers, "x-signature-ed25519") else {
        error!("Missing x-signature-ed25519 header");
        return err_response(401, "Bad request signature.");
    };
    let Some(timestamp) = parsing::get_header_value(&headers, "x-signature-timestamp") else {
        error!("Missing x-signature-timestamp header");
        return err_response(401, "Bad request signature.");
    };

    if !signature::verify_discord_signature(body, timestamp, sig, &config.discord_public_key) {
        error!("Discord signature verification failed");
        return err_response(401, "Bad request signature.");
    }

    // ========================================================================
    // Classify the interaction
    // ========================================================================

    let interaction = match Interaction::from_json(body) {
        Ok(interaction) => interaction,
        Err(e) => {
            error!("Failed to parse interaction: {}", e);
            return err_response(400, &format!("{e}"));
        }
    };

    match interaction.kind {
        INTERACTION_TYPE_PING => pong(),
        INTERACTION_TYPE_APPLICATION_COMMAND => dispatch_command(config, interaction).await,
        _ => err_response(400, "Unknown interaction type"),
    }
}

async fn dispatch_command(config: &AppConfig, interaction: Interaction) -> Value {
    let Some(data) = interaction.data.clone() else {
        error!("Command interaction missing data");
        return err_response(400, "Missing command data");
    };

    let Some(descriptor) = commands::find_command(&data.name) else {
        error!("Unknown command: {}", data.name);
        return err_response(400, "Unknown command");
    };

    info!(
        "{} /{} invoked by {}",
        interaction.id,
        descriptor.name,
        interaction.invoker_name()
    );

    let openai = OpenAiClient::new(config.openai_api_key.clone(), config.openai_model.clone());

    match descriptor.name {
        "ai" => {
            let params = AiParams::from_data(&data);
            let content = ai::handle(&interaction, &params, &openai).await;
            channel_message(&content)
        }
        "imagine" => {
            let params = ImagineParams::from_data(&data);
            let discord = DiscordClient::new(config.discord_token.clone());

            // The acknowledgment goes out before this task completes; the
            // hosting environment is expected to keep the execution context
            // alive until the task settles.
            let _task = tokio::spawn(imagine::handle(interaction, params, openai, discord));

            deferred_message()
        }
        _ => err_response(400, "Unknown command"),
    }
}
