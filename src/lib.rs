/// Imagine - a Discord bot that bridges slash commands to OpenAI.
///
/// This crate implements a single-Lambda webhook handler for two commands:
/// 1. `/ai` - sends a prompt to the chat model and replies inline
/// 2. `/imagine` - generates an image with DALL-E 3 and delivers it through
///    a deferred interaction completion once generation finishes
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution (one request, one invocation)
/// - ed25519-dalek for Discord interaction signature verification
/// - reqwest for the OpenAI and Discord webhook APIs
/// - Tokio for the async runtime and the fire-and-forget image task
///
/// The slow image path follows Discord's two-phase response protocol: the
/// dispatcher acknowledges with a deferred placeholder (type 5) before the
/// generation task runs, and the task later PATCHes the original response
/// through the webhook endpoint using the interaction's continuation token.
// Module declarations
pub mod api;
pub mod clients;
pub mod commands;
pub mod core;
pub mod errors;
pub mod utils;

pub use errors::BotError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
