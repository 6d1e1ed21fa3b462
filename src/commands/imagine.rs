//! Handler for the `/imagine` image generation command.
//!
//! Runs as a background task spawned after the dispatcher has already sent
//! the deferred acknowledgment, so its only observable output is the
//! eventual deferred-completion PATCH. Every error is caught inside the
//! task and converted to a text-only completion; nothing propagates out.

use tracing::{error, info};

use crate::clients::{DiscordClient, OpenAiClient};
use crate::core::commands::ImagineParams;
use crate::core::models::{Attachment, DeferredHandle, Interaction};
use crate::errors::BotError;
use crate::utils::sanitize::sanitize_content;
use crate::utils::timeout::{
    IMAGE_DOWNLOAD_TIMEOUT_MS, IMAGE_GENERATION_TIMEOUT_MS, with_timeout,
};

/// Instruction prepended when prompt revision is disabled, coercing the
/// image model to use the prompt verbatim.
const VERBATIM_PROMPT_PREFIX: &str = "I NEED to test how the tool works with extremely \
    simple prompts. DO NOT add any detail, just use it AS-IS: ";

pub const NO_IMAGES_MESSAGE: &str = "No images were generated by DALL-E 3.";

/// Handle `/imagine` end to end inside the background task.
pub async fn handle(
    interaction: Interaction,
    params: ImagineParams,
    openai: OpenAiClient,
    discord: DiscordClient,
) {
    let handle = interaction.deferred_handle();

    if let Err(e) = run(&interaction, &params, &openai, &discord, &handle).await {
        error!("{} Error handling DALL-E request: {}", interaction.id, e);
        let text = match &e {
            BotError::UpstreamStatus { status, body } => {
                format!("Error handling DALL-E request: {status} {body}")
            }
            other => other.to_string(),
        };
        deliver(&discord, &handle, &text, None).await;
    }
}

async fn run(
    interaction: &Interaction,
    params: &ImagineParams,
    openai: &OpenAiClient,
    discord: &DiscordClient,
    handle: &DeferredHandle,
) -> Result<(), BotError> {
    let prompt = if params.revise {
        params.prompt.clone()
    } else {
        format!("{VERBATIM_PROMPT_PREFIX}{}", params.prompt)
    };

    info!(
        "{} DALL-E prompt ({}): {}",
        interaction.id,
        interaction.invoker_name(),
        prompt
    );

    let generated = with_timeout(
        openai.generate_image(&prompt, params.ratio.size(), params.quality()),
        IMAGE_GENERATION_TIMEOUT_MS,
    )
    .await?;

    let Some(image) = generated else {
        info!("{} {}", interaction.id, NO_IMAGES_MESSAGE);
        deliver(discord, handle, NO_IMAGES_MESSAGE, None).await;
        return Ok(());
    };

    info!("{} Image URL received: {}", interaction.id, image.url);
    info!("{} Starting image download...", interaction.id);

    let bytes = with_timeout(
        openai.download_image(&image.url),
        IMAGE_DOWNLOAD_TIMEOUT_MS,
    )
    .await?;

    let message = image
        .revised_prompt
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!("Revised Prompt: {}", sanitize_content(p)))
        .unwrap_or_default();

    info!("{} Uploading image to Discord...", interaction.id);
    deliver(discord, handle, &message, Some(Attachment::png(bytes))).await;
    info!("{} Image sent to Discord.", interaction.id);

    Ok(())
}

/// Send the completion PATCH. Per current policy a delivery failure is only
/// logged, never retried or surfaced to the user.
async fn deliver(
    discord: &DiscordClient,
    handle: &DeferredHandle,
    text: &str,
    attachment: Option<Attachment>,
) {
    if let Err(e) = discord.complete_deferred(handle, text, attachment).await {
        error!("Error completing deferred interaction: {}", e);
    }
}
