//! Handler for the `/ai` chat command.
//!
//! This path answers synchronously: the dispatcher awaits it and sends its
//! string back as the immediate interaction reply, so no deferral and no
//! timeout wrapper are involved.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use tracing::error;

use crate::clients::OpenAiClient;
use crate::core::commands::AiParams;
use crate::core::models::Interaction;
use crate::utils::sanitize::sanitize_content;

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Fixed user-facing message for any failure on this path.
pub const CHAT_FAILURE_MESSAGE: &str =
    "There was an error processing your request. Please try again later.";

/// Handle `/ai`: ask the chat model and format the exchange.
///
/// Never fails; any error is logged and replaced by the fixed apology.
pub async fn handle(interaction: &Interaction, params: &AiParams, openai: &OpenAiClient) -> String {
    let name = interaction.invoker_name().to_string();

    let messages = vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(format!("{}: {}", name, params.prompt)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ];

    match openai.chat_completion(messages).await {
        Ok(reply) => format!(
            "{}: {}\nGPT: {}",
            name,
            params.prompt,
            sanitize_content(&reply)
        ),
        Err(e) => {
            error!("{} Error fetching OpenAI response: {}", interaction.id, e);
            CHAT_FAILURE_MESSAGE.to_string()
        }
    }
}
