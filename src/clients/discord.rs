//! Discord API client module
//!
//! Covers the two outbound Discord surfaces: completing a deferred
//! interaction through the webhook-edit endpoint (text-only JSON PATCH, or
//! multipart when an attachment rides along) and the one-time PUT command
//! registration used by the offline tool.

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};
use tracing::info;

use crate::core::models::{Attachment, DeferredHandle};
use crate::errors::BotError;
use crate::utils::sanitize::truncate_content;

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

pub struct DiscordClient {
    http: Client,
    token: String,
    base_url: String,
}

impl DiscordClient {
    pub fn new(token: String) -> Self {
        Self {
            http: Client::new(),
            token,
            base_url: DISCORD_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API origin (used by tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Finalize a previously-deferred interaction, exactly once.
    ///
    /// Issues a single PATCH to the webhook-edit endpoint; a second call for
    /// the same handle would simply overwrite the first (platform behavior,
    /// not enforced here). The content length ceiling is applied at this
    /// transmission boundary; callers are expected to have sanitized any
    /// untrusted text already.
    pub async fn complete_deferred(
        &self,
        handle: &DeferredHandle,
        text: &str,
        attachment: Option<Attachment>,
    ) -> Result<(), BotError> {
        let url = format!(
            "{}/webhooks/{}/{}/messages/@original",
            self.base_url, handle.application_id, handle.token
        );
        let content = truncate_content(text);

        let request = match attachment {
            None => self
                .http
                .patch(&url)
                .header(AUTHORIZATION, format!("Bot {}", self.token))
                .json(&json!({ "content": content })),
            Some(attachment) => {
                let filename = attachment
                    .filename
                    .clone()
                    .unwrap_or_else(|| derive_filename(&attachment.media_type));

                let metadata = json!({
                    "content": content,
                    "attachments": [{ "id": 0, "filename": filename }],
                });

                let file_part = Part::bytes(attachment.bytes)
                    .file_name(filename)
                    .mime_str(&attachment.media_type)
                    .map_err(|e| BotError::HttpError(format!("Invalid media type: {e}")))?;

                // No explicit content-type header: reqwest generates the
                // multipart boundary.
                self.http
                    .patch(&url)
                    .header(AUTHORIZATION, format!("Bot {}", self.token))
                    .multipart(Form::new().part("files[0]", file_part).text(
                        "payload_json",
                        metadata.to_string(),
                    ))
            }
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BotError::DiscordError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        Ok(())
    }

    /// Bulk-overwrite the application's global commands.
    ///
    /// Used only by the offline `imagine-register` tool, never on the
    /// request-serving path.
    pub async fn register_commands(
        &self,
        application_id: &str,
        commands: &Value,
    ) -> Result<Value, BotError> {
        let url = format!("{}/applications/{}/commands", self.base_url, application_id);
        info!("Registering commands at {}", url);

        let response = self
            .http
            .put(&url)
            .header(AUTHORIZATION, format!("Bot {}", self.token))
            .json(commands)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read error body: {e}>"));
            return Err(BotError::DiscordError {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| BotError::ParseError(format!("Invalid registration response: {e}")))
    }
}

/// Derive a deterministic `attachment.<ext>` filename from a media type,
/// preferring the extension mime_guess knows for it.
fn derive_filename(media_type: &str) -> String {
    let subtype = media_type.rsplit('/').next().unwrap_or("bin");
    let ext = mime_guess::get_mime_extensions_str(media_type)
        .and_then(|exts| exts.first().copied())
        .unwrap_or(subtype);
    format!("attachment.{ext}")
}

#[cfg(test)]
mod tests {
    use super::derive_filename;

    #[test]
    fn derives_png_filename_from_media_type() {
        assert_eq!(derive_filename("image/png"), "attachment.png");
    }

    #[test]
    fn falls_back_to_subtype_for_unknown_media_type() {
        assert_eq!(derive_filename("image/madeup"), "attachment.madeup");
    }
}
