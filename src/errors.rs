use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to parse interaction: {0}")]
    ParseError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Upstream API error (status {status}): {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Discord API error: {status} {message}")]
    DiscordError { status: u16, message: String },

    #[error("Request timed out after {0} ms")]
    Timeout(u64),
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for BotError {
    fn from(error: anyhow::Error) -> Self {
        BotError::HttpError(error.to_string())
    }
}
