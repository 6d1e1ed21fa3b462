//! Client modules for external API interactions

pub mod discord;
pub mod openai;

pub use discord::DiscordClient;
pub use openai::OpenAiClient;
