use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_token: String,
    pub discord_application_id: String,
    pub discord_public_key: String,
    pub openai_api_key: String,
    pub openai_model: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            discord_token: env::var("DISCORD_TOKEN").map_err(|e| format!("DISCORD_TOKEN: {}", e))?,
            discord_application_id: env::var("DISCORD_APPLICATION_ID")
                .map_err(|e| format!("DISCORD_APPLICATION_ID: {}", e))?,
            discord_public_key: env::var("DISCORD_PUBLIC_KEY")
                .map_err(|e| format!("DISCORD_PUBLIC_KEY: {}", e))?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_model: env::var("OPENAI_MODEL").ok(),
        })
    }
}
