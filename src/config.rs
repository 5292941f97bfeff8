use std::env;

use crate::gemini::{GeminiConfig, DEFAULT_API_BASE};

const DEFAULT_PORT: u16 = 8080;

pub struct AppConfig {
    port: u16,
    gemini: GeminiConfig,
}

impl AppConfig {
    /// Reads settings from the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = lookup("GEMINI_API_KEY");

        let base_url = lookup("GEMINI_API_BASE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            port,
            gemini: GeminiConfig::new(api_key, base_url),
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn gemini(&self) -> &GeminiConfig {
        &self.gemini
    }
}
