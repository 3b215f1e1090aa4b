//! AI report configuration
//!
//! The browser build has no environment, so the API key is baked in at
//! compile time from `ARCADE_AI_API_KEY`. Native builds also check the
//! variable at runtime.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

const BUILD_API_KEY: Option<&str> = option_env!("ARCADE_AI_API_KEY");
const BUILD_MODEL: Option<&str> = option_env!("ARCADE_AI_MODEL");
const BUILD_ENDPOINT: Option<&str> = option_env!("ARCADE_AI_ENDPOINT");

/// Connection settings for the report service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Missing key means every report is the offline fallback
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL, without the `/models/...` suffix
    pub endpoint: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AiConfig {
    /// Build from compile-time values, overridden by the runtime environment
    /// on native targets
    pub fn from_env() -> Self {
        let config = Self {
            api_key: non_empty(BUILD_API_KEY.map(str::to_string)),
            model: BUILD_MODEL.unwrap_or(DEFAULT_MODEL).to_string(),
            endpoint: BUILD_ENDPOINT.unwrap_or(DEFAULT_ENDPOINT).to_string(),
        };

        #[cfg(not(target_arch = "wasm32"))]
        let config = config.with_overrides(|name| std::env::var(name).ok());

        if !config.has_api_key() {
            log::info!("No AI API key configured; reports will use the offline summary");
        }
        config
    }

    /// Apply `ARCADE_AI_*` overrides from a variable lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = non_empty(lookup("ARCADE_AI_API_KEY")) {
            self.api_key = Some(key);
        }
        if let Some(model) = non_empty(lookup("ARCADE_AI_MODEL")) {
            self.model = model;
        }
        if let Some(endpoint) = non_empty(lookup("ARCADE_AI_ENDPOINT")) {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full `generateContent` URL for the configured model
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        let config = AiConfig {
            endpoint: "http://localhost:8080/".into(),
            ..AiConfig::default()
        };
        assert_eq!(
            config.generate_url(),
            format!("http://localhost:8080/models/{DEFAULT_MODEL}:generateContent")
        );
    }

    #[test]
    fn test_overrides() {
        let config = AiConfig::default().with_overrides(|name| match name {
            "ARCADE_AI_API_KEY" => Some("  secret ".into()),
            "ARCADE_AI_MODEL" => Some("".into()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.has_api_key());
    }

    #[test]
    fn test_blank_key_is_none() {
        assert_eq!(non_empty(Some("   ".into())), None);
        assert!(!AiConfig::default().has_api_key());
    }
}
