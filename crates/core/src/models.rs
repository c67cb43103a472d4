//! # LLM Models
//!
//! Provider and model selection for the crew's agents.
//! API keys are read by radkit from each provider's own environment variable:
//! `ANTHROPIC_API_KEY`, `OPENAI_API_KEY`, `GEMINI_API_KEY`, `OPENROUTER_API_KEY`,
//! `XAI_API_KEY`, `DEEPSEEK_API_KEY`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable selecting the provider
pub const PROVIDER_ENV: &str = "CONTACT_FINDER_PROVIDER";
/// Environment variable selecting the model name
pub const MODEL_ENV: &str = "CONTACT_FINDER_MODEL";
/// Environment variable overriding the OpenAI-compatible base URL
pub const BASE_URL_ENV: &str = "CONTACT_FINDER_LLM_BASE_URL";

/// Supported LLM providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Anthropic,
    #[serde(rename = "openai")]
    OpenAI,
    Gemini,
    OpenRouter,
    Grok,
    DeepSeek,
}

impl LlmProvider {
    pub fn display_name(&self) -> &'static str {
        match self {
            LlmProvider::Anthropic => "Anthropic",
            LlmProvider::OpenAI => "OpenAI",
            LlmProvider::Gemini => "Gemini",
            LlmProvider::OpenRouter => "OpenRouter",
            LlmProvider::Grok => "Grok",
            LlmProvider::DeepSeek => "DeepSeek",
        }
    }

    /// Model used when none is configured
    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::Anthropic => "claude-sonnet-4-20250514",
            LlmProvider::OpenAI => "gpt-4o",
            LlmProvider::Gemini => "gemini-2.5-pro",
            LlmProvider::OpenRouter => "anthropic/claude-sonnet-4",
            LlmProvider::Grok => "grok-3",
            LlmProvider::DeepSeek => "deepseek-chat",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anthropic" | "claude" => Ok(LlmProvider::Anthropic),
            "openai" => Ok(LlmProvider::OpenAI),
            "gemini" | "google" => Ok(LlmProvider::Gemini),
            "openrouter" => Ok(LlmProvider::OpenRouter),
            "grok" | "xai" => Ok(LlmProvider::Grok),
            "deepseek" => Ok(LlmProvider::DeepSeek),
            other => anyhow::bail!("Unknown LLM provider '{}'", other),
        }
    }
}

/// Which provider and model an agent runs on
///
/// ## Example
/// ```rust,ignore
/// use contact_finder_core::models::{LlmProvider, ModelConfig};
///
/// let config = ModelConfig::default();
/// let config = ModelConfig::with_provider(LlmProvider::OpenAI, "gpt-4o")
///     .with_base_url("http://localhost:11434/v1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub provider: LlmProvider,
    pub model: String,
    /// Base URL override for OpenAI-compatible APIs
    pub base_url: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::with_provider(LlmProvider::default(), LlmProvider::default().default_model())
    }
}

impl ModelConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_provider(LlmProvider::Anthropic, model)
    }

    pub fn with_provider(provider: LlmProvider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Read provider, model, and base URL overrides from the environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let provider = match lookup(PROVIDER_ENV) {
            Some(p) => p.parse()?,
            None => LlmProvider::default(),
        };
        let model = lookup(MODEL_ENV).unwrap_or_else(|| provider.default_model().to_string());

        let mut config = Self::with_provider(provider, model);
        if let Some(url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModelConfig::default();
        assert_eq!(config.provider, LlmProvider::Anthropic);
        assert!(config.model.contains("claude"));
    }

    #[test]
    fn test_provider_parsing() {
        assert_eq!("OpenAI".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAI);
        assert_eq!("xai".parse::<LlmProvider>().unwrap(), LlmProvider::Grok);
        assert!("mystery".parse::<LlmProvider>().is_err());
    }

    #[test]
    fn test_provider_display_names() {
        assert_eq!(LlmProvider::OpenAI.display_name(), "OpenAI");
        assert_eq!("xai".parse::<LlmProvider>().unwrap().display_name(), "Grok");
    }

    #[test]
    fn test_from_lookup() {
        let config = ModelConfig::from_lookup(|key| match key {
            PROVIDER_ENV => Some("openai".to_string()),
            BASE_URL_ENV => Some("http://localhost:11434/v1".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.provider, LlmProvider::OpenAI);
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:11434/v1"));
    }

    #[test]
    fn test_model_config_serialization() {
        let config = ModelConfig::with_provider(LlmProvider::OpenAI, "gpt-4o");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("openai"));
        assert!(json.contains("gpt-4o"));
    }
}
