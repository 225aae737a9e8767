//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::transcript::DEFAULT_LANGUAGES;

/// Environment variables checked for the Gemini credential, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["YTNOTES_GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Transcript retrieval settings
    #[serde(default)]
    pub transcript: TranscriptSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Web form settings
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSettings {
    /// Preferred transcript languages, tried in order
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (for cloud providers)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (for local/custom providers)
    #[serde(default)]
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address the web form binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the web form listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;
            Self::from_toml(&content).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })?
        } else {
            tracing::debug!("No config file found, using defaults");
            Self::default()
        };

        settings.apply_env_overrides();
        settings.validate()?;

        Ok(settings)
    }

    /// Parse settings from TOML, filling missing values with defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.llm.api_key.trim().is_empty() {
            if let Some(key) = API_KEY_ENV_VARS
                .iter()
                .filter_map(|var| std::env::var(var).ok())
                .find(|key| !key.trim().is_empty())
            {
                self.llm.api_key = key;
            }
        }
    }

    /// Reject settings no request could succeed with.
    pub fn validate(&self) -> Result<()> {
        let languages = &self.transcript.languages;
        if languages.is_empty() {
            anyhow::bail!("transcript.languages must list at least one language code");
        }
        if let Some(position) = languages.iter().position(|l| l.trim().is_empty()) {
            anyhow::bail!(
                "transcript.languages entry {} is blank; every entry must be a language code",
                position + 1
            );
        }
        if self.transcript.timeout_secs == 0 {
            anyhow::bail!("transcript.timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Whether a Gemini credential is available.
    pub fn has_api_key(&self) -> bool {
        !self.llm.api_key.trim().is_empty()
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "ytnotes", "ytnotes")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Address for the web form listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
