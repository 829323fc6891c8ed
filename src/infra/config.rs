// src/infra/config.rs — Application configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::infra::paths;
use crate::provider::openai::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub llm: LlmSettings,

    #[serde(default)]
    pub sessions: SessionSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Bearer token required on API calls. Unset means open access.
    pub token: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub roles_dir: PathBuf,
    pub results_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            roles_dir: PathBuf::from("roles"),
            results_dir: PathBuf::from("results"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_seconds: u64,
    /// Number of trailing transcript lines included as turn context.
    pub context_lines: usize,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            model: "gpt-3.5-turbo".into(),
            max_tokens: 500,
            temperature: 0.7,
            timeout_seconds: 30,
            context_lines: 10,
        }
    }
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Idle sessions older than this are evicted. 0 disables eviction.
    pub ttl_minutes: u64,
    pub sweep_interval_seconds: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_minutes: 120,
            sweep_interval_seconds: 60,
        }
    }
}

impl SessionSettings {
    pub fn ttl(&self) -> Option<Duration> {
        (self.ttl_minutes > 0).then(|| Duration::from_secs(self.ttl_minutes * 60))
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds.max(1))
    }
}

impl Config {
    /// Load `screenpass.toml` from the working directory, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new(paths::DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
