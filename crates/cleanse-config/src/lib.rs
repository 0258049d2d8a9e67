use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration for cleanse (~/.config/cleanse/config.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub redaction: RedactionConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    /// Extra detection rules, appended to the built-in table
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Remote scan endpoint used with `--remote`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Scored matches must be strictly above this to be redacted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_threshold: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Placeholder for matches whose category has no rule
    #[serde(default = "default_fallback_placeholder")]
    pub fallback_placeholder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

/// Custom rule in config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub category: String,
    pub pattern: String,
    pub placeholder: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            confidence_threshold: None,
        }
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            fallback_placeholder: default_fallback_placeholder(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_endpoint() -> String {
    format!("http://{}:{}/scan", default_host(), default_port())
}

fn default_fallback_placeholder() -> String {
    "******************".to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Config {
    /// Load config from `path`, writing the defaults there if it is missing
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            info!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    /// Reject values that parse but make no sense
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(threshold) = self.scanner.confidence_threshold
            && !(0.0..=1.0).contains(&threshold)
        {
            anyhow::bail!(
                "scanner.confidence_threshold must be between 0 and 1, got {}",
                threshold
            );
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "cleanse", "cleanse") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.cleanse/config.toml")
        }
    }
}
