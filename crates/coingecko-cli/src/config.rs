/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed CLI configuration and the client configuration derived from it
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use coingecko_adapter::ClientConfig;
use coingecko_adapter::http::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the command-line client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// API root, including the version path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Additional attempts after a failed one
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
    #[serde(default = "default_retry_wait_ms")]
    pub retry_wait_ms: u64,
    /// Overridden by `COINGECKO_API_KEY`
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Write logs to a daily rolling file here instead of stderr
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_wait_ms: default_retry_wait_ms(),
            api_key: None,
            user_agent: None,
            log_dir: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_wait_ms() -> u64 {
    1000
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        Ok(config)
    }

    /// Client settings; a non-empty `api_key_override` replaces the file's key
    pub fn client_config(&self, api_key_override: Option<&str>) -> ClientConfig {
        let api_key = api_key_override
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .or_else(|| self.api_key.clone());

        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            retry_count: self.retry_count,
            retry_wait: Duration::from_millis(self.retry_wait_ms),
            api_key,
            user_agent: self.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = CliConfig::from_yaml("{}").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.retry_count, 3);
        assert_eq!(config.retry_wait_ms, 1000);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_yaml_overrides() {
        let yaml = r#"
base_url: "https://pro-api.coingecko.com/api/v3"
timeout_secs: 30
retry_count: 0
retry_wait_ms: 250
api_key: "CG-from-file"
log_dir: "/var/log/coingecko"
"#;
        let config = CliConfig::from_yaml(yaml).unwrap();
        let client = config.client_config(None);

        assert_eq!(client.base_url, "https://pro-api.coingecko.com/api/v3");
        assert_eq!(client.timeout, Duration::from_secs(30));
        assert_eq!(client.connect_timeout, Duration::from_secs(10));
        assert_eq!(client.retry_count, 0);
        assert_eq!(client.retry_wait, Duration::from_millis(250));
        assert_eq!(client.api_key.as_deref(), Some("CG-from-file"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/coingecko")));
    }

    #[test]
    fn test_env_key_overrides_file_key() {
        let config = CliConfig {
            api_key: Some("CG-from-file".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(
            config.client_config(Some("CG-from-env")).api_key.as_deref(),
            Some("CG-from-env")
        );
        assert_eq!(
            config.client_config(Some("")).api_key.as_deref(),
            Some("CG-from-file")
        );
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(CliConfig::from_yaml("retry_count: many").is_err());
    }
}
