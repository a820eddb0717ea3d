use crate::api::constants;
use crate::api::logging::{LogLevel, MonitoringConfig};
use crate::api::transport::TransportOptions;
use crate::api::GraphClient;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL_ENV: &str = "GRAPH_BASE_URL";
pub const ACCESS_TOKEN_ENV: &str = "GRAPH_ACCESS_TOKEN";

/// Keys accepted by [`Config::set`]
pub const KEYS: &[&str] = &[
    "base_url",
    "timeout_secs",
    "connect_timeout_secs",
    "user_agent",
    "monitoring.correlation_ids",
    "monitoring.request_logging",
    "monitoring.performance_metrics",
    "monitoring.log_level",
    "monitoring.slow_request_ms",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub monitoring: MonitoringConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: constants::default_base_url(),
            timeout_secs: 60,
            connect_timeout_secs: 10,
            user_agent: constants::USER_AGENT.to_string(),
            monitoring: MonitoringConfig::default(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("msgraph-client")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".msgraph-client")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (defaults when absent) and apply environment overrides
    pub fn load() -> Result<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", env_file);
        }

        let mut config = Self::load_from(&Self::get_config_path()?)?;
        config.override_base_url(std::env::var(BASE_URL_ENV).ok());
        Ok(config)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    fn override_base_url(&mut self, base_url: Option<String>) {
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            debug!("Base URL overridden from environment: {}", base_url);
            self.base_url = base_url;
        }
    }

    /// Bearer token from `GRAPH_ACCESS_TOKEN`
    pub fn access_token() -> Result<String> {
        std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .with_context(|| format!("{} is not set", ACCESS_TOKEN_ENV))
    }

    /// Update a single scalar setting
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base_url" => self.base_url = value.trim_end_matches('/').to_string(),
            "timeout_secs" => self.timeout_secs = parse_number(key, value)?,
            "connect_timeout_secs" => self.connect_timeout_secs = parse_number(key, value)?,
            "user_agent" => self.user_agent = value.to_string(),
            "monitoring.correlation_ids" => self.monitoring.correlation_ids = parse_bool(key, value)?,
            "monitoring.request_logging" => self.monitoring.request_logging = parse_bool(key, value)?,
            "monitoring.performance_metrics" => self.monitoring.performance_metrics = parse_bool(key, value)?,
            "monitoring.log_level" => {
                self.monitoring.log_level = value.parse::<LogLevel>().map_err(anyhow::Error::msg)?
            }
            "monitoring.slow_request_ms" => self.monitoring.slow_request_ms = parse_number(key, value)?,
            _ => anyhow::bail!("Unknown config key '{}' (known keys: {})", key, KEYS.join(", ")),
        }
        info!("Set config {} = {}", key, value);
        Ok(())
    }

    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Client over a pooled reqwest transport using these settings
    pub fn build_client(&self, access_token: impl Into<String>) -> Result<GraphClient> {
        let transport = crate::api::ReqwestTransport::new(&self.transport_options())
            .context("Failed to build HTTP client")?;
        Ok(GraphClient::with_transport(&self.base_url, access_token, Arc::new(transport))
            .with_monitoring(self.monitoring.clone()))
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .with_context(|| format!("{} expects a whole number, got '{}'", key, value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .with_context(|| format!("{} expects true or false, got '{}'", key, value))
}
