use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::checker::DEFAULT_RANGE_BYTES;
use crate::classify::{MessageTemplates, UnknownErrorKind};
use crate::transport::TransportSettings;

/// Hard ceiling for `max_redirects`; anything above is treated as a typo.
pub const MAX_REDIRECTS_LIMIT: u32 = 50;

/// Invalid values in an otherwise well-formed config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("range_bytes must be at least 1")]
    ZeroRangeBytes,
    #[error("max_redirects = {0} exceeds the limit of {MAX_REDIRECTS_LIMIT}")]
    TooManyRedirects(u32),
    #[error("invalid [messages] key: {0}")]
    MessageKey(#[from] UnknownErrorKind),
}

/// Global configuration loaded from `~/.config/linkprobe/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProberConfig {
    /// Seconds allowed to establish a connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole request, redirects included.
    pub timeout_secs: u64,
    /// Redirects followed before a probe counts as a redirect loop.
    pub max_redirects: u32,
    /// Body bytes requested by the GET fallback (`Range: bytes=0-(n-1)`).
    pub range_bytes: u64,
    /// Agent name sent as the start of `User-Agent`.
    pub agent_name: String,
    /// Optional URL describing the agent, appended to `User-Agent`.
    pub agent_url: Option<String>,
    /// Optional contact address, appended to `User-Agent`.
    pub agent_email: Option<String>,
    /// Extra request headers sent with every probe.
    pub headers: BTreeMap<String, String>,
    /// Message template overrides keyed by error kind (`404`, `loop`, ...) or `default`.
    pub messages: BTreeMap<String, String>,
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 20,
            max_redirects: 5,
            range_bytes: DEFAULT_RANGE_BYTES,
            agent_name: "linkprobe".to_string(),
            agent_url: None,
            agent_email: None,
            headers: BTreeMap::new(),
            messages: BTreeMap::new(),
        }
    }
}

impl ProberConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.range_bytes == 0 {
            return Err(ConfigError::ZeroRangeBytes);
        }
        if self.max_redirects > MAX_REDIRECTS_LIMIT {
            return Err(ConfigError::TooManyRedirects(self.max_redirects));
        }
        Ok(())
    }

    /// `User-Agent` value: `name[ url][; email]`.
    pub fn user_agent(&self) -> String {
        let mut agent = self.agent_name.trim().to_string();
        if let Some(url) = self.agent_url.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            agent.push(' ');
            agent.push_str(url);
        }
        if let Some(email) = self.agent_email.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            agent.push_str("; ");
            agent.push_str(email);
        }
        agent
    }

    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            max_redirects: self.max_redirects,
            user_agent: self.user_agent(),
            headers: self
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    pub fn message_templates(&self) -> Result<MessageTemplates, ConfigError> {
        Ok(MessageTemplates::with_overrides(&self.messages)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkprobe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProberConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProberConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<ProberConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ProberConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
