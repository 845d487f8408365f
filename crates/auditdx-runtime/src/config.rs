use crate::{Error, Result};
use auditdx_engine::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. AUDITDX_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.auditdx/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("AUDITDX_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("auditdx").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".auditdx").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub health_timeout_secs: u64,
    /// The audit endpoint fans out to several upstream services, so its
    /// deadline is much longer than the health check's
    pub exchange_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            health_timeout_secs: 5,
            exchange_timeout_secs: 60,
        }
    }
}

impl BackendConfig {
    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    pub fn exchange_timeout(&self) -> Duration {
        Duration::from_secs(self.exchange_timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScratchConfig {
    /// Where the last successful response body is written, overwritten on
    /// each run; a fixed name under the system temp directory when unset
    pub response_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub thresholds: Thresholds,
    pub scratch: ScratchConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn response_scratch_path(&self) -> PathBuf {
        self.scratch
            .response_path
            .clone()
            .unwrap_or_else(crate::exchange::default_scratch_path)
    }
}
