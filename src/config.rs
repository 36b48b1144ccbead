use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Error;

pub const CONFIG_ENV: &str = "ZONECTL_CONF";
pub const DEFAULT_API_URL: &str = "https://api.dnsimple.com/v2";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub user: String,
    pub token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("user", &self.user)
            .field("token", &"<REDACTED>")
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let config: Config =
            toml::from_str(text).map_err(|e| Error::Config(format!("invalid config: {e}")))?;
        if config.token.trim().is_empty() {
            return Err(Error::Config("token must not be empty".into()));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("could not read {}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Sample config file, encoded from a real `Config` so it stays loadable.
    pub fn example() -> String {
        let sample = Config {
            user: "you@example.com".into(),
            token: "TOKENHERE1234".into(),
            api_url: default_api_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };
        toml::to_string(&sample).unwrap_or_default()
    }
}

/// Config file location: explicit path, then `ZONECTL_CONF`, then the
/// platform config directory.
pub fn resolve_path(
    explicit: Option<PathBuf>,
    env_value: Option<OsString>,
) -> Result<PathBuf, Error> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    ProjectDirs::from("", "", "zonectl")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or_else(|| Error::Config("could not determine config directory".into()))
}
