use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub timeout: u64,
    pub user_agent: String,
    pub regions_allowed: String,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            timeout: 1,
            user_agent: format!("yt-schema/{}", env!("CARGO_PKG_VERSION")),
            regions_allowed: "JPN".to_string(),
            pretty: false,
        }
    }
}

impl Config {
    /// Reads a TOML config file, or the defaults when no path is given.
    /// `YOUTUBE_API_KEY` fills in a key the file does not set.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                Self::from_toml(&raw)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };

        if config.api_key.is_none() {
            config.api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        }

        Ok(config)
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
