use std::{env, net::SocketAddr};

use reqwest::Url;

const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";
const PORT_VAR: &str = "PORT";

pub const DEFAULT_PORT: u16 = 3000;

/// How the bot receives updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatesMode {
    /// Long polling, for development
    Polling,
    /// Telegram pushes updates to `url`, the server listens on `addr`
    Webhook { url: Url, addr: SocketAddr },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub mode: UpdatesMode,
}

impl Config {
    /// Read config from the process environment, after loading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("loaded env from {}", path.display()),
            Err(e) if e.not_found() => (),
            Err(e) => log::warn!("failed to load .env: {e}"),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = non_empty(BOT_TOKEN_VAR).ok_or(ConfigError::Missing(BOT_TOKEN_VAR))?;

        let mode = match non_empty(WEBHOOK_URL_VAR) {
            Some(url) => {
                let url =
                    Url::parse(&url).map_err(|e| ConfigError::InvalidUrl(url, e.to_string()))?;
                let port = match non_empty(PORT_VAR) {
                    Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
                    None => DEFAULT_PORT,
                };
                UpdatesMode::Webhook {
                    url,
                    addr: ([0, 0, 0, 0], port).into(),
                }
            }
            None => UpdatesMode::Polling,
        };

        Ok(Self { token, mode })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} env variable is not set")]
    Missing(&'static str),
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid WEBHOOK_URL {0:?}: {1}")]
    InvalidUrl(String, String),
}
