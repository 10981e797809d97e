use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const API_URL_ENV_VAR: &str = "RECIPE_API_URL";
pub const DEPLOYMENT_ENV_VAR: &str = "RECIPE_API_DEPLOYMENT";
pub const CHAT_USER_ENV_VAR: &str = "RECIPE_CHAT_USER";
pub const TIMEOUT_ENV_VAR: &str = "RECIPE_API_TIMEOUT_SECS";

const LOCAL_BASE_URL: &str = "http://localhost:8000";
const PROXIED_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_CHAT_USER: &str = "User";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base URL '{0}' cannot carry path segments")]
    UnsupportedBaseUrl(String),
    #[error("unknown deployment '{0}', expected 'local' or 'proxy'")]
    UnknownDeployment(String),
    #[error("invalid timeout '{0}', expected a whole number of seconds")]
    InvalidTimeout(String),
    #[error("failed to read env file: {0}")]
    EnvFile(#[from] dotenv::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Deployment {
    /// Backend reached directly on its own port.
    #[default]
    Local,
    /// Backend mounted under `/api` behind the web front-end's proxy.
    Proxied,
}

impl Deployment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "local" => Ok(Deployment::Local),
            "proxy" | "proxied" => Ok(Deployment::Proxied),
            _ => Err(ConfigError::UnknownDeployment(value.to_string())),
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Deployment::Local => LOCAL_BASE_URL,
            Deployment::Proxied => PROXIED_BASE_URL,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: Url,
    pub user_name: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_deployment(Deployment::Local)
    }
}

impl ApiConfig {
    pub fn for_deployment(deployment: Deployment) -> Self {
        Self {
            base_url: Url::parse(deployment.default_base_url())
                .expect("built-in base URLs are valid"),
            user_name: DEFAULT_CHAT_USER.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Builds a config around an explicit base URL, keeping the other defaults.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings from a dotenv file without touching the process environment.
    // dotenv 0.15 marks its iterator API deprecated but has no replacement
    // that leaves the environment alone.
    #[allow(deprecated)]
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        for item in dotenv::from_path_iter(path)? {
            let (key, value) = item?;
            values.insert(key, value);
        }
        Self::from_lookup(|key| values.get(key).cloned())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let deployment = match lookup(DEPLOYMENT_ENV_VAR) {
            Some(value) => Deployment::parse(&value)?,
            None => Deployment::default(),
        };
        let mut config = Self::for_deployment(deployment);

        if let Some(url) = lookup(API_URL_ENV_VAR) {
            config.base_url = parse_base_url(&url)?;
        }
        if let Some(user) = lookup(CHAT_USER_ENV_VAR) {
            config.user_name = user.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::UnsupportedBaseUrl(value.to_string()));
    }
    Ok(url)
}
