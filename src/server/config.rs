use std::{path::PathBuf, str::FromStr, time::Duration};

use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_STATIC_ROOT: &str = ".";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Which persistence gateway to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayConfig {
    /// Managed store reached through its REST interface.
    Rest { url: String, api_key: String },
    /// SQL database reached directly.
    Database { url: String },
}

/// Which credentials are present in the environment, reported by the deployment check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialPresence {
    pub supabase_url: bool,
    pub supabase_key: bool,
    pub supabase_service_key: bool,
    pub database_url: bool,
}

#[derive(Debug)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub credentials: CredentialPresence,

    pub bind_address: String,
    pub static_root: PathBuf,
    pub log_level: Level,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// The REST gateway is used when `SUPABASE_URL` is set, preferring the service role key
    /// over the anonymous key. Otherwise `DATABASE_URL` selects the direct gateway. Empty
    /// values count as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - Complete configuration
    /// - `Err(ConfigError::MissingEnvVar)` - No gateway configured, or REST URL without key
    /// - `Err(ConfigError::InvalidEnvVar)` - Log level or timeout does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let supabase_url = var("SUPABASE_URL");
        let service_key = var("SUPABASE_SERVICE_ROLE_KEY");
        let anon_key = var("SUPABASE_KEY");
        let database_url = var("DATABASE_URL");

        let credentials = CredentialPresence {
            supabase_url: supabase_url.is_some(),
            supabase_key: anon_key.is_some(),
            supabase_service_key: service_key.is_some(),
            database_url: database_url.is_some(),
        };

        let gateway = match (supabase_url, database_url) {
            (Some(url), _) => GatewayConfig::Rest {
                url,
                api_key: service_key.or(anon_key).ok_or_else(|| {
                    ConfigError::MissingEnvVar("SUPABASE_SERVICE_ROLE_KEY".to_string())
                })?,
            },
            (None, Some(url)) => GatewayConfig::Database { url },
            (None, None) => return Err(ConfigError::MissingEnvVar("SUPABASE_URL".to_string())),
        };

        let log_level = match var("LOG_LEVEL") {
            Some(value) => Level::from_str(&value).map_err(|_| ConfigError::InvalidEnvVar {
                name: "LOG_LEVEL".to_string(),
                value: value.clone(),
                reason: "expected one of trace, debug, info, warn, error".to_string(),
            })?,
            None => Level::INFO,
        };

        let timeout_secs = match var("REQUEST_TIMEOUT_SECS") {
            Some(value) => value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnvVar {
                    name: "REQUEST_TIMEOUT_SECS".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            gateway,
            credentials,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            static_root: PathBuf::from(
                var("STATIC_ROOT").unwrap_or_else(|| DEFAULT_STATIC_ROOT.to_string()),
            ),
            log_level,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
