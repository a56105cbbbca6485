use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

use super::{
    prices::{HTTP_TIMEOUT_SECONDS, POLL_INTERVAL_SECONDS, PRICES_API_URL},
    server::PORT,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ENV var {0} has invalid value: {1}")]
    InvalidVar(&'static str, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub prices_url: String,
    pub poll_interval: Duration,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: PORT,
            prices_url: PRICES_API_URL.to_string(),
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECONDS),
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECONDS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let prices_url = lookup("PRICES_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.prices_url);
        let poll_interval = match parse_var::<u64, _>(&lookup, "POLL_INTERVAL_SECS")? {
            Some(0) => return Err(ConfigError::InvalidVar("POLL_INTERVAL_SECS", "0".into())),
            Some(secs) => Duration::from_secs(secs),
            None => defaults.poll_interval,
        };
        let http_timeout = parse_var::<u64, _>(&lookup, "HTTP_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.http_timeout);

        Ok(AppConfig {
            port,
            prices_url,
            poll_interval,
            http_timeout,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar(key, raw)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.poll_interval, Duration::from_secs(30));
        assert_eq!(config.prices_url, PRICES_API_URL);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("PRICES_URL", "http://localhost:9000/prices.json"),
            ("POLL_INTERVAL_SECS", "5"),
            ("HTTP_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.prices_url, "http://localhost:9000/prices.json");
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.http_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_port() {
        let res = AppConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")]));

        assert_eq!(
            res,
            Err(ConfigError::InvalidVar("PORT", "not-a-port".to_string()))
        );
    }

    #[test]
    fn test_zero_interval_rejected() {
        let res = AppConfig::from_lookup(lookup_from(&[("POLL_INTERVAL_SECS", "0")]));

        assert!(matches!(
            res,
            Err(ConfigError::InvalidVar("POLL_INTERVAL_SECS", _))
        ));
    }
}
