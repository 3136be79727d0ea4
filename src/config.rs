use crate::domain::error::DomainError;
use std::time::Duration;

pub const DEFAULT_DB_PATH: &str = "./prices.db";
pub const DEFAULT_ACQUISITION_HOST: &str = "127.0.0.1:8001";
pub const DEFAULT_ACQUISITION_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: String,
    pub acquisition_host: String,
    pub acquisition_timeout: Duration,
    pub bind: String,
    /// Seed demo products and source urls into empty tables at startup.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            acquisition_host: DEFAULT_ACQUISITION_HOST.into(),
            acquisition_timeout: Duration::from_secs(DEFAULT_ACQUISITION_TIMEOUT_SECS),
            bind: DEFAULT_BIND.into(),
            seed: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Deployments that still point at a server database must fail loudly
        // instead of silently writing to a local file.
        if let Some(flag) = lookup("DB_POSTGRES") {
            if parse_flag(&flag).unwrap_or(true) {
                return Err(DomainError::Config(format!(
                    "DB_POSTGRES={flag} is not supported; prices are stored in an embedded SQLite file, set PRICES_DB instead"
                )));
            }
        }

        let mut config = Self::default();
        if let Some(path) = lookup("PRICES_DB") {
            config.db_path = path;
        }
        if let Some(host) = lookup("DATA_ACQUISITION_IP") {
            config.acquisition_host = host;
        }
        if let Some(secs) = lookup("DATA_ACQUISITION_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                DomainError::Config(format!("DATA_ACQUISITION_TIMEOUT_SECS must be an integer, got '{secs}'"))
            })?;
            config.acquisition_timeout = Duration::from_secs(secs);
        }
        if let Some(bind) = lookup("PRICES_BIND") {
            config.bind = bind;
        }
        if let Some(seed) = lookup("PRICES_SEED") {
            config.seed = parse_flag(&seed)
                .ok_or_else(|| DomainError::Config(format!("PRICES_SEED must be a boolean, got '{seed}'")))?;
        }
        Ok(config)
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.acquisition_timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRICES_DB", ":memory:"),
            ("DATA_ACQUISITION_IP", "acq:9000"),
            ("DATA_ACQUISITION_TIMEOUT_SECS", "30"),
            ("PRICES_SEED", "off"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, ":memory:");
        assert_eq!(config.acquisition_host, "acq:9000");
        assert_eq!(config.acquisition_timeout, Duration::from_secs(30));
        assert!(!config.seed);
        assert_eq!(config.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_bad_timeout_is_config_error() {
        let err =
            Config::from_lookup(lookup_from(&[("DATA_ACQUISITION_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_server_database_is_refused() {
        let err = Config::from_lookup(lookup_from(&[
            ("DB_POSTGRES", "true"),
            ("DB_HOST", "db"),
            ("DB_USER", "prices"),
        ]))
        .unwrap_err();
        assert!(matches!(err, DomainError::Config(ref m) if m.contains("PRICES_DB")));

        let config = Config::from_lookup(lookup_from(&[("DB_POSTGRES", "false")])).unwrap();
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
    }
}
