//! Settings read from env (after `.env` is loaded by the binary). Every key has a default.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DB_DIR: &str = "data";
/// Store file name inside `DB_PATH`.
pub const DB_FILE_NAME: &str = "database.sqlite";
/// 100 KiB, same as a stock JSON body parser.
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

/// Where the SQLite store lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreLocation {
    /// Directory holding `database.sqlite`; created on open.
    Directory(PathBuf),
    /// Full SQLite URL from `DATABASE_URL`, used as-is.
    Url(String),
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub store: StoreLocation,
    pub body_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            store: StoreLocation::Directory(PathBuf::from(DEFAULT_DB_DIR)),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Settings::default();

        let port = match get("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: v })?,
            None => defaults.port,
        };
        let body_limit = match get("BODY_LIMIT_BYTES") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "BODY_LIMIT_BYTES", value: v })?,
            None => defaults.body_limit,
        };
        let store = match (get("DATABASE_URL"), get("DB_PATH")) {
            (Some(url), _) => StoreLocation::Url(url),
            (None, Some(dir)) => StoreLocation::Directory(PathBuf::from(dir)),
            (None, None) => defaults.store,
        };

        Ok(Settings {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            store,
            body_limit,
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid { key: "HOST", value: self.host.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.port, 3000);
        assert_eq!(s.store, StoreLocation::Directory(PathBuf::from("data")));
        assert_eq!(s.body_limit, DEFAULT_BODY_LIMIT);
        assert_eq!(s.listen_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn database_url_overrides_db_path() {
        let s = settings(&[("DB_PATH", "/tmp/x"), ("DATABASE_URL", "sqlite::memory:")]).unwrap();
        assert_eq!(s.store, StoreLocation::Url("sqlite::memory:".into()));

        let s = settings(&[("DB_PATH", "/tmp/x"), ("PORT", "8080")]).unwrap();
        assert_eq!(s.store, StoreLocation::Directory(PathBuf::from("/tmp/x")));
        assert_eq!(s.port, 8080);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = settings(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }
}
