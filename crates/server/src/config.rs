use homeward::access::DEFAULT_PASSWORD;
use std::{env, path::PathBuf};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid port: {0}")]
    InvalidPort(String),
    #[error("Table directory does not exist: {0}")]
    MissingTables(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub password: String,
    pub tables_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            password: DEFAULT_PASSWORD.to_string(),
            tables_dir: None,
        }
    }
}

impl Config {
    /// `PORT`, `HOMEWARD_PASSWORD` and an optional table directory as the
    /// first argument.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_parts(
            env::var("PORT").ok(),
            env::var("HOMEWARD_PASSWORD").ok(),
            env::args().nth(1),
        )
    }

    fn from_parts(
        port: Option<String>,
        password: Option<String>,
        tables_dir: Option<String>,
    ) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(port) = port {
            config.port = port.trim().parse().map_err(|_| Error::InvalidPort(port))?;
        }
        if let Some(password) = password.filter(|value| !value.is_empty()) {
            config.password = password;
        }
        if let Some(dir) = tables_dir {
            let dir = PathBuf::from(dir);
            if !dir.is_dir() {
                return Err(Error::MissingTables(dir));
            }
            config.tables_dir = Some(dir);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let config = Config::from_parts(None, None, None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.password, "1234");
    }

    #[test]
    fn overrides() {
        let config =
            Config::from_parts(Some("8080".into()), Some("lantern".into()), None).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.password, "lantern");
    }

    #[test]
    fn empty_password_keeps_default() {
        let config = Config::from_parts(None, Some(String::new()), None).unwrap();
        assert_eq!(config.password, "1234");
    }

    #[test]
    fn bad_port() {
        let err = Config::from_parts(Some("eighty".into()), None, None).unwrap_err();
        assert_eq!(err, Error::InvalidPort("eighty".into()));
    }

    #[test]
    fn missing_tables() {
        let err = Config::from_parts(None, None, Some("/does/not/exist".into())).unwrap_err();
        assert!(matches!(err, Error::MissingTables(_)));
    }
}
