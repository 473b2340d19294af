//! Startup configuration
//!
//! Everything is read once from the process environment (after `.env` has
//! been loaded by `main`). There is no reload.

use sqlx::mysql::MySqlConnectOptions;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_POOL_SIZE: u32 = 10;
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Pool wait used when `DB_ACQUIRE_TIMEOUT_SECS` is unset: callers queue for
/// a free connection with no practical limit.
///
/// sqlx adds the timeout to `Instant::now()`, so this must stay finite.
pub const UNBOUNDED_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("DB_POOL_SIZE must be at least 1")]
    EmptyPool,
}

/// Database connection and pool settings
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
    pub port: u16,
    pub pool_size: u32,
    /// Longest wait for a pooled connection; `None` waits indefinitely
    pub acquire_timeout: Option<Duration>,
}

impl DatabaseConfig {
    /// Effective pool acquire timeout
    pub fn acquire_timeout(&self) -> Duration {
        self.acquire_timeout.unwrap_or(UNBOUNDED_ACQUIRE_TIMEOUT)
    }

    /// Builds sqlx connect options from the individual fields
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user);

        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }

        options
    }
}

// Keeps the password out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("pool_size", &self.pool_size)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mysql://{}@{}:{}", self.user, self.host, self.port)?;
        if let Some(database) = &self.database {
            write!(f, "/{}", database)?;
        }
        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub http_port: u16,
}

impl Config {
    /// Reads configuration from environment variables
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `DB_HOST` | `localhost` |
    /// | `DB_USER` | `root` |
    /// | `DB_PASSWORD` | empty |
    /// | `DB_NAME` | none |
    /// | `DB_PORT` | `3306` |
    /// | `DB_POOL_SIZE` | `10` |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | none (wait indefinitely) |
    /// | `PORT` | `3000` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let pool_size = parse_number(&var, "DB_POOL_SIZE", DEFAULT_POOL_SIZE)?;
        if pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }

        let database = DatabaseConfig {
            host: var("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            user: var("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            password: var("DB_PASSWORD").unwrap_or_default(),
            database: var("DB_NAME"),
            port: parse_number(&var, "DB_PORT", DEFAULT_DB_PORT)?,
            pool_size,
            acquire_timeout: parse_optional_number(&var, "DB_ACQUIRE_TIMEOUT_SECS")?
                .map(Duration::from_secs),
        };

        Ok(Self {
            database,
            http_port: parse_number(&var, "PORT", DEFAULT_HTTP_PORT)?,
        })
    }
}

fn parse_number<T, F>(var: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_optional_number(var, name)?.unwrap_or(default))
}

fn parse_optional_number<T, F>(var: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    var(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { name, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.password, "");
        assert_eq!(config.database.database, None);
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.pool_size, 10);
        assert_eq!(config.database.acquire_timeout, None);
        assert_eq!(config.database.acquire_timeout(), UNBOUNDED_ACQUIRE_TIMEOUT);
        assert_eq!(config.http_port, 3000);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_NAME", "loja"),
            ("DB_PORT", "3307"),
            ("DB_POOL_SIZE", "4"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "15"),
            ("PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.user, "app");
        assert_eq!(config.database.password, "s3cret");
        assert_eq!(config.database.database.as_deref(), Some("loja"));
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.pool_size, 4);
        assert_eq!(config.database.acquire_timeout(), Duration::from_secs(15));
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        let config = config_from(&[("DB_PORT", ""), ("PORT", "")]).unwrap();
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.http_port, 3000);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert_eq!(
            config_from(&[("DB_PORT", "abc")]),
            Err(ConfigError::InvalidNumber {
                name: "DB_PORT",
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn zero_pool_size_is_an_error() {
        assert_eq!(config_from(&[("DB_POOL_SIZE", "0")]), Err(ConfigError::EmptyPool));
    }

    #[test]
    fn display_and_debug_hide_password() {
        let config = config_from(&[("DB_PASSWORD", "s3cret"), ("DB_NAME", "loja")]).unwrap();

        assert_eq!(config.database.to_string(), "mysql://root@localhost:3306/loja");
        assert!(!format!("{:?}", config).contains("s3cret"));
    }
}
