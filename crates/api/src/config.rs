use std::fmt;

use sqlx::postgres::PgConnectOptions;

/// Errors raised while assembling [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("DATABASE_URL is invalid: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared through `AppState`; nothing reads the
/// environment after that.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Pre-shared key expected in the `X-API-Key` header.
    pub api_key: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Postgres connection settings.
    pub database: PgConnectOptions,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `SERVER_PORT` / `PORT` | `3000`                     |
    /// | `API_KEY`              | required                   |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | assembled from `DB_*`      |
    /// | `DB_HOST`              | `localhost`                |
    /// | `DB_PORT`              | `5432`                     |
    /// | `DB_USERNAME`          | `postgres`                 |
    /// | `DB_PASSWORD`          | empty                      |
    /// | `DB_NAME`              | `categories`               |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_or(
            "SERVER_PORT",
            var("SERVER_PORT").or_else(|| var("PORT")),
            3000u16,
        )?;

        let api_key = var("API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing("API_KEY"))?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_or("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), 30u64)?;

        let database = match var("DATABASE_URL") {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .map_err(ConfigError::DatabaseUrl)?,
            None => {
                let db_port = parse_or("DB_PORT", var("DB_PORT"), 5432u16)?;
                PgConnectOptions::new()
                    .host(&var("DB_HOST").unwrap_or_else(|| "localhost".into()))
                    .port(db_port)
                    .username(&var("DB_USERNAME").unwrap_or_else(|| "postgres".into()))
                    .password(&var("DB_PASSWORD").unwrap_or_default())
                    .database(&var("DB_NAME").unwrap_or_else(|| "categories".into()))
            }
        };

        Ok(Self {
            host,
            port,
            api_key,
            cors_origins,
            request_timeout_secs,
            database,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}
