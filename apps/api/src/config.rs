use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Only `DATABASE_URL` is required. Provider keys are optional: a missing key
/// puts that provider on its degrade path (a textual fallback reply), it never
/// prevents the service from starting.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub jsearch_api_key: Option<String>,
    pub eventbrite_api_key: Option<String>,
    pub firebase_api_key: Option<String>,
    pub hf_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_or(
                optional_env("DB_MAX_CONNECTIONS"),
                10,
                "DB_MAX_CONNECTIONS",
            )?,
            jsearch_api_key: optional_env("JSEARCH_API_KEY"),
            eventbrite_api_key: optional_env("EVENTBRITE_API_KEY"),
            firebase_api_key: optional_env("FIREBASE_API_KEY"),
            hf_api_key: optional_env("HF_API_KEY"),
            port: parse_or(optional_env("PORT"), 8080, "PORT")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parses an optional raw value, falling back to `default` when unset.
fn parse_or<T>(raw: Option<String>, default: T, key: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(v) => v
            .parse::<T>()
            .with_context(|| format!("'{key}' must be a valid number, got '{v}'")),
        None => Ok(default),
    }
}
