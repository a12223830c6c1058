use anyhow::{Context, Result};
use thiserror::Error;
use url::Url;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bare `scheme://host[:port]` prepended to share links.
    pub public_origin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            public_origin: parse_origin(&require_env("PUBLIC_ORIGIN")?)
                .context("PUBLIC_ORIGIN must be a bare http(s) origin")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[derive(Debug, Error)]
pub enum OriginError {
    #[error("'{0}' is not a valid URL: {1}")]
    Invalid(String, #[source] url::ParseError),

    #[error("origin must use http or https, got '{0}'")]
    Scheme(String),

    #[error("origin must be scheme://host[:port] with no credentials, path, query or fragment, got '{0}'")]
    NotBare(String),
}

/// Parses a share-link origin. Only `scheme://host[:port]` (optionally with a
/// single trailing `/`) is accepted, so the token is always the sole fragment.
pub fn parse_origin(raw: &str) -> Result<String, OriginError> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).map_err(|err| OriginError::Invalid(raw.to_string(), err))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(OriginError::Scheme(raw.to_string()));
    }
    if parsed.host().is_none()
        || !parsed.username().is_empty()
        || parsed.password().is_some()
        || parsed.path() != "/"
        || parsed.query().is_some()
        || parsed.fragment().is_some()
    {
        return Err(OriginError::NotBare(raw.to_string()));
    }

    Ok(parsed.origin().ascii_serialization())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
