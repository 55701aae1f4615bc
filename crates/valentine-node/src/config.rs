//! Service configuration, read from the environment.

use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Runtime configuration of the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. `*` allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    /// Load from `VALENTINE_HOST`, `VALENTINE_PORT` and `CORS_ORIGINS`.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            host: try_load("VALENTINE_HOST", defaults.host)?,
            port: try_load("VALENTINE_PORT", defaults.port)?,
            cors_origins: parse_origins(&try_load("CORS_ORIGINS", "*".to_string())?),
        })
    }

    /// Socket address to bind.
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// CORS layer for the configured origins.
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if self.cors_origins.iter().any(|o| o == "*") {
            return layer.allow_origin(Any);
        }

        let origins: Vec<HeaderValue> = self
            .cors_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        layer.allow_origin(origins)
    }
}

fn try_load<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {key} value {raw:?}: {e}")),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let addr = Config::default().addr().unwrap();
        assert_eq!(addr.port(), 8001);
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("https://a.example, https://b.example,,"),
            ["https://a.example", "https://b.example"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_invalid_host() {
        let config = Config {
            host: "not a host".into(),
            ..Config::default()
        };
        assert!(config.addr().is_err());
    }
}
