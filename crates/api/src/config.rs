//! Runtime configuration, read from environment variables.

use std::net::SocketAddr;

use anyhow::Context;

/// Address the server binds to.
pub const BIND_ADDR_VAR: &str = "STOREFRONT_BIND_ADDR";

/// Deployment environment (`development` or `production`).
pub const ENV_VAR: &str = "STOREFRONT_ENV";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "development" | "dev" => Environment::Development,
            other => {
                tracing::warn!("{ENV_VAR}={other:?} not recognized; assuming development");
                Environment::Development
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub environment: Environment,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            environment: Environment::Development,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| {
            tracing::info!("{BIND_ADDR_VAR} not set; using {DEFAULT_BIND_ADDR}");
            DEFAULT_BIND_ADDR.to_string()
        });
        let bind_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("invalid {BIND_ADDR_VAR}: {raw_addr:?}"))?;

        let environment = lookup(ENV_VAR)
            .map(|raw| Environment::parse(&raw))
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            environment,
        })
    }

    /// Cookies carry the `Secure` attribute only in production.
    pub fn secure_cookies(&self) -> bool {
        self.environment == Environment::Production
    }
}
