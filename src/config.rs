use std::env;
use std::str::FromStr;
use anyhow::{Context, Result, bail};

use crate::sync::DEFAULT_KEY;

/// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "kv_sync=info,tower_http=info";

/// Default request body limit for PUT /data, matching axum's built-in limit
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Which Storage Adapter backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Spanner,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "spanner" => Ok(StoreBackend::Spanner),
            "memory" => Ok(StoreBackend::Memory),
            other => bail!("STORE_BACKEND must be one of: spanner, memory, got '{}'", other),
        }
    }
}

/// Connection settings for the Spanner backend
#[derive(Debug, Clone)]
pub struct SpannerConfig {
    pub emulator_host: Option<String>,
    pub project: String,
    pub instance: String,
    pub database: String,
}

impl SpannerConfig {
    pub fn from_env() -> Result<Self> {
        let emulator_host = env::var("SPANNER_EMULATOR_HOST").ok();

        let project = env::var("SPANNER_PROJECT")
            .context("SPANNER_PROJECT environment variable is required")?;

        let instance = env::var("SPANNER_INSTANCE")
            .context("SPANNER_INSTANCE environment variable is required")?;

        let database = env::var("SPANNER_DATABASE")
            .context("SPANNER_DATABASE environment variable is required")?;

        Ok(SpannerConfig {
            emulator_host,
            project,
            instance,
            database,
        })
    }

    pub fn database_path(&self) -> String {
        format!(
            "projects/{}/instances/{}/databases/{}",
            self.project, self.instance, self.database
        )
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// Present only when `store_backend` is `Spanner`
    pub spanner: Option<SpannerConfig>,
    pub default_key: String,
    pub max_body_bytes: usize,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_backend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "spanner".to_string())
            .parse::<StoreBackend>()?;

        let spanner = match store_backend {
            StoreBackend::Spanner => Some(SpannerConfig::from_env()?),
            StoreBackend::Memory => None,
        };

        let default_key = env::var("DEFAULT_KEY")
            .unwrap_or_else(|_| DEFAULT_KEY.to_string());

        let max_body_bytes = match env::var("MAX_BODY_BYTES") {
            Ok(raw) => raw
                .parse::<usize>()
                .context("MAX_BODY_BYTES must be a non-negative integer")?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            store_backend,
            spanner,
            default_key,
            max_body_bytes,
            service_port,
            service_host,
        })
    }

    /// Config for an in-memory service on an ephemeral local port
    #[cfg(test)]
    pub fn for_memory() -> Self {
        Config {
            store_backend: StoreBackend::Memory,
            spanner: None,
            default_key: DEFAULT_KEY.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            service_port: 0,
            service_host: "127.0.0.1".to_string(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store backend: {:?}", self.store_backend);
        if let Some(spanner) = &self.spanner {
            tracing::info!("  Spanner emulator: {}",
                spanner.emulator_host.as_deref().unwrap_or("disabled (using production)"));
            tracing::info!("  Spanner database: {}", spanner.database_path());
        }
        tracing::info!("  Default key: {:?}", self.default_key);
        tracing::info!("  Max body size: {} bytes", self.max_body_bytes);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
