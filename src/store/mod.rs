//! Storage Adapter: persistence of (key, value) records.
//!
//! Handlers only ever see a [`Store`] trait object, so the backend is chosen
//! once at startup and tests substitute [`MemoryStore`].

mod memory;
mod spanner;

pub use memory::MemoryStore;
pub use spanner::SpannerStore;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{Config, StoreBackend};

/// Persistent mapping from string key to string value.
///
/// Implementations must give last-write-wins semantics per key: `put` fully
/// replaces whatever was stored before and is durable once it returns.
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns the current value for `key`, or `None` if no record exists.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Persists `value` under `key`, replacing any prior value.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Verifies the backend is reachable.
    async fn ping(&self) -> Result<()>;
}

/// Build the store selected by `config`
pub async fn from_config(config: &Config) -> Result<Arc<dyn Store>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; records will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Spanner => {
            let spanner = config
                .spanner
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("Spanner backend selected without Spanner settings"))?;
            Ok(Arc::new(SpannerStore::from_config(spanner).await?))
        }
    }
}
