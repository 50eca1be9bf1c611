//! Sync Service operations shared by the HTTP handlers.
//!
//! Every call round-trips to the store; nothing is cached between requests.

use anyhow::Result;

use crate::store::Store;

/// Key used when a request does not name one
pub const DEFAULT_KEY: &str = "default";

/// Body returned by a read when no record exists for the key
pub const MISSING_VALUE: &str = "none";

/// Reply to a successful PUT
pub const WRITE_ACK: &str = "Done";

/// Pick the record key for a request: the explicit id verbatim, else the default.
pub fn resolve_key(id: Option<String>, default_key: &str) -> String {
    id.unwrap_or_else(|| default_key.to_string())
}

pub async fn read(store: &dyn Store, key: &str) -> Result<String> {
    Ok(store
        .get(key)
        .await?
        .unwrap_or_else(|| MISSING_VALUE.to_string()))
}

/// Store `value` under `key` and echo it back as `Set to: <value>`
pub async fn set(store: &dyn Store, key: &str, value: &str) -> Result<String> {
    store.put(key, value).await?;
    Ok(format!("Set to: {}", value))
}

pub async fn write(store: &dyn Store, key: &str, body: &str) -> Result<&'static str> {
    store.put(key, body).await?;
    Ok(WRITE_ACK)
}
