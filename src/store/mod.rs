//! Persistent record of texts that were already relayed

pub mod sqlite;

use async_trait::async_trait;

use crate::errors::RelayError;

pub use sqlite::SqliteDedupStore;

/// Set of relayed texts. A key that is present must never be relayed again.
#[async_trait]
pub trait DedupStore: Send + Sync {
    /// Point lookup; absence means the text was never relayed.
    async fn seen(&self, key: &str) -> Result<bool, RelayError>;

    /// Upsert `key`. Recording the same key twice is harmless.
    async fn record(&self, key: &str) -> Result<(), RelayError>;
}
