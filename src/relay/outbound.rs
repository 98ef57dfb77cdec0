use async_trait::async_trait;

use crate::errors::RelayError;

/// Outbound chat capability the coordinator needs. Implemented by the Slack
/// client in production and by recording fakes in tests.
#[async_trait]
pub trait ChatOutbound: Send + Sync {
    /// # Errors
    ///
    /// Returns `RelayError::Delivery` if the message could not be posted.
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), RelayError>;

    /// # Errors
    ///
    /// Returns `RelayError::Delivery` if the message could not be deleted.
    async fn delete_message(&self, channel_id: &str, ts: &str) -> Result<(), RelayError>;
}
