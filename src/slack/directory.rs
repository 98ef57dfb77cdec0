use tracing::info;

use super::client::SlackClient;
use crate::core::directory::Directory;
use crate::errors::RelayError;

/// Take the startup snapshot of users and channels.
///
/// # Errors
///
/// Returns `RelayError::Directory` if either listing cannot be completed.
pub async fn resolve_directory(client: &SlackClient) -> Result<Directory, RelayError> {
    let users = client
        .list_users()
        .await
        .map_err(|e| RelayError::Directory(format!("Can't get list of users: {e}")))?;
    let channels = client
        .list_channels()
        .await
        .map_err(|e| RelayError::Directory(format!("Can't get list of channels: {e}")))?;

    let directory = Directory::new(users, channels);
    info!(
        users = directory.user_count(),
        channels = directory.channel_count(),
        "Resolved Slack directory"
    );
    Ok(directory)
}
