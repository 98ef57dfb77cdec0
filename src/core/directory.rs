use std::collections::HashMap;

use super::config::AppConfig;
use crate::errors::RelayError;

/// Snapshot of workspace users and channels taken at startup.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: HashMap<String, String>,
    channels: HashMap<String, String>,
}

impl Directory {
    #[must_use]
    pub fn new(users: HashMap<String, String>, channels: HashMap<String, String>) -> Self {
        Self { users, channels }
    }

    /// Display name for a user id.
    #[must_use]
    pub fn display_name(&self, user_id: &str) -> Option<&str> {
        self.users.get(user_id).map(String::as_str)
    }

    #[must_use]
    pub fn channel_id(&self, channel_name: &str) -> Option<&str> {
        self.channels.get(channel_name).map(String::as_str)
    }

    #[must_use]
    pub fn user_id(&self, display_name: &str) -> Option<&str> {
        self.users
            .iter()
            .find(|(_, name)| name.as_str() == display_name)
            .map(|(id, _)| id.as_str())
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

/// Ids the coordinator compares events against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayContext {
    pub source_channel_id: String,
    pub destination_channel_id: String,
    pub agent_user_id: String,
}

impl RelayContext {
    /// # Errors
    ///
    /// Returns `RelayError::Directory` if a configured channel or user is unknown.
    pub fn resolve(config: &AppConfig, directory: &Directory) -> Result<Self, RelayError> {
        let channel = |name: &str| {
            directory
                .channel_id(name)
                .map(ToString::to_string)
                .ok_or_else(|| RelayError::Directory(format!("channel '{name}' not found")))
        };

        let agent_user_id = directory
            .user_id(&config.agent_user)
            .map(ToString::to_string)
            .ok_or_else(|| {
                RelayError::Directory(format!("user '{}' not found", config.agent_user))
            })?;

        Ok(Self {
            source_channel_id: channel(&config.source_channel)?,
            destination_channel_id: channel(&config.destination_channel)?,
            agent_user_id,
        })
    }
}
