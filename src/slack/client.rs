//! Slack API client module
//!
//! Encapsulates the Slack Web API calls the relay makes. Directory reads are
//! retried; posting and deleting are single attempts.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::{
    SlackApiChatDeleteRequest, SlackApiChatPostMessageRequest, SlackApiConversationsListRequest,
    SlackApiConversationsListResponse, SlackApiUsersListRequest, SlackApiUsersListResponse,
    SlackConversationType, SlackCursorId,
};
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent, SlackTs};
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};
use tracing::debug;

use crate::errors::RelayError;
use crate::relay::ChatOutbound;

/// Page size for `users.list` and `conversations.list`.
const PAGE_LIMIT: u16 = 200;

// Slack signals the last page with a missing or empty cursor.
fn next_cursor(cursor: Option<SlackCursorId>) -> Option<SlackCursorId> {
    cursor.filter(|c| !c.0.is_empty())
}

/// Slack API client
pub struct SlackClient {
    client: Arc<SlackHyperClient>,
    token: SlackApiToken,
}

impl SlackClient {
    /// # Errors
    ///
    /// Returns `RelayError::Api` if the HTTP connector cannot be built.
    pub fn new(token: &str) -> Result<Self, RelayError> {
        let connector = SlackClientHyperConnector::new().map_err(|e| {
            RelayError::Api(format!("Failed to create Slack HTTP connector: {e}"))
        })?;
        Ok(Self {
            client: Arc::new(SlackHyperClient::new(connector)),
            token: SlackApiToken::new(SlackApiTokenValue::new(token.to_string())),
        })
    }

    /// Shared hyper client, also used by the Socket Mode listener.
    #[must_use]
    pub fn hyper_client(&self) -> Arc<SlackHyperClient> {
        Arc::clone(&self.client)
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, RelayError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, RelayError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

        Retry::spawn(strategy, operation).await
    }

    /// Id of the user the bot token belongs to.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Api` if `auth.test` still fails after retries.
    pub async fn bot_user_id(&self) -> Result<String, RelayError> {
        self.with_retry(|| async {
            let session = self.client.open_session(&self.token);
            let test_resp = session.auth_test().await?;
            Ok(test_resp.user_id.0)
        })
        .await
    }

    async fn users_page(
        &self,
        cursor: Option<SlackCursorId>,
    ) -> Result<SlackApiUsersListResponse, RelayError> {
        let session = self.client.open_session(&self.token);
        let mut request = SlackApiUsersListRequest::new().with_limit(PAGE_LIMIT);
        request.cursor = cursor;
        Ok(session.users_list(&request).await?)
    }

    async fn channels_page(
        &self,
        cursor: Option<SlackCursorId>,
    ) -> Result<SlackApiConversationsListResponse, RelayError> {
        let session = self.client.open_session(&self.token);
        let mut request = SlackApiConversationsListRequest::new()
            .with_limit(PAGE_LIMIT)
            .with_exclude_archived(true)
            .with_types(vec![
                SlackConversationType::Public,
                SlackConversationType::Private,
            ]);
        request.cursor = cursor;
        Ok(session.conversations_list(&request).await?)
    }

    /// All workspace users as id → user name.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Api` if a `users.list` page still fails after retries.
    pub async fn list_users(&self) -> Result<HashMap<String, String>, RelayError> {
        let mut users = HashMap::new();
        let mut cursor = None;

        loop {
            let page = self.with_retry(|| self.users_page(cursor.clone())).await?;
            for member in page.members {
                if let Some(name) = member.name {
                    users.insert(member.id.0, name);
                }
            }

            cursor = next_cursor(page.response_metadata.and_then(|m| m.next_cursor));
            if cursor.is_none() {
                break;
            }
            debug!("Fetching next page of users");
        }

        Ok(users)
    }

    /// All non-archived public and private channels as name → id.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Api` if a `conversations.list` page still fails after retries.
    pub async fn list_channels(&self) -> Result<HashMap<String, String>, RelayError> {
        let mut channels = HashMap::new();
        let mut cursor = None;

        loop {
            let page = self.with_retry(|| self.channels_page(cursor.clone())).await?;
            for channel in page.channels {
                if let Some(name) = channel.name {
                    channels.insert(name, channel.id.0);
                }
            }

            cursor = next_cursor(page.response_metadata.and_then(|m| m.next_cursor));
            if cursor.is_none() {
                break;
            }
            debug!("Fetching next page of channels");
        }

        Ok(channels)
    }
}

#[async_trait]
impl ChatOutbound for SlackClient {
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), RelayError> {
        let session = self.client.open_session(&self.token);

        let post_req = SlackApiChatPostMessageRequest::new(
            SlackChannelId(channel_id.to_string()),
            SlackMessageContent::new().with_text(text.to_string()),
        );

        session
            .chat_post_message(&post_req)
            .await
            .map_err(|e| RelayError::Delivery(format!("chat.postMessage: {e}")))?;

        Ok(())
    }

    async fn delete_message(&self, channel_id: &str, ts: &str) -> Result<(), RelayError> {
        let session = self.client.open_session(&self.token);

        let delete_req = SlackApiChatDeleteRequest::new(
            SlackChannelId(channel_id.to_string()),
            SlackTs(ts.to_string()),
        );

        session
            .chat_delete(&delete_req)
            .await
            .map_err(|e| RelayError::Delivery(format!("chat.delete: {e}")))?;

        Ok(())
    }
}
