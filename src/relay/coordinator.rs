use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::classifier::is_job_posting;
use super::normalizer::normalize;
use super::outbound::ChatOutbound;
use crate::core::directory::{Directory, RelayContext};
use crate::core::models::{DeleteDecision, MessageEvent, NotJobPostingCause, RepostDecision};
use crate::core::rules::RuleSet;
use crate::errors::RelayError;
use crate::store::DedupStore;

/// Drives the repost and delete transitions for inbound messages.
///
/// Holds no state of its own beyond the startup snapshot; relayed texts live in
/// the dedup store.
pub struct RelayCoordinator {
    context: RelayContext,
    rules: RuleSet,
    directory: Directory,
    outbound: Arc<dyn ChatOutbound>,
    store: Arc<dyn DedupStore>,
    // Serializes the seen/record pair so two identical texts cannot both pass.
    claim: Mutex<()>,
}

impl RelayCoordinator {
    #[must_use]
    pub fn new(
        context: RelayContext,
        rules: RuleSet,
        directory: Directory,
        outbound: Arc<dyn ChatOutbound>,
        store: Arc<dyn DedupStore>,
    ) -> Self {
        Self {
            context,
            rules,
            directory,
            outbound,
            store,
            claim: Mutex::new(()),
        }
    }

    /// Mirror a job posting from the source channel into the destination channel.
    ///
    /// The text is recorded before it is posted: a failed post leaves it marked
    /// as handled rather than risking a duplicate later.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Storage` if the dedup lookup fails and
    /// `RelayError::Delivery` if posting fails.
    pub async fn on_message_repost(
        &self,
        event: &MessageEvent,
    ) -> Result<RepostDecision, RelayError> {
        if event.channel_id != self.context.source_channel_id {
            return Ok(RepostDecision::WrongChannel);
        }
        if event.has_attachments {
            return Ok(RepostDecision::NotJobPosting(
                NotJobPostingCause::HasAttachment,
            ));
        }

        let text = event.working_text();
        if !is_job_posting(text, &self.rules) {
            return Ok(RepostDecision::NotJobPosting(NotJobPostingCause::Classified));
        }

        let normalized = normalize(text, &self.directory);

        {
            let _claim = self.claim.lock().await;
            if self.store.seen(&normalized).await? {
                return Ok(RepostDecision::AlreadyPosted);
            }
            if let Err(e) = self.store.record(&normalized).await {
                warn!(ts = %event.ts, "Failed to record reposted text: {}", e);
            }
        }

        debug!(ts = %event.ts, "Reposting message to {}", self.context.destination_channel_id);
        self.outbound
            .post_message(&self.context.destination_channel_id, &normalized)
            .await?;

        Ok(RepostDecision::Reposted)
    }

    /// Remove anything posted into the destination channel by someone other than the relay.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Delivery` if the delete call fails.
    pub async fn on_message_delete(
        &self,
        event: &MessageEvent,
    ) -> Result<DeleteDecision, RelayError> {
        if event.channel_id != self.context.destination_channel_id {
            return Ok(DeleteDecision::WrongChannel);
        }
        if event.user_id.as_deref() == Some(self.context.agent_user_id.as_str()) {
            return Ok(DeleteDecision::WrongUser);
        }

        self.outbound
            .delete_message(&self.context.destination_channel_id, &event.ts)
            .await?;

        Ok(DeleteDecision::Deleted)
    }

    /// Evaluate both transitions for one event.
    pub async fn on_message(
        &self,
        event: &MessageEvent,
    ) -> (
        Result<RepostDecision, RelayError>,
        Result<DeleteDecision, RelayError>,
    ) {
        let repost = self.on_message_repost(event).await;
        let delete = self.on_message_delete(event).await;
        (repost, delete)
    }
}
