use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info};

use super::coordinator::RelayCoordinator;
use crate::core::models::{DeleteDecision, MessageEvent, RepostDecision};

/// Tally of what the loop did, returned when the event stream ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub received: usize,
    pub reposted: usize,
    pub deleted: usize,
    pub rejected: usize,
    pub failed: usize,
}

/// Consume events one at a time, in delivery order, until the sender side closes.
///
/// Errors are logged per event and never stop the loop.
pub async fn run_event_loop(
    coordinator: &RelayCoordinator,
    mut events: UnboundedReceiver<MessageEvent>,
) -> RunSummary {
    let mut summary = RunSummary::default();

    while let Some(event) = events.recv().await {
        summary.received += 1;
        debug!(channel = %event.channel_id, ts = %event.ts, "Event received");

        let (repost, delete) = coordinator.on_message(&event).await;

        match repost {
            Ok(RepostDecision::Reposted) => {
                summary.reposted += 1;
                info!(ts = %event.ts, "Reposted job posting");
            }
            Ok(decision) => {
                summary.rejected += 1;
                debug!(ts = %event.ts, outcome = decision.as_str(), "Repost skipped");
            }
            Err(e) => {
                summary.failed += 1;
                error!(ts = %event.ts, "Failed to repost message: {}", e);
            }
        }

        match delete {
            Ok(DeleteDecision::Deleted) => {
                summary.deleted += 1;
                info!(ts = %event.ts, "Deleted foreign message from destination channel");
            }
            Ok(decision) => {
                summary.rejected += 1;
                debug!(ts = %event.ts, outcome = decision.as_str(), "Delete skipped");
            }
            Err(e) => {
                summary.failed += 1;
                error!(ts = %event.ts, "Failed to delete message: {}", e);
            }
        }
    }

    info!(
        received = summary.received,
        reposted = summary.reposted,
        deleted = summary.deleted,
        "Event stream closed"
    );
    summary
}
