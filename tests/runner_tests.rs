use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jobrelay::core::directory::{Directory, RelayContext};
use jobrelay::core::models::MessageEvent;
use jobrelay::core::rules::RuleSet;
use jobrelay::errors::RelayError;
use jobrelay::relay::{ChatOutbound, RelayCoordinator, RunSummary, run_event_loop};
use jobrelay::store::SqliteDedupStore;
use tokio::sync::mpsc;

#[derive(Default)]
struct CountingOutbound {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl ChatOutbound for CountingOutbound {
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), RelayError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("post {channel_id} {text}"));
        Ok(())
    }

    async fn delete_message(&self, channel_id: &str, ts: &str) -> Result<(), RelayError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("delete {channel_id} {ts}"));
        if ts == "bad" {
            return Err(RelayError::Delivery("message_not_found".to_string()));
        }
        Ok(())
    }
}

fn event(channel: &str, user: &str, text: &str, ts: &str) -> MessageEvent {
    MessageEvent {
        channel_id: channel.to_string(),
        user_id: Some(user.to_string()),
        text: text.to_string(),
        has_attachments: false,
        sub_text: None,
        ts: ts.to_string(),
    }
}

#[tokio::test]
async fn test_loop_processes_events_in_order_and_survives_errors() {
    let outbound = Arc::new(CountingOutbound::default());
    let coordinator = RelayCoordinator::new(
        RelayContext {
            source_channel_id: "111".to_string(),
            destination_channel_id: "222".to_string(),
            agent_user_id: "UBOT".to_string(),
        },
        RuleSet::default(),
        Directory::new(HashMap::new(), HashMap::new()),
        outbound.clone(),
        Arc::new(SqliteDedupStore::in_memory().await.unwrap()),
    );

    let (sender, receiver) = mpsc::unbounded_channel();
    let posting = "hiring QA engineer http://hh.ru/job123";
    sender.send(event("111", "U1", posting, "1.1")).unwrap();
    sender.send(event("222", "UBOT", posting, "1.2")).unwrap();
    sender.send(event("222", "U2", "hello?", "bad")).unwrap();
    sender.send(event("111", "U3", posting, "1.4")).unwrap();
    sender.send(event("222", "U2", "second try", "1.5")).unwrap();
    drop(sender);

    let summary = run_event_loop(&coordinator, receiver).await;

    assert_eq!(
        summary,
        RunSummary {
            received: 5,
            reposted: 1,
            deleted: 1,
            rejected: 7,
            failed: 1,
        }
    );
    assert_eq!(
        *outbound.calls.lock().unwrap(),
        vec![
            format!("post 222 {posting}"),
            "delete 222 bad".to_string(),
            "delete 222 1.5".to_string(),
        ]
    );
}
