/// Jobrelay - A Slack agent that mirrors job postings from one channel into another.
///
/// The agent watches a source channel, classifies each message as a job posting
/// or not, and reposts qualifying messages once into a destination channel. It
/// also deletes anything posted into the destination channel by someone other
/// than itself.
///
/// # Architecture
///
/// The system uses:
/// - slack-morphism for Slack Web API calls and the Socket Mode event stream
/// - SQLite (via sqlx) as the dedup store of already relayed texts
/// - A single Tokio event loop that evaluates every message in delivery order
///
/// # Example
///
/// ```no_run
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// use jobrelay::core::directory::{Directory, RelayContext};
/// use jobrelay::core::models::{MessageEvent, RepostDecision};
/// use jobrelay::core::rules::RuleSet;
/// use jobrelay::relay::RelayCoordinator;
/// use jobrelay::slack::SlackClient;
/// use jobrelay::store::SqliteDedupStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     jobrelay::setup_logging(false, false);
///
///     let context = RelayContext {
///         source_channel_id: "C111".to_string(),
///         destination_channel_id: "C222".to_string(),
///         agent_user_id: "U00BOT001".to_string(),
///     };
///     let coordinator = RelayCoordinator::new(
///         context,
///         RuleSet::default(),
///         Directory::new(HashMap::new(), HashMap::new()),
///         Arc::new(SlackClient::new("xoxb-dummy")?),
///         Arc::new(SqliteDedupStore::in_memory().await?),
///     );
///
///     let event = MessageEvent {
///         channel_id: "C111".to_string(),
///         user_id: Some("U22KZA25S".to_string()),
///         text: "hiring QA engineer http://hh.ru/job123".to_string(),
///         has_attachments: false,
///         sub_text: None,
///         ts: "1700000000.000100".to_string(),
///     };
///
///     match coordinator.on_message_repost(&event).await? {
///         RepostDecision::Reposted => println!("Reposted"),
///         other => println!("Skipped: {}", other.as_str()),
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod relay;
pub mod slack;
pub mod store;

pub use errors::RelayError;

/// Configure structured logging.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` when
/// `debug` is true. With `json` the output is one JSON object per line.
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// jobrelay::setup_logging(false, false);
/// ```
pub fn setup_logging(debug: bool, json: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
