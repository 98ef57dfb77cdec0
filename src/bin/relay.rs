use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use jobrelay::core::config::{AppConfig, Cli};
use jobrelay::core::directory::RelayContext;
use jobrelay::core::rules::RuleSet;
use jobrelay::relay::{RelayCoordinator, run_event_loop};
use jobrelay::slack::{SlackClient, resolve_directory, run_socket_mode};
use jobrelay::store::SqliteDedupStore;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_cli(Cli::parse())?;
    jobrelay::setup_logging(config.debug, config.log_json);

    let rules = match &config.rules_path {
        Some(path) => RuleSet::from_file(path)
            .with_context(|| format!("Can't load rules from {}", path.display()))?,
        None => RuleSet::default(),
    };

    let store = SqliteDedupStore::open(&config.db_path)
        .await
        .context("Can't open DB")?;

    let slack = Arc::new(SlackClient::new(&config.slack_bot_token)?);
    let directory = resolve_directory(&slack).await?;
    let context = RelayContext::resolve(&config, &directory)?;

    match slack.bot_user_id().await {
        Ok(id) if id != context.agent_user_id => warn!(
            "Bot token belongs to {}, but --user resolves to {}; own reposts will be deleted",
            id, context.agent_user_id
        ),
        Ok(_) => {}
        Err(e) => warn!("Can't verify bot identity: {}", e),
    }

    info!(
        from = %context.source_channel_id,
        to = %context.destination_channel_id,
        user = %context.agent_user_id,
        "Starting relay"
    );

    let hyper_client = slack.hyper_client();
    let coordinator = RelayCoordinator::new(context, rules, directory, slack, Arc::new(store));

    let (sender, receiver) = mpsc::unbounded_channel();
    let (listener, summary) = tokio::join!(
        run_socket_mode(hyper_client, &config.slack_app_token, sender),
        run_event_loop(&coordinator, receiver),
    );
    listener?;

    info!(
        reposted = summary.reposted,
        deleted = summary.deleted,
        failed = summary.failed,
        "Relay stopped"
    );
    Ok(())
}
