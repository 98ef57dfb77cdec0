use std::path::PathBuf;

use clap::Parser;

use crate::errors::RelayError;

/// Command-line surface of the relay. Every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "jobrelay", about = "Mirror job postings from one Slack channel into another")]
pub struct Cli {
    /// Bot token for Slack Web API calls
    #[arg(long, env = "SLACK_BOT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// App-level token for the Socket Mode event stream
    #[arg(long, env = "SLACK_APP_TOKEN", hide_env_values = true)]
    pub app_token: String,

    /// Name of channel where to look for messages
    #[arg(long, env = "RELAY_FROM_CHANNEL")]
    pub from: String,

    /// Name of channel where to post messages
    #[arg(long, env = "RELAY_TO_CHANNEL")]
    pub to: String,

    /// User name of the relay itself
    #[arg(long, env = "RELAY_AGENT_USER")]
    pub user: String,

    /// Path of the dedup database
    #[arg(long, env = "RELAY_DB_PATH", default_value = "repost.db")]
    pub db: PathBuf,

    /// JSON file overriding the default classification rules
    #[arg(long, env = "RELAY_RULES_FILE")]
    pub rules: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, env = "RELAY_DEBUG")]
    pub debug: bool,

    /// Emit JSON log lines
    #[arg(long, env = "RELAY_LOG_JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub slack_app_token: String,
    pub source_channel: String,
    pub destination_channel: String,
    pub agent_user: String,
    pub db_path: PathBuf,
    pub rules_path: Option<PathBuf>,
    pub debug: bool,
    pub log_json: bool,
}

fn required(flag: &str, value: String) -> Result<String, RelayError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RelayError::Config(format!("--{flag} must not be empty")));
    }
    Ok(trimmed.to_string())
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `RelayError::Config` naming the first required flag that is blank.
    pub fn from_cli(cli: Cli) -> Result<Self, RelayError> {
        Ok(Self {
            slack_bot_token: required("token", cli.token)?,
            slack_app_token: required("app-token", cli.app_token)?,
            source_channel: required("from", cli.from)?,
            destination_channel: required("to", cli.to)?,
            agent_user: required("user", cli.user)?,
            db_path: cli.db,
            rules_path: cli.rules,
            debug: cli.debug,
            log_json: cli.log_json,
        })
    }
}
