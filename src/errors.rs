use slack_morphism::errors::SlackClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to resolve Slack directory: {0}")]
    Directory(String),

    #[error("Failed to access dedup store: {0}")]
    Storage(String),

    #[error("Failed to deliver message: {0}")]
    Delivery(String),

    #[error("Failed to access Slack API: {0}")]
    Api(String),
}

impl From<SlackClientError> for RelayError {
    fn from(error: SlackClientError) -> Self {
        RelayError::Api(error.to_string())
    }
}

impl From<sqlx::Error> for RelayError {
    fn from(error: sqlx::Error) -> Self {
        RelayError::Storage(error.to_string())
    }
}

impl From<std::io::Error> for RelayError {
    fn from(error: std::io::Error) -> Self {
        RelayError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::Config(format!("malformed rules file: {error}"))
    }
}

impl From<regex::Error> for RelayError {
    fn from(error: regex::Error) -> Self {
        RelayError::Config(format!("invalid URL pattern: {error}"))
    }
}

impl From<anyhow::Error> for RelayError {
    fn from(error: anyhow::Error) -> Self {
        RelayError::Api(error.to_string())
    }
}
