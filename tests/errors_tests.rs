use std::error::Error;
use jobrelay::errors::RelayError;

#[test]
fn test_relay_error_implements_error_trait() {
    // Verify RelayError implements the Error trait
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = RelayError::Storage("disk full".to_string());
    assert_error(&error);
}

#[test]
fn test_relay_error_display() {
    let error = RelayError::Delivery("channel_not_found".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to deliver message: channel_not_found"
    );

    let error = RelayError::Storage("database is locked".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access dedup store: database is locked"
    );

    let error = RelayError::Directory("channel 'qa-jobs' not found".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to resolve Slack directory: channel 'qa-jobs' not found"
    );
}

#[test]
fn test_relay_error_from_conversions() {
    let err = anyhow::anyhow!("test error");
    let relay_err: RelayError = err.into();
    match relay_err {
        RelayError::Api(msg) => assert!(msg.contains("test error")),
        _ => panic!("Unexpected error type"),
    }

    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let relay_err: RelayError = err.into();
    assert!(matches!(relay_err, RelayError::Config(_)));

    let err = regex::Regex::new("(").unwrap_err();
    let relay_err: RelayError = err.into();
    assert!(matches!(relay_err, RelayError::Config(ref msg) if msg.contains("invalid URL pattern")));

    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "rules.json");
    let relay_err: RelayError = err.into();
    assert!(matches!(relay_err, RelayError::Config(_)));

    let relay_err: RelayError = sqlx::Error::RowNotFound.into();
    assert!(matches!(relay_err, RelayError::Storage(_)));
}
