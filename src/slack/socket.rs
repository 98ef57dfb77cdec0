//! Socket Mode connection handler for Slack.
//!
//! Uses slack-morphism's socket mode listener to receive events via WebSocket
//! and forwards message events to the relay loop over a channel.

use std::sync::Arc;

use slack_morphism::hyper_tokio::SlackHyperClient;
use slack_morphism::prelude::{
    HttpStatusCode, SlackApiToken, SlackApiTokenValue, SlackClientEventsListenerEnvironment,
    SlackClientEventsUserState, SlackClientSocketModeConfig, SlackClientSocketModeListener,
    SlackEventCallbackBody, SlackPushEventCallback, SlackSocketModeListenerCallbacks,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info};

use super::events::to_message_event;
use crate::core::models::MessageEvent;
use crate::errors::RelayError;

/// Shared state for socket mode callbacks.
#[derive(Clone)]
struct ForwarderState {
    events: UnboundedSender<MessageEvent>,
}

/// Connect to Socket Mode and forward message events until Ctrl-C.
///
/// The sender is dropped when this returns, which ends the relay loop once it
/// has drained what was already delivered.
///
/// # Errors
///
/// Returns `RelayError::Api` if the connection cannot be opened.
pub async fn run_socket_mode(
    client: Arc<SlackHyperClient>,
    app_token: &str,
    events: UnboundedSender<MessageEvent>,
) -> Result<(), RelayError> {
    let callbacks = SlackSocketModeListenerCallbacks::new().with_push_events(handle_push_events);

    let listener_env = Arc::new(
        SlackClientEventsListenerEnvironment::new(client)
            .with_error_handler(handle_listener_error)
            .with_user_state(ForwarderState { events }),
    );

    let socket_listener = SlackClientSocketModeListener::new(
        &SlackClientSocketModeConfig::new(),
        listener_env,
        callbacks,
    );

    let app_token = SlackApiToken::new(SlackApiTokenValue::new(app_token.to_string()));
    socket_listener
        .listen_for(&app_token)
        .await
        .map_err(|e| RelayError::Api(format!("Socket Mode connection failed: {e}")))?;

    info!("Listening for Slack events");
    socket_listener.serve().await;
    info!("Socket Mode listener stopped");

    Ok(())
}

/// Handle push events (messages, etc.)
async fn handle_push_events(
    event: SlackPushEventCallback,
    _client: Arc<SlackHyperClient>,
    states: SlackClientEventsUserState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let SlackEventCallbackBody::Message(message) = &event.event else {
        debug!("Ignoring event callback type");
        return Ok(());
    };

    let Some(relay_event) = to_message_event(message) else {
        debug!("Ignoring message event without relayable content");
        return Ok(());
    };

    let guard = states.read().await;
    let state = guard
        .get_user_state::<ForwarderState>()
        .ok_or("missing socket mode state")?;

    state
        .events
        .send(relay_event)
        .map_err(|_| "relay event loop has stopped")?;

    Ok(())
}

fn handle_listener_error(
    err: Box<dyn std::error::Error + Send + Sync>,
    _client: Arc<SlackHyperClient>,
    _states: SlackClientEventsUserState,
) -> HttpStatusCode {
    error!("Socket Mode error: {}", err);
    // Ack anyway so Slack does not redeliver the same envelope.
    HttpStatusCode::OK
}
