//! Translation of Slack message events into relay events

use slack_morphism::prelude::{SlackMessageContent, SlackMessageEvent, SlackMessageEventType};

use crate::core::models::MessageEvent;

fn carries_attachments(content: &SlackMessageContent) -> bool {
    content.attachments.as_ref().is_some_and(|a| !a.is_empty())
        || content.files.as_ref().is_some_and(|f| !f.is_empty())
}

/// Convert a Slack `message` event.
///
/// Returns `None` for events without a channel and for `message_deleted`
/// notifications, which leave nothing to relay or delete. Edits carry the new
/// text in a nested message; it becomes the sub-message text, and its author
/// stands in when the outer event has none.
///
/// The timestamp is always the outer event's. For an edit that is the
/// `message_changed` event's own `ts`, not the edited message's, so deleting an
/// edited message through it fails with `message_not_found` and is logged as a
/// failed delete.
#[must_use]
pub fn to_message_event(event: &SlackMessageEvent) -> Option<MessageEvent> {
    if matches!(event.subtype, Some(SlackMessageEventType::MessageDeleted)) {
        return None;
    }

    let channel_id = event.origin.channel.as_ref()?.0.clone();
    let content = event.content.as_ref();
    let nested = event.message.as_ref();

    let user_id = event
        .sender
        .user
        .as_ref()
        .or_else(|| nested.and_then(|m| m.sender.user.as_ref()))
        .map(|u| u.0.clone());

    Some(MessageEvent {
        channel_id,
        user_id,
        text: content.and_then(|c| c.text.clone()).unwrap_or_default(),
        has_attachments: content.is_some_and(carries_attachments),
        sub_text: nested
            .and_then(|m| m.content.as_ref())
            .and_then(|c| c.text.clone()),
        ts: event.origin.ts.0.clone(),
    })
}
