use jobrelay::slack::to_message_event;
use serde_json::json;
use slack_morphism::prelude::SlackMessageEvent;

fn parse(value: serde_json::Value) -> SlackMessageEvent {
    serde_json::from_value(value).expect("valid Slack message event")
}

#[test]
fn test_plain_message_event() {
    let event = parse(json!({
        "type": "message",
        "channel": "C111",
        "user": "U22KZA25S",
        "text": "hiring QA engineer <http://hh.ru/job123>",
        "ts": "1700000000.000100"
    }));

    let converted = to_message_event(&event).expect("message event");
    assert_eq!(converted.channel_id, "C111");
    assert_eq!(converted.user_id.as_deref(), Some("U22KZA25S"));
    assert_eq!(converted.text, "hiring QA engineer <http://hh.ru/job123>");
    assert_eq!(converted.ts, "1700000000.000100");
    assert!(!converted.has_attachments);
    assert!(converted.sub_text.is_none());
}

#[test]
fn test_attachments_are_flagged() {
    let event = parse(json!({
        "type": "message",
        "channel": "C111",
        "user": "U22KZA25S",
        "text": "http://hh.ru",
        "ts": "1700000000.000100",
        "attachments": [{ "text": "unfurled preview", "fallback": "preview" }]
    }));

    let converted = to_message_event(&event).expect("message event");
    assert!(converted.has_attachments);
}

#[test]
fn test_edited_message_carries_sub_text() {
    let event = parse(json!({
        "type": "message",
        "subtype": "message_changed",
        "channel": "C111",
        "ts": "1700000050.000300",
        "message": {
            "type": "message",
            "user": "U22KZA25S",
            "text": "updated: vacancy http://hh.ru/job124",
            "ts": "1700000000.000100"
        }
    }));

    let converted = to_message_event(&event).expect("message event");
    assert_eq!(
        converted.sub_text.as_deref(),
        Some("updated: vacancy http://hh.ru/job124")
    );
    assert_eq!(
        converted.working_text(),
        "updated: vacancy http://hh.ru/job124"
    );
    assert_eq!(converted.user_id.as_deref(), Some("U22KZA25S"));
    assert_eq!(converted.ts, "1700000050.000300");
}

#[test]
fn test_deleted_message_is_skipped() {
    let event = parse(json!({
        "type": "message",
        "subtype": "message_deleted",
        "channel": "C222",
        "ts": "1700000060.000400",
        "deleted_ts": "1700000000.000100"
    }));

    assert!(to_message_event(&event).is_none());
}
