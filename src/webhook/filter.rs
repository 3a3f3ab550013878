use crate::domain::trigger::{Decision, EventType, TriggerFilterConfig};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

pub const INVALID_WEBHOOK_DATA: &str = "Invalid webhook data received";

pub fn filter(body: Option<&Value>, config: &TriggerFilterConfig) -> Decision {
    filter_at(body, config, Utc::now())
}

/// Decides whether an inbound event is forwarded, stamping it with `received_at` when it is.
pub fn filter_at(body: Option<&Value>, config: &TriggerFilterConfig, received_at: DateTime<Utc>) -> Decision {
    let Some(Value::Object(event)) = body else {
        return Decision::Error(INVALID_WEBHOOK_DATA.to_string());
    };

    if config.event_type != EventType::AllEvents {
        if let Some(source) = present(event.get("source")) {
            let expected = match config.event_type {
                EventType::DeviceEvent => Some("DEVICE"),
                EventType::ModeEvent => Some("MODE"),
                EventType::LocationEvent => Some("LOCATION"),
                EventType::Custom => Some(config.custom_event_type.as_deref().unwrap_or_default()),
                EventType::AllEvents => None,
            };
            if expected.is_some_and(|expected| source.as_str() != Some(expected)) {
                return Decision::Skipped;
            }
        }
    }

    if matches!(config.event_type, EventType::DeviceEvent | EventType::AllEvents) && config.filter_by_device {
        if let Some(device_id) = present(event.get("deviceId")) {
            let device_id = as_string(device_id);
            if !config.device_ids.iter().any(|id| *id == device_id) {
                return Decision::Skipped;
            }
        }
    }

    let mut event = event.clone();
    event.insert(
        "webhookTime".to_string(),
        Value::String(received_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    Decision::Forward(Value::Object(event))
}

/// A field counts as present when it holds something other than null or an empty string.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null() && value.as_str() != Some(""))
}

fn as_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
