use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    #[default]
    AllEvents,
    DeviceEvent,
    ModeEvent,
    LocationEvent,
    Custom,
}

#[derive(Clone, Default, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerFilterConfig {
    #[serde(default, alias = "event_type")]
    pub event_type: EventType,
    #[serde(default, alias = "custom_event_type")]
    pub custom_event_type: Option<String>,
    #[serde(default, alias = "filter_by_device")]
    pub filter_by_device: bool,
    #[serde(default, alias = "device_ids")]
    pub device_ids: Vec<String>,
}

impl TriggerFilterConfig {
    pub fn new(event_type: EventType) -> Self {
        TriggerFilterConfig {
            event_type,
            ..Default::default()
        }
    }

    pub fn custom(custom_event_type: impl Into<String>) -> Self {
        TriggerFilterConfig {
            event_type: EventType::Custom,
            custom_event_type: Some(custom_event_type.into()),
            ..Default::default()
        }
    }

    pub fn with_devices<I, S>(mut self, device_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_by_device = true;
        self.device_ids = device_ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Outcome of filtering one inbound webhook body.
#[derive(Clone, PartialEq, Debug)]
pub enum Decision {
    Error(String),
    Skipped,
    Forward(Value),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookStatus {
    Success,
    Skipped,
    Error,
}

/// Body returned to the hub for every webhook call.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct WebhookResponse {
    pub status: WebhookStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&Decision> for WebhookResponse {
    fn from(decision: &Decision) -> Self {
        match decision {
            Decision::Error(message) => WebhookResponse {
                status: WebhookStatus::Error,
                message: Some(message.clone()),
            },
            Decision::Skipped => WebhookResponse {
                status: WebhookStatus::Skipped,
                message: None,
            },
            Decision::Forward(_) => WebhookResponse {
                status: WebhookStatus::Success,
                message: None,
            },
        }
    }
}
