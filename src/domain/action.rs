use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    #[default]
    Device,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    #[default]
    GetAll,
    Get,
    GetAttribute,
    SendCommand,
}

/// Parameters of a single action item as resolved by the host, before validation.
#[derive(Clone, Default, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    #[serde(default)]
    pub resource: Resource,
    #[serde(default)]
    pub operation: Operation,
    pub device_id: Option<String>,
    pub attribute: Option<String>,
    pub command: Option<String>,
    #[serde(alias = "argumentsText")]
    pub arguments: Option<String>,
}

impl ActionRequest {
    pub fn get_all() -> Self {
        ActionRequest::default()
    }

    pub fn get(device_id: impl Into<String>) -> Self {
        ActionRequest {
            operation: Operation::Get,
            device_id: Some(device_id.into()),
            ..Default::default()
        }
    }

    pub fn get_attribute(device_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        ActionRequest {
            operation: Operation::GetAttribute,
            device_id: Some(device_id.into()),
            attribute: Some(attribute.into()),
            ..Default::default()
        }
    }

    pub fn send_command(device_id: impl Into<String>, command: impl Into<String>, arguments: Option<&str>) -> Self {
        ActionRequest {
            operation: Operation::SendCommand,
            device_id: Some(device_id.into()),
            command: Some(command.into()),
            arguments: arguments.map(str::to_owned),
            ..Default::default()
        }
    }
}

/// A validated action, one variant per Maker API call.
#[derive(Clone, PartialEq, Debug)]
pub enum DeviceAction {
    GetAll,
    Get { device_id: String },
    GetAttribute { device_id: String, attribute: String },
    SendCommand { device_id: String, command: String, arguments: Vec<String> },
}

impl TryFrom<&ActionRequest> for DeviceAction {
    type Error = InvalidAction;

    fn try_from(request: &ActionRequest) -> Result<Self, Self::Error> {
        match request.operation {
            Operation::GetAll => Ok(DeviceAction::GetAll),
            Operation::Get => Ok(DeviceAction::Get {
                device_id: required(&request.device_id, "deviceId")?,
            }),
            Operation::GetAttribute => Ok(DeviceAction::GetAttribute {
                device_id: required(&request.device_id, "deviceId")?,
                attribute: required(&request.attribute, "attribute")?,
            }),
            Operation::SendCommand => Ok(DeviceAction::SendCommand {
                device_id: required(&request.device_id, "deviceId")?,
                command: required(&request.command, "command")?,
                arguments: split_arguments(request.arguments.as_deref().unwrap_or_default()),
            }),
        }
    }
}

fn required(value: &Option<String>, name: &'static str) -> Result<String, InvalidAction> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(InvalidAction::MissingParameter(name)),
    }
}

/// Splits `level=100, color=green` into trimmed entries, keeping their order.
pub fn split_arguments(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(|argument| argument.trim().to_owned()).collect()
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidAction {
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),
}

/// Output record of one processed action item.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub json: Value,
    pub paired_item: usize,
}

impl ActionResult {
    pub fn success(json: Value, item: usize) -> Self {
        ActionResult { json, paired_item: item }
    }

    pub fn failure(message: impl Into<String>, item: usize) -> Self {
        ActionResult {
            json: serde_json::json!({ "error": message.into() }),
            paired_item: item,
        }
    }
}
