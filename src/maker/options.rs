use crate::domain::credential::HubCredential;
use crate::maker::client::HubClient;
use crate::maker::device_get::{Attribute, DeviceCommand, DeviceSummary, display_value};
use crate::maker::error::MakerError;
use crate::maker::maker_url::MakerUrl;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

/// An entry of a selection list: `name` is shown, `value` is stored.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SelectOption {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SelectOption {
    pub fn select_device_first() -> Self {
        SelectOption {
            name: "Please select a device first".to_string(),
            value: String::new(),
            description: None,
        }
    }
}

impl From<DeviceSummary> for SelectOption {
    fn from(device: DeviceSummary) -> Self {
        SelectOption {
            name: device.display_name(),
            value: device.id_string(),
            description: device.r#type.map(|device_type| format!("Type: {}", device_type)),
        }
    }
}

impl From<Attribute> for SelectOption {
    fn from(attribute: Attribute) -> Self {
        let data_type = attribute.data_type.map(|data_type| format!(" ({})", data_type)).unwrap_or_default();
        SelectOption {
            description: Some(format!("Current value: {}{}", display_value(&attribute.current_value), data_type)),
            value: attribute.name.clone(),
            name: attribute.name,
        }
    }
}

impl From<DeviceCommand> for SelectOption {
    fn from(command: DeviceCommand) -> Self {
        let description = match command.parameters {
            Some(parameters) if !parameters.is_empty() => {
                format!("Parameters: {}", parameters.iter().map(display_value).collect::<Vec<_>>().join(", "))
            }
            _ => "No parameters".to_string(),
        };
        SelectOption {
            value: command.command.clone(),
            name: command.command,
            description: Some(description),
        }
    }
}

#[instrument(skip(client, credential))]
pub async fn devices<C: HubClient + ?Sized>(client: &C, credential: &HubCredential) -> Result<Vec<DeviceSummary>, MakerError> {
    info!("Retrieving hub devices...");
    let body = client.get_json(&MakerUrl::all_devices(credential)).await?;
    let devices: Vec<DeviceSummary> = from_array(body, "Invalid response format from the Maker API, expected a list of devices")?;
    info!("Retrieving hub devices... OK, {} found", devices.len());
    Ok(devices)
}

/// Lists devices, keeping those whose name or label contains `query` (case-insensitive).
pub async fn list_devices<C: HubClient + ?Sized>(client: &C, credential: &HubCredential, query: Option<&str>) -> Result<Vec<SelectOption>, MakerError> {
    let mut devices = devices(client, credential).await?;

    if let Some(query) = query.filter(|query| !query.is_empty()) {
        let lower_case_query = query.to_lowercase();
        devices.retain(|device| device.matches(&lower_case_query));
    }

    Ok(devices.into_iter().map(SelectOption::from).collect())
}

#[instrument(skip(client, credential))]
pub async fn attributes<C: HubClient + ?Sized>(client: &C, credential: &HubCredential, device_id: &str) -> Result<Vec<Attribute>, MakerError> {
    let mut body = client.get_json(&MakerUrl::device(credential, device_id)).await?;
    match body.get_mut("attributes").map(Value::take) {
        Some(attributes) if !attributes.is_null() => Ok(serde_json::from_value(attributes)?),
        _ => Err(MakerError::NotFound("Device attributes not found in the response".to_string())),
    }
}

pub async fn list_attributes<C: HubClient + ?Sized>(client: &C, credential: &HubCredential, device_id: Option<&str>) -> Result<Vec<SelectOption>, MakerError> {
    let Some(device_id) = device_id.filter(|id| !id.is_empty()) else {
        return Ok(vec![SelectOption::select_device_first()]);
    };

    let attributes = attributes(client, credential, device_id).await?;
    Ok(attributes.into_iter().map(SelectOption::from).collect())
}

#[instrument(skip(client, credential))]
pub async fn commands<C: HubClient + ?Sized>(client: &C, credential: &HubCredential, device_id: &str) -> Result<Vec<DeviceCommand>, MakerError> {
    let body = client.get_json(&MakerUrl::device_commands(credential, device_id)).await?;
    from_array(body, "Invalid response format from the Maker API, expected a list of commands")
}

pub async fn list_commands<C: HubClient + ?Sized>(client: &C, credential: &HubCredential, device_id: Option<&str>) -> Result<Vec<SelectOption>, MakerError> {
    let Some(device_id) = device_id.filter(|id| !id.is_empty()) else {
        return Ok(vec![SelectOption::select_device_first()]);
    };

    let commands = commands(client, credential, device_id).await?;
    Ok(commands.into_iter().map(SelectOption::from).collect())
}

fn from_array<T: serde::de::DeserializeOwned>(body: Value, message: &str) -> Result<Vec<T>, MakerError> {
    if !body.is_array() {
        return Err(MakerError::InvalidResponse(message.to_string()));
    }
    Ok(serde_json::from_value(body)?)
}
