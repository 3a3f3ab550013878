use serde::Deserialize;
use serde_json::Value;

// Maker API: GET /devices/all
#[derive(Debug, Deserialize)]
pub struct DeviceSummary {
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub r#type: Option<String>,
}

impl DeviceSummary {
    /// The hub returns numeric ids on some endpoints and strings on others.
    pub fn id_string(&self) -> String {
        display_value(&self.id)
    }

    pub fn display_name(&self) -> String {
        [&self.label, &self.name]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("Device {}", self.id_string()))
    }

    pub fn matches(&self, lower_case_query: &str) -> bool {
        [&self.name, &self.label]
            .into_iter()
            .flatten()
            .any(|name| name.to_lowercase().contains(lower_case_query))
    }
}

// Maker API: GET /devices/{id}, entries of its `attributes` field
#[derive(PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub current_value: Value,
    #[serde(default)]
    pub data_type: Option<String>,
}

// Maker API: GET /devices/{id}/commands
#[derive(PartialEq, Debug, Deserialize)]
pub struct DeviceCommand {
    pub command: String,
    #[serde(default)]
    pub parameters: Option<Vec<Value>>,
}

pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
