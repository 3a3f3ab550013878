use crate::app_config::AppConfig;
use crate::maker::{DeviceSummary, HubClient, MakerError, devices};
use tracing::{info, instrument};

/// Lists the devices the Maker API exposes, logging one line per device.
#[instrument(skip_all, fields(hub = config.hub().host()))]
pub async fn discover<C: HubClient + ?Sized>(client: &C, config: &AppConfig) -> Result<Vec<DeviceSummary>, MakerError> {
    let devices = devices(client, config.hub()).await?;

    for device in &devices {
        info!(device_id = %device.id_string(), "🔎 Found '{}' ({})", device.display_name(), device.r#type.as_deref().unwrap_or("unknown type"));
    }

    Ok(devices)
}
