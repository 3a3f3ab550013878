mod client;
mod device_get;
mod error;
mod maker_url;
mod options;
mod translator;

pub use client::{HubClient, new_client};
pub use device_get::{Attribute, DeviceCommand, DeviceSummary};
pub use error::MakerError;
pub use maker_url::MakerUrl;
pub use options::{SelectOption, attributes, commands, devices, list_attributes, list_commands, list_devices};
pub use translator::{execute, translate};
