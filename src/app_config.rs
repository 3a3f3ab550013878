use crate::domain::{HubCredential, TriggerFilterConfig};
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    hub: HubCredential,
    webhook: Webhook,
    #[serde(default)]
    trigger: TriggerFilterConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("MAKER").prefix_separator("_").separator("__"))
            .build()?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let app_config: AppConfig = config.try_deserialize()?;
        if app_config.core.event_buffer_size == 0 {
            return Err(ConfigError::Message("core.event_buffer_size must be at least 1".to_string()));
        }
        Ok(app_config)
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn hub(&self) -> &HubCredential {
        &self.hub
    }

    pub fn webhook(&self) -> &Webhook {
        &self.webhook
    }

    pub fn trigger(&self) -> &TriggerFilterConfig {
        &self.trigger
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
    #[serde(default = "default_discover_devices")]
    discover_devices: bool,
}

fn default_discover_devices() -> bool {
    true
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }

    pub fn discover_devices(&self) -> bool {
        self.discover_devices
    }
}

#[derive(Debug, Deserialize)]
pub struct Webhook {
    bind_address: String,
    path: String,
}

impl Webhook {
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    event_buffer_size: 1,
                    discover_devices: false,
                },
                hub: HubCredential::new("http://hub.url", "1", "token"),
                webhook: Webhook {
                    bind_address: "127.0.0.1:0".to_string(),
                    path: "/webhook".to_string(),
                },
                trigger: TriggerFilterConfig::default(),
            },
        }
    }

    pub fn hub_url(mut self, url: String) -> Self {
        self.config.hub = HubCredential::new(url, self.config.hub.app_id(), self.config.hub.access_token());
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
