use maker_bridge::app_config::AppConfig;
use maker_bridge::discovery::discover;
use maker_bridge::event_listener::event_listener;
use maker_bridge::{maker, webhook};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = maker::new_client()?;

    if config.core().discover_devices() {
        match discover(&client, &config).await {
            Ok(devices) => info!("✅  Discovered {} devices", devices.len()),
            Err(e) => warn!("⚠️ Unable to discover devices, is the hub reachable? {}", e),
        }
    }

    let (tx, rx) = mpsc::channel::<Value>(config.core().event_buffer_size());
    task::spawn(async move {
        event_listener(rx).await;
    });
    info!("✅  Initialized event listener");

    let router = webhook::router(config.webhook().path(), Arc::new(config.trigger().clone()), tx);
    let listener = TcpListener::bind(config.webhook().bind_address()).await?;

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    webhook::serve(listener, router).await?;

    Ok(())
}
