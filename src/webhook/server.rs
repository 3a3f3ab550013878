use crate::domain::trigger::{Decision, TriggerFilterConfig, WebhookResponse};
use crate::webhook::filter::filter;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc::Sender;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
struct WebhookState {
    config: Arc<TriggerFilterConfig>,
    tx: Sender<Value>,
}

/// Builds the receiver: `POST {path}` filters the event and forwards it on `tx`.
pub fn router(path: &str, config: Arc<TriggerFilterConfig>, tx: Sender<Value>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(path, post(receive))
        .layer(TraceLayer::new_for_http())
        .with_state(WebhookState { config, tx })
}

pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    info!("🪝 Listening for webhook events on {}", listener.local_addr()?);
    axum::serve(listener, router).await
}

async fn health_check() -> &'static str {
    "OK"
}

#[instrument(skip_all)]
async fn receive(State(state): State<WebhookState>, body: Bytes) -> Json<WebhookResponse> {
    let body = serde_json::from_slice::<Value>(&body).ok();
    let decision = filter(body.as_ref(), &state.config);
    let response = WebhookResponse::from(&decision);

    match decision {
        Decision::Forward(event) => {
            debug!("Forwarding webhook event");
            if let Err(e) = state.tx.send(event).await {
                warn!("⚠️ Unable to forward the webhook event, no listener: {}", e);
            }
        }
        Decision::Skipped => debug!("Skipped webhook event"),
        Decision::Error(message) => warn!("⚠️ Rejected webhook call: {}", message),
    }

    Json(response)
}
