use serde_json::Value;
use tokio::sync::mpsc::Receiver;
use tracing::{info, instrument};

/// Logs every forwarded event until the channel closes, returning how many were received.
#[instrument(skip_all)]
pub async fn event_listener(mut rx: Receiver<Value>) -> usize {
    let mut received = 0;
    while let Some(event) = rx.recv().await {
        received += 1;
        info!(
            source = %field(&event, "source"),
            device_id = %field(&event, "deviceId"),
            "🔹 Received {} = {}",
            field(&event, "name"),
            field(&event, "value")
        );
    }
    info!("Webhook event channel closed after {} event(s)", received);
    received
}

fn field(event: &Value, key: &str) -> String {
    match event.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::sync::mpsc;

    #[test]
    fn renders_missing_fields_as_a_dash() {
        let event = json!({ "source": "DEVICE", "deviceId": 4, "unit": null });

        assert_eq!(field(&event, "source"), "DEVICE");
        assert_eq!(field(&event, "deviceId"), "4");
        assert_eq!(field(&event, "unit"), "-");
        assert_eq!(field(&event, "name"), "-");
    }

    #[tokio::test]
    async fn drains_every_event_before_the_channel_closes() {
        let (tx, rx) = mpsc::channel(2);
        tx.send(json!({ "source": "MODE", "value": "Night" })).await.unwrap();
        tx.send(json!({ "source": "DEVICE", "deviceId": 1, "name": "switch", "value": "on" })).await.unwrap();
        drop(tx);

        assert_eq!(event_listener(rx).await, 2);
    }

    #[tokio::test]
    async fn receives_events_forwarded_by_the_webhook_receiver() {
        use crate::domain::TriggerFilterConfig;
        use crate::webhook::router;
        use axum::body::Body;
        use axum::http::Request;
        use std::sync::Arc;
        use tower::ServiceExt;

        let (tx, rx) = mpsc::channel(2);
        let listener = tokio::spawn(event_listener(rx));
        let app = router("/webhook", Arc::new(TriggerFilterConfig::default()), tx);

        let request = Request::builder()
            .method("POST")
            .uri("/webhook")
            .body(Body::from(r#"{ "source": "DEVICE", "deviceId": 3, "name": "temperature", "value": "21" }"#))
            .unwrap();
        app.oneshot(request).await.unwrap();

        assert_eq!(listener.await.unwrap(), 1);
    }
}
