use crate::maker::error::MakerError;
use crate::maker::maker_url::MakerUrl;
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use serde_json::Value;
use tracing::{instrument, trace, warn};

pub fn new_client() -> Result<Client, MakerError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

/// Anything able to issue a GET against the Maker API and hand back the JSON body.
#[async_trait]
pub trait HubClient: Send + Sync {
    async fn get_json(&self, url: &MakerUrl) -> Result<Value, MakerError>;
}

#[async_trait]
impl HubClient for Client {
    #[instrument(skip_all, fields(url = %url))]
    async fn get_json(&self, url: &MakerUrl) -> Result<Value, MakerError> {
        // reqwest errors embed the request url, which carries the access token
        let response = self.get(url.to_request_url()).send().await.map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status_code = %status, "⚠️ Request to the hub failed. Response: {:?}", body);
            return Err(MakerError::Http { status, body });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        trace!(status_code = %status, "Hub response: {}", body);
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credential::HubCredential;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn new_client_asks_for_json() -> Result<(), MakerError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", Matcher::Regex(r"^/apps/api/12345/devices/all".to_string()))
            .match_header("accept", "application/json")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = new_client()?;
        let credential = HubCredential::new(server.url(), "12345", "token");
        client.get_json(&MakerUrl::all_devices(&credential)).await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn get_json_sends_the_access_token_and_parses_the_body() -> Result<(), MakerError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", Matcher::Regex(r"^/apps/api/12345/devices/1".to_string()))
            .match_query(Matcher::UrlEncoded("access_token".to_string(), "token".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "id": "1", "name": "Living Room Light" }"#)
            .create_async()
            .await;

        let credential = HubCredential::new(server.url(), "12345", "token");
        let body = Client::new().get_json(&MakerUrl::device(&credential, "1")).await?;

        mock.assert_async().await;
        assert_eq!(body, json!({ "id": "1", "name": "Living Room Light" }));
        Ok(())
    }

    #[tokio::test]
    async fn get_json_fails_on_a_non_success_status() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", Matcher::Any)
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let credential = HubCredential::new(server.url(), "12345", "token");
        let result = Client::new().get_json(&MakerUrl::all_devices(&credential)).await;

        match result {
            Err(MakerError::Http { status, body }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "Internal Server Error");
            }
            other => panic!("expected an HTTP error, found {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_json_fails_on_a_body_that_is_not_json() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server.mock("GET", Matcher::Any).with_status(200).with_body("<html></html>").create_async().await;

        let credential = HubCredential::new(server.url(), "12345", "token");
        let result = Client::new().get_json(&MakerUrl::all_devices(&credential)).await;

        assert!(matches!(result, Err(MakerError::Parse(_))), "expected a parse error, found {:?}", result);
    }

    #[tokio::test]
    async fn network_errors_do_not_leak_the_access_token() {
        let credential = HubCredential::new("http://127.0.0.1:1", "12345", "secret-token");
        let result = Client::new().get_json(&MakerUrl::all_devices(&credential)).await;

        match result {
            Err(error @ MakerError::Network(_)) => assert!(!error.to_string().contains("secret-token"), "token leaked in {}", error),
            other => panic!("expected a network error, found {:?}", other),
        }
    }
}
