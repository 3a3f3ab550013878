use serde::Deserialize;
use std::fmt;

#[derive(Clone, PartialEq, Deserialize)]
pub struct HubCredential {
    #[serde(alias = "hubitatHost", alias = "url")]
    host: String,
    #[serde(alias = "appId")]
    app_id: String,
    #[serde(alias = "accessToken")]
    access_token: String,
}

impl HubCredential {
    pub fn new(host: impl Into<String>, app_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        HubCredential {
            host: host.into(),
            app_id: app_id.into(),
            access_token: access_token.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Root of every Maker API call, `{host}/apps/api/{appId}`.
    pub fn base_url(&self) -> String {
        format!("{}/apps/api/{}", self.host.trim_end_matches('/'), self.app_id)
    }
}

impl fmt::Debug for HubCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubCredential")
            .field("host", &self.host)
            .field("app_id", &self.app_id)
            .field("access_token", &"***")
            .finish()
    }
}
