use crate::domain::action::DeviceAction;
use crate::domain::credential::HubCredential;
use std::fmt;

/// A Maker API request URL. `Display` prints it with the access token redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct MakerUrl {
    base: String,
    path: String,
    access_token: String,
    extra: Vec<String>,
}

impl MakerUrl {
    pub fn new(credential: &HubCredential, path: impl Into<String>) -> Self {
        MakerUrl {
            base: credential.base_url(),
            path: path.into(),
            access_token: credential.access_token().to_owned(),
            extra: Vec::new(),
        }
    }

    pub fn all_devices(credential: &HubCredential) -> Self {
        MakerUrl::new(credential, "/devices/all")
    }

    pub fn device(credential: &HubCredential, device_id: &str) -> Self {
        MakerUrl::new(credential, format!("/devices/{}", device_id))
    }

    pub fn device_commands(credential: &HubCredential, device_id: &str) -> Self {
        MakerUrl::new(credential, format!("/devices/{}/commands", device_id))
    }

    pub fn for_action(credential: &HubCredential, action: &DeviceAction) -> Self {
        match action {
            DeviceAction::GetAll => MakerUrl::all_devices(credential),
            DeviceAction::Get { device_id } => MakerUrl::device(credential, device_id),
            DeviceAction::GetAttribute { device_id, attribute } => MakerUrl::new(credential, format!("/devices/{}/attribute/{}", device_id, attribute)),
            DeviceAction::SendCommand { device_id, command, arguments } => {
                MakerUrl::new(credential, format!("/devices/{}/{}", device_id, command)).with_arguments(arguments.iter().cloned())
            }
        }
    }

    /// Appends each entry verbatim as `&entry` after the access token.
    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = String>) -> Self {
        self.extra.extend(arguments);
        self
    }

    pub fn to_request_url(&self) -> String {
        self.render(&self.access_token)
    }

    fn render(&self, access_token: &str) -> String {
        let mut url = format!("{}{}?access_token={}", self.base, self.path, access_token);
        for argument in &self.extra {
            url.push('&');
            url.push_str(argument);
        }
        url
    }
}

impl fmt::Display for MakerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("***"))
    }
}

impl fmt::Debug for MakerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MakerUrl({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn credential() -> HubCredential {
        HubCredential::new("http://192.168.1.100", "12345", "abcdef123456")
    }

    #[rstest]
    #[case(DeviceAction::GetAll, "http://192.168.1.100/apps/api/12345/devices/all?access_token=abcdef123456")]
    #[case(DeviceAction::Get { device_id: "2".to_string() }, "http://192.168.1.100/apps/api/12345/devices/2?access_token=abcdef123456")]
    #[case(
        DeviceAction::GetAttribute { device_id: "2".to_string(), attribute: "motion".to_string() },
        "http://192.168.1.100/apps/api/12345/devices/2/attribute/motion?access_token=abcdef123456"
    )]
    #[case(
        DeviceAction::SendCommand { device_id: "1".to_string(), command: "on".to_string(), arguments: vec![] },
        "http://192.168.1.100/apps/api/12345/devices/1/on?access_token=abcdef123456"
    )]
    fn builds_the_url_for_an_action(#[case] action: DeviceAction, #[case] expected: &str) {
        assert_eq!(MakerUrl::for_action(&credential(), &action).to_request_url(), expected);
    }

    #[test]
    fn appends_command_arguments_in_order() {
        let action = DeviceAction::SendCommand {
            device_id: "1".to_string(),
            command: "setColor".to_string(),
            arguments: vec!["level=100".to_string(), "color=green".to_string()],
        };

        let url = MakerUrl::for_action(&credential(), &action).to_request_url();

        assert!(url.ends_with("?access_token=abcdef123456&level=100&color=green"), "unexpected url {}", url);
    }

    #[test]
    fn display_redacts_the_access_token() {
        let url = MakerUrl::device_commands(&credential(), "3");

        assert_eq!(url.to_string(), "http://192.168.1.100/apps/api/12345/devices/3/commands?access_token=***");
    }
}
