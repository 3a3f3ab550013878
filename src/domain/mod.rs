pub mod action;
pub mod credential;
pub mod trigger;

pub use action::{ActionRequest, ActionResult, DeviceAction, InvalidAction, Operation, Resource};
pub use credential::HubCredential;
pub use trigger::{Decision, EventType, TriggerFilterConfig, WebhookResponse, WebhookStatus};
