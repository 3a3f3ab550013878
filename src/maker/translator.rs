use crate::domain::action::{ActionRequest, ActionResult, DeviceAction};
use crate::domain::credential::HubCredential;
use crate::maker::client::HubClient;
use crate::maker::error::MakerError;
use crate::maker::maker_url::MakerUrl;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Validates the request and issues its single Maker API call.
#[instrument(skip(client, credential))]
pub async fn translate<C: HubClient + ?Sized>(client: &C, credential: &HubCredential, request: &ActionRequest) -> Result<Value, MakerError> {
    let action = DeviceAction::try_from(request)?;
    let url = MakerUrl::for_action(credential, &action);

    debug!("Calling {}", url);
    client.get_json(&url).await
}

/// Runs the items one after the other in input order.
///
/// A failing item becomes an `{ "error": message }` record when `continue_on_fail` is set, otherwise
/// the error is returned and the remaining items are left untouched.
#[instrument(skip_all, fields(items = items.len(), continue_on_fail = continue_on_fail))]
pub async fn execute<C: HubClient + ?Sized>(
    client: &C,
    credential: &HubCredential,
    items: &[ActionRequest],
    continue_on_fail: bool,
) -> Result<Vec<ActionResult>, MakerError> {
    let mut results = Vec::with_capacity(items.len());

    for (index, request) in items.iter().enumerate() {
        match translate(client, credential, request).await {
            Ok(json) => results.push(ActionResult::success(json, index)),
            Err(error) if continue_on_fail => {
                warn!(item = index, "⚠️ Action failed, continuing: {}", error);
                results.push(ActionResult::failure(error.to_string(), index));
            }
            Err(error) => {
                warn!(item = index, "⚠️ Action failed: {}", error);
                return Err(error);
            }
        }
    }

    info!("Executed {} action(s)", results.len());
    Ok(results)
}
