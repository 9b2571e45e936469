//! HTTP bindings for the items API over the browser `fetch`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Headers, Request, RequestInit, Response};

use stockroom_core::ItemId;
use stockroom_inventory::Item;

use crate::logic::{CreateItemPayload, QuantityStepPayload, UpdateItemPayload};

const ITEMS_URL: &str = "/api/items";

/// One round trip to the items endpoint.
///
/// Every operation shares the path and differs by method; bodies go out as
/// JSON strings, responses come back through `serde_wasm_bindgen`.
async fn fetch_json<T>(method: &str, body: Option<String>) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let window = window().ok_or_else(|| "No window object".to_string())?;

    let opts = RequestInit::new();
    opts.set_method(method);

    if let Some(body) = body {
        let headers = Headers::new().map_err(|e| format!("Failed to build headers: {e:?}"))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| format!("Failed to set content type: {e:?}"))?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(ITEMS_URL, &opts)
        .map_err(|e| format!("Failed to build request: {e:?}"))?;

    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {e:?}"))?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|e| format!("Fetch returned a non-Response: {e:?}"))?;

    if !resp.ok() {
        return Err(format!("request failed with status {}", resp.status()));
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| format!("Failed to read response body: {e:?}"))?,
    )
    .await
    .map_err(|e| format!("Failed to read response body: {e:?}"))?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| format!("Failed to deserialize response: {e:?}"))
}

fn to_body<T: serde::Serialize>(payload: &T) -> Result<String, String> {
    serde_json::to_string(payload).map_err(|e| format!("Failed to serialize request: {e}"))
}

/// Fetch the full item collection.
pub async fn list_items() -> Result<Vec<Item>, String> {
    fetch_json("GET", None).await
}

/// Create an item from the add form's draft.
pub async fn create_item(payload: &CreateItemPayload) -> Result<Item, String> {
    fetch_json("POST", Some(to_body(payload)?)).await
}

/// Set a single item's quantity (the `{id, quantity}` update form).
pub async fn step_quantity(payload: &QuantityStepPayload) -> Result<Item, String> {
    fetch_json("PUT", Some(to_body(payload)?)).await
}

/// Send the full edited record from the edit dialog.
pub async fn update_item(payload: &UpdateItemPayload) -> Result<Item, String> {
    fetch_json("PUT", Some(to_body(payload)?)).await
}

/// Delete an item. The confirmation message body is not used.
pub async fn delete_item(id: ItemId) -> Result<(), String> {
    let body = to_body(&serde_json::json!({ "id": id }))?;
    let _confirmation: serde_json::Value = fetch_json("DELETE", Some(body)).await?;
    Ok(())
}
