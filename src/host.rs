/// Typed async access to the chrome.* APIs through the JS bridge

use crate::error::{HostError, Result};
use crate::messages::{Request, Response};
use crate::storage::{StorageData, AUTO_REOPEN_KEY};
use crate::tab_data::{Tab, TabId, WindowId, WindowInfo};
use log::{debug, warn};
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = queryCurrentWindowTabs)]
    async fn query_current_window_tabs() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = getTab)]
    async fn get_tab(tab_id: TabId) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = removeTab)]
    async fn remove_tab(tab_id: TabId) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = activateTab)]
    async fn activate_tab(tab_id: TabId) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = focusWindow)]
    async fn focus_window_js(window_id: WindowId) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = getLastFocusedWindow)]
    async fn get_last_focused_window() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = getStorage)]
    async fn get_storage(key: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = setStorage)]
    async fn set_storage(items: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = openPopup)]
    async fn open_popup_js() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = sendMessage)]
    async fn send_message(message: JsValue) -> std::result::Result<JsValue, JsValue>;
}

fn encode<T: serde::Serialize>(value: &T) -> Result<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| HostError::Encode(e.to_string()))
}

/// Tabs of the window the popup belongs to
pub async fn current_window_tabs() -> Result<Vec<Tab>> {
    let tabs_js = query_current_window_tabs().await?;
    Ok(serde_wasm_bindgen::from_value(tabs_js)?)
}

/// Close a tab, treating an already-closed tab as success
pub async fn remove_tab_if_present(tab_id: TabId) {
    if let Err(e) = get_tab(tab_id).await {
        debug!("Tab {} already gone: {}", tab_id, HostError::from(e));
        return;
    }

    if let Err(e) = remove_tab(tab_id).await {
        warn!("Failed to remove tab {}: {}", tab_id, HostError::from(e));
    }
}

/// Make a tab active, then bring its window to the front
pub async fn focus_tab(tab_id: TabId, window_id: WindowId) -> Result<()> {
    activate_tab(tab_id).await?;
    focus_window(window_id).await
}

pub async fn focus_window(window_id: WindowId) -> Result<()> {
    focus_window_js(window_id).await?;
    Ok(())
}

pub async fn last_focused_window() -> Result<WindowInfo> {
    let window_js = get_last_focused_window().await?;
    if window_js.is_null() || window_js.is_undefined() {
        return Ok(WindowInfo { id: None });
    }
    Ok(serde_wasm_bindgen::from_value(window_js)?)
}

pub async fn read_storage() -> Result<StorageData> {
    let storage_js = get_storage(AUTO_REOPEN_KEY).await?;
    if storage_js.is_null() || storage_js.is_undefined() {
        return Ok(StorageData::new());
    }
    Ok(serde_wasm_bindgen::from_value(storage_js)?)
}

pub async fn write_storage(data: &StorageData) -> Result<()> {
    set_storage(encode(data)?).await?;
    Ok(())
}

pub async fn open_popup() -> Result<()> {
    open_popup_js().await?;
    Ok(())
}

/// Send a request to the background worker and wait for its reply
pub async fn send(request: Request) -> Result<Response> {
    let reply = send_message(encode(&request)?).await?;
    if reply.is_null() || reply.is_undefined() {
        return Ok(Response::empty());
    }
    Ok(serde_wasm_bindgen::from_value(reply)?)
}

/// Close the popup window
pub fn close_interface() -> Result<()> {
    let window = web_sys::window().ok_or(HostError::DomMissing("window"))?;
    window.close()?;
    Ok(())
}
