/// Service-worker side of the extension

use crate::coordinator::{Coordinator, FollowUp, ReopenStep};
use crate::host;
use crate::messages::Request;
use crate::tab_data::WindowInfo;
use log::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Handle held by the service worker script for its whole lifetime.
/// The processed set lives here and is only changed by incoming messages.
#[wasm_bindgen]
pub struct BackgroundWorker {
    coordinator: Coordinator,
}

#[wasm_bindgen]
impl BackgroundWorker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> BackgroundWorker {
        BackgroundWorker {
            coordinator: Coordinator::new(),
        }
    }

    /// Answer one `chrome.runtime.onMessage` message. Unknown messages get `undefined`.
    #[wasm_bindgen(js_name = handleMessage)]
    pub fn handle_message(&mut self, message: JsValue) -> JsValue {
        let request: Request = match serde_wasm_bindgen::from_value(message) {
            Ok(request) => request,
            Err(e) => {
                warn!("Ignoring unrecognised message: {}", e);
                return JsValue::UNDEFINED;
            }
        };

        debug!("Handling {:?}", request);
        let (response, follow_up) = self.coordinator.handle(request);

        if let Some(follow_up) = follow_up {
            spawn_local(run_follow_up(follow_up));
        }

        serde_wasm_bindgen::to_value(&response).unwrap_or_else(|e| {
            error!("Failed to encode response: {}", e);
            JsValue::UNDEFINED
        })
    }
}

impl Default for BackgroundWorker {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_follow_up(follow_up: FollowUp) {
    for step in follow_up.steps() {
        match step {
            ReopenStep::WriteFlag(data) => {
                if let Err(e) = host::write_storage(&data).await {
                    error!("Failed to set auto-reopen flag: {}", e);
                    return;
                }
            }
            ReopenStep::RemoveTab(tab_id) => host::remove_tab_if_present(tab_id).await,
            ReopenStep::RefocusLastWindow => match host::last_focused_window().await {
                Ok(WindowInfo { id: Some(window_id) }) => {
                    if let Err(e) = host::focus_window(window_id).await {
                        warn!("Failed to focus window {}: {}", window_id, e);
                    }
                }
                Ok(WindowInfo { id: None }) => debug!("No last-focused window to refocus"),
                Err(e) => warn!("Failed to look up last-focused window: {}", e),
            },
            ReopenStep::OpenPopup => match host::open_popup().await {
                Ok(()) => info!("Reopened popup after {:?}", follow_up),
                Err(e) => error!("Failed to reopen popup: {}", e),
            },
        }
    }
}
