/// Close or Keep - Chrome Extension for triaging tabs one at a time
/// Built with Rust + WASM + Yew

mod background;
mod config;
mod coordinator;
mod domain;
mod error;
mod favicon;
mod host;
mod messages;
mod operations;
mod presenter;
mod session;
mod storage;
mod tab_data;
pub mod ui;

pub use background::BackgroundWorker;

use error::HostError;
use log::error;
use wasm_bindgen::prelude::*;

// Set up panic hook and logging for both the popup and the service worker
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::LOG_LEVEL));
}

// Start the Yew app for the popup, mounted on `#app`
#[wasm_bindgen]
pub fn start_popup() {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("app"));

    match root {
        Some(root) => {
            yew::Renderer::<ui::popup::App>::with_root(root).render();
        }
        None => error!("{}", HostError::DomMissing("#app")),
    }
}

// Exposed for the popup page's title and diagnostics
#[wasm_bindgen]
pub fn display_host(url: &str) -> String {
    domain::display_host(url).unwrap_or_default()
}
