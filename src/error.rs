use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, HostError>;

/// Failures at the boundary with the browser
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    /// A chrome.* call rejected, e.g. the tab no longer exists
    #[error("host call failed: {0}")]
    Js(String),

    #[error("failed to decode host value: {0}")]
    Decode(String),

    #[error("failed to encode value for host: {0}")]
    Encode(String),

    #[error("display element missing: {0}")]
    DomMissing(&'static str),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        HostError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for HostError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        HostError::Decode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            HostError::Js("No tab with id: 5.".to_string()).to_string(),
            "host call failed: No tab with id: 5."
        );
        assert_eq!(HostError::DomMissing("body").to_string(), "display element missing: body");
    }
}
