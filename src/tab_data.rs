/// Data structures for Close or Keep
use serde::{Deserialize, Serialize};

pub type TabId = i32;
pub type WindowId = i32;

/// Chrome's `tabs.TAB_ID_NONE`, used for tabs that are not browser tabs (devtools etc.)
pub const TAB_ID_NONE: TabId = -1;

fn tab_id_none() -> TabId {
    TAB_ID_NONE
}

/// Information about a browser tab, as reported by `chrome.tabs.query`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    #[serde(default = "tab_id_none")]
    pub id: TabId,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fav_icon_url: Option<String>,
    #[serde(default)]
    pub last_accessed: f64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub window_id: WindowId,
}

#[cfg(test)]
impl Tab {
    pub fn new(id: TabId, url: &str, last_accessed: f64) -> Tab {
        Tab {
            id,
            url: url.to_string(),
            title: String::new(),
            fav_icon_url: None,
            last_accessed,
            active: false,
            window_id: 1,
        }
    }

    pub fn with_active(mut self, active: bool) -> Tab {
        self.active = active;
        self
    }

    pub fn with_title(mut self, title: &str) -> Tab {
        self.title = title.to_string();
        self
    }

    pub fn with_fav_icon(mut self, fav_icon_url: &str) -> Tab {
        self.fav_icon_url = Some(fav_icon_url.to_string());
        self
    }
}

impl Tab {
    /// Title to show on the card
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(no title)"
        } else {
            &self.title
        }
    }
}

/// Last-focused window, as reported by `chrome.windows.getLastFocused`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WindowInfo {
    #[serde(default)]
    pub id: Option<WindowId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_builder() {
        let tab = Tab::new(1, "https://google.com", 5.0)
            .with_title("Google")
            .with_active(true);

        assert_eq!(tab.id, 1);
        assert_eq!(tab.url, "https://google.com");
        assert_eq!(tab.title, "Google");
        assert!(tab.active);
        assert_eq!(tab.last_accessed, 5.0);
    }

    #[test]
    fn test_deserialize_chrome_shape() {
        let json = r#"{
            "id": 42,
            "url": "https://github.com/rust-lang",
            "title": "rust-lang",
            "favIconUrl": "https://github.com/favicon.ico",
            "lastAccessed": 1698508200000.5,
            "active": true,
            "windowId": 7,
            "pinned": false,
            "index": 3
        }"#;

        let tab: Tab = serde_json::from_str(json).unwrap();

        assert_eq!(tab.id, 42);
        assert_eq!(tab.fav_icon_url.as_deref(), Some("https://github.com/favicon.ico"));
        assert_eq!(tab.last_accessed, 1698508200000.5);
        assert!(tab.active);
        assert_eq!(tab.window_id, 7);
    }

    #[test]
    fn test_deserialize_sparse_tab() {
        // chrome omits url/title without the "tabs" permission and id for devtools
        let tab: Tab = serde_json::from_str(r#"{"active": false, "windowId": 2}"#).unwrap();

        assert_eq!(tab.id, TAB_ID_NONE);
        assert_eq!(tab.url, "");
        assert_eq!(tab.last_accessed, 0.0);
        assert_eq!(tab.fav_icon_url, None);
    }

    #[test]
    fn test_display_title_fallback() {
        assert_eq!(Tab::new(1, "https://a", 0.0).display_title(), "(no title)");
        assert_eq!(Tab::new(1, "https://a", 0.0).with_title("A").display_title(), "A");
    }

    #[test]
    fn test_window_info_without_id() {
        let window: WindowInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(window.id, None);
    }
}
