/// Storage layout for chrome.storage.local

use crate::messages::Request;
use serde::{Deserialize, Serialize};

/// Key of the one-shot auto-reopen marker
pub const AUTO_REOPEN_KEY: &str = "autoReopen";

/// Root storage structure. An absent key reads as `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageData {
    #[serde(rename = "autoReopen", default)]
    pub auto_reopen: bool,
}

impl StorageData {
    pub fn new() -> Self {
        StorageData { auto_reopen: false }
    }

    pub fn with_auto_reopen(auto_reopen: bool) -> Self {
        StorageData { auto_reopen }
    }

    pub fn session_start(&self) -> SessionStart {
        SessionStart::from_flag(self.auto_reopen)
    }
}

/// How the popup was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStart {
    /// Opened by the user; the processed set starts over
    Fresh,
    /// Reopened by the background after closing a tab; the processed set carries on
    Continuation,
}

impl SessionStart {
    pub fn from_flag(auto_reopen: bool) -> Self {
        if auto_reopen {
            SessionStart::Continuation
        } else {
            SessionStart::Fresh
        }
    }

    /// Host work to do before loading the processed set
    pub fn plan(self) -> StartupPlan {
        match self {
            SessionStart::Continuation => StartupPlan {
                write: Some(StorageData::new()),
                reset: None,
            },
            SessionStart::Fresh => StartupPlan {
                write: None,
                reset: Some(Request::ResetProcessed),
            },
        }
    }
}

/// What popup startup writes to storage and sends to the background
#[derive(Debug, Clone, PartialEq)]
pub struct StartupPlan {
    /// Clears the one-shot flag after it has been read
    pub write: Option<StorageData>,
    pub reset: Option<Request>,
}
