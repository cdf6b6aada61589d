/// Compile-time settings for the extension

pub const APP_NAME: &str = "Close or Keep";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LOG_LEVEL: log::Level = log::Level::Info;

/// Keyboard shortcuts, matched case-insensitively
pub const KEEP_KEY: &str = "k";
pub const CLOSE_KEY: &str = "r";

/// Icons shipped with the extension, relative to the popup page
pub const DEFAULT_ICON: &str = "../assets/icons/share.svg";
pub const CLOSE_ICON: &str = "../assets/icons/close.svg";
pub const KEEP_ICON: &str = "../assets/icons/keep.svg";
pub const KEYBOARD_ICON: &str = "../assets/icons/keyboard.svg";

pub const EMPTY_MESSAGE: &str = "And just like that the chaos collapsed into order, your tabs now sitting quietly, like books shelved awaiting the next purge.";
