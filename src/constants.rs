/// DOM hooks and timing for the web frontend.
///
/// Element ids mirror the portal's HTML; anything missing from a page is
/// skipped rather than treated as an error.
// Navigation
pub const HAMBURGER_ID: &str = "hamburgerMenu";
pub const NAV_CONTAINER_ID: &str = "navContainer";
pub const CLOSE_NAV_ID: &str = "closeNav";
pub const SIGN_IN_BUTTON_ID: &str = "signInButton";
pub const NAV_LINK_SELECTOR: &str = ".nav-menu a";
pub const NAV_OPEN_CLASS: &str = "open";

// Popups
pub const AUTH_POPUP_ID: &str = "authPopup";
pub const POPUP_CLOSE_SELECTOR: &str = ".close";
pub const HIDDEN_CLASS: &str = "hidden";
// The signer page wires its own sign-in flow.
pub const SIGNER_PAGE: &str = "signer.html";

// Connectivity badge
pub const STATUS_CONTAINER_ID: &str = "onlineStatus";
pub const STATUS_TEXT_ID: &str = "statusText";
pub const API_STATUS_SELECTOR: &str = ".api-status-text";
pub const STATUS_URL: &str = "https://admin.cherrysideloading.xyz/api.js";
pub const STATUS_INTERVAL_MS: i32 = 30_000;

// Orb elements
pub const ORB_CLASS: &str = "dynamic-orb";
pub const ORB_FADE_SEC: f32 = 0.5;

// Frame statistics
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;
