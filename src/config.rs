//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Data Endpoints
// =============================================================================

/// URL of the file index tree document.
pub const FILES_URL: &str = "/files.json";

/// URL of the runtime site configuration.
pub const CONFIG_URL: &str = "/config.json";

/// Quote-of-the-day API shown on the 404 page. Failures are silent.
pub const QUOTE_API_URL: &str = "https://v1.hitokoto.cn/";

// =============================================================================
// Application Metadata (fallbacks when config.json is unavailable)
// =============================================================================

/// Default site title.
pub const DEFAULT_SITE_TITLE: &str = "Download Station";

/// Default favicon path.
pub const DEFAULT_FAVICON: &str = "/favicon.svg";

/// Project repository link shown in the corner button.
pub const REPOSITORY_URL: &str = "https://github.com/ntkrnl64/dl.krnl64.win";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// localStorage key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// How long the "URL copied" confirmation stays visible, in milliseconds.
pub const COPY_MESSAGE_MS: u32 = 2000;

/// Viewport query below which the listing collapses to its mobile layout.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 640px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
