//! Runtime site configuration and auxiliary fetched data.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_FAVICON, DEFAULT_SITE_TITLE};

/// Site configuration fetched from `config.json`.
///
/// All fields have defaults so a missing or partial config file never blocks
/// startup; the defaults mirror what the index generator ships.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title shown in the header and the document title.
    #[serde(default = "default_site_title")]
    pub site_title: String,
    /// Favicon URL applied to the document head.
    #[serde(default = "default_favicon")]
    pub favicon: String,
    /// Optional custom footer HTML. Sanitized before injection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_html: Option<String>,
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

fn default_favicon() -> String {
    DEFAULT_FAVICON.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            favicon: default_favicon(),
            footer_html: None,
        }
    }
}

impl SiteConfig {
    /// Footer HTML, falling back to a generated copyright line.
    pub fn footer_or_default(&self) -> String {
        self.footer_html
            .clone()
            .unwrap_or_else(|| format!("&copy; {}. All rights reserved.", self.site_title))
    }
}

/// Response from the quote-of-the-day API shown on the 404 page.
#[derive(Clone, Debug, Deserialize)]
pub struct Quote {
    /// The quote text.
    pub hitokoto: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: SiteConfig = serde_json::from_str(r#"{"siteTitle": "My Files"}"#).unwrap();
        assert_eq!(cfg.site_title, "My Files");
        assert_eq!(cfg.favicon, DEFAULT_FAVICON);
        assert!(cfg.footer_html.is_none());
    }

    #[test]
    fn test_footer_fallback_mentions_title() {
        let cfg = SiteConfig {
            site_title: "Download Station".to_string(),
            ..Default::default()
        };
        assert!(cfg.footer_or_default().contains("Download Station"));

        let custom = SiteConfig {
            footer_html: Some("<b>hi</b>".to_string()),
            ..Default::default()
        };
        assert_eq!(custom.footer_or_default(), "<b>hi</b>");
    }
}
