//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! title = "TradeNexus"
//! tagline = "Energy Trading Analytics"
//! url = "https://tradenexus.example"   # Canonical base; required for the feed
//! language = "en"
//! description = "Advanced analytics for energy markets."
//! ```

use serde::{Deserialize, Serialize};

use crate::config::error::Diagnostics;
use crate::config::util::extract_url_path;

/// Site metadata shared by every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Brand name, used in titles and the navigation logo.
    pub title: String,

    /// Short line shown under the brand and on the home page.
    pub tagline: String,

    /// Absolute base URL without trailing slash, e.g. `https://example.com`.
    pub url: Option<String>,

    /// Language code for `<html lang>`.
    pub language: String,

    /// Fallback meta description.
    pub description: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "TradeNexus".into(),
            tagline: String::new(),
            url: None,
            language: "en".into(),
            description: String::new(),
        }
    }
}

impl SiteSection {
    /// Base URL with any trailing `/` removed; empty when unset.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().map_or("", |u| u.trim_end_matches('/'))
    }

    /// Absolute URL for a root-relative path.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub fn validate(&self, rss_enabled: bool, diag: &mut Diagnostics) {
        if self.title.trim().is_empty() {
            diag.error("site.title", "must not be empty");
        }

        match self.url.as_deref() {
            None if rss_enabled => diag.error_with_hint(
                "site.url",
                "build.rss is enabled but site.url is not configured",
                "set site.url or disable the feed with `rss = false`",
            ),
            None => {}
            Some(url) => match extract_url_path(url) {
                None => diag.error_with_hint(
                    "site.url",
                    format!("`{url}` is not a valid absolute URL"),
                    "include the scheme, e.g. https://example.com",
                ),
                Some(path) if !path.is_empty() => diag.error_with_hint(
                    "site.url",
                    format!("subdirectory deployments are not supported (`/{path}`)"),
                    "serve the site from the domain root",
                ),
                Some(_) => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.site.base_url(), "");
    }

    #[test]
    fn test_absolute_url() {
        let config = test_parse_config("[site]\nurl = \"https://tradenexus.example/\"");
        assert_eq!(
            config.site.absolute("/blog/rss.xml"),
            "https://tradenexus.example/blog/rss.xml"
        );
    }

    #[test]
    fn test_validate_url() {
        let mut config = test_parse_config("[site]\nurl = \"not a url\"");
        let mut diag = crate::config::error::Diagnostics::default();
        config.site.validate(false, &mut diag);
        assert!(!diag.is_empty());

        config.site.url = Some("https://example.com/sub".into());
        let mut diag = crate::config::error::Diagnostics::default();
        config.site.validate(false, &mut diag);
        assert!(!diag.is_empty());

        config.site.url = None;
        let mut diag = crate::config::error::Diagnostics::default();
        config.site.validate(true, &mut diag);
        assert!(!diag.is_empty());

        let mut diag = crate::config::error::Diagnostics::default();
        config.site.validate(false, &mut diag);
        assert!(diag.is_empty());
    }
}
