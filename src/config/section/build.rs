//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! output = "public"       # Output directory (relative to site root)
//! minify = true           # Collapse whitespace in sitemap and feed
//! clean = false           # Remove the output directory before building
//! sitemap = true          # Write sitemap.xml
//! rss = true              # Write blog/rss.xml (requires site.url)
//! related_limit = 3       # Related records shown on detail pages
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::Diagnostics;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub output: PathBuf,
    pub minify: bool,
    pub clean: bool,
    pub sitemap: bool,
    pub rss: bool,
    pub related_limit: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            minify: true,
            clean: false,
            sitemap: true,
            rss: true,
            related_limit: 3,
        }
    }
}

impl BuildConfig {
    pub fn validate(&self, diag: &mut Diagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error("build.output", "must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert!(config.build.minify);
        assert!(config.build.sitemap);
        assert_eq!(config.build.related_limit, 3);
    }

    #[test]
    fn test_build_overrides() {
        let config = test_parse_config("[build]\nrss = false\nrelated_limit = 5");
        assert!(!config.build.rss);
        assert_eq!(config.build.related_limit, 5);
    }
}
