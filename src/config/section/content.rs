//! `[content]` section configuration.
//!
//! ```toml
//! [content]
//! dir = "data"                                       # Relative to site root
//! services = "services.json"
//! case_studies = "case-studies.json"
//! blogs = ["blogs.json", "blogs-additional.json"]    # Concatenated in order
//! company = "company.json"
//! assets = "static"                                  # Copied verbatim; optional
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Locations of the JSON data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding the data files. Absolute after config loading.
    pub dir: PathBuf,
    pub services: PathBuf,
    pub case_studies: PathBuf,
    /// Blog partitions, concatenated in this order.
    pub blogs: Vec<PathBuf>,
    pub company: PathBuf,
    /// Static files (images, favicon) copied into the output. Relative to
    /// the site root, not `dir`. A missing directory is skipped.
    pub assets: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "data".into(),
            services: "services.json".into(),
            case_studies: "case-studies.json".into(),
            blogs: vec!["blogs.json".into(), "blogs-additional.json".into()],
            company: "company.json".into(),
            assets: "static".into(),
        }
    }
}

impl ContentConfig {
    /// Resolve a data file against the content directory.
    pub fn resolve(&self, file: &Path) -> PathBuf {
        self.dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_content_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.content.blogs.len(), 2);
        assert_eq!(config.content.services, PathBuf::from("services.json"));
    }

    #[test]
    fn test_content_partitions() {
        let config = test_parse_config("[content]\ndir = \"json\"\nblogs = [\"a.json\"]");
        assert_eq!(config.content.blogs, [PathBuf::from("a.json")]);
        assert_eq!(
            config.content.resolve(Path::new("a.json")),
            PathBuf::from("json/a.json")
        );
    }
}
