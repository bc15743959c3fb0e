//! Auxiliary XML outputs derived from the content store.
//!
//! - **Sitemap**: every pre-rendered route (`sitemap.xml`)
//! - **RSS**: blog posts, newest first (`blog/rss.xml`)
//!
//! Both produce a string so the preview server can serve them from memory;
//! the build writes them next to the pages.

pub mod rss;
pub mod sitemap;

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Collapse indentation and blank lines when `enabled`.
pub fn minify_xml(xml: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(xml);
    }
    Cow::Owned(
        xml.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect(),
    )
}

/// Write `xml` to `path`, creating parent directories.
fn write_xml(path: &Path, xml: &str, minify: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, minify_xml(xml, minify).as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))
}
