//! Command-line interface module.

mod args;
pub mod build;
pub mod paths;
pub mod query;
pub mod serve;

pub use args::{BuildArgs, Cli, Commands};

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::log;
use crate::utils::plural::plural_count;

/// Load every content file named in the config, logging data warnings.
///
/// Load failures are fatal; warnings (duplicate slugs, empty slugs) are not.
pub fn load_store(config: &SiteConfig) -> Result<ContentStore> {
    let store = ContentStore::load(&config.content).with_context(|| {
        format!(
            "Failed to load content from {}",
            config.root_relative(&config.content.dir).display()
        )
    })?;

    let warnings = store.validate();
    if !warnings.is_empty() {
        log!("warning"; "{} in content:", plural_count(warnings.len(), "problem"));
        for warning in &warnings {
            log!("warning"; "  {warning}");
        }
    }

    Ok(store)
}
