//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `site`    | `[site]`     | Title, tagline, url, language        |
//! | `content` | `[content]`  | Content directory and data files     |
//! | `build`   | `[build]`    | Output dir, minify, sitemap, feed    |
//! | `serve`   | `[serve]`    | Preview server                       |

mod build;
mod content;
mod serve;
mod site;

pub use build::BuildConfig;
pub use content::ContentConfig;
pub use serve::ServeConfig;
pub use site::SiteSection;
