//! Sitemap generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/outlook/</loc>
//!     <lastmod>2024-06-15</lastmod>
//!   </url>
//! </urlset>
//! ```
//!
//! `<lastmod>` comes from blog dates: a post's own date, or the newest post
//! date for the blog index and category listings. Other pages carry none.

use std::borrow::Cow;

use anyhow::Result;

use super::write_xml;
use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::content::model::Blog;
use crate::content::paths::static_routes;
use crate::content::resolve::find_by_slug;
use crate::log;
use crate::site::{Route, slugify};
use crate::utils::date::DateTimeUtc;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Write `sitemap.xml` into the output directory if enabled.
pub fn build_sitemap(store: &ContentStore, config: &SiteConfig) -> Result<()> {
    if !config.build.sitemap {
        return Ok(());
    }
    let path = config.build.output.join("sitemap.xml");
    write_xml(&path, &Sitemap::build(store, config).into_xml(), config.build.minify)?;
    log!("sitemap"; "{}", config.root_relative(&path).display());
    Ok(())
}

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    pub fn build(store: &ContentStore, config: &SiteConfig) -> Self {
        let urls = static_routes(store)
            .into_iter()
            .map(|route| UrlEntry {
                loc: config.site.absolute(&route.href()),
                lastmod: lastmod(&route, store.blogs()),
            })
            .collect();
        Self { urls }
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 96);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

fn newest<'a>(posts: impl Iterator<Item = &'a Blog>) -> Option<DateTimeUtc> {
    posts
        .filter_map(|p| DateTimeUtc::parse(&p.date))
        .max_by_key(|d| d.ordinal())
}

fn lastmod(route: &Route, blogs: &[Blog]) -> Option<String> {
    let date = match route {
        Route::BlogPost(slug) => DateTimeUtc::parse(&find_by_slug(blogs, slug)?.date),
        Route::Blog => newest(blogs.iter()),
        Route::BlogCategory(label) => newest(blogs.iter().filter(|b| slugify(&b.category) == *label)),
        _ => None,
    };
    date.map(DateTimeUtc::to_iso_date)
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{config, store};

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(
            escape_xml(r#"<a href="x">R&D 'q'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D &apos;q&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_sitemap_lists_every_static_route() {
        let (store, config) = (store(), config());
        let xml = Sitemap::build(&store, &config).into_xml();

        let routes = static_routes(&store);
        assert_eq!(xml.matches("<url>").count(), routes.len());
        for route in routes {
            let loc = format!("<loc>https://tradenexus.example{}</loc>", route.href());
            assert!(xml.contains(&loc), "missing {route}");
        }
    }

    #[test]
    fn test_lastmod_from_blog_dates() {
        let store = store();
        let blogs = store.blogs();
        assert_eq!(lastmod(&Route::Blog, blogs).as_deref(), Some("2024-03-01"));
        assert_eq!(
            lastmod(&Route::BlogPost("rules".into()), blogs).as_deref(),
            Some("2024-02-01")
        );
        assert_eq!(
            lastmod(&Route::BlogCategory("energy-markets".into()), blogs).as_deref(),
            Some("2024-03-01")
        );
        assert_eq!(lastmod(&Route::About, blogs), None);
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config();
        config.build.output = dir.path().to_path_buf();
        config.build.minify = false;

        build_sitemap(&store(), &config).unwrap();
        let xml = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<lastmod>2024-03-01</lastmod>"));
    }
}
