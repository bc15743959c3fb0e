//! RSS 2.0 feed of blog posts.
//!
//! Items are ordered newest first. Posts whose date does not parse are left
//! out, since RSS requires an RFC 2822 `pubDate`.

use std::sync::LazyLock;

use anyhow::{Result, anyhow, bail};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder, validation::Validate};

use super::write_xml;
use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::content::model::Blog;
use crate::content::resolve::sorted_by_date_desc;
use crate::log;
use crate::site::Route;
use crate::utils::date::DateTimeUtc;

/// Path of the feed below the output directory.
pub const FEED_PATH: &str = "blog/rss.xml";

/// Write `blog/rss.xml` if enabled.
pub fn build_rss(store: &ContentStore, config: &SiteConfig) -> Result<()> {
    if !config.build.rss {
        return Ok(());
    }
    let xml = rss_xml(store, config)?;
    let path = config.build.output.join(FEED_PATH);
    write_xml(&path, &xml, config.build.minify)?;
    log!("rss"; "{}", config.root_relative(&path).display());
    Ok(())
}

/// Render and validate the feed.
pub fn rss_xml(store: &ContentStore, config: &SiteConfig) -> Result<String> {
    let site = &config.site;
    if site.base_url().is_empty() {
        bail!("the RSS feed needs an absolute site.url");
    }

    let posts = sorted_by_date_desc(store.blogs());
    let skipped = posts
        .iter()
        .filter(|p| DateTimeUtc::parse(&p.date).is_none())
        .count();
    if skipped > 0 {
        log!("rss"; "skipped {} without a valid date", crate::utils::plural::plural_count(skipped, "post"));
    }

    let contact_email = &store.company().contact.email;
    let items: Vec<Item> = posts
        .into_iter()
        .filter_map(|post| post_to_item(post, config, contact_email))
        .collect();

    let description = if site.description.is_empty() {
        format!("Latest articles from {}", site.title)
    } else {
        site.description.clone()
    };

    let channel = ChannelBuilder::default()
        .title(format!("{} Blog", site.title))
        .link(site.absolute(&Route::Blog.href()))
        .description(description)
        .language(Some(site.language.clone()))
        .generator(Some(env!("CARGO_PKG_NAME").to_string()))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn post_to_item(post: &Blog, config: &SiteConfig, contact_email: &str) -> Option<Item> {
    let pub_date = DateTimeUtc::parse(&post.date).map(DateTimeUtc::to_rfc2822)?;
    let link = config
        .site
        .absolute(&Route::BlogPost(post.slug.clone()).href());

    Some(
        ItemBuilder::default()
            .title(Some(post.title.clone()))
            .link(Some(link.clone()))
            .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
            .description(Some(post.page_description().to_string()))
            .categories(vec![
                rss::CategoryBuilder::default()
                    .name(post.category.clone())
                    .build(),
            ])
            .pub_date(Some(pub_date))
            .author(rss_author(&post.author, contact_email))
            .build(),
    )
}

/// RSS wants `email (Name)`. A post author already in that form is kept;
/// otherwise the name is paired with the company contact address.
fn rss_author(author: &str, contact_email: &str) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$")
            .expect("author pattern is valid")
    });

    let author = author.trim();
    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.to_string());
    }
    if author.is_empty() || contact_email.is_empty() {
        return None;
    }
    Some(format!("{contact_email} ({author})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{config, store};

    #[test]
    fn test_rss_author_forms() {
        assert_eq!(
            rss_author("jane@example.com (Jane)", "info@x.com").as_deref(),
            Some("jane@example.com (Jane)")
        );
        assert_eq!(
            rss_author("Jane Doe", "info@x.com").as_deref(),
            Some("info@x.com (Jane Doe)")
        );
        assert_eq!(rss_author("Jane Doe", ""), None);
    }

    #[test]
    fn test_feed_newest_first() {
        let xml = rss_xml(&store(), &config()).unwrap();
        let newer = xml.find("https://tradenexus.example/blog/newer/").unwrap();
        let rules = xml.find("https://tradenexus.example/blog/rules/").unwrap();
        let older = xml.find("https://tradenexus.example/blog/older/").unwrap();
        assert!(newer < rules && rules < older);
        assert!(xml.contains("<pubDate>Fri, 01 Mar 2024 00:00:00 GMT</pubDate>"));
        assert!(xml.contains("<author>info@tradenexus.example (Analyst)</author>"));
    }

    #[test]
    fn test_feed_requires_site_url() {
        let mut config = config();
        config.site.url = None;
        assert!(rss_xml(&store(), &config).is_err());
    }

    #[test]
    fn test_post_with_bad_date_is_skipped() {
        let mut post = crate::content::resolve::tests::blog(9, "undated", "X", "soon");
        assert!(post_to_item(&post, &config(), "").is_none());
        post.date = "2024-01-15".into();
        let item = post_to_item(&post, &config(), "").unwrap();
        assert_eq!(item.link(), Some("https://tradenexus.example/blog/undated/"));
        assert_eq!(item.author(), None);
    }
}
