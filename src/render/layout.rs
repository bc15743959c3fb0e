//! Document shell: `<head>` metadata around navigation, page body and footer.

use super::components::{footer, nav};
use super::{Context, Page, PageMeta};
use crate::embed::page::{LAYOUT_HTML, LayoutVars};
use crate::site::Route;
use crate::utils::html::{escape, escape_attr};

pub fn document(ctx: &Context, route: &Route, page: &Page) -> String {
    let head = head(ctx, route, &page.meta);
    let main = page.body.as_str();

    LAYOUT_HTML.render(&LayoutVars {
        lang: &ctx.config.site.language,
        title: &escape(&page.meta.title),
        head: &head,
        nav: &nav(ctx, route),
        main,
        footer: &footer(ctx),
    })
}

fn meta_name(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{name}" content="{}">"#,
        escape_attr(content)
    )
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{property}" content="{}">"#,
        escape_attr(content)
    )
}

fn head(ctx: &Context, route: &Route, meta: &PageMeta) -> String {
    let site = &ctx.config.site;
    let description = if meta.description.is_empty() {
        site.description.as_str()
    } else {
        meta.description.as_str()
    };

    let mut tags = Vec::with_capacity(16);
    if !description.is_empty() {
        tags.push(meta_name("description", description));
    }
    if !meta.keywords.is_empty() {
        tags.push(meta_name("keywords", &meta.keywords.join(", ")));
    }

    // Canonical and og:url need an absolute base.
    let canonical = match route {
        Route::NotFound => {
            tags.push(meta_name("robots", "noindex"));
            None
        }
        _ if site.base_url().is_empty() => None,
        _ => Some(site.absolute(&route.href())),
    };
    if let Some(url) = &canonical {
        tags.push(format!(r#"<link rel="canonical" href="{}">"#, escape_attr(url)));
    }

    tags.push(meta_property("og:type", meta.og_type.as_str()));
    tags.push(meta_property(
        "og:title",
        meta.og_title.as_deref().unwrap_or(&meta.title),
    ));
    if !description.is_empty() {
        tags.push(meta_property("og:description", description));
    }
    if let Some(url) = &canonical {
        tags.push(meta_property("og:url", url));
    }
    tags.push(meta_property("og:site_name", &site.title));
    if let Some(image) = meta.image.as_deref().filter(|i| !i.is_empty()) {
        tags.push(meta_property("og:image", &site.absolute(image)));
    }
    if let Some(date) = &meta.published {
        tags.push(meta_property("article:published_time", date));
    }
    if let Some(author) = &meta.author {
        tags.push(meta_property("article:author", author));
    }

    if ctx.config.build.rss {
        tags.push(format!(
            r#"<link rel="alternate" type="application/rss+xml" title="{} Blog" href="/blog/rss.xml">"#,
            escape_attr(&site.title)
        ));
    }

    tags.join("\n    ")
}
