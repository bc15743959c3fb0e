//! Blog index, article pages and per-category listings.

use super::{cta, titled};
use crate::content::model::Blog;
use crate::content::paths::blog_categories;
use crate::content::resolve::{find_by_slug, find_related, sorted_by_date_desc};
use crate::content::segment::{BlockKind, segments};
use crate::render::components::{
    Button, Card, Size, Variant, Width, actions, badge, card, container, grid, hero, meta,
    section, section_heading, stats, tags,
};
use crate::render::format::{EXCERPT_LEN, excerpt};
use crate::render::{Context, OgType, Page, PageMeta};
use crate::site::Route;
use crate::utils::date::{format_long, format_numeric};
use crate::utils::html::escape;
use crate::utils::plural::plural_s;

fn post_card(post: &Blog) -> String {
    card(&format!(
        r#"{}<h3>{}</h3><p>{}</p>{}<a class="more" href="{}">Read Article &rarr;</a>"#,
        meta(&[&post.category, &post.read_time]),
        escape(&post.title),
        escape(&excerpt(&post.excerpt, EXCERPT_LEN)),
        meta(&[&format!("By {}", post.author), &format_numeric(&post.date)]),
        Route::BlogPost(post.slug.clone()).href()
    ))
}

fn feed_cta(ctx: &Context) -> String {
    let mut buttons = vec![Button::link("Contact Our Analysts", Route::Contact.href()).size(Size::Lg)];
    if ctx.config.build.rss {
        buttons.push(
            Button::link("Subscribe via RSS", "/blog/rss.xml")
                .variant(Variant::Outline)
                .size(Size::Lg),
        );
    }
    cta(
        "Stay Updated",
        "Get the latest energy market analysis and trading insights.",
        buttons,
    )
}

pub fn index(ctx: &Context) -> Page {
    let posts = sorted_by_date_desc(ctx.store.blogs());
    let categories = blog_categories(ctx.store.blogs());

    let published = posts.len().to_string();
    let category_count = categories.len().to_string();
    let mut body = hero(&format!(
        "<h1>Energy Analytics Insights</h1><p class=\"lead\">Market analysis, trading strategy and regulatory updates from our analysts.</p>{}",
        stats([
            (published.as_str(), "Articles Published".to_string()),
            (category_count.as_str(), "Categories".to_string()),
        ])
    ));

    if let Some((featured, rest)) = posts.split_first() {
        let inner = Card::plain(Size::Lg).render(&format!(
            r#"{}{}<h2>{}</h2><p>{}</p>{}{}"#,
            badge("Featured"),
            meta(&[&featured.category, &featured.read_time]),
            escape(&featured.title),
            escape(&featured.excerpt),
            meta(&[
                &format!("By {}", featured.author),
                &format_numeric(&featured.date)
            ]),
            actions([Button::link(
                "Read More",
                Route::BlogPost(featured.slug.clone()).href()
            )])
        ));
        body.push_str(&section("", &container(Width::Lg, &inner)));

        let cards = categories.iter().map(|category| {
            let n = posts.iter().filter(|p| category.contains(p)).count();
            Card::plain(Size::Sm).render(&format!(
                r#"<h3>{}</h3><p>{n} article{}</p><a class="more" href="{}">View All &rarr;</a>"#,
                escape(category.name()),
                plural_s(n),
                Route::BlogCategory(category.slug.clone()).href()
            ))
        });
        let inner = format!(
            "{}{}",
            section_heading("Browse by Category", None),
            grid(4, cards)
        );
        body.push_str(&section("section-alt", &container(Width::Xl, &inner)));

        if !rest.is_empty() {
            let inner = format!(
                "{}{}",
                section_heading("Latest Articles", None),
                grid(3, rest.iter().map(|p| post_card(p)))
            );
            body.push_str(&section("", &container(Width::Xl, &inner)));
        }
    }

    body.push_str(&feed_cta(ctx));

    Page {
        meta: PageMeta::new(
            titled("Energy Analytics Blog", ctx.site()),
            "Energy market analysis, trading strategy and regulatory insights.",
        ),
        body,
    }
}

/// Listing for one category. `label_slug` is matched against the slugified
/// labels, so every label sharing the slug is listed; unknown categories are
/// not found.
pub fn category(ctx: &Context, label_slug: &str) -> Option<Page> {
    let blogs = ctx.store.blogs();
    let category = blog_categories(blogs)
        .into_iter()
        .find(|c| c.slug == label_slug)?;
    let label = category.name();
    let posts: Vec<&Blog> = sorted_by_date_desc(blogs)
        .into_iter()
        .filter(|p| category.contains(p))
        .collect();

    let mut body = hero(&format!(
        "{}<h1>{}</h1><p class=\"lead\">{} article{} in this category.</p>{}",
        badge("Category"),
        escape(label),
        posts.len(),
        plural_s(posts.len()),
        actions([Button::link("All Articles", Route::Blog.href())
            .variant(Variant::Ghost)
            .size(Size::Sm)])
    ));
    body.push_str(&section(
        "",
        &container(Width::Xl, &grid(3, posts.iter().map(|p| post_card(p)))),
    ));
    body.push_str(&feed_cta(ctx));

    Some(Page {
        meta: PageMeta::new(
            titled(&format!("{label} Articles"), &format!("{} Blog", ctx.site())),
            format!("Articles about {} from the {} blog.", label, ctx.site()),
        ),
        body,
    })
}

/// Article body: `# ` blocks become `<h2>`, `## ` blocks `<h3>`.
fn article_body(content: &str) -> String {
    segments(content)
        .map(|block| {
            let text = escape(block.text);
            match block.kind {
                BlockKind::Heading1 => format!("<h2>{text}</h2>"),
                BlockKind::Heading2 => format!("<h3>{text}</h3>"),
                BlockKind::Paragraph => format!("<p>{text}</p>"),
            }
        })
        .collect()
}

pub fn detail(ctx: &Context, slug: &str) -> Option<Page> {
    let post = find_by_slug(ctx.store.blogs(), slug)?;
    let related = find_related(ctx.store.blogs(), post, ctx.related_limit());

    let mut body = hero(&format!(
        "{}{}<h1>{}</h1><p class=\"lead\">{}</p>{}{}",
        badge(&post.category),
        meta(&[&post.read_time]),
        escape(&post.title),
        escape(&post.excerpt),
        meta(&[&format!("By {}", post.author), &format_long(&post.date)]),
        actions([Button::link("Back to Blog", Route::Blog.href())
            .variant(Variant::Ghost)
            .size(Size::Sm)])
    ));

    let tag_list = if post.tags.is_empty() {
        String::new()
    } else {
        format!("<h3>Tags</h3>{}", tags(&post.tags))
    };
    body.push_str(&section(
        "",
        &container(
            Width::Md,
            &format!(
                r#"<article class="prose">{}</article>{tag_list}"#,
                article_body(&post.content)
            ),
        ),
    ));

    if !related.is_empty() {
        let intro = format!(
            "Continue reading with more insights on {}.",
            post.category.to_lowercase()
        );
        let inner = format!(
            "{}{}",
            section_heading("Related Articles", Some(&intro)),
            grid(3, related.iter().map(|p| post_card(p)))
        );
        body.push_str(&section("section-alt", &container(Width::Xl, &inner)));
    }

    body.push_str(&feed_cta(ctx));

    let page_meta = PageMeta {
        og_type: OgType::Article,
        og_title: Some(post.title.clone()),
        image: post.image.clone(),
        published: Some(post.date.clone()),
        author: Some(post.author.clone()),
        ..PageMeta::new(post.page_title(ctx.site()), post.page_description())
            .keywords(&post.keywords)
    };

    Some(Page {
        meta: page_meta,
        body,
    })
}
