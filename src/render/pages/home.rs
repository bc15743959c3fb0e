use super::cta;
use crate::content::model::metric_label;
use crate::content::resolve::sorted_by_date_desc;
use crate::render::components::{
    Button, Size, Variant, Width, actions, badge, card, container, grid, hero, meta, section,
    section_heading, stats,
};
use crate::render::format::{EXCERPT_LEN, excerpt};
use crate::render::{Context, Page, PageMeta};
use crate::site::Route;
use crate::utils::date::format_numeric;
use crate::utils::html::escape;

const FEATURED_SERVICES: usize = 3;
const LATEST_POSTS: usize = 3;

pub fn render(ctx: &Context) -> Page {
    let site = &ctx.config.site;
    let company = &ctx.store.company().company;

    let headline = if site.tagline.is_empty() {
        "Empowering Energy Analytics with AI Intelligence"
    } else {
        site.tagline.as_str()
    };
    let lead = [company.services_overview.as_str(), site.description.as_str()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or_default();

    let hero = hero(&format!(
        "<h1>{}</h1><p class=\"lead\">{}</p>{}{}",
        escape(headline),
        escape(lead),
        actions([
            Button::link("Get Started Today", Route::Contact.href()).size(Size::Lg),
            Button::link("Explore Services", Route::Services.href())
                .variant(Variant::Secondary)
                .size(Size::Lg),
        ]),
        stats(
            company
                .statistics
                .iter()
                .take(4)
                .map(|(k, v)| (v, metric_label(k)))
        )
    ));

    let mut body = hero;
    body.push_str(&services_section(ctx));
    body.push_str(&about_preview(ctx));
    body.push_str(&latest_posts(ctx));
    body.push_str(&cta(
        "Ready to Transform Your Energy Trading?",
        &format!(
            "Talk to the {} team about analytics built for your trading desk.",
            ctx.site()
        ),
        [
            Button::link("Contact Us", Route::Contact.href()).size(Size::Lg),
            Button::link("View Case Studies", Route::CaseStudies.href())
                .variant(Variant::Outline)
                .size(Size::Lg),
        ],
    ));

    let title = if site.tagline.is_empty() {
        site.title.clone()
    } else {
        format!("{} - {}", site.title, site.tagline)
    };
    Page {
        meta: PageMeta::new(title, lead),
        body,
    }
}

fn services_section(ctx: &Context) -> String {
    let services = ctx.store.services();
    if services.is_empty() {
        return String::new();
    }

    let cards = services.iter().take(FEATURED_SERVICES).map(|s| {
        card(&format!(
            r#"{}<h3>{}</h3><p>{}</p><a class="more" href="{}">Learn More &rarr;</a>"#,
            badge(&s.category),
            escape(&s.title),
            escape(&s.short_description),
            Route::Service(s.slug.clone()).href()
        ))
    });

    let inner = format!(
        "{}{}{}",
        section_heading(
            "Comprehensive Energy Analytics Solutions",
            Some("From real-time market data to risk management, our platform covers the full trading lifecycle.")
        ),
        grid(3, cards),
        format_args!(
            r#"<div class="center">{}</div>"#,
            actions([Button::link("View All Services", Route::Services.href())
                .variant(Variant::Outline)])
        )
    );
    section("", &container(Width::Xl, &inner))
}

fn about_preview(ctx: &Context) -> String {
    let company = &ctx.store.company().company;
    if company.description.is_empty() {
        return String::new();
    }

    let location = if company.location.is_empty() {
        String::new()
    } else {
        format!(" in {}", company.location)
    };
    let inner = format!(
        "<h2>{}</h2><p class=\"lead\">{}</p>{}",
        escape(&format!("Leading Energy Analytics Innovation{location}")),
        escape(&company.description),
        actions([Button::link("Learn About Us", Route::About.href())])
    );
    section("section-alt", &container(Width::Lg, &inner))
}

fn latest_posts(ctx: &Context) -> String {
    let posts = sorted_by_date_desc(ctx.store.blogs());
    if posts.is_empty() {
        return String::new();
    }

    let cards = posts.into_iter().take(LATEST_POSTS).map(|b| {
        card(&format!(
            r#"{}<h3>{}</h3><p>{}</p><a class="more" href="{}">Read Article &rarr;</a>"#,
            meta(&[&b.category, &format_numeric(&b.date)]),
            escape(&b.title),
            escape(&excerpt(&b.excerpt, EXCERPT_LEN)),
            Route::BlogPost(b.slug.clone()).href()
        ))
    });

    let inner = format!(
        "{}{}",
        section_heading("Latest Insights", Some("Analysis and commentary from our team.")),
        grid(3, cards)
    );
    section("", &container(Width::Xl, &inner))
}
