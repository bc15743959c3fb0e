use super::{cta, titled};
use crate::content::model::metric_label;
use crate::render::components::{
    Button, Card, Size, Variant, Width, card, container, grid, hero, list_dots, section,
    section_heading, stats, tags,
};
use crate::render::format::initial;
use crate::render::{Context, Page, PageMeta};
use crate::site::Route;
use crate::utils::html::escape;

pub fn render(ctx: &Context) -> Page {
    let data = ctx.store.company();
    let company = &data.company;
    let name = if company.name.is_empty() {
        ctx.site()
    } else {
        company.name.as_str()
    };

    let mut body = hero(&format!(
        "<h1>About {}</h1><p class=\"lead\">{}</p>{}",
        escape(name),
        escape(&company.description),
        stats(company.statistics.iter().map(|(k, v)| (v, metric_label(k))))
    ));

    if !company.mission.is_empty() || !company.vision.is_empty() {
        let cards = [("Our Mission", &company.mission), ("Our Vision", &company.vision)]
            .into_iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(title, text)| {
                Card::plain(Size::Lg).render(&format!("<h3>{title}</h3><p>{}</p>", escape(text)))
            });
        body.push_str(&section("", &container(Width::Xl, &grid(2, cards))));
    }

    if !company.values.is_empty() {
        let cards = company.values.iter().map(|v| {
            card(&format!(
                r#"<div class="brand-mark">{}</div><h3>{}</h3><p>{}</p>"#,
                escape(&initial(&v.title)),
                escape(&v.title),
                escape(&v.description)
            ))
        });
        let inner = format!(
            "{}{}",
            section_heading(
                "Our Core Values",
                Some("The principles that guide every engagement."),
            ),
            grid(4, cards)
        );
        body.push_str(&section("section-alt", &container(Width::Xl, &inner)));
    }

    if !data.team.is_empty() {
        let cards = data.team.iter().map(|m| {
            card(&format!(
                r#"<h3>{}</h3><div class="meta"><span>{}</span></div><p>{}</p>"#,
                escape(&m.name),
                escape(&m.position),
                escape(&m.bio)
            ))
        });
        let inner = format!("{}{}", section_heading("Leadership Team", None), grid(3, cards));
        body.push_str(&section("", &container(Width::Xl, &inner)));
    }

    body.push_str(&expertise(ctx));

    if !data.certifications.is_empty() || !data.partnerships.is_empty() {
        let cards = [
            ("Certifications", &data.certifications),
            ("Partnerships", &data.partnerships),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(title, items)| card(&format!("<h3>{title}</h3>{}", tags(items))));
        body.push_str(&section("", &container(Width::Xl, &grid(2, cards))));
    }

    body.push_str(&cta(
        "Partner with Energy Analytics Experts",
        &format!("See how {name} can support your trading operations."),
        [
            Button::link("Contact Our Team", Route::Contact.href()).size(Size::Lg),
            Button::link("Explore Services", Route::Services.href())
                .variant(Variant::Outline)
                .size(Size::Lg),
        ],
    ));

    Page {
        meta: PageMeta::new(titled(&format!("About {name}"), ctx.site()), &company.description),
        body,
    }
}

/// Industries served alongside the specializations card.
fn expertise(ctx: &Context) -> String {
    let company = &ctx.store.company().company;
    if company.industries_served.is_empty() && company.specializations.is_empty() {
        return String::new();
    }

    let heading = if company.location.is_empty() {
        "Serving Energy Markets".to_string()
    } else {
        format!("Serving Energy Markets from {}", company.location)
    };
    let industries = format!(
        "<h2>{}</h2><p>Industries we serve:</p>{}",
        escape(&heading),
        list_dots(&company.industries_served, "")
    );
    let specializations = Card::plain(Size::Lg).render(&format!(
        "<h3>Our Expertise</h3>{}",
        list_dots(&company.specializations, "benefits")
    ));

    section(
        "section-alt",
        &container(
            Width::Xl,
            &grid(2, [format!("<div>{industries}</div>"), specializations]),
        ),
    )
}
