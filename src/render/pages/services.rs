use super::{cta, titled};
use crate::content::model::Service;
use crate::content::resolve::{find_by_slug, find_related, group_labels, in_group};
use crate::render::components::{
    Button, Card, Size, Variant, Width, actions, badge, card, container, grid, hero, list_dots,
    section, section_heading, stats,
};
use crate::render::{Context, Page, PageMeta};
use crate::site::Route;
use crate::utils::html::escape;
use crate::utils::plural::plural_s;

const CARD_FEATURES: usize = 4;
const CARD_BENEFITS: usize = 3;

const PROCESS: [(&str, &str); 4] = [
    ("Discovery", "We map your trading workflows, data sources and reporting needs."),
    ("Design", "We shape analytics and models around your markets and risk limits."),
    ("Deploy", "We integrate with your systems and bring your team up to speed."),
    ("Support", "We monitor, tune and extend the platform as your book grows."),
];

pub fn index(ctx: &Context) -> Page {
    let services = ctx.store.services();
    let categories = group_labels(services);

    let mut body = hero(&format!(
        "<h1>Energy Analytics Services</h1><p class=\"lead\">{}</p>{}",
        "Data-driven tools for trading, risk and compliance across power, gas and renewables.",
        stats([
            (
                services.len().to_string().as_str(),
                format!("Service{} Available", plural_s(services.len())),
            ),
            (
                categories.len().to_string().as_str(),
                format!("Categor{}", if categories.len() == 1 { "y" } else { "ies" }),
            ),
        ])
    ));

    if !services.is_empty() {
        let cards = services.iter().map(portfolio_card);
        let inner = format!(
            "{}{}",
            section_heading(
                "Our Service Portfolio",
                Some("Each service can run on its own or as part of an integrated platform."),
            ),
            grid(3, cards)
        );
        body.push_str(&section("", &container(Width::Xl, &inner)));
    }

    if !categories.is_empty() {
        let cards = categories.iter().map(|label| {
            let members = in_group(services, label);
            let titles: Vec<&str> = members.iter().map(|s| s.title.as_str()).collect();
            card(&format!(
                "<h3>{}</h3><div class=\"meta\"><span>{} service{} available</span></div>{}",
                escape(label),
                members.len(),
                plural_s(members.len()),
                list_dots(&titles, "")
            ))
        });
        let inner = format!("{}{}", section_heading("Service Categories", None), grid(3, cards));
        body.push_str(&section("section-alt", &container(Width::Xl, &inner)));
    }

    let steps = PROCESS.iter().enumerate().map(|(i, (title, text))| {
        Card::plain(Size::Md).render(&format!(
            r#"<div class="metric-value">{}</div><h3>{title}</h3><p>{text}</p>"#,
            i + 1
        ))
    });
    let inner = format!(
        "{}{}",
        section_heading("Our Implementation Process", None),
        grid(4, steps)
    );
    body.push_str(&section("", &container(Width::Xl, &inner)));

    body.push_str(&cta(
        "Ready to Get Started?",
        "Schedule a demo and see the platform working on your own market data.",
        [
            Button::link("Request a Demo", Route::Contact.href()).size(Size::Lg),
            Button::link("View Case Studies", Route::CaseStudies.href())
                .variant(Variant::Outline)
                .size(Size::Lg),
        ],
    ));

    Page {
        meta: PageMeta::new(
            titled("Energy Analytics Services", ctx.site()),
            "Energy analytics and trading intelligence services.",
        ),
        body,
    }
}

fn portfolio_card(service: &Service) -> String {
    let features: Vec<_> = service.features.iter().take(CARD_FEATURES).collect();
    let benefits: Vec<_> = service.benefits.iter().take(CARD_BENEFITS).collect();
    let href = Route::Service(service.slug.clone()).href();

    card(&format!(
        "{}<h3>{}</h3><p>{}</p>{}{}{}",
        badge(&service.category),
        escape(&service.title),
        escape(&service.short_description),
        if features.is_empty() {
            String::new()
        } else {
            format!("<h4>Key Features</h4>{}", list_dots(&features, ""))
        },
        if benefits.is_empty() {
            String::new()
        } else {
            format!("<h4>Benefits</h4>{}", list_dots(&benefits, "benefits"))
        },
        actions([
            Button::link("Learn More", href).size(Size::Sm),
            Button::link("Get Demo", Route::Contact.href())
                .variant(Variant::Outline)
                .size(Size::Sm),
        ])
    ))
}

pub fn detail(ctx: &Context, slug: &str) -> Option<Page> {
    let service = find_by_slug(ctx.store.services(), slug)?;
    let related = find_related(ctx.store.services(), service, ctx.related_limit());

    let mut body = hero(&format!(
        "{}<h1>{}</h1><p class=\"lead\">{}</p>{}",
        badge(&service.category),
        escape(&service.title),
        escape(&service.description),
        actions([
            Button::link("Request Demo", Route::Contact.href()).size(Size::Lg),
            Button::link("View Success Stories", Route::CaseStudies.href())
                .variant(Variant::Outline)
                .size(Size::Lg),
        ])
    ));

    let columns = [
        ("Key Features", list_dots(&service.features, "")),
        ("Benefits", list_dots(&service.benefits, "benefits")),
    ]
    .into_iter()
    .map(|(title, list)| Card::plain(Size::Lg).render(&format!("<h2>{title}</h2>{list}")));
    body.push_str(&section("", &container(Width::Xl, &grid(2, columns))));

    if !related.is_empty() {
        let cards = related.iter().map(|r| {
            card(&format!(
                "<h3>{}</h3><p>{}</p>{}",
                escape(&r.title),
                escape(&r.short_description),
                Button::link("Learn More", Route::Service(r.slug.clone()).href())
                    .variant(Variant::Outline)
                    .size(Size::Sm)
                    .render()
            ))
        });
        let intro = format!(
            "Explore other services in the {} category that complement {}.",
            service.category, service.title
        );
        let inner = format!(
            "{}{}",
            section_heading("Related Services", Some(&intro)),
            grid(3, cards)
        );
        body.push_str(&section("section-alt", &container(Width::Xl, &inner)));
    }

    body.push_str(&cta(
        &format!("Ready to Get Started with {}?", service.title),
        "Our team will walk you through a tailored demonstration.",
        [
            Button::link("Schedule a Demo", Route::Contact.href()).size(Size::Lg),
            Button::link("All Services", Route::Services.href())
                .variant(Variant::Outline)
                .size(Size::Lg),
        ],
    ));

    Some(Page {
        meta: PageMeta::new(
            titled(
                &format!("{} - Energy Analytics Service", service.title),
                ctx.site(),
            ),
            &service.description,
        )
        .keywords(&service.keywords),
        body,
    })
}

#[cfg(test)]
mod tests {
    use crate::render::tests::render;
    use crate::site::Route;

    #[test]
    fn test_service_detail_title_and_related() {
        let html = render(Route::Service("platform".into())).html;
        assert!(html.contains("<title>Service 1 - Energy Analytics Service | TradeNexus</title>"));
        assert!(html.contains("Related Services"));
        assert!(html.contains("Explore other services in the Analytics category"));
        assert!(html.contains("Ready to Get Started with Service 1?"));
    }

    #[test]
    fn test_service_detail_without_related() {
        let html = render(Route::Service("risk".into())).html;
        assert!(!html.contains("Related Services"));
    }

    #[test]
    fn test_services_index_categories() {
        let html = render(Route::Services).html;
        assert!(html.contains("2 services available"));
        assert!(html.contains("1 service available"));
        assert!(html.contains("Our Implementation Process"));
    }
}
