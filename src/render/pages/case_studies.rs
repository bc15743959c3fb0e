use super::{cta, titled};
use crate::content::model::CaseStudy;
use crate::content::resolve::{count_in_group, find_by_slug, find_related, group_labels};
use crate::render::components::{
    Button, Card, Size, Variant, Width, actions, badge, card, container, grid, hero, list_dots,
    meta, section, section_heading, tags,
};
use crate::render::format::split_result;
use crate::render::{Context, Page, PageMeta};
use crate::site::Route;
use crate::utils::html::escape;

/// Results shown as headline metrics; the rest render as plain cards.
const METRIC_RESULTS: usize = 4;

pub fn index(ctx: &Context) -> Page {
    let studies = ctx.store.case_studies();

    let mut body = hero(
        "<h1>Success Stories</h1><p class=\"lead\">How energy companies use our analytics to trade smarter, manage risk and stay compliant.</p>",
    );

    let industries = group_labels(studies);
    if !industries.is_empty() {
        let cards = industries.iter().map(|label| {
            let n = count_in_group(studies, label);
            Card::plain(Size::Sm).render(&format!(
                "<h3>{}</h3><p>{n} case {}</p>",
                escape(label),
                if n == 1 { "study" } else { "studies" }
            ))
        });
        let inner = format!("{}{}", section_heading("Industries We Serve", None), grid(4, cards));
        body.push_str(&section("section-alt", &container(Width::Xl, &inner)));
    }

    if !studies.is_empty() {
        let cards = studies.iter().map(study_card);
        body.push_str(&section("", &container(Width::Xl, &grid(2, cards))));
    }

    body.push_str(&closing_cta());

    Page {
        meta: PageMeta::new(
            titled("Case Studies", ctx.site()),
            "Client success stories in energy trading analytics.",
        ),
        body,
    }
}

fn study_card(study: &CaseStudy) -> String {
    let results: Vec<_> = study.results.iter().take(METRIC_RESULTS).collect();
    card(&format!(
        "{}{}<h3>{}</h3><h4>Challenge</h4><p>{}</p><h4>Solution</h4><p>{}</p>{}{}{}",
        badge(&study.industry),
        meta(&[&study.duration]),
        escape(&study.title),
        escape(&study.challenge),
        escape(&study.solution),
        if results.is_empty() {
            String::new()
        } else {
            format!("<h4>Key Results</h4>{}", list_dots(&results, "benefits"))
        },
        tags(&study.technologies),
        actions([Button::link(
            "Read Full Case Study",
            Route::CaseStudy(study.slug.clone()).href()
        )
        .size(Size::Sm)])
    ))
}

/// First [`METRIC_RESULTS`] results as figure/label metrics, the rest as
/// plain statements.
fn results_section(results: &[String]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let split = METRIC_RESULTS.min(results.len());
    let (metrics, rest) = results.split_at(split);

    let metrics = metrics.iter().map(|r| {
        let (figure, label) = split_result(r);
        Card::plain(Size::Md).render(&format!(
            r#"<div class="metric"><div class="metric-value">{}</div><p>{}</p></div>"#,
            escape(figure),
            escape(label)
        ))
    });
    let mut inner = format!(
        "{}{}",
        section_heading(
            "Measurable Results",
            Some("The impact our solution delivered."),
        ),
        grid(4, metrics)
    );
    if !rest.is_empty() {
        let cards = rest
            .iter()
            .map(|r| Card::plain(Size::Md).render(&format!("<p>{}</p>", escape(r))));
        inner.push_str(&grid(3, cards));
    }
    section("section-alt", &container(Width::Xl, &inner))
}

pub fn detail(ctx: &Context, slug: &str) -> Option<Page> {
    let study = find_by_slug(ctx.store.case_studies(), slug)?;
    let related = find_related(ctx.store.case_studies(), study, ctx.related_limit());

    let mut body = hero(&format!(
        "{}{}<h1>{}</h1><p class=\"lead\">{}</p>{}",
        badge(&study.industry),
        meta(&[&study.duration, &study.client]),
        escape(&study.title),
        escape(&study.description),
        actions([Button::link("All Case Studies", Route::CaseStudies.href())
            .variant(Variant::Outline)
            .size(Size::Sm)])
    ));

    let columns = [
        format!("<h2>The Challenge</h2><p>{}</p>", escape(&study.challenge)),
        format!(
            "<h2>Our Solution</h2><p>{}</p>{}",
            escape(&study.solution),
            tags(&study.technologies)
        ),
    ]
    .map(|inner| Card::plain(Size::Lg).render(&inner));
    body.push_str(&section("", &container(Width::Xl, &grid(2, columns))));

    body.push_str(&results_section(&study.results));

    if !related.is_empty() {
        let cards = related.iter().map(|r| {
            card(&format!(
                "{}<h3>{}</h3><p>{}</p><a class=\"more\" href=\"{}\">Read Case Study &rarr;</a>",
                meta(&[&r.duration]),
                escape(&r.title),
                escape(&r.description),
                Route::CaseStudy(r.slug.clone()).href()
            ))
        });
        let intro = format!("More results from the {} industry.", study.industry);
        let inner = format!(
            "{}{}",
            section_heading("Related Case Studies", Some(&intro)),
            grid(3, cards)
        );
        body.push_str(&section("", &container(Width::Xl, &inner)));
    }

    body.push_str(&closing_cta());

    Some(Page {
        meta: PageMeta::new(
            titled(&format!("{} - Case Study", study.title), ctx.site()),
            &study.description,
        )
        .keywords(&study.keywords),
        body,
    })
}

fn closing_cta() -> String {
    cta(
        "Ready to Create Your Success Story?",
        "Let's talk about the results analytics can deliver for your business.",
        [
            Button::link("Start Your Project", Route::Contact.href()).size(Size::Lg),
            Button::link("Explore Services", Route::Services.href())
                .variant(Variant::Outline)
                .size(Size::Lg),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::render;

    #[test]
    fn test_results_split_into_metrics_and_plain() {
        let html = results_section(&[
            "45% faster settlement".into(),
            "$2M saved".into(),
            "99.9% uptime".into(),
            "3x throughput".into(),
            "Full audit trail".into(),
        ]);
        assert_eq!(html.matches(r#"class="metric-value""#).count(), 4);
        assert!(html.contains(r#"<div class="metric-value">45%</div><p>faster settlement</p>"#));
        assert!(html.contains("<p>Full audit trail</p>"));
    }

    #[test]
    fn test_results_fewer_than_four() {
        let html = results_section(&["12% lower cost".into()]);
        assert_eq!(html.matches(r#"class="metric-value""#).count(), 1);
        assert_eq!(results_section(&[]), "");
    }

    #[test]
    fn test_case_study_detail() {
        let html = render(Route::CaseStudy("grid".into())).html;
        assert!(html.contains("<title>Study 1 - Case Study | TradeNexus</title>"));
        assert!(html.contains("Related Case Studies"));
        assert!(html.contains("/case-studies/solar/"));
    }

    #[test]
    fn test_case_studies_index_counts() {
        let html = render(Route::CaseStudies).html;
        assert!(html.contains("<p>2 case studies</p>"));
        assert!(html.contains("Read Full Case Study"));
    }
}
