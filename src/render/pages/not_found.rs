use super::titled;
use crate::render::components::{Button, Variant, Width, actions, container};
use crate::render::{Context, Page, PageMeta};
use crate::site::Route;
use crate::utils::html::escape;

/// Not-found page for `requested`. The wording and the way back depend on
/// which collection the missing page belongs to.
pub fn render(ctx: &Context, requested: &Route) -> Page {
    let (what, back_label, back) = match requested {
        Route::Service(_) => ("Service", "View All Services", Route::Services),
        Route::CaseStudy(_) => ("Case Study", "View All Case Studies", Route::CaseStudies),
        Route::BlogPost(_) => ("Blog Post", "Back to Blog", Route::Blog),
        Route::BlogCategory(_) => ("Category", "Back to Blog", Route::Blog),
        _ => ("Page", "Browse Services", Route::Services),
    };

    let message = format!(
        "The {} you're looking for doesn't exist or has been moved.",
        what.to_lowercase()
    );
    let inner = format!(
        r#"<div class="code">404</div><h1>{} Not Found</h1><p class="lead">{}</p>{}"#,
        escape(what),
        escape(&message),
        actions([
            Button::link("Go Home", Route::Home.href()),
            Button::link(back_label, back.href()).variant(Variant::Outline),
        ])
    );

    Page {
        meta: PageMeta::new(titled(&format!("{what} Not Found"), ctx.site()), message),
        body: format!(
            r#"<section class="not-found">{}</section>"#,
            container(Width::Md, &format!(r#"<div class="center">{inner}</div>"#))
        ),
    }
}
