//! Page rendering: route + content store -> complete HTML document.
//!
//! ```text
//! render/
//! ├── layout      # <head> tags and the document shell
//! ├── components  # buttons, cards, grids, navigation, footer
//! ├── format      # excerpts, result figures
//! └── pages       # one module per page family
//! ```
//!
//! Rendering is a pure function of the store and config, so the build can
//! render routes in parallel and the server can render on demand.

mod components;
mod format;
mod layout;
mod pages;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::site::Route;
use crate::utils::date::DateTimeUtc;

/// Everything a page needs besides its route.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub store: &'a ContentStore,
    pub config: &'a SiteConfig,
    /// Copyright year in the footer.
    pub year: u16,
}

impl<'a> Context<'a> {
    pub fn new(store: &'a ContentStore, config: &'a SiteConfig) -> Self {
        Self {
            store,
            config,
            year: DateTimeUtc::now().year,
        }
    }

    #[inline]
    pub fn site(&self) -> &'a str {
        &self.config.site.title
    }

    #[inline]
    pub fn related_limit(&self) -> usize {
        self.config.build.related_limit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Found,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub status: Status,
    pub html: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Document metadata emitted into `<head>`.
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_type: OgType,
    /// `og:title` when it differs from the document title.
    pub og_title: Option<String>,
    pub image: Option<String>,
    /// Article publication date (ISO).
    pub published: Option<String>,
    pub author: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn keywords(mut self, keywords: &[String]) -> Self {
        self.keywords = keywords.to_vec();
        self
    }
}

/// A rendered page body plus its metadata, before the layout is applied.
#[derive(Debug, Clone)]
pub struct Page {
    pub meta: PageMeta,
    pub body: String,
}

/// Render `route` to a full document.
///
/// Detail routes whose slug has no record, category routes with no posts and
/// [`Route::NotFound`] all produce the not-found page with
/// [`Status::NotFound`].
pub fn render_route(route: &Route, ctx: &Context) -> Rendered {
    let page = match route {
        Route::Home => Some(pages::home::render(ctx)),
        Route::About => Some(pages::about::render(ctx)),
        Route::Contact => Some(pages::contact::render(ctx)),
        Route::Services => Some(pages::services::index(ctx)),
        Route::Service(slug) => pages::services::detail(ctx, slug),
        Route::CaseStudies => Some(pages::case_studies::index(ctx)),
        Route::CaseStudy(slug) => pages::case_studies::detail(ctx, slug),
        Route::Blog => Some(pages::blog::index(ctx)),
        Route::BlogPost(slug) => pages::blog::detail(ctx, slug),
        Route::BlogCategory(label) => pages::blog::category(ctx, label),
        Route::NotFound => None,
    };

    match page {
        Some(page) => Rendered {
            status: Status::Found,
            html: layout::document(ctx, route, &page),
        },
        None => Rendered {
            status: Status::NotFound,
            html: layout::document(ctx, &Route::NotFound, &pages::not_found::render(ctx, route)),
        },
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::model::{CaseStudy, CompanyData};
    use crate::content::resolve::tests::{blog, service};

    pub fn case_study(id: u32, slug: &str, industry: &str) -> CaseStudy {
        CaseStudy {
            id,
            slug: slug.into(),
            title: format!("Study {id}"),
            client: "Client".into(),
            industry: industry.into(),
            challenge: "Challenge".into(),
            solution: "Solution".into(),
            results: vec![
                "45% faster settlement".into(),
                "$2M saved annually".into(),
                "99.9% uptime".into(),
                "3x throughput".into(),
                "Full audit trail".into(),
            ],
            technologies: vec!["Rust".into()],
            duration: "6 months".into(),
            description: "Description".into(),
            image: String::new(),
            keywords: vec![],
        }
    }

    pub fn store() -> ContentStore {
        let mut company = CompanyData::default();
        company.company.name = "TradeNexus".into();
        company.company.industries_served = vec!["Utilities".into()];
        company.contact.email = "info@tradenexus.example".into();
        ContentStore::from_parts(
            vec![
                service(1, "platform", "Analytics"),
                service(2, "limits", "Analytics"),
                service(3, "risk", "Risk"),
            ],
            vec![case_study(1, "grid", "Utilities"), case_study(2, "solar", "Utilities")],
            vec![
                blog(1, "older", "Energy Markets", "2024-01-01"),
                blog(2, "newer", "Energy Markets", "2024-03-01"),
                blog(3, "rules", "Compliance", "2024-02-01"),
            ],
            company,
        )
    }

    pub fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.url = Some("https://tradenexus.example".into());
        config
    }

    pub fn render(route: Route) -> Rendered {
        let (store, config) = (store(), config());
        render_route(&route, &Context::new(&store, &config))
    }

    #[test]
    fn test_every_static_route_renders() {
        let (store, config) = (store(), config());
        let ctx = Context::new(&store, &config);
        for route in crate::content::paths::static_routes(&store) {
            let rendered = render_route(&route, &ctx);
            assert_eq!(rendered.status, Status::Found, "{route}");
            assert!(rendered.html.starts_with("<!DOCTYPE html>"), "{route}");
        }
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        for route in [
            Route::Service("missing".into()),
            Route::CaseStudy("missing".into()),
            Route::BlogPost("missing".into()),
            Route::BlogCategory("missing".into()),
            Route::NotFound,
        ] {
            let rendered = render(route.clone());
            assert_eq!(rendered.status, Status::NotFound, "{route}");
            assert!(rendered.html.contains("404"));
        }
    }

    #[test]
    fn test_not_found_titles_name_the_collection() {
        let html = render(Route::Service("x".into())).html;
        assert!(html.contains("<title>Service Not Found | TradeNexus</title>"));
        let html = render(Route::CaseStudy("x".into())).html;
        assert!(html.contains("<title>Case Study Not Found | TradeNexus</title>"));
        let html = render(Route::BlogPost("x".into())).html;
        assert!(html.contains("<title>Blog Post Not Found | TradeNexus</title>"));
    }

    #[test]
    fn test_empty_store_renders_indexes() {
        let store = ContentStore::default();
        let config = SiteConfig::default();
        let ctx = Context::new(&store, &config);
        for route in Route::STATIC {
            assert_eq!(render_route(&route, &ctx).status, Status::Found, "{route}");
        }
    }
}
