//! Reusable HTML building blocks.
//!
//! Text arguments are escaped here; arguments named `inner` or ending in
//! `_html` are inserted verbatim and must already be markup.

use super::Context;
use crate::site::Route;
use crate::utils::html::{escape, escape_attr};

// ============================================================================
// Layout primitives
// ============================================================================

/// Maximum content width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Width {
    Md,
    Lg,
    #[default]
    Xl,
}

impl Width {
    const fn class(self) -> &'static str {
        match self {
            Self::Md => "container-md",
            Self::Lg => "container-lg",
            Self::Xl => "container-xl",
        }
    }
}

pub fn container(width: Width, inner: &str) -> String {
    format!(r#"<div class="container {}">{inner}</div>"#, width.class())
}

/// A page band. `class` adds modifiers such as `section-alt`.
pub fn section(class: &str, inner: &str) -> String {
    if class.is_empty() {
        format!(r#"<section class="section">{inner}</section>"#)
    } else {
        format!(r#"<section class="section {class}">{inner}</section>"#)
    }
}

/// Dark gradient band at the top of a page.
pub fn hero(inner: &str) -> String {
    format!(r#"<section class="hero">{}</section>"#, container(Width::Xl, inner))
}

pub fn section_heading(title: &str, intro: Option<&str>) -> String {
    let intro = intro
        .filter(|s| !s.is_empty())
        .map(|s| format!("<p>{}</p>", escape(s)))
        .unwrap_or_default();
    format!(
        r#"<div class="section-heading"><h2>{}</h2>{intro}</div>"#,
        escape(title)
    )
}

/// Responsive grid with 1 to 4 columns on wide screens.
pub fn grid(columns: u8, items: impl IntoIterator<Item = String>) -> String {
    let columns = columns.clamp(1, 4);
    let body: String = items.into_iter().collect();
    if columns == 1 {
        format!(r#"<div class="grid">{body}</div>"#)
    } else {
        format!(r#"<div class="grid grid-{columns}">{body}</div>"#)
    }
}

// ============================================================================
// Button
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Renders an `<a>` when given an href, otherwise a `<button>`.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    href: Option<String>,
    variant: Variant,
    size: Size,
    submit: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            href: None,
            variant: Variant::default(),
            size: Size::default(),
            submit: false,
        }
    }

    pub fn link(label: &'a str, href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::new(label)
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Form submit button.
    pub fn submit(mut self) -> Self {
        self.submit = true;
        self
    }

    fn class(&self) -> String {
        let variant = match self.variant {
            Variant::Primary => "btn-primary",
            Variant::Secondary => "btn-secondary",
            Variant::Outline => "btn-outline",
            Variant::Ghost => "btn-ghost",
        };
        format!("btn {variant} btn-{}", self.size.suffix())
    }

    pub fn render(&self) -> String {
        let label = escape(self.label);
        match &self.href {
            Some(href) => format!(
                r#"<a class="{}" href="{}">{label}</a>"#,
                self.class(),
                escape_attr(href)
            ),
            None => format!(
                r#"<button type="{}" class="{}">{label}</button>"#,
                if self.submit { "submit" } else { "button" },
                self.class()
            ),
        }
    }
}

/// Row of buttons.
pub fn actions<'a>(buttons: impl IntoIterator<Item = Button<'a>>) -> String {
    let inner: String = buttons.into_iter().map(|b| b.render()).collect();
    format!(r#"<div class="actions">{inner}</div>"#)
}

// ============================================================================
// Card
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub hover: bool,
    pub padding: Size,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            hover: true,
            padding: Size::Md,
        }
    }
}

impl Card {
    pub const fn plain(padding: Size) -> Self {
        Self {
            hover: false,
            padding,
        }
    }

    pub fn render(&self, inner: &str) -> String {
        let hover = if self.hover { " card-hover" } else { "" };
        format!(
            r#"<div class="card card-{}{hover}">{inner}</div>"#,
            self.padding.suffix()
        )
    }
}

/// Hovering card with medium padding.
pub fn card(inner: &str) -> String {
    Card::default().render(inner)
}

// ============================================================================
// Inline pieces
// ============================================================================

pub fn badge(text: &str) -> String {
    format!(r#"<span class="badge">{}</span>"#, escape(text))
}

/// Tag pills; empty string for no tags.
pub fn tags<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let inner: String = items
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape(t.as_ref())))
        .collect();
    format!(r#"<div class="tags">{inner}</div>"#)
}

/// Muted line of metadata. Empty parts are dropped.
pub fn meta(parts: &[&str]) -> String {
    let inner: String = parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| format!("<span>{}</span>", escape(p)))
        .collect();
    format!(r#"<div class="meta">{inner}</div>"#)
}

/// Value/label pairs, e.g. company statistics.
pub fn stats<'s>(items: impl IntoIterator<Item = (&'s str, String)>) -> String {
    let inner: String = items
        .into_iter()
        .map(|(value, label)| {
            format!(
                r#"<div class="stat"><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
                escape(value),
                escape(&label)
            )
        })
        .collect();
    if inner.is_empty() {
        return inner;
    }
    format!(r#"<div class="stats">{inner}</div>"#)
}

/// Bulleted list. `class` adds a modifier such as `benefits`.
pub fn list_dots<S: AsRef<str>>(items: &[S], class: &str) -> String {
    let inner: String = items
        .iter()
        .map(|i| format!("<li>{}</li>", escape(i.as_ref())))
        .collect();
    if class.is_empty() {
        format!(r#"<ul class="list-dots">{inner}</ul>"#)
    } else {
        format!(r#"<ul class="list-dots {class}">{inner}</ul>"#)
    }
}

// ============================================================================
// Navigation and footer
// ============================================================================

const NAV_LINKS: [(&str, Route); 6] = [
    ("Home", Route::Home),
    ("Services", Route::Services),
    ("About", Route::About),
    ("Case Studies", Route::CaseStudies),
    ("Blog", Route::Blog),
    ("Contact", Route::Contact),
];

/// Two-letter brand mark: the title's capitals, else its first letter.
fn monogram(title: &str) -> String {
    let caps: String = title.chars().filter(|c| c.is_uppercase()).take(2).collect();
    if caps.is_empty() {
        super::format::initial(title)
    } else {
        caps
    }
}

fn brand(ctx: &Context) -> String {
    let site = &ctx.config.site;
    let tagline = if site.tagline.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="brand-tagline">{}</span>"#, escape(&site.tagline))
    };
    format!(
        r#"<a class="brand" href="/"><span class="brand-mark">{}</span><span><span class="brand-name">{}</span>{tagline}</span></a>"#,
        escape(&monogram(&site.title)),
        escape(&site.title)
    )
}

/// Top navigation. The current section is marked active and the services
/// entry carries a submenu of every service.
pub fn nav(ctx: &Context, current: &Route) -> String {
    let section = current.section();
    let mut links = String::new();

    for (label, route) in &NAV_LINKS {
        let active = if *route == section { " active" } else { "" };
        let submenu = match route {
            Route::Services if !ctx.store.services().is_empty() => {
                let items: String = ctx
                    .store
                    .services()
                    .iter()
                    .map(|s| {
                        format!(
                            r#"<a href="{}">{}</a>"#,
                            escape_attr(&Route::Service(s.slug.clone()).href()),
                            escape(&s.title)
                        )
                    })
                    .collect();
                format!(r#"<div class="submenu">{items}</div>"#)
            }
            _ => String::new(),
        };
        links.push_str(&format!(
            r#"<li class="nav-item{active}"><a href="{}">{label}</a>{submenu}</li>"#,
            route.href()
        ));
    }

    let cta = Button::link("Get Started", Route::Contact.href()).size(Size::Sm);
    format!(
        r#"<nav class="site-nav"><div class="container container-xl nav-inner">{}<ul class="nav-links">{links}</ul>{}</div></nav>"#,
        brand(ctx),
        cta.render()
    )
}

fn footer_column(title: &str, items_html: &str) -> String {
    format!("<div><h4>{}</h4><ul>{items_html}</ul></div>", escape(title))
}

pub fn footer(ctx: &Context) -> String {
    let site = &ctx.config.site;
    let company = ctx.store.company();

    let blurb = [
        company.company.description.as_str(),
        site.description.as_str(),
    ]
    .into_iter()
    .find(|s| !s.is_empty())
    .map(|s| format!("<p>{}</p>", escape(s)))
    .unwrap_or_default();

    let contact = &company.contact;
    let contact_lines: String = [
        contact.headquarters.locality(),
        contact.phone.clone(),
        contact.email.clone(),
    ]
    .iter()
    .filter(|s| !s.is_empty())
    .map(|s| format!("<li>{}</li>", escape(s)))
    .collect();

    let services: String = ctx
        .store
        .services()
        .iter()
        .map(|s| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape_attr(&Route::Service(s.slug.clone()).href()),
                escape(&s.title)
            )
        })
        .collect();

    let company_links: String = [
        ("About Us", Route::About),
        ("Case Studies", Route::CaseStudies),
        ("Blog", Route::Blog),
        ("Contact", Route::Contact),
    ]
    .iter()
    .map(|(label, route)| format!(r#"<li><a href="{}">{label}</a></li>"#, route.href()))
    .collect();

    let industries: String = company
        .company
        .industries_served
        .iter()
        .map(|i| format!("<li>{}</li>", escape(i)))
        .collect();

    let columns = [
        format!("<div>{}{blurb}<ul>{contact_lines}</ul></div>", brand(ctx)),
        footer_column("Services", &services),
        footer_column("Company", &company_links),
        footer_column("Industries Served", &industries),
    ];

    let mut bottom_links = String::new();
    if ctx.config.build.rss {
        bottom_links.push_str(r#"<a href="/blog/rss.xml">RSS</a>"#);
    }
    if ctx.config.build.sitemap {
        bottom_links.push_str(r#"<a href="/sitemap.xml">Sitemap</a>"#);
    }
    let bottom = format!(
        "<p>&copy; {} {}. All rights reserved.</p><nav>{bottom_links}</nav>",
        ctx.year,
        escape(&site.title)
    );

    format!(
        r#"<footer class="site-footer"><div class="footer-grid">{}</div><div class="footer-bottom">{}</div></footer>"#,
        container(Width::Xl, &grid(4, columns)),
        container(Width::Xl, &bottom)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_link_and_plain() {
        let link = Button::link("Learn More", "/services/a/")
            .variant(Variant::Outline)
            .size(Size::Sm)
            .render();
        assert_eq!(
            link,
            r#"<a class="btn btn-outline btn-sm" href="/services/a/">Learn More</a>"#
        );

        let plain = Button::new("Send <now>").submit().render();
        assert_eq!(
            plain,
            r#"<button type="submit" class="btn btn-primary btn-md">Send &lt;now&gt;</button>"#
        );
    }

    #[test]
    fn test_card_classes() {
        assert_eq!(card("x"), r#"<div class="card card-md card-hover">x</div>"#);
        assert_eq!(
            Card::plain(Size::Lg).render("y"),
            r#"<div class="card card-lg">y</div>"#
        );
    }

    #[test]
    fn test_tags_empty_and_escaped() {
        assert_eq!(tags::<String>(&[]), "");
        assert!(tags(&["R&D"]).contains("R&amp;D"));
    }

    #[test]
    fn test_section_heading_optional_intro() {
        assert_eq!(
            section_heading("Key Features", None),
            r#"<div class="section-heading"><h2>Key Features</h2></div>"#
        );
        assert!(section_heading("A", Some("b")).contains("<p>b</p>"));
    }

    #[test]
    fn test_monogram() {
        assert_eq!(monogram("TradeNexus"), "TN");
        assert_eq!(monogram("acme"), "A");
    }

    #[test]
    fn test_grid_clamps_columns() {
        assert_eq!(grid(9, [String::from("a")]), r#"<div class="grid grid-4">a</div>"#);
        assert_eq!(grid(1, Vec::new()), r#"<div class="grid"></div>"#);
    }
}
