//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `page` - HTML document shell
//! - `css` - Site stylesheet, written to `styles.css`
//!
//! ```ignore
//! use embed::page::{LAYOUT_HTML, LayoutVars};
//!
//! let html = LAYOUT_HTML.render(&LayoutVars { title: "About", ..vars });
//! ```

mod template;

pub use template::{Template, TemplateVars, substitute};

pub mod page {
    use super::{Template, TemplateVars, substitute};

    /// Marker for the document shell.
    pub struct Layout;

    /// Variables for layout.html. Every value except `lang` is HTML.
    pub struct LayoutVars<'a> {
        pub lang: &'a str,
        /// Already escaped.
        pub title: &'a str,
        pub head: &'a str,
        pub nav: &'a str,
        pub main: &'a str,
        pub footer: &'a str,
    }

    impl TemplateVars for LayoutVars<'_> {
        type Target = Layout;

        fn apply(&self, content: &str) -> String {
            let lang = crate::utils::html::escape_attr(self.lang);
            substitute(
                content,
                &[
                    ("__LANG__", lang.as_ref()),
                    ("__TITLE__", self.title),
                    ("__HEAD__", self.head),
                    ("__NAV__", self.nav),
                    ("__MAIN__", self.main),
                    ("__FOOTER__", self.footer),
                ],
            )
        }
    }

    pub const LAYOUT_HTML: Template<Layout> = Template::new(include_str!("page/layout.html"));
}

pub mod css {
    /// Stylesheet served at `/styles.css`.
    pub const STYLES_CSS: &str = include_str!("css/styles.css");
}

#[cfg(test)]
mod tests {
    use super::page::{LAYOUT_HTML, LayoutVars};

    #[test]
    fn test_layout_fills_every_slot() {
        let main = String::from("<h1>Body __NAV__</h1>");
        let html = LAYOUT_HTML.render(&LayoutVars {
            lang: "en",
            title: "About | TradeNexus",
            head: "<meta name=\"x\">",
            nav: "<nav></nav>",
            main: &main,
            footer: "<footer></footer>",
        });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<title>About | TradeNexus</title>"));
        assert!(html.contains("<h1>Body __NAV__</h1>"));
        assert!(!html.contains("__MAIN__"));
        assert!(!html.contains("__FOOTER__"));
    }

    #[test]
    fn test_stylesheet_has_component_classes() {
        for class in [".btn-primary", ".card-hover", ".container-xl", ".prose"] {
            assert!(super::css::STYLES_CSS.contains(class), "missing {class}");
        }
    }
}
