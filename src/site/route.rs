//! Typed page routes.
//!
//! - Internal representation: decoded segments
//! - Browser boundary: decode on input ([`Route::from_url`]), encode on
//!   output ([`Route::href`])

use std::fmt;
use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A page address. Detail routes carry the slug from the URL; whether a
/// record exists for it is decided at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Route {
    Home,
    About,
    Contact,
    Services,
    Service(String),
    CaseStudies,
    CaseStudy(String),
    Blog,
    BlogPost(String),
    /// Category listing, keyed by the slugified category label.
    BlogCategory(String),
    NotFound,
}

impl Route {
    /// Fixed pages that exist regardless of content.
    pub const STATIC: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::CaseStudies,
        Route::Blog,
        Route::Contact,
    ];

    /// Parse a browser URL path (percent-encoded, may carry query/fragment).
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());

        let mut segments: Vec<&str> = decoded.split('/').filter(|s| !s.is_empty()).collect();
        if segments.last() == Some(&"index.html") {
            segments.pop();
        }

        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About,
            ["contact"] => Self::Contact,
            ["services"] => Self::Services,
            ["services", slug] => Self::Service((*slug).to_string()),
            ["case-studies"] => Self::CaseStudies,
            ["case-studies", slug] => Self::CaseStudy((*slug).to_string()),
            ["blog"] => Self::Blog,
            ["blog", "category", label] => Self::BlogCategory((*label).to_string()),
            ["blog", slug] => Self::BlogPost((*slug).to_string()),
            _ => Self::NotFound,
        }
    }

    /// Decoded URL path. Pages end with `/`.
    pub fn permalink(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::About => "/about/".into(),
            Self::Contact => "/contact/".into(),
            Self::Services => "/services/".into(),
            Self::Service(slug) => format!("/services/{slug}/"),
            Self::CaseStudies => "/case-studies/".into(),
            Self::CaseStudy(slug) => format!("/case-studies/{slug}/"),
            Self::Blog => "/blog/".into(),
            Self::BlogPost(slug) => format!("/blog/{slug}/"),
            Self::BlogCategory(label) => format!("/blog/category/{label}/"),
            Self::NotFound => "/404.html".into(),
        }
    }

    /// Percent-encoded permalink for use in `href` attributes.
    pub fn href(&self) -> String {
        self.permalink()
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// File the page is written to under `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        match self {
            Self::NotFound => output_dir.join("404.html"),
            _ => {
                let permalink = self.permalink();
                output_dir
                    .join(permalink.trim_matches('/'))
                    .join("index.html")
            }
        }
    }

    /// Top-level navigation section this route belongs to.
    pub fn section(&self) -> Route {
        match self {
            Self::Service(_) => Self::Services,
            Self::CaseStudy(_) => Self::CaseStudies,
            Self::BlogPost(_) | Self::BlogCategory(_) => Self::Blog,
            other => other.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.permalink())
    }
}
