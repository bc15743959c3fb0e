//! Static path enumeration for pre-rendering.

use super::model::Blog;
use super::resolve::{group_labels, list_slugs};
use super::store::ContentStore;
use crate::site::{Route, is_path_segment, slugify};

/// Slugs of every collection with detail pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSlugs<'a> {
    pub services: Vec<&'a str>,
    pub case_studies: Vec<&'a str>,
    pub blogs: Vec<&'a str>,
}

pub fn detail_slugs(store: &ContentStore) -> DetailSlugs<'_> {
    DetailSlugs {
        services: list_slugs(store.services()),
        case_studies: list_slugs(store.case_studies()),
        blogs: list_slugs(store.blogs()),
    }
}

/// One blog category listing. Labels that slugify alike ("AI/ML", "AI ML")
/// share the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category<'a> {
    pub slug: String,
    /// Distinct labels in first-appearance order; never empty.
    pub labels: Vec<&'a str>,
}

impl<'a> Category<'a> {
    /// Display name: the first label seen.
    pub fn name(&self) -> &'a str {
        self.labels.first().copied().unwrap_or_default()
    }

    pub fn contains(&self, post: &Blog) -> bool {
        self.labels.contains(&post.category.as_str())
    }
}

/// Blog categories in first-appearance order, merged by slug. Labels with
/// no slug characters get no page.
pub fn blog_categories(blogs: &[Blog]) -> Vec<Category<'_>> {
    let mut categories: Vec<Category> = Vec::new();
    for label in group_labels(blogs) {
        let slug = slugify(label);
        if slug.is_empty() {
            continue;
        }
        match categories.iter_mut().find(|c| c.slug == slug) {
            Some(category) => category.labels.push(label),
            None => categories.push(Category {
                slug,
                labels: vec![label],
            }),
        }
    }
    categories
}

/// Every route to pre-render: fixed pages, then one route per detail slug,
/// then one listing per blog category.
///
/// Slugs that are not a single path segment are skipped: empty ones would
/// collide with the index page, and dot segments or separators would write
/// outside the section.
pub fn static_routes(store: &ContentStore) -> Vec<Route> {
    let slugs = detail_slugs(store);
    let mut routes = Route::STATIC.to_vec();

    let details: [(Vec<&str>, fn(String) -> Route); 3] = [
        (slugs.services, Route::Service),
        (slugs.case_studies, Route::CaseStudy),
        (slugs.blogs, Route::BlogPost),
    ];
    for (slugs, make) in details {
        routes.extend(
            slugs
                .into_iter()
                .filter(|s| is_path_segment(s))
                .map(|s| make(s.to_string())),
        );
    }

    routes.extend(
        blog_categories(store.blogs())
            .into_iter()
            .map(|category| Route::BlogCategory(category.slug)),
    );

    routes
}
