//! Slug generation for grouping labels.
//!
//! Record slugs come from the content files; only derived pages (blog
//! categories) need slugs generated from free-form labels. Either kind
//! becomes one URL segment and one output directory.

use deunicode::deunicode;

/// Convert a label to a lowercase ASCII, dash-separated slug.
///
/// ```ignore
/// assert_eq!(slugify("Energy Markets"), "energy-markets");
/// assert_eq!(slugify("Régulation & Risk"), "regulation-risk");
/// ```
pub fn slugify(label: &str) -> String {
    let ascii = deunicode(label);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Whether `slug` can stand as a single path segment.
///
/// Separators and dot segments would move the page out of its section, or
/// out of the output directory altogether.
pub fn is_path_segment(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Energy Markets"), "energy-markets");
        assert_eq!(slugify("AI & Machine Learning"), "ai-machine-learning");
    }

    #[test]
    fn test_slugify_trims_separators() {
        assert_eq!(slugify("  --Risk--  "), "risk");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("&&&"), "");
    }

    #[test]
    fn test_path_segment() {
        assert!(is_path_segment("grid-outlook"));
        assert!(is_path_segment("v1.2"));
        for slug in ["", ".", "..", "../../escaped", "a/b", "a\\b"] {
            assert!(!is_path_segment(slug), "{slug:?}");
        }
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Régulation"), "regulation");
        assert_eq!(slugify("Gas/Power 2024"), "gas-power-2024");
    }
}
