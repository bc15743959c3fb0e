//! `paths` command: list every pre-rendered route.

use crate::content::ContentStore;
use crate::content::paths::static_routes;

/// Permalinks in build order, one per line.
pub fn route_list(store: &ContentStore) -> String {
    static_routes(store)
        .iter()
        .map(|route| route.permalink() + "\n")
        .collect()
}

pub fn run_paths(store: &ContentStore) {
    print!("{}", route_list(store));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_list() {
        let list = route_list(&crate::render::tests::store());
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(&lines[..3], ["/", "/about/", "/services/"]);
        assert!(lines.contains(&"/services/platform/"));
        assert!(lines.contains(&"/blog/category/energy-markets/"));
        assert!(!lines.contains(&"/404.html"));
    }
}
