//! URL to asset file resolution.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Resolve a request URL to a file under `root`.
///
/// Returns `None` for directories, missing files and anything that would
/// escape `root` (`..` segments or symlinks pointing outside).
pub fn resolve_asset(url: &str, root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);
    if clean.is_empty() || clean.split('/').any(|seg| seg == "..") {
        return None;
    }

    let canonical = root.join(&clean).canonicalize().ok()?;
    let root_canonical = root.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) || !canonical.is_file() {
        return None;
    }
    Some(canonical)
}

/// Decode, strip query and fragment, trim slashes.
fn normalize_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    percent_decode_str(path)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default()
        .trim_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/a b.png"), "x").unwrap();

        let found = resolve_asset("/images/a%20b.png?v=1", dir.path()).unwrap();
        assert!(found.ends_with("images/a b.png"));
    }

    #[test]
    fn test_resolve_rejects_escape_and_dirs() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("static");
        fs::create_dir_all(root.join("images")).unwrap();
        fs::write(dir.path().join("secret.txt"), "x").unwrap();

        assert_eq!(resolve_asset("/../secret.txt", &root), None);
        assert_eq!(resolve_asset("/%2E%2E/secret.txt", &root), None);
        assert_eq!(resolve_asset("/images/", &root), None);
        assert_eq!(resolve_asset("/", &root), None);
        assert_eq!(resolve_asset("/missing.png", &root), None);
    }
}
