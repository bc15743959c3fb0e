//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Path component of an absolute URL, without surrounding slashes.
///
/// Returns `None` when the string is not an absolute URL.
///
/// ```ignore
/// extract_url_path("https://tradenexus.example/")    -> Some("")
/// extract_url_path("https://example.com:8080/path")  -> Some("path")
/// extract_url_path("tradenexus.example")             -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    if parsed.cannot_be_a_base() {
        return None;
    }
    Some(parsed.path().trim_matches('/').to_string())
}

/// Find `config_name` in `start` or the nearest ancestor that has it.
///
/// ```text
/// /srv/site/data/       ← start
/// /srv/site/site.toml   ← found
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://tradenexus.example"),
            Some(String::new())
        );
        assert_eq!(
            extract_url_path("https://tradenexus.example/"),
            Some(String::new())
        );
        assert_eq!(
            extract_url_path("https://example.com:8080/a/b/?q=1#x"),
            Some("a/b".to_string())
        );
        assert_eq!(extract_url_path("tradenexus.example"), None);
        assert_eq!(extract_url_path("mailto:info@tradenexus.example"), None);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data/blogs");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("site.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, dir.path().join("site.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            find_config_file(dir.path(), Path::new("no-such-config-7f3a.toml")),
            None
        );
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path.clone()));
    }
}
