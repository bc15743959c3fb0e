//! Load-once, read-many content store.
//!
//! The store is built once at startup and handed to every consumer by
//! reference. Nothing mutates it afterwards.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::de::DeserializeOwned;

use super::error::{ContentError, ContentWarning};
use super::model::{Blog, CaseStudy, CompanyData, Service};
use super::resolve::Record;
use crate::config::ContentConfig;
use crate::debug;
use crate::site::is_path_segment;

/// All site content, in source order.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    services: Vec<Service>,
    case_studies: Vec<CaseStudy>,
    blogs: Vec<Blog>,
    company: CompanyData,
}

impl ContentStore {
    /// Load every collection named in `[content]`.
    ///
    /// Blog partitions are concatenated in configuration order.
    pub fn load(config: &ContentConfig) -> Result<Self, ContentError> {
        let services = load_collection(&config.resolve(&config.services))?;
        let case_studies = load_collection(&config.resolve(&config.case_studies))?;

        let mut blogs = Vec::new();
        for partition in &config.blogs {
            let part: Vec<Blog> = load_collection(&config.resolve(partition))?;
            debug!("content"; "{}: {} posts", partition.display(), part.len());
            blogs.extend(part);
        }

        let company = load_document(&config.resolve(&config.company))?;

        Ok(Self::from_parts(services, case_studies, blogs, company))
    }

    pub fn from_parts(
        services: Vec<Service>,
        case_studies: Vec<CaseStudy>,
        blogs: Vec<Blog>,
        company: CompanyData,
    ) -> Self {
        Self {
            services,
            case_studies,
            blogs,
            company,
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    pub fn blogs(&self) -> &[Blog] {
        &self.blogs
    }

    pub fn company(&self) -> &CompanyData {
        &self.company
    }

    /// Check slug and id uniqueness in every collection.
    pub fn validate(&self) -> Vec<ContentWarning> {
        let mut warnings = Vec::new();
        check_collection("services", &self.services, &mut warnings);
        check_collection("case studies", &self.case_studies, &mut warnings);
        check_collection("blogs", &self.blogs, &mut warnings);
        warnings
    }
}

fn check_collection<T: Record>(
    collection: &'static str,
    records: &[T],
    warnings: &mut Vec<ContentWarning>,
) {
    let mut slugs = FxHashSet::default();
    let mut ids = FxHashSet::default();

    for record in records {
        if record.slug().is_empty() {
            warnings.push(ContentWarning::EmptySlug {
                collection,
                id: record.id(),
            });
        } else if !is_path_segment(record.slug()) {
            warnings.push(ContentWarning::InvalidSlug {
                collection,
                slug: record.slug().to_string(),
            });
        } else if !slugs.insert(record.slug()) {
            warnings.push(ContentWarning::DuplicateSlug {
                collection,
                slug: record.slug().to_string(),
            });
        }
        if !ids.insert(record.id()) {
            warnings.push(ContentWarning::DuplicateId {
                collection,
                id: record.id(),
            });
        }
    }
}

/// Parse a JSON array file into records, keeping file order.
fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ContentError> {
    load_document(path)
}

/// Parse a single JSON document.
fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let content =
        fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
    serde_json::from_str(&content).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::resolve::tests::{blog, service};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const COMPANY: &str = r#"{"company":{"name":"TradeNexus","statistics":{"clients_served":"250+"}}}"#;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn blog_array(ids: &[u32]) -> String {
        let items: Vec<_> = ids
            .iter()
            .map(|id| serde_json::to_string(&blog(*id, &format!("post-{id}"), "Markets", "2024-01-01")).unwrap())
            .collect();
        format!("[{}]", items.join(","))
    }

    fn content_config(dir: &TempDir) -> ContentConfig {
        ContentConfig {
            dir: dir.path().to_path_buf(),
            ..ContentConfig::default()
        }
    }

    fn seed(dir: &TempDir) {
        let services = serde_json::to_string(&vec![service(1, "platform", "Analytics")]).unwrap();
        write(dir, "services.json", &services);
        write(dir, "case-studies.json", "[]");
        write(dir, "blogs.json", &blog_array(&[1, 2, 3]));
        write(dir, "blogs-additional.json", &blog_array(&[10, 11]));
        write(dir, "company.json", COMPANY);
    }

    #[test]
    fn test_load_concatenates_blog_partitions() {
        let dir = TempDir::new().unwrap();
        seed(&dir);

        let store = ContentStore::load(&content_config(&dir)).unwrap();
        let ids: Vec<_> = store.blogs().iter().map(|b| b.id).collect();
        assert_eq!(ids, [1, 2, 3, 10, 11]);
        assert_eq!(store.services().len(), 1);
        assert!(store.case_studies().is_empty());
        assert_eq!(store.company().company.name, "TradeNexus");
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        seed(&dir);
        fs::remove_file(dir.path().join("blogs-additional.json")).unwrap();

        let err = ContentStore::load(&content_config(&dir)).unwrap_err();
        assert!(matches!(err, ContentError::Io(ref p, _) if p.ends_with("blogs-additional.json")));
    }

    #[test]
    fn test_load_malformed_file_reports_position() {
        let dir = TempDir::new().unwrap();
        seed(&dir);
        write(&dir, "services.json", "[\n  {\"id\": 1,\n  \"slug\": }\n]");

        let err = ContentStore::load(&content_config(&dir)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("services.json"), "{msg}");
        assert!(msg.contains("line 3"), "{msg}");
    }

    #[test]
    fn test_load_wrong_shape_is_fatal() {
        let dir = TempDir::new().unwrap();
        seed(&dir);
        write(&dir, "case-studies.json", r#"{"not":"an array"}"#);

        let err = ContentStore::load(&content_config(&dir)).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_single_partition() {
        let dir = TempDir::new().unwrap();
        seed(&dir);
        let config = ContentConfig {
            blogs: vec![PathBuf::from("blogs-additional.json")],
            ..content_config(&dir)
        };
        let store = ContentStore::load(&config).unwrap();
        assert_eq!(store.blogs().len(), 2);
    }

    #[test]
    fn test_validate_reports_duplicates() {
        let store = ContentStore::from_parts(
            vec![
                service(1, "a", "X"),
                service(2, "a", "X"),
                service(2, "", "X"),
            ],
            vec![],
            vec![],
            CompanyData::default(),
        );
        let warnings = store.validate();
        assert_eq!(
            warnings,
            [
                ContentWarning::DuplicateSlug {
                    collection: "services",
                    slug: "a".into()
                },
                ContentWarning::EmptySlug {
                    collection: "services",
                    id: 2
                },
                ContentWarning::DuplicateId {
                    collection: "services",
                    id: 2
                },
            ]
        );
    }

    #[test]
    fn test_validate_reports_path_like_slugs() {
        let store = ContentStore::from_parts(
            vec![service(1, "..", "X"), service(2, "ok", "X")],
            vec![],
            vec![blog(3, "2024/outlook", "Markets", "2024-01-01")],
            CompanyData::default(),
        );
        assert_eq!(
            store.validate(),
            [
                ContentWarning::InvalidSlug {
                    collection: "services",
                    slug: "..".into()
                },
                ContentWarning::InvalidSlug {
                    collection: "blogs",
                    slug: "2024/outlook".into()
                },
            ]
        );
    }

    #[test]
    fn test_validate_clean_store() {
        let store = ContentStore::default();
        assert!(store.validate().is_empty());
    }
}
