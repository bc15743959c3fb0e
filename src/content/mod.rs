//! Site content: typed records, loading, lookup and text segmentation.
//!
//! ```text
//! content/
//! ├── model      # Service, CaseStudy, Blog, CompanyData
//! ├── store      # ContentStore (load once, read many)
//! ├── resolve    # find_by_slug, find_related, list_slugs
//! ├── segment    # blog body -> headings/paragraphs
//! ├── paths      # routes to pre-render
//! └── error      # ContentError, ContentWarning
//! ```

mod error;
pub mod model;
pub mod paths;
pub mod resolve;
pub mod segment;
mod store;

pub use store::ContentStore;
