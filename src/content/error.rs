//! Content loading errors and validation warnings.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal content loading errors. The site cannot be rendered after one.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error(
        "malformed content file `{}` at line {}, column {}",
        path.display(),
        source.line(),
        source.column()
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Non-fatal data problems found after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentWarning {
    /// Later records with this slug are unreachable.
    DuplicateSlug {
        collection: &'static str,
        slug: String,
    },
    DuplicateId {
        collection: &'static str,
        id: u32,
    },
    EmptySlug {
        collection: &'static str,
        id: u32,
    },
    /// Slug is not a single URL segment; the record gets no page.
    InvalidSlug {
        collection: &'static str,
        slug: String,
    },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSlug { collection, slug } => write!(
                f,
                "{collection}: duplicate slug `{slug}`, only the first record is reachable"
            ),
            Self::DuplicateId { collection, id } => {
                write!(f, "{collection}: duplicate id {id}, related lists may skip records")
            }
            Self::EmptySlug { collection, id } => {
                write!(f, "{collection}: record {id} has an empty slug")
            }
            Self::InvalidSlug { collection, slug } => write!(
                f,
                "{collection}: slug `{slug}` contains a path separator or dot segment, skipping its page"
            ),
        }
    }
}
