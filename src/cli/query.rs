//! `query` command: print content records as JSON.

use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::Value as JsonValue;

use super::args::{Collection, QueryArgs};
use crate::content::ContentStore;
use crate::content::resolve::{Grouped, find_by_slug, find_related};

impl Collection {
    /// Singular record noun for messages.
    fn noun(self) -> &'static str {
        match self {
            Self::Services => "service",
            Self::CaseStudies => "case study",
            Self::Blogs => "blog post",
            Self::Company => "company",
        }
    }
}

/// Execute query command
pub fn run_query(args: &QueryArgs, store: &ContentStore, related_limit: usize) -> Result<()> {
    let value = query(args, store, related_limit)?;
    let formatted = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{formatted}");
    Ok(())
}

/// Resolve the query to a JSON value. An unknown slug is an error.
pub fn query(args: &QueryArgs, store: &ContentStore, related_limit: usize) -> Result<JsonValue> {
    let slug = args.slug.as_deref();
    match args.collection {
        Collection::Services => select(store.services(), slug, args.related, related_limit, args.collection),
        Collection::CaseStudies => {
            select(store.case_studies(), slug, args.related, related_limit, args.collection)
        }
        Collection::Blogs => select(store.blogs(), slug, args.related, related_limit, args.collection),
        Collection::Company => {
            if slug.is_some() {
                bail!("the company document has no slugs");
            }
            Ok(serde_json::to_value(store.company())?)
        }
    }
}

fn select<T: Grouped + Serialize>(
    records: &[T],
    slug: Option<&str>,
    related: bool,
    limit: usize,
    collection: Collection,
) -> Result<JsonValue> {
    let Some(slug) = slug else {
        return Ok(serde_json::to_value(records)?);
    };
    let Some(record) = find_by_slug(records, slug) else {
        bail!("no {} with slug `{slug}`", collection.noun());
    };
    if related {
        Ok(serde_json::to_value(find_related(records, record, limit))?)
    } else {
        Ok(serde_json::to_value(record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::store;

    fn args(collection: Collection, slug: Option<&str>, related: bool) -> QueryArgs {
        QueryArgs {
            collection,
            slug: slug.map(str::to_string),
            related,
            pretty: false,
        }
    }

    #[test]
    fn test_query_whole_collection() {
        let value = query(&args(Collection::Services, None, false), &store(), 3).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_query_single_record_camel_case() {
        let value = query(&args(Collection::Blogs, Some("newer"), false), &store(), 3).unwrap();
        assert_eq!(value["slug"], "newer");
        assert_eq!(value["readTime"], "5 min");
    }

    #[test]
    fn test_query_related() {
        let value =
            query(&args(Collection::Services, Some("platform"), true), &store(), 3).unwrap();
        let slugs: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs, ["limits"]);
    }

    #[test]
    fn test_query_unknown_slug_fails() {
        let err = query(&args(Collection::CaseStudies, Some("nope"), false), &store(), 3)
            .unwrap_err();
        assert_eq!(err.to_string(), "no case study with slug `nope`");
    }

    #[test]
    fn test_query_company() {
        let value = query(&args(Collection::Company, None, false), &store(), 3).unwrap();
        assert_eq!(value["company"]["name"], "TradeNexus");
        assert!(query(&args(Collection::Company, Some("x"), false), &store(), 3).is_err());
    }
}
