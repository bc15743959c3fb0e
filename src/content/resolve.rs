//! Record lookup and grouping over ordered collections.
//!
//! Every function here is a linear scan over a slice: collections hold tens
//! of records, and scanning keeps "first match wins" and source order
//! trivially true.

use rustc_hash::FxHashSet;

use super::model::{Blog, CaseStudy, Service};
use crate::utils::date::DateTimeUtc;

/// A record addressable by slug.
pub trait Record {
    fn id(&self) -> u32;
    fn slug(&self) -> &str;
}

/// A record carrying a free-form grouping label.
pub trait Grouped: Record {
    fn group(&self) -> &str;
}

macro_rules! impl_record {
    ($ty:ty, $group:ident) => {
        impl Record for $ty {
            #[inline]
            fn id(&self) -> u32 {
                self.id
            }
            #[inline]
            fn slug(&self) -> &str {
                &self.slug
            }
        }

        impl Grouped for $ty {
            #[inline]
            fn group(&self) -> &str {
                &self.$group
            }
        }
    };
}

impl_record!(Service, category);
impl_record!(CaseStudy, industry);
impl_record!(Blog, category);

/// Find a record by exact, case-sensitive slug. The first match wins.
pub fn find_by_slug<'a, T: Record>(collection: &'a [T], slug: &str) -> Option<&'a T> {
    collection.iter().find(|r| r.slug() == slug)
}

/// Records sharing `record`'s group, excluding any record with its id.
///
/// Collection order is preserved and the result holds at most `limit` records.
pub fn find_related<'a, T: Grouped>(collection: &'a [T], record: &T, limit: usize) -> Vec<&'a T> {
    collection
        .iter()
        .filter(|c| c.group() == record.group() && c.id() != record.id())
        .take(limit)
        .collect()
}

/// Every distinct slug once, in collection order.
pub fn list_slugs<T: Record>(collection: &[T]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    collection
        .iter()
        .map(Record::slug)
        .filter(|slug| seen.insert(*slug))
        .collect()
}

/// Distinct group labels in order of first appearance.
pub fn group_labels<T: Grouped>(collection: &[T]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    collection
        .iter()
        .map(Grouped::group)
        .filter(|label| seen.insert(*label))
        .collect()
}

/// Records whose group equals `label`, in collection order.
pub fn in_group<'a, T: Grouped>(collection: &'a [T], label: &str) -> Vec<&'a T> {
    collection.iter().filter(|r| r.group() == label).collect()
}

pub fn count_in_group<T: Grouped>(collection: &[T], label: &str) -> usize {
    collection.iter().filter(|r| r.group() == label).count()
}

/// Blogs newest first. Stable, so same-day posts keep collection order;
/// unparsable dates sort last.
pub fn sorted_by_date_desc(blogs: &[Blog]) -> Vec<&Blog> {
    let mut sorted: Vec<&Blog> = blogs.iter().collect();
    sorted.sort_by_key(|b| std::cmp::Reverse(DateTimeUtc::parse(&b.date).map(DateTimeUtc::ordinal)));
    sorted
}
