//! Site addressing: typed routes and generated slugs.

mod route;
mod slug;

pub use route::Route;
pub use slug::{is_path_segment, slugify};
