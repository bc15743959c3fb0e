//! One module per page family. Each returns a [`Page`](super::Page); detail
//! renderers return `None` when the slug has no record.

pub mod about;
pub mod blog;
pub mod case_studies;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod services;

use super::components::{Button, Width, actions, container, section};
use crate::utils::html::escape;

/// Closing call-to-action band on a dark background.
fn cta<'a>(title: &str, text: &str, buttons: impl IntoIterator<Item = Button<'a>>) -> String {
    let inner = format!(
        r#"<div class="center"><h2>{}</h2><p class="lead">{}</p>{}</div>"#,
        escape(title),
        escape(text),
        actions(buttons)
    );
    section("section-dark", &container(Width::Lg, &inner))
}

/// `"{page} | {site}"`
fn titled(page: &str, site: &str) -> String {
    format!("{page} | {site}")
}
