//! Link formats and route resolution.
//!
//! Listings and the article detail page agree on the fragment form `#article/<id>`. Served and
//! built pages live at the path form `/article/<id>`; both resolve to the same [`Route`].

use crate::constants::{ARTICLE_PATH_PREFIX, NEWS_PATH};
use site_types::Slug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    News,
    /// Article detail; the id is unvalidated and may not exist.
    Article(String),
    /// A single-segment path, resolved against the location table at render time.
    Location(String),
    NotFound(String),
}

/// Fragment link to an article, as used by listings.
pub fn article_link(id: &Slug) -> String {
    format!("#{ARTICLE_PATH_PREFIX}/{id}")
}

/// Site-relative path of an article page.
pub fn article_path(id: &str) -> String {
    format!("{ARTICLE_PATH_PREFIX}/{id}")
}

/// Resolve a hash fragment such as `#news` or `#article/<id>`.
pub fn parse_fragment(fragment: &str) -> Route {
    let inner = fragment.strip_prefix('#').unwrap_or(fragment);
    resolve_segments(inner, fragment)
}

/// Resolve a request path such as `/news`, `/article/<id>` or `/<slug>`.
///
/// A path carrying a fragment (`/#article/<id>`) resolves by its fragment.
pub fn parse_path(path: &str) -> Route {
    if let Some((_, fragment)) = path.split_once('#') {
        return parse_fragment(fragment);
    }
    let path = path.split('?').next().unwrap_or_default();
    resolve_segments(path, path)
}

fn resolve_segments(inner: &str, raw: &str) -> Route {
    let trimmed = inner.trim_matches('/');
    let segments: Vec<&str> = trimmed.split('/').collect();

    match segments.as_slice() {
        [""] | ["index.html"] => Route::Home,
        [p] if *p == NEWS_PATH => Route::News,
        [p, id] if *p == ARTICLE_PATH_PREFIX && !id.is_empty() => Route::Article((*id).to_owned()),
        [slug] => Route::Location((*slug).to_owned()),
        _ => Route::NotFound(raw.to_owned()),
    }
}
