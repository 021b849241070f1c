//! Page-number handling for paginated review listings.
//!
//! Review listings take a `pageNumber` query parameter. The harvester
//! rewrites it in place when the caller's URL already carries one and
//! appends it otherwise.

use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const PAGE_PARAM: &str = "pageNumber";

static PAGE_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[?&])pageNumber=\d*").expect("valid regex"));

/// Returns `url` addressed at `page`.
///
/// - `…?pageNumber=3&x=1` with page 1 → `…?pageNumber=1&x=1`
/// - `…?sort=recent` with page 2 → `…?sort=recent&pageNumber=2`
/// - `…/reviews` with page 2 → `…/reviews?pageNumber=2`
#[must_use]
pub fn page_url(url: &str, page: u32) -> String {
    if PAGE_PARAM_RE.is_match(url) {
        return PAGE_PARAM_RE
            .replace(url, |caps: &Captures| format!("{}{PAGE_PARAM}={page}", &caps[1]))
            .into_owned();
    }

    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    let mut paged = format!("{base}{separator}{PAGE_PARAM}={page}");
    if let Some(fragment) = fragment {
        paged.push('#');
        paged.push_str(fragment);
    }
    paged
}
