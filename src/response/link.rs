//! RFC 5988 `Link` header builder

use crate::pagination::OffsetPaginator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pagination links for an offset-paginated resource.
///
/// Only relations that apply are set: no `prev` on page 1, no `next` on the
/// last page, nothing at all for an empty result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

impl LinkHeader {
    /// Build links for `paginator` over `total` items under `base_url`
    pub fn build(base_url: &str, paginator: &OffsetPaginator, total: i64) -> Self {
        let total_pages = paginator.total_pages(total);
        if total_pages == 0 {
            return Self::default();
        }

        let link_to = |page: u32| build_url(base_url, &paginator.with_page(i64::from(page)));

        Self {
            first: Some(link_to(1)),
            prev: paginator
                .has_previous()
                .then(|| link_to(paginator.previous_page())),
            next: paginator
                .has_next(total)
                .then(|| link_to(paginator.next_page())),
            last: Some(link_to(total_pages)),
        }
    }

    /// True when no relation applies; the header should then be omitted
    pub fn is_empty(&self) -> bool {
        self.relations().next().is_none()
    }

    /// Set relations in header order
    pub fn relations(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("first", &self.first),
            ("prev", &self.prev),
            ("next", &self.next),
            ("last", &self.last),
        ]
        .into_iter()
        .filter_map(|(rel, url)| url.as_deref().map(|url| (rel, url)))
    }

    /// Hand the header to a setter, skipping it when empty
    pub fn apply(&self, mut set_header: impl FnMut(&str, &str)) {
        if !self.is_empty() {
            set_header("Link", &self.to_string());
        }
    }
}

impl fmt::Display for LinkHeader {
    /// `<url>; rel="first", <url>; rel="next", ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (rel, url)) in self.relations().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "<{url}>; rel=\"{rel}\"")?;
        }
        Ok(())
    }
}

fn build_url(base_url: &str, paginator: &OffsetPaginator) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}{}", paginator.query_string())
}
