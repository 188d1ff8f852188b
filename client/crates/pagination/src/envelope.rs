//! Raw list envelope returned by backend collection endpoints.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::page_number::PageNumber;

/// Wire shape of every paginated collection response.
///
/// `next` and `previous` are absolute URLs pointing at the adjacent pages,
/// carrying the page index in a `page` query parameter. The first page is
/// addressed without a `page` parameter, so a `previous` link may legitimately
/// omit it.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    /// Items on the requested page.
    pub results: Vec<T>,
    /// Total number of items across all pages.
    pub count: u64,
    /// Link to the following page, absent on the last page.
    pub next: Option<String>,
    /// Link to the preceding page, absent on the first page.
    pub previous: Option<String>,
}

impl<T> ListEnvelope<T> {
    /// An envelope describing an empty collection.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
            next: None,
            previous: None,
        }
    }
}

/// Failures while deriving a page number from envelope links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageLinkError {
    /// A link was present but not a parseable URL.
    #[error("page link is not a valid URL: {link}")]
    MalformedUrl {
        /// The offending link text.
        link: String,
    },
    /// The `page` parameter was missing or not a positive integer.
    #[error("page link carries no usable page parameter: {link}")]
    InvalidPageParameter {
        /// The offending link text.
        link: String,
    },
}

fn page_parameter(link: &str) -> Result<Option<u64>, PageLinkError> {
    let url = Url::parse(link).map_err(|_| PageLinkError::MalformedUrl {
        link: link.to_owned(),
    })?;
    let Some((_, raw)) = url.query_pairs().find(|(key, _)| key == "page") else {
        return Ok(None);
    };
    raw.parse::<u64>()
        .ok()
        .filter(|page| *page > 0)
        .map(Some)
        .ok_or_else(|| PageLinkError::InvalidPageParameter {
            link: link.to_owned(),
        })
}

/// Derive the current page number from an envelope's adjacent-page links.
///
/// This is the fallback for envelopes obtained without a known request page:
/// the page before `next`, or the page after `previous` (a `previous` link
/// without a `page` parameter addresses the first page), or page 1 when both
/// links are absent.
///
/// Known limitation: a single-page envelope carries no links, so a collection
/// that is somehow not on its first page is indistinguishable from one that
/// is; this function answers 1 for both. Callers that know which page they
/// requested should carry that number instead of deriving it here.
///
/// # Errors
///
/// Returns [`PageLinkError`] when a present link cannot be parsed or carries
/// an unusable `page` parameter.
///
/// # Examples
/// ```
/// use pagination::derive_current_page;
///
/// let page = derive_current_page(
///     Some("https://api.invalid/teams/?page=3"),
///     Some("https://api.invalid/teams/?page=1"),
/// )
/// .expect("links are well formed");
/// assert_eq!(page.get(), 2);
/// ```
pub fn derive_current_page(
    next: Option<&str>,
    previous: Option<&str>,
) -> Result<PageNumber, PageLinkError> {
    if let Some(link) = next {
        let following = page_parameter(link)?.ok_or_else(|| PageLinkError::InvalidPageParameter {
            link: link.to_owned(),
        })?;
        return PageNumber::new(following.saturating_sub(1)).map_err(|_| {
            PageLinkError::InvalidPageParameter {
                link: link.to_owned(),
            }
        });
    }
    if let Some(link) = previous {
        let preceding = page_parameter(link)?.unwrap_or(1);
        return Ok(PageNumber::new(preceding)
            .map_or(PageNumber::FIRST, PageNumber::next));
    }
    Ok(PageNumber::FIRST)
}

#[cfg(test)]
mod tests {
    //! Coverage for link-based page derivation.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("https://api.invalid/teams/?page=3"), Some("https://api.invalid/teams/?page=1"), 2)]
    #[case(Some("https://api.invalid/teams/?page=2"), None, 1)]
    #[case(None, Some("https://api.invalid/teams/?page=2"), 3)]
    #[case(None, Some("https://api.invalid/teams/"), 2)]
    #[case(None, None, 1)]
    fn derives_page_from_links(
        #[case] next: Option<&str>,
        #[case] previous: Option<&str>,
        #[case] expected: u64,
    ) {
        let page = derive_current_page(next, previous).expect("links are well formed");
        assert_eq!(page.get(), expected);
    }

    #[rstest]
    fn rejects_unparseable_link() {
        let err = derive_current_page(Some("not a url"), None).expect_err("must fail");
        assert!(matches!(err, PageLinkError::MalformedUrl { .. }));
    }

    #[rstest]
    #[case("https://api.invalid/teams/")]
    #[case("https://api.invalid/teams/?page=zero")]
    #[case("https://api.invalid/teams/?page=0")]
    fn rejects_unusable_next_parameter(#[case] link: &str) {
        let err = derive_current_page(Some(link), None).expect_err("must fail");
        assert!(matches!(err, PageLinkError::InvalidPageParameter { .. }));
    }

    #[rstest]
    fn decodes_backend_envelope() {
        let body = r#"{
            "results": [{"id": 1}, {"id": 2}],
            "count": 45,
            "next": "https://api.invalid/teams/?page=3",
            "previous": "https://api.invalid/teams/?page=1"
        }"#;
        let envelope: ListEnvelope<serde_json::Value> =
            serde_json::from_str(body).expect("envelope should decode");
        assert_eq!(envelope.results.len(), 2);
        assert_eq!(envelope.count, 45);
    }
}
