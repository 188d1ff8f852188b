//! Immutable page snapshot handed to list consumers.

use crate::envelope::{ListEnvelope, PageLinkError, derive_current_page};
use crate::page_number::{PageNumber, PageSize};

/// One fetched slice of a paginated collection plus navigation metadata.
///
/// ## Invariants
/// - `total_count == 0` implies `items` is empty and both navigation flags
///   are `false`.
/// - A page is produced fresh by every fetch and never mutated in place;
///   holders keep a consistent snapshot regardless of later requests or
///   session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    total_count: u64,
    current_page: PageNumber,
    page_size: PageSize,
    has_previous: bool,
    has_next: bool,
}

impl<T> Page<T> {
    /// An empty page, used when a read degrades instead of failing.
    #[must_use]
    pub const fn empty(page_size: PageSize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            current_page: PageNumber::FIRST,
            page_size,
            has_previous: false,
            has_next: false,
        }
    }

    /// Map a backend envelope into a page, trusting the requested page
    /// number the caller carried through the round trip.
    #[must_use]
    pub fn from_envelope(
        envelope: ListEnvelope<T>,
        requested: PageNumber,
        page_size: PageSize,
    ) -> Self {
        let ListEnvelope {
            results,
            count,
            next,
            previous,
        } = envelope;
        if count == 0 {
            return Self::empty(page_size);
        }
        Self {
            items: results,
            total_count: count,
            current_page: requested,
            page_size,
            has_previous: previous.is_some(),
            has_next: next.is_some(),
        }
    }

    /// Map an envelope whose request page is unknown, deriving the current
    /// page from the adjacent-page links (see [`derive_current_page`] for the
    /// single-page ambiguity this inherits).
    ///
    /// # Errors
    ///
    /// Returns [`PageLinkError`] when a link is present but unusable.
    pub fn from_envelope_links(
        envelope: ListEnvelope<T>,
        page_size: PageSize,
    ) -> Result<Self, PageLinkError> {
        let current = derive_current_page(envelope.next.as_deref(), envelope.previous.as_deref())?;
        Ok(Self::from_envelope(envelope, current, page_size))
    }

    /// Items on this page, in backend order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, yielding its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Total number of items across every page.
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    /// One-based index of this page.
    #[must_use]
    pub const fn current_page(&self) -> PageNumber {
        self.current_page
    }

    /// Whether a preceding page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Whether a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Total number of pages, computed from the fixed page size.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.page_size.pages_for(self.total_count)
    }

    /// Whether this page holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the envelope-to-page mapping.

    use rstest::rstest;

    use super::*;

    fn envelope(
        items: u64,
        count: u64,
        next: Option<&str>,
        previous: Option<&str>,
    ) -> ListEnvelope<u64> {
        ListEnvelope {
            results: (0..items).collect(),
            count,
            next: next.map(str::to_owned),
            previous: previous.map(str::to_owned),
        }
    }

    #[rstest]
    fn maps_middle_page_with_explicit_number() {
        let page = Page::from_envelope(
            envelope(
                2,
                45,
                Some("https://api.invalid/teams/?page=3"),
                Some("https://api.invalid/teams/?page=1"),
            ),
            PageNumber::new(2).expect("valid page"),
            PageSize::DEFAULT,
        );
        assert_eq!(page.current_page().get(), 2);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_previous());
        assert!(page.has_next());
        assert_eq!(page.items().len(), 2);
    }

    #[rstest]
    fn empty_envelope_maps_to_inert_page() {
        let page = Page::from_envelope(
            envelope(0, 0, None, None),
            PageNumber::FIRST,
            PageSize::DEFAULT,
        );
        assert!(page.is_empty());
        assert!(!page.has_previous());
        assert!(!page.has_next());
        assert_eq!(page.total_pages(), 0);
    }

    #[rstest]
    fn zero_count_forces_navigation_flags_off() {
        // A confused backend reporting links alongside an empty collection
        // still maps to an inert page.
        let page = Page::from_envelope(
            envelope(0, 0, Some("https://api.invalid/teams/?page=2"), None),
            PageNumber::FIRST,
            PageSize::DEFAULT,
        );
        assert!(!page.has_next());
        assert_eq!(page.total_count(), 0);
    }

    #[rstest]
    fn derives_page_number_when_request_page_unknown() {
        let page = Page::from_envelope_links(
            envelope(2, 45, None, Some("https://api.invalid/teams/?page=2")),
            PageSize::DEFAULT,
        )
        .expect("links are well formed");
        assert_eq!(page.current_page().get(), 3);
        assert!(!page.has_next());
    }

    #[rstest]
    fn single_page_collection_sits_on_first_page() {
        let page = Page::from_envelope_links(envelope(5, 5, None, None), PageSize::DEFAULT)
            .expect("absent links are fine");
        assert_eq!(page.current_page(), PageNumber::FIRST);
        assert_eq!(page.total_pages(), 1);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }
}
