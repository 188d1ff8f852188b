//! Shared pagination primitives for Courtside list endpoints.
//!
//! The backend paginates every collection with the same envelope:
//! `{ results, count, next, previous }`, where `next` and `previous` are
//! absolute URLs carrying a `page` query parameter. This crate owns the
//! page-number arithmetic and the mapping from that envelope into an
//! immutable [`Page`] snapshot, so no consumer re-derives navigation state
//! ad hoc.

mod envelope;
mod page;
mod page_number;

pub use envelope::{ListEnvelope, PageLinkError, derive_current_page};
pub use page::Page;
pub use page_number::{PageNumber, PageNumberError, PageSize};
