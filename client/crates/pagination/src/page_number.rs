//! Validated page-number and page-size newtypes.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised when constructing [`PageNumber`] or [`PageSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageNumberError {
    /// Page numbers are one-based; zero is not addressable.
    #[error("page numbers start at 1")]
    Zero,
}

/// One-based page index into a paginated collection.
///
/// ## Invariants
/// - The wrapped value is always `>= 1`.
///
/// # Examples
/// ```
/// use pagination::PageNumber;
///
/// let page = PageNumber::new(2).expect("valid page");
/// assert_eq!(page.get(), 2);
/// assert_eq!(page.previous(), Some(PageNumber::FIRST));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PageNumber(u64);

impl PageNumber {
    /// The first page of any collection.
    pub const FIRST: Self = Self(1);

    /// Construct a page number, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`PageNumberError::Zero`] when `value` is `0`.
    pub const fn new(value: u64) -> Result<Self, PageNumberError> {
        if value == 0 {
            return Err(PageNumberError::Zero);
        }
        Ok(Self(value))
    }

    /// The wrapped one-based index.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The following page.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The preceding page, or `None` on the first page.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.0 {
            1 => None,
            n => Some(Self(n - 1)),
        }
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for PageNumber {
    type Error = PageNumberError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u64 {
    fn from(value: PageNumber) -> Self {
        value.get()
    }
}

/// Number of items the backend serves per page.
///
/// The backend's page size is fixed configuration shared with clients; it is
/// never inferred from a response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PageSize(u64);

impl PageSize {
    /// The page size the backend is deployed with.
    pub const DEFAULT: Self = Self(20);

    /// Construct a page size, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`PageNumberError::Zero`] when `value` is `0`.
    pub const fn new(value: u64) -> Result<Self, PageNumberError> {
        if value == 0 {
            return Err(PageNumberError::Zero);
        }
        Ok(Self(value))
    }

    /// The wrapped item count.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Number of pages needed to hold `total_count` items.
    #[must_use]
    pub const fn pages_for(self, total_count: u64) -> u64 {
        total_count.div_ceil(self.0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for PageSize {
    type Error = PageNumberError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for u64 {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}
