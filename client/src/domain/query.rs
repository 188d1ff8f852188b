//! Resource addressing and filter values.
//!
//! A list request is described entirely by an immutable [`ResourceQuery`]:
//! the resource path, the filter set, and the requested page. Navigation
//! produces a new query value instead of re-capturing filters in closures,
//! so nothing about a page change is hidden state.

use std::collections::BTreeMap;
use std::fmt;

use pagination::PageNumber;
use thiserror::Error;

/// Validation errors raised when constructing [`ResourcePath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourcePathError {
    /// Path was empty once trimmed.
    #[error("resource path must not be empty")]
    Empty,
    /// Path carried surrounding whitespace or slashes.
    #[error("resource path must not be padded with whitespace or slashes")]
    Padded,
}

/// Relative path of a backend resource or collection.
///
/// ## Invariants
/// - Non-empty, with no surrounding whitespace or slashes; interior slashes
///   address nested resources (`teams/3/players`).
/// - The gateway appends the trailing slash the backend's routing expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Construct a path, panicking if validation fails.
    ///
    /// Intended for statically known paths; use [`Self::try_new`] for
    /// caller-supplied input.
    ///
    /// # Panics
    ///
    /// Panics when the path fails validation.
    pub fn new(path: impl Into<String>) -> Self {
        match Self::try_new(path) {
            Ok(value) => value,
            Err(err) => panic!("resource paths must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the path.
    pub fn try_new(path: impl Into<String>) -> Result<Self, ResourcePathError> {
        let raw = path.into();
        if raw.trim().is_empty() {
            return Err(ResourcePathError::Empty);
        }
        if raw.trim() != raw || raw.starts_with('/') || raw.ends_with('/') {
            return Err(ResourcePathError::Padded);
        }
        Ok(Self(raw))
    }

    /// Borrow the path as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Address an item of this collection by its identifier.
    pub fn item(&self, id: i64) -> Self {
        Self(format!("{}/{id}", self.0))
    }

    /// Address a nested sub-resource of an item.
    pub fn nested(&self, id: i64, child: &str) -> Self {
        Self(format!("{}/{id}/{child}", self.0))
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Query-parameter filter set with the truthy-only serialisation contract.
///
/// A key is only present when its value carries information: empty strings,
/// absent options, and `false` toggles are never inserted, everything else is
/// included verbatim. Every list view depends on this contract to mean
/// "filter disabled" by clearing a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: BTreeMap<String, String>,
}

impl Filters {
    /// An empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a text filter unless the value is empty.
    pub fn with_text(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.entries.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    /// Insert a text filter from an optional value.
    pub fn with_opt_text(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(text) => self.with_text(key, text),
            None => self,
        }
    }

    /// Insert a numeric filter from an optional identifier.
    pub fn with_opt_id(self, key: &str, value: Option<i64>) -> Self {
        match value {
            Some(id) => self.with_text(key, &id.to_string()),
            None => self,
        }
    }

    /// Insert a toggle filter; `false` means "not filtered" and is omitted.
    pub fn with_toggle(self, key: &str, enabled: bool) -> Self {
        if enabled {
            self.with_text(key, "true")
        } else {
            self
        }
    }

    /// Insert an explicit boolean filter; unlike a toggle, `false` is a
    /// meaningful value ("only incomplete matches") and is serialised.
    pub fn with_opt_bool(self, key: &str, value: Option<bool>) -> Self {
        match value {
            Some(flag) => self.with_text(key, if flag { "true" } else { "false" }),
            None => self,
        }
    }

    /// Iterate the serialised key/value pairs in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Whether any filter is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of serialised filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Immutable description of one paginated list request.
///
/// Filters are preserved verbatim across page changes; [`Self::with_page`]
/// is the only way to move and it copies the filter set untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    path: ResourcePath,
    filters: Filters,
    page: PageNumber,
}

impl ResourceQuery {
    /// Describe a request for one page of a filtered collection.
    pub fn new(path: ResourcePath, filters: Filters, page: PageNumber) -> Self {
        Self {
            path,
            filters,
            page,
        }
    }

    /// Describe the first page of a filtered collection.
    pub fn first_page(path: ResourcePath, filters: Filters) -> Self {
        Self::new(path, filters, PageNumber::FIRST)
    }

    /// The addressed collection.
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// The filter set carried by this query.
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// The requested page.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// The same collection and filters, addressed at another page.
    pub fn with_page(&self, page: PageNumber) -> Self {
        Self {
            path: self.path.clone(),
            filters: self.filters.clone(),
            page,
        }
    }

    /// The wire query parameters: every filter plus the page number.
    pub fn request_filters(&self) -> Filters {
        self.filters
            .clone()
            .with_text("page", &self.page.to_string())
    }
}
