//! Windowing of fully materialized collections into pages.
//!
//! The source is always loaded up front; there is no lazy or streaming
//! variant. Callers that cannot afford to materialize the whole collection
//! must page at the storage layer instead.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_ITEMS, DEFAULT_SKIP_COUNT};
use crate::error::{CoreError, Result};

/// Skip/limit pair describing one slice of an ordered collection.
///
/// `max_items == None` is the unbounded form: everything from `skip_count` on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip_count: usize,
    max_items: Option<NonZeroUsize>,
}

impl PageRequest {
    /// Bounded request. `max_items` must be positive.
    pub fn new(skip_count: usize, max_items: usize) -> Result<Self> {
        let max_items = NonZeroUsize::new(max_items).ok_or_else(|| {
            CoreError::InvalidArgument("maxItems must be greater than zero".to_owned())
        })?;
        Ok(Self { skip_count, max_items: Some(max_items) })
    }

    #[must_use]
    pub const fn unbounded(skip_count: usize) -> Self {
        Self { skip_count, max_items: None }
    }

    /// Build a request from optional query values, filling gaps with defaults.
    pub fn from_optional(
        skip_count: Option<usize>,
        max_items: Option<usize>,
        default_max_items: usize,
    ) -> Result<Self> {
        Self::new(
            skip_count.unwrap_or(DEFAULT_SKIP_COUNT),
            max_items.unwrap_or(default_max_items),
        )
    }

    #[must_use]
    pub const fn skip_count(&self) -> usize {
        self.skip_count
    }

    #[must_use]
    pub fn max_items(&self) -> Option<usize> {
        self.max_items.map(NonZeroUsize::get)
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.max_items.is_none()
    }

    /// Cut the requested window out of `source`.
    #[must_use]
    pub fn apply<T: Clone>(&self, source: &[T]) -> Page<T> {
        let total = source.len();
        let start = self.skip_count.min(total);
        let end = match self.max_items {
            Some(max) => start.saturating_add(max.get()).min(total),
            None => total,
        };
        let has_more_items = match self.max_items {
            Some(max) => self.skip_count.saturating_add(max.get()) < total,
            None => false,
        };
        Page {
            items: source[start..end].to_vec(),
            has_more_items,
            total_items: Some(total),
            skip_count: self.skip_count,
            max_items: self.max_items(),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { skip_count: DEFAULT_SKIP_COUNT, max_items: NonZeroUsize::new(DEFAULT_MAX_ITEMS) }
    }
}

/// One page of results plus the paging facts needed to fetch the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more_items: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<usize>,
    pub skip_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl<T> Page<T> {
    /// Wrap items that were already windowed elsewhere.
    #[must_use]
    pub fn from_parts(
        items: Vec<T>,
        has_more_items: bool,
        total_items: Option<usize>,
        request: &PageRequest,
    ) -> Self {
        Self {
            items,
            has_more_items,
            total_items,
            skip_count: request.skip_count(),
            max_items: request.max_items(),
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Convert every item, keeping the paging facts untouched.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            has_more_items: self.has_more_items,
            total_items: self.total_items,
            skip_count: self.skip_count,
            max_items: self.max_items,
        }
    }
}

/// Produce the page `request` describes from a materialized `source`.
///
/// An absent source is an empty collection. An absent request is a caller
/// error and is never replaced by a default.
pub fn paginate<T: Clone>(source: Option<&[T]>, request: Option<&PageRequest>) -> Result<Page<T>> {
    let request = request
        .ok_or_else(|| CoreError::InvalidArgument("paging request is required".to_owned()))?;
    Ok(request.apply(source.unwrap_or(&[])))
}
