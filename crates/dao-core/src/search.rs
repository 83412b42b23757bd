// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Sort and pagination parameters for search variations.

/// Sort direction for ordered searches.
///
/// Only [`SortType::Desc`] is special: any other value, or no value at all,
/// sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SortType {
    /// Ascending order.
    #[default]
    Asc,

    /// Descending order.
    Desc
}

/// Search parameters: sort field, direction and page window.
///
/// # Example
///
/// ```rust
/// use dao_core::{SearchMeta, SortType};
///
/// let params = SearchMeta::new()
///     .sort_by("created_at")
///     .sort_type(SortType::Desc)
///     .max_results(25);
///
/// assert_eq!(params.max_results, Some(25));
/// assert_eq!(params.first_result, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SearchMeta {
    /// Property to sort by.
    pub sort_by: Option<String>,

    /// Sort direction.
    pub sort_type: Option<SortType>,

    /// Maximum rows to fetch.
    pub max_results: Option<u32>,

    /// Index of the first row to fetch.
    pub first_result: Option<u32>
}

impl SearchMeta {
    /// Create empty parameters (no sort, default window).
    pub const fn new() -> Self {
        Self {
            sort_by:      None,
            sort_type:    None,
            max_results:  None,
            first_result: None
        }
    }

    /// Set the property to sort by.
    ///
    /// The name must be one the entity exposes through
    /// [`Entity::property`](crate::Entity::property). The in-memory session
    /// leaves rows in scan order (and logs at `debug`) when no row has a
    /// value for it, which covers transient, relational and misspelled
    /// names.
    #[must_use]
    pub fn sort_by(mut self, property: impl Into<String>) -> Self {
        self.sort_by = Some(property.into());
        self
    }

    /// Set the sort direction.
    #[must_use]
    pub fn sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = Some(sort_type);
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the index of the first row.
    #[must_use]
    pub fn first_result(mut self, first_result: u32) -> Self {
        self.first_result = Some(first_result);
        self
    }

    /// Check whether the descending sentinel is selected.
    pub fn is_descending(&self) -> bool {
        self.sort_type == Some(SortType::Desc)
    }
}
