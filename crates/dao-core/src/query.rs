// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Executable queries bound to a session.

use std::fmt;

use crate::{CriteriaQuery, DaoError, Entity, Session};

/// Pagination window applied when a query executes.
///
/// `None` means "no limit" for `max_results` and "start at zero" for
/// `first_result`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Window {
    /// Maximum rows to return.
    pub max_results: Option<u32>,

    /// Rows to skip before the first returned one.
    pub first_result: Option<u32>
}

impl Window {
    /// Window without limit or offset.
    pub const fn unbounded() -> Self {
        Self {
            max_results:  None,
            first_result: None
        }
    }

    /// Rows to skip, as a `usize`.
    pub fn offset(&self) -> usize {
        self.first_result.map_or(0, |first| first as usize)
    }

    /// Row limit, as a `usize`.
    pub fn limit(&self) -> Option<usize> {
        self.max_results.map(|max| max as usize)
    }
}

/// A criteria query ready to run against a session.
///
/// Created by [`Session::create_query`].
pub struct Query<E, S> {
    session:  S,
    criteria: CriteriaQuery<E>,
    window:   Window
}

impl<E: Entity, S: Session> Query<E, S> {
    /// Bind `criteria` to `session` with an unbounded window.
    pub fn new(session: S, criteria: CriteriaQuery<E>) -> Self {
        Self {
            session,
            criteria,
            window: Window::unbounded()
        }
    }

    /// Limit the number of returned rows.
    #[must_use]
    pub fn set_max_results(mut self, max_results: u32) -> Self {
        self.window.max_results = Some(max_results);
        self
    }

    /// Skip rows before the first returned one.
    #[must_use]
    pub fn set_first_result(mut self, first_result: u32) -> Self {
        self.window.first_result = Some(first_result);
        self
    }

    /// Underlying criteria.
    pub fn criteria(&self) -> &CriteriaQuery<E> {
        &self.criteria
    }

    /// Current pagination window.
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Execute and return every matching row.
    ///
    /// # Errors
    ///
    /// Propagates session failures.
    pub fn list(&self) -> Result<Vec<E>, DaoError> {
        self.session.list(&self.criteria, self.window)
    }

    /// Execute and return at most one row.
    ///
    /// # Errors
    ///
    /// Returns [`DaoError::NonUniqueResult`] when more than one row matches,
    /// and propagates session failures.
    pub fn unique_result(&self) -> Result<Option<E>, DaoError> {
        let mut rows = self.list()?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            count => Err(DaoError::NonUniqueResult {
                entity: E::NAME,
                count
            })
        }
    }
}

impl<E: Entity, S> fmt::Debug for Query<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("criteria", &self.criteria)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}
