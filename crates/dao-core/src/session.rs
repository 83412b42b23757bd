// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistence session abstraction.
//!
//! Generated DAOs never talk to storage directly. They obtain a [`Session`]
//! from the [`SessionFactory`] handed to their constructor and run every
//! operation through it.
//!
//! # Implementing a backend
//!
//! A backend supplies three primitives (`persist`, `get`, `list`); the
//! criteria builder and query binding come with default implementations.
//!
//! ```rust,ignore
//! #[derive(Clone)]
//! struct PgSession { pool: PgPool }
//!
//! impl Session for PgSession {
//!     fn persist<E: Entity>(&self, entity: E) -> Result<E, DaoError> { ... }
//!     fn get<E: Entity>(&self, id: &E::Id) -> Result<Option<E>, DaoError> { ... }
//!     fn list<E: Entity>(&self, criteria: &CriteriaQuery<E>, window: Window)
//!         -> Result<Vec<E>, DaoError> { ... }
//! }
//! ```

use crate::{CriteriaBuilder, CriteriaQuery, DaoError, Entity, Query, Window};

/// Unit of work against a persistence store.
pub trait Session {
    /// Criteria builder for this session.
    fn criteria_builder(&self) -> CriteriaBuilder {
        CriteriaBuilder::new()
    }

    /// Insert or update `entity`, keyed by its identifier.
    ///
    /// # Errors
    ///
    /// Backend-specific; [`DaoError::MissingIdentifier`] when the store
    /// requires an identifier and none is set.
    fn persist<E: Entity>(&self, entity: E) -> Result<E, DaoError>;

    /// Load an entity by identifier.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn get<E: Entity>(&self, id: &E::Id) -> Result<Option<E>, DaoError>;

    /// Run a criteria query over a window.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn list<E: Entity>(&self, criteria: &CriteriaQuery<E>, window: Window) -> Result<Vec<E>, DaoError>;

    /// Bind a criteria query to this session.
    fn create_query<E: Entity>(&self, criteria: CriteriaQuery<E>) -> Query<E, Self>
    where
        Self: Clone + Sized
    {
        Query::new(self.clone(), criteria)
    }
}

/// Source of sessions, injected into every generated DAO.
pub trait SessionFactory: Send + Sync + 'static {
    /// Session type produced by this factory.
    type Session: Session + Clone;

    /// Session bound to the current unit of work.
    ///
    /// # Errors
    ///
    /// Returns an error when no session can be opened.
    fn current_session(&self) -> Result<Self::Session, DaoError>;
}
