// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generic DAO base shared by every generated DAO.

use std::{fmt, marker::PhantomData};

use tracing::debug;

use crate::{DaoError, Entity, Session, SessionFactory};

/// Generic data-access object for entity `E`.
///
/// Generated DAOs wrap this type and dereference to it, so `persist`, `get`
/// and `current_session` are available on every generated DAO.
pub struct AbstractDao<E, F> {
    session_factory: F,
    entity:          PhantomData<fn() -> E>
}

impl<E: Entity, F: SessionFactory> AbstractDao<E, F> {
    /// Create a DAO backed by `session_factory`.
    pub const fn new(session_factory: F) -> Self {
        Self {
            session_factory,
            entity: PhantomData
        }
    }

    /// The injected session factory.
    pub const fn session_factory(&self) -> &F {
        &self.session_factory
    }

    /// Session for the current unit of work.
    ///
    /// # Errors
    ///
    /// Propagates factory failures.
    pub fn current_session(&self) -> Result<F::Session, DaoError> {
        self.session_factory.current_session()
    }

    /// Insert or update `entity`.
    ///
    /// # Errors
    ///
    /// Propagates session failures.
    pub fn persist(&self, entity: E) -> Result<E, DaoError> {
        debug!(entity = E::NAME, id = ?entity.id(), "persisting entity");
        self.current_session()?.persist(entity)
    }

    /// Load an entity by identifier.
    ///
    /// # Errors
    ///
    /// Propagates session failures.
    pub fn get(&self, id: E::Id) -> Result<Option<E>, DaoError> {
        debug!(entity = E::NAME, id = ?id, "loading entity");
        self.current_session()?.get::<E>(&id)
    }
}

impl<E: Entity, F: fmt::Debug> fmt::Debug for AbstractDao<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbstractDao")
            .field("entity", &E::NAME)
            .field("session_factory", &self.session_factory)
            .finish()
    }
}
