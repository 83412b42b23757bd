// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime error type shared by generated DAOs and session implementations.

use std::fmt;

use thiserror::Error;

/// Error returned by DAO and session operations.
///
/// Generated methods surface every failure through this type:
///
/// | Variant | Raised by |
/// |---------|-----------|
/// | `MissingSearchParams` | `search_with_params*` called with `None` |
/// | `InvalidDefault` | `create_or_update` when a default literal fails to parse |
/// | `NonUniqueResult` | `search_unique_result` when several rows match |
/// | `MissingIdentifier` | sessions persisting an entity without an id |
/// | `Session` / `Backend` | the persistence runtime itself |
#[derive(Debug, Error)]
pub enum DaoError {
    /// Sort/pagination parameters were required but absent.
    #[error("search parameters must not be null")]
    MissingSearchParams,

    /// A `#[default_value]` literal could not be parsed into the field type.
    #[error("invalid default `{value}` for field `{field}`: {reason}")]
    InvalidDefault {
        /// Field name.
        field:  &'static str,
        /// Literal declared on the field.
        value:  &'static str,
        /// Parser error message.
        reason: String
    },

    /// A unique-result query matched more than one row.
    #[error("query on `{entity}` matched {count} rows, expected at most one")]
    NonUniqueResult {
        /// Entity name.
        entity: &'static str,
        /// Number of matching rows.
        count:  usize
    },

    /// The entity carries no identifier value.
    #[error("cannot persist `{entity}` without an identifier")]
    MissingIdentifier {
        /// Entity name.
        entity: &'static str
    },

    /// Session-level failure reported by the runtime.
    #[error("session error: {0}")]
    Session(String),

    /// Error raised by an underlying storage backend.
    #[error(transparent)]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>)
}

impl DaoError {
    /// Build an [`DaoError::InvalidDefault`] from a parser error.
    ///
    /// Generated `create_or_update` methods call this from `map_err`.
    pub fn invalid_default(field: &'static str, value: &'static str, reason: impl fmt::Display) -> Self {
        Self::InvalidDefault {
            field,
            value,
            reason: reason.to_string()
        }
    }

    /// Build a [`DaoError::Session`] from any message.
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session(message.into())
    }

    /// Check if this error is caused by missing search parameters.
    pub const fn is_missing_search_params(&self) -> bool {
        matches!(self, Self::MissingSearchParams)
    }
}
