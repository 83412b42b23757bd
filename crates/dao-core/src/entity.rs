// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity metamodel.

use std::fmt::Debug;

use crate::Value;

/// Runtime view of a persistable entity.
///
/// `#[derive(Dao)]` implements this trait alongside the DAO so sessions can
/// resolve identifiers and property paths without reflection.
///
/// # Example
///
/// ```rust,ignore
/// impl Entity for User {
///     type Id = i64;
///     const NAME: &'static str = "User";
///
///     fn id(&self) -> Option<i64> {
///         self.id.clone()
///     }
///
///     fn property(&self, name: &str) -> Option<Value> {
///         match name {
///             "id" => self.id.clone().map(Value::from),
///             "name" => self.name.clone().map(Value::from),
///             _ => None
///         }
///     }
/// }
/// ```
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type (the `#[id]` field's inner type).
    type Id: Clone + PartialEq + Debug + Send + Sync + 'static;

    /// Persistence name of the entity.
    const NAME: &'static str;

    /// Current identifier value, if assigned.
    fn id(&self) -> Option<Self::Id>;

    /// Value of a persistent property by field name.
    ///
    /// Returns `None` for absent values, unknown names and non-persistent
    /// (transient or relational) fields.
    fn property(&self, name: &str) -> Option<Value>;
}
