// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Proc-macro adapter over `dao-codegen`. Use `dao-derive` instead.
//!
//! # Attribute Quick Reference
//!
//! ## Entity-Level
//!
//! ```rust,ignore
//! #[derive(Clone, Dao)]
//! #[entity]                       // Required: persistable entity marker
//! #[entity(name = "users")]       // Same, with an explicit persistence name
//! #[dao(
//!     prefix = "Brahma",          // Optional: DAO name prefix (default: none)
//!     variations,                 // Optional: sorted/paginated/filtered searches
//!     max_results = 500           // Optional: default page size (default: 1000)
//! )]
//! pub struct User { /* ... */ }
//! ```
//!
//! ## Field-Level
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[id]` | Identifier; exactly one per entity |
//! | `#[transient]` | Not searchable |
//! | `#[one_to_many]` / `#[many_to_one]` | Relation; not searchable |
//! | `#[default_value = "42"]` | Filled by `create_or_update` when absent, parsed with `FromStr` |
//! | `#[default_value(value = "Active", kind = "enum")]` | Filled with `<Type>::Active` |
//!
//! # Diagnostics
//!
//! | Problem | Reported at | DAO generated |
//! |---------|-------------|---------------|
//! | missing `#[entity]`, no or several `#[id]` | struct name | no |
//! | primitive field, non-`Option` searchable or defaulted field | field | yes, without that field |
//! | malformed attribute | attribute | no |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

mod dao;
mod module;

use proc_macro::TokenStream;

/// Derive a data-access object for an entity.
///
/// For `User` this generates `UserDao<F: SessionFactory>` (prefixed when
/// `#[dao(prefix = "...")]` is set) and implements `dao_core::Entity` for
/// `User`. The entity must be `Clone`, and every searchable field type must
/// convert into `dao_core::Value`.
///
/// # Example
///
/// ```rust,ignore
/// use dao_derive::{Dao, prelude::*};
///
/// #[derive(Debug, Clone, Default, Dao)]
/// #[entity]
/// #[dao(prefix = "Brahma", variations)]
/// pub struct User {
///     #[id]
///     pub id: Option<i64>,
///
///     pub name: Option<String>,
///
///     #[default_value = "0"]
///     pub visits: Option<i64>
/// }
///
/// let dao = BrahmaUserDao::new(MemorySessionFactory::new());
/// let user = dao.create_or_update(User { id: Some(1), ..User::default() })?;
/// assert_eq!(user.visits, Some(0));
///
/// let params = SearchMeta::new().sort_by("name").sort_type(SortType::Desc).max_results(10);
/// let page = dao.search_with_params(&User::default(), Some(&params))?;
/// ```
#[proc_macro_derive(
    Dao,
    attributes(dao, entity, id, transient, one_to_many, many_to_one, default_value)
)]
pub fn derive_dao(input: TokenStream) -> TokenStream {
    dao::derive(input)
}

/// Declare a container of DAO singletons sharing one session factory.
///
/// ```rust,ignore
/// dao_module! {
///     pub struct Daos {
///         UserDao,
///         crate::orders::OrderDao
///     }
/// }
///
/// let daos = Daos::new(MemorySessionFactory::new());
/// let users = daos.get_user_dao();
/// assert!(std::ptr::eq(users, daos.get_user_dao()));
/// ```
///
/// An empty list expands to nothing.
#[proc_macro]
pub fn dao_module(input: TokenStream) -> TokenStream {
    module::expand(input)
}
