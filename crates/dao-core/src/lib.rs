// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for dao-derive.
//!
//! This crate provides the runtime surface that generated DAOs call into.
//! It can also be used standalone for hand-written DAOs.
//!
//! # Overview
//!
//! - [`SessionFactory`] / [`Session`]: the persistence runtime seam
//! - [`AbstractDao`]: base type every generated DAO dereferences to
//! - [`CriteriaBuilder`], [`CriteriaQuery`], [`Root`], [`Predicate`]:
//!   criteria values assembled by generated search methods
//! - [`Query`]: executable query with pagination
//! - [`SearchMeta`] / [`SortType`]: sort and pagination parameters
//! - [`Entity`]: metamodel implemented by `#[derive(Dao)]`
//! - [`prelude`]: convenient re-exports
//!
//! # Usage
//!
//! ```rust,ignore
//! use dao_core::prelude::*;
//!
//! let dao = BrahmaUserDao::new(factory);
//! let found = dao.search(&User { name: Some("ann".into()), ..User::default() })?;
//! ```
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `memory` | [`memory::MemorySessionFactory`], an in-memory session |
//! | `serde` | `Serialize`/`Deserialize` for [`SearchMeta`] and [`SortType`] |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod criteria;
mod dao;
mod entity;
mod error;
#[cfg(feature = "memory")]
#[cfg_attr(docsrs, doc(cfg(feature = "memory")))]
pub mod memory;
pub mod prelude;
mod query;
mod search;
mod session;
mod value;

pub use criteria::{CriteriaBuilder, CriteriaQuery, Order, Path, Predicate, Root};
pub use dao::AbstractDao;
pub use entity::Entity;
pub use error::DaoError;
pub use query::{Query, Window};
pub use search::{SearchMeta, SortType};
pub use session::{Session, SessionFactory};
pub use value::Value;
