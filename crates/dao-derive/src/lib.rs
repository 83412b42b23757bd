// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Data-access objects from a single entity definition.
//!
//! `#[derive(Dao)]` turns an annotated struct into a DAO type with
//! persistence, lookup by id and criteria search, all running through a
//! pluggable [`SessionFactory`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dao_derive::{Dao, prelude::*};
//!
//! #[derive(Debug, Clone, Default, Dao)]
//! #[entity]
//! pub struct User {
//!     #[id]
//!     pub id: Option<i64>,
//!
//!     pub name: Option<String>,
//!
//!     #[default_value = "0"]
//!     pub visits: Option<i64>
//! }
//!
//! let dao = UserDao::new(MemorySessionFactory::new());
//! dao.create_or_update(User { id: Some(1), name: Some("ann".into()), ..User::default() })?;
//!
//! let example = User { name: Some("ann".into()), ..User::default() };
//! let found = dao.search_unique_result(&example)?;
//! ```
//!
//! Generated code refers to `::dao_core`, so depend on `dao-core` next to
//! this crate.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `memory` | In-memory session (`memory::MemorySessionFactory`) |
//! | `serde` | `Serialize`/`Deserialize` for [`SearchMeta`] and [`SortType`] |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub use dao_core::*;
pub use dao_derive_impl::{Dao, dao_module};
