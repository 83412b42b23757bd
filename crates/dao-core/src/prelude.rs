// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dao_core::prelude::*;
//! ```

#[cfg(feature = "memory")]
pub use crate::memory::{MemorySession, MemorySessionFactory};
pub use crate::{
    AbstractDao, CriteriaBuilder, DaoError, Entity, Query, SearchMeta, Session, SessionFactory,
    SortType, Value
};
