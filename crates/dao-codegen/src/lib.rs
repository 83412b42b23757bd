// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DAO synthesis engine.
//!
//! Reads an entity description and synthesizes the source of a data-access
//! object: persistence, lookup by id and a family of search methods built on
//! one base search query. `dao-derive` drives this crate from a proc-macro;
//! build scripts can drive it directly through [`Generator`].
//!
//! # Pipeline
//!
//! ```text
//! DeriveInput ─► reader ─► EntityDescriptor ─► validate ─► synth ─► ir ─► render ─► TokenStream
//!                                                                            │
//!                                      Generator ─► SourceUnit ─► Emitter ◄──┘
//! ```
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Read attributes | [`reader`] | [`EntityDescriptor`] |
//! | Check entity and fields | [`validate`] | [`ValidatedEntity`](validate::ValidatedEntity) |
//! | Synthesize methods | [`synth`] | [`GeneratedMethod`](ir::GeneratedMethod) |
//! | Assemble DAO | [`assemble`] | [`Expansion`] |
//! | Render | [`render`] | `TokenStream` |
//! | Aggregate DAOs | [`module`] | module container type |
//! | Write files | [`emit`] | [`SourceUnit`] |
//!
//! # Generated Methods
//!
//! | Method | Visibility | When |
//! |--------|------------|------|
//! | `new` | public | always |
//! | `create_or_update` | public | always |
//! | `get_predicate_list` | crate | always |
//! | `get_search_query` | crate | always |
//! | `get_by_id` | public | always |
//! | `search` | public | always |
//! | `search_unique_result` | public | always |
//! | `get_search_query_with_params` | crate | `#[dao(variations)]` |
//! | `get_search_query_with_predicate_list` | crate | `#[dao(variations)]` |
//! | `get_search_query_with_params_and_predicate_list` | crate | `#[dao(variations)]` |
//! | `search_with_params` | public | `#[dao(variations)]` |
//! | `search_with_predicate_list` | public | `#[dao(variations)]` |
//! | `search_with_params_and_predicate_list` | public | `#[dao(variations)]` |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod assemble;
pub mod config;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod generator;
pub mod ir;
pub mod module;
pub mod reader;
pub mod render;
pub mod synth;
pub mod validate;

pub use assemble::{Expansion, expand};
pub use config::{DEFAULT_MAX_RESULTS, GeneratorConfig};
pub use descriptor::{
    DaoOptions, DefaultKind, DefaultSpec, EntityDescriptor, FieldDescriptor, Relation, TypeKind
};
pub use emit::{EmissionError, Emitter, FileEmitter, SourceUnit};
pub use error::{FieldTypeError, StructuralError};
pub use generator::{EntityDiagnostic, GenerationReport, Generator};
pub use module::{DaoRef, GeneratedModuleType, render_module};
