// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation-time diagnostics.
//!
//! | Error | Effect |
//! |-------|--------|
//! | [`StructuralError`] | aborts generation for that entity only |
//! | [`FieldTypeError`] | reported; generation completes without the field's default and predicate |
//! | [`EmissionError`](crate::emit::EmissionError) | reported as a warning; other units are still written |

use proc_macro2::Span;
use syn::Ident;
use thiserror::Error;

/// Entity-level failure. No DAO is produced for the entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// The `#[entity]` marker is missing.
    #[error("cannot generate a DAO for non-entity `{entity}`")]
    NotAnEntity {
        /// Struct name.
        entity: String
    },

    /// No field carries `#[id]`.
    #[error("no identifier field found in `{entity}`")]
    MissingIdentifier {
        /// Struct name.
        entity: String
    },

    /// More than one field carries `#[id]`.
    #[error("`{entity}` declares more than one identifier field: {}", fields.join(", "))]
    DuplicateIdentifier {
        /// Struct name.
        entity: String,
        /// Every field marked `#[id]`, in declaration order.
        fields: Vec<String>
    }
}

impl StructuralError {
    /// Name of the rejected entity.
    #[must_use]
    pub fn entity(&self) -> &str {
        match self {
            Self::NotAnEntity {
                entity
            }
            | Self::MissingIdentifier {
                entity
            }
            | Self::DuplicateIdentifier {
                entity, ..
            } => entity
        }
    }
}

/// Field-level failure. Generation continues; the field contributes no
/// default injection and no predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldTypeError {
    /// Bare numeric or boolean field.
    #[error("primitive types are not supported while using #[derive(Dao)] (field `{field}`)")]
    Primitive {
        /// Offending field.
        field: Ident
    },

    /// Non-`Option` field that takes part in predicates or defaults.
    #[error("field `{field}` must be `Option<_>` to be searchable or defaulted, found `{ty}`")]
    NotOptional {
        /// Offending field.
        field: Ident,
        /// Declared type, as written.
        ty:    String
    },

    /// Enum default literal that is not a valid identifier.
    #[error("default `{literal}` on field `{field}` is not a valid variant name")]
    InvalidVariant {
        /// Offending field.
        field:   Ident,
        /// Literal from the attribute.
        literal: String
    }
}

impl FieldTypeError {
    /// Offending field.
    #[must_use]
    pub const fn field(&self) -> &Ident {
        match self {
            Self::Primitive {
                field
            }
            | Self::NotOptional {
                field, ..
            }
            | Self::InvalidVariant {
                field, ..
            } => field
        }
    }

    /// Span to attach the diagnostic to.
    #[must_use]
    pub fn span(&self) -> Span {
        self.field().span()
    }
}
