// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity metadata consumed by the engine.
//!
//! An [`EntityDescriptor`] is the engine's only input. The proc-macro builds
//! one from a `DeriveInput` through [`crate::reader`]; build scripts can
//! construct descriptors by hand with [`EntityDescriptor::new`] and
//! [`FieldDescriptor::new`].
//!
//! # Type Kinds
//!
//! | Declared type | [`TypeKind`] | Can be absent |
//! |---------------|--------------|---------------|
//! | `Option<T>` | `Optional(T)` | yes |
//! | `i8`..`i128`, `u8`..`u128`, `isize`, `usize`, `f32`, `f64`, `char` | `PrimitiveNumeric` | no |
//! | `bool` | `PrimitiveBoolean` | no |
//! | anything else | `Required` | no |

use syn::{GenericArgument, Ident, PathArguments, Type, Visibility, parse_quote};

const NUMERIC_PRIMITIVES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64", "char"
];

/// Semantic type tag of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// `Option<T>`, carrying `T`.
    Optional(Type),

    /// Bare numeric primitive.
    PrimitiveNumeric,

    /// Bare `bool`.
    PrimitiveBoolean,

    /// Any other non-optional type.
    Required
}

impl TypeKind {
    /// Classify a declared field type.
    ///
    /// Only single-segment paths count as primitives, so `my::u32` is
    /// `Required`.
    #[must_use]
    pub fn classify(ty: &Type) -> Self {
        let Type::Path(type_path) = ty else {
            return Self::Required;
        };
        if type_path.qself.is_some() {
            return Self::Required;
        }
        let Some(segment) = type_path.path.segments.last() else {
            return Self::Required;
        };

        if segment.ident == "Option"
            && let PathArguments::AngleBracketed(args) = &segment.arguments
            && args.args.len() == 1
            && let Some(GenericArgument::Type(inner)) = args.args.first()
        {
            return Self::Optional(inner.clone());
        }

        if type_path.path.segments.len() != 1 || !segment.arguments.is_none() {
            return Self::Required;
        }
        let name = segment.ident.to_string();
        if name == "bool" {
            Self::PrimitiveBoolean
        } else if NUMERIC_PRIMITIVES.contains(&name.as_str()) {
            Self::PrimitiveNumeric
        } else {
            Self::Required
        }
    }

    /// Check if the kind is a bare primitive.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::PrimitiveNumeric | Self::PrimitiveBoolean)
    }

    /// Inner type of an `Option<T>` field.
    #[must_use]
    pub const fn optional_inner(&self) -> Option<&Type> {
        match self {
            Self::Optional(inner) => Some(inner),
            _ => None
        }
    }
}

/// Relational marker on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `#[one_to_many]`.
    OneToMany,

    /// `#[many_to_one]`.
    ManyToOne
}

/// How a default literal is turned into a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DefaultKind {
    /// Parsed with the field type's `FromStr`.
    #[default]
    Scalar,

    /// Named variant (or associated constant) of the field type.
    Enum
}

/// Default declared on a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultSpec {
    /// Literal as written in the attribute.
    pub literal: String,

    /// Interpretation of the literal.
    pub kind: DefaultKind
}

impl DefaultSpec {
    /// Default parsed through `FromStr`.
    pub fn scalar(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            kind:    DefaultKind::Scalar
        }
    }

    /// Default naming a variant of the field's type.
    pub fn variant(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            kind:    DefaultKind::Enum
        }
    }
}

/// DAO generation options from `#[dao(...)]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DaoOptions {
    /// Type name prefix; `None` uses the generator default.
    pub prefix: Option<String>,

    /// Generate the six search variation methods.
    pub variations: bool,

    /// Page size when search parameters omit `max_results`; `None` uses the
    /// generator default.
    pub max_results: Option<u32>
}

/// A single entity field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field identifier.
    pub ident: Ident,

    /// Declared type.
    pub ty: Type,

    /// Semantic type tag derived from `ty`.
    pub kind: TypeKind,

    /// `#[id]` marker.
    pub is_id: bool,

    /// `#[transient]` marker.
    pub is_transient: bool,

    /// Relational marker.
    pub relation: Option<Relation>,

    /// `#[default_value]` marker.
    pub default: Option<DefaultSpec>
}

impl FieldDescriptor {
    /// Plain field with no markers.
    #[must_use]
    pub fn new(ident: Ident, ty: Type) -> Self {
        let kind = TypeKind::classify(&ty);
        Self {
            ident,
            ty,
            kind,
            is_id: false,
            is_transient: false,
            relation: None,
            default: None
        }
    }

    /// Mark as identifier.
    #[must_use]
    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    /// Mark as transient.
    #[must_use]
    pub fn transient(mut self) -> Self {
        self.is_transient = true;
        self
    }

    /// Mark as relational.
    #[must_use]
    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = Some(relation);
        self
    }

    /// Attach a default.
    #[must_use]
    pub fn default_value(mut self, default: DefaultSpec) -> Self {
        self.default = Some(default);
        self
    }

    /// Field name as a string.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.to_string()
    }

    /// Check whether the field contributes equality predicates.
    ///
    /// Independent of default eligibility.
    #[must_use]
    pub const fn is_predicate_eligible(&self) -> bool {
        !self.is_transient && self.relation.is_none()
    }
}

/// Complete description of one entity.
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility, reused for the DAO type.
    pub vis: Visibility,

    /// Module path the entity lives in, used for emitted source units.
    pub namespace: Vec<String>,

    /// `#[entity]` marker.
    pub is_entity: bool,

    /// Persistence name; the struct name unless overridden.
    pub entity_name: String,

    /// Generation options.
    pub options: DaoOptions,

    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>
}

impl EntityDescriptor {
    /// Public entity with the marker set and no fields.
    #[must_use]
    pub fn new(ident: Ident) -> Self {
        let entity_name = ident.to_string();
        Self {
            ident,
            vis: parse_quote!(pub),
            namespace: Vec::new(),
            is_entity: true,
            entity_name,
            options: DaoOptions::default(),
            fields: Vec::new()
        }
    }

    /// Append a field.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Replace generation options.
    #[must_use]
    pub fn options(mut self, options: DaoOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the namespace.
    #[must_use]
    pub fn namespace<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.namespace = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Clear the entity marker.
    #[must_use]
    pub fn not_entity(mut self) -> Self {
        self.is_entity = false;
        self
    }

    /// Struct name as a string.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.to_string()
    }
}
