// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity metadata reader.
//!
//! Turns Rust source into [`EntityDescriptor`]s. Reading never fails on
//! semantic problems (missing `#[entity]`, missing `#[id]`, primitive
//! fields); those belong to [`crate::validate`]. Only malformed attributes
//! are errors here.
//!
//! # Attributes
//!
//! ```rust,ignore
//! #[derive(Dao)]
//! #[entity(name = "users")]                         // persistable marker
//! #[dao(prefix = "Brahma", variations, max_results = 500)]
//! pub struct User {
//!     #[id]
//!     pub id: Option<i64>,
//!
//!     #[default_value = "42"]                       // parsed with FromStr
//!     pub score: Option<i32>,
//!
//!     #[default_value(value = "Active", kind = "enum")]
//!     pub status: Option<Status>,
//!
//!     #[transient]
//!     pub cache: Option<String>,
//!
//!     #[one_to_many]
//!     pub orders: Option<Vec<Order>>
//! }
//! ```

use darling::{FromDeriveInput, FromMeta, ast::NestedMeta};
use syn::{
    Attribute, DeriveInput, Field, File, Ident, Item, Meta, Path, Token, Visibility,
    punctuated::Punctuated
};

use crate::descriptor::{DaoOptions, DefaultKind, DefaultSpec, EntityDescriptor, FieldDescriptor, Relation};

/// `#[dao(...)]` options.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(dao), supports(struct_named))]
struct DaoAttrs {
    ident: Ident,

    vis: Visibility,

    #[darling(default)]
    prefix: Option<String>,

    #[darling(default)]
    variations: bool,

    #[darling(default)]
    max_results: Option<u32>
}

/// `#[entity(...)]` arguments; a bare `#[entity]` is all defaults.
#[derive(Debug, Default, FromMeta)]
struct EntityMarker {
    #[darling(default)]
    name: Option<String>
}

/// Long form of `#[default_value(...)]`.
#[derive(Debug, FromMeta)]
struct DefaultArgs {
    value: String,

    #[darling(default)]
    kind: DefaultKind
}

impl FromMeta for DefaultKind {
    /// Accepts `"scalar"` and `"enum"`, case-insensitive.
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "scalar" => Ok(Self::Scalar),
            "enum" => Ok(Self::Enum),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

impl FromMeta for DefaultSpec {
    /// `#[default_value = "literal"]`.
    fn from_string(value: &str) -> darling::Result<Self> {
        Ok(Self::scalar(value))
    }

    /// `#[default_value(value = "literal", kind = "enum")]`.
    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        let args = DefaultArgs::from_list(items)?;
        Ok(Self {
            literal: args.value,
            kind:    args.kind
        })
    }
}

/// Read one entity from a derive input.
///
/// The namespace is left empty; callers that know the module path set it
/// afterwards.
///
/// # Errors
///
/// - applied to anything but a struct with named fields
/// - malformed `#[dao]`, `#[entity]` or `#[default_value]` attributes
pub fn read(input: &DeriveInput) -> darling::Result<EntityDescriptor> {
    let attrs = DaoAttrs::from_derive_input(input)?;
    let marker = read_entity_marker(&input.attrs)?;

    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            syn::Fields::Named(named) => named
                .named
                .iter()
                .map(read_field)
                .collect::<darling::Result<Vec<_>>>()?,
            _ => {
                return Err(darling::Error::custom("Dao requires named fields").with_span(&input.ident));
            }
        },
        _ => {
            return Err(darling::Error::custom("Dao can only be derived for structs").with_span(&input.ident));
        }
    };

    let entity_name = marker
        .as_ref()
        .and_then(|marker| marker.name.clone())
        .unwrap_or_else(|| attrs.ident.to_string());

    Ok(EntityDescriptor {
        ident: attrs.ident,
        vis: attrs.vis,
        namespace: Vec::new(),
        is_entity: marker.is_some(),
        entity_name,
        options: DaoOptions {
            prefix:      attrs.prefix,
            variations:  attrs.variations,
            max_results: attrs.max_results
        },
        fields
    })
}

/// Read every `#[derive(Dao)]` struct in a parsed source file.
///
/// Inline modules are walked recursively and extend the namespace. Results
/// come back in source order, one per struct, so a malformed struct does not
/// hide the others.
pub fn read_file(file: &File, namespace: &[String]) -> Vec<darling::Result<EntityDescriptor>> {
    let mut out = Vec::new();
    read_items(&file.items, namespace, &mut out);
    out
}

fn read_items(items: &[Item], namespace: &[String], out: &mut Vec<darling::Result<EntityDescriptor>>) {
    for item in items {
        match item {
            Item::Struct(item) if derives_dao(&item.attrs) => {
                let input = DeriveInput::from(item.clone());
                out.push(read(&input).map(|mut entity| {
                    entity.namespace = namespace.to_vec();
                    entity
                }));
            }
            Item::Mod(module) => {
                if let Some((_, nested)) = &module.content {
                    let mut path = namespace.to_vec();
                    path.push(module.ident.to_string());
                    read_items(nested, &path, out);
                }
            }
            _ => {}
        }
    }
}

fn derives_dao(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .any(|path| path.segments.last().is_some_and(|segment| segment.ident == "Dao"))
}

fn read_entity_marker(attrs: &[Attribute]) -> darling::Result<Option<EntityMarker>> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("entity")) else {
        return Ok(None);
    };
    match &attr.meta {
        Meta::Path(_) => Ok(Some(EntityMarker::default())),
        meta => EntityMarker::from_meta(meta)
            .map(Some)
            .map_err(|err| err.with_span(attr))
    }
}

fn read_field(field: &Field) -> darling::Result<FieldDescriptor> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| darling::Error::custom("Dao fields must be named").with_span(field))?;
    let mut descriptor = FieldDescriptor::new(ident, field.ty.clone());

    for attr in &field.attrs {
        if attr.path().is_ident("id") {
            descriptor.is_id = true;
        } else if attr.path().is_ident("transient") {
            descriptor.is_transient = true;
        } else if attr.path().is_ident("one_to_many") {
            descriptor.relation = Some(Relation::OneToMany);
        } else if attr.path().is_ident("many_to_one") {
            descriptor.relation = Some(Relation::ManyToOne);
        } else if attr.path().is_ident("default_value") {
            let default = DefaultSpec::from_meta(&attr.meta).map_err(|err| err.with_span(attr))?;
            descriptor.default = Some(default);
        }
    }

    Ok(descriptor)
}
