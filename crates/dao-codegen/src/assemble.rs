// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-entity assembly.
//!
//! validate, synthesize base methods, synthesize variations when requested,
//! then wrap everything in a [`GeneratedDaoType`] next to the entity's
//! [`EntityModel`].

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::{
    config::GeneratorConfig,
    descriptor::EntityDescriptor,
    error::{FieldTypeError, StructuralError},
    ir::{EntityModel, GeneratedDaoType},
    render::{render_dao, render_entity_model},
    synth::{base_methods, variation_methods},
    validate::validate
};

/// Everything generated for one entity.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// The DAO type.
    pub dao: GeneratedDaoType,

    /// The `dao_core::Entity` implementation.
    pub model: EntityModel,

    /// Field problems found while generating, one per field.
    pub diagnostics: Vec<FieldTypeError>
}

impl Expansion {
    /// Rendered entity impl followed by the DAO type.
    #[must_use]
    pub fn to_tokens(&self) -> TokenStream {
        let model = render_entity_model(&self.model);
        let dao = render_dao(&self.dao);
        quote! {
            #model
            #dao
        }
    }
}

/// Expand one entity.
///
/// # Errors
///
/// Returns [`StructuralError`] when the entity is not marked `#[entity]` or
/// does not have exactly one `#[id]` field. Nothing is generated in that case.
pub fn expand(descriptor: &EntityDescriptor, config: &GeneratorConfig) -> Result<Expansion, StructuralError> {
    let validated = validate(descriptor)?;
    let options = &descriptor.options;

    let prefix = options.prefix.as_deref().unwrap_or(config.default_prefix());
    let max_results = options.max_results.unwrap_or(config.default_max_results());

    let mut methods = base_methods(&validated);
    if options.variations {
        methods.extend(variation_methods(max_results));
    }

    let id_field = validated.id_field();
    let model = EntityModel {
        entity:      descriptor.ident.clone(),
        entity_name: descriptor.entity_name.clone(),
        id_field:    id_field.ident.clone(),
        id_type:     validated.id_type().clone(),
        id_optional: id_field.kind.optional_inner().is_some(),
        properties:  validated
            .predicate_fields()
            .map(|(field, _)| field.ident.clone())
            .collect()
    };

    let dao = GeneratedDaoType {
        name: format_ident!("{}{}Dao", prefix, descriptor.ident),
        entity: descriptor.ident.clone(),
        vis: descriptor.vis.clone(),
        namespace: descriptor.namespace.clone(),
        methods
    };

    Ok(Expansion {
        dao,
        model,
        diagnostics: validated.field_errors().to_vec()
    })
}
