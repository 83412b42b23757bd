// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity validation.
//!
//! Two fatal checks run first, in order:
//!
//! 1. the entity marker must be present;
//! 2. exactly one field must carry `#[id]`.
//!
//! Then every field gets at most one [`FieldTypeError`]. A flagged field is
//! still part of the entity but is skipped by default injection, predicate
//! building and the property lookup.

use syn::Type;

use crate::{
    descriptor::{DefaultKind, DefaultSpec, EntityDescriptor, FieldDescriptor, TypeKind},
    error::{FieldTypeError, StructuralError}
};

/// Entity that passed the structural checks.
#[derive(Debug)]
pub struct ValidatedEntity<'a> {
    descriptor:   &'a EntityDescriptor,
    id_index:     usize,
    flagged:      Vec<bool>,
    field_errors: Vec<FieldTypeError>
}

/// Validate a descriptor.
///
/// # Errors
///
/// Returns the first structural problem found; field problems are collected
/// in [`ValidatedEntity::field_errors`] instead.
pub fn validate(descriptor: &EntityDescriptor) -> Result<ValidatedEntity<'_>, StructuralError> {
    if !descriptor.is_entity {
        return Err(StructuralError::NotAnEntity {
            entity: descriptor.name()
        });
    }

    let ids: Vec<usize> = descriptor
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.is_id)
        .map(|(index, _)| index)
        .collect();
    let id_index = match ids.as_slice() {
        [] => {
            return Err(StructuralError::MissingIdentifier {
                entity: descriptor.name()
            });
        }
        [index] => *index,
        _ => {
            return Err(StructuralError::DuplicateIdentifier {
                entity: descriptor.name(),
                fields: ids.iter().map(|&i| descriptor.fields[i].name()).collect()
            });
        }
    };

    let mut flagged = Vec::with_capacity(descriptor.fields.len());
    let mut field_errors = Vec::new();
    for field in &descriptor.fields {
        match check_field(field) {
            Some(err) => {
                flagged.push(true);
                field_errors.push(err);
            }
            None => flagged.push(false)
        }
    }

    Ok(ValidatedEntity {
        descriptor,
        id_index,
        flagged,
        field_errors
    })
}

fn check_field(field: &FieldDescriptor) -> Option<FieldTypeError> {
    match &field.kind {
        TypeKind::PrimitiveNumeric | TypeKind::PrimitiveBoolean => Some(FieldTypeError::Primitive {
            field: field.ident.clone()
        }),
        TypeKind::Required if field.is_predicate_eligible() || field.default.is_some() => {
            let ty = &field.ty;
            Some(FieldTypeError::NotOptional {
                field: field.ident.clone(),
                ty:    quote::quote!(#ty).to_string()
            })
        }
        TypeKind::Optional(_) => match &field.default {
            Some(DefaultSpec {
                literal,
                kind: DefaultKind::Enum
            }) if syn::parse_str::<syn::Ident>(literal).is_err() => Some(FieldTypeError::InvalidVariant {
                field:   field.ident.clone(),
                literal: literal.clone()
            }),
            _ => None
        },
        TypeKind::Required => None
    }
}

impl<'a> ValidatedEntity<'a> {
    /// Underlying descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &'a EntityDescriptor {
        self.descriptor
    }

    /// The `#[id]` field.
    #[must_use]
    pub fn id_field(&self) -> &'a FieldDescriptor {
        &self.descriptor.fields[self.id_index]
    }

    /// Identifier value type: the `Option` inner type, or the declared type.
    #[must_use]
    pub fn id_type(&self) -> &'a Type {
        let field = self.id_field();
        field.kind.optional_inner().unwrap_or(&field.ty)
    }

    /// Non-fatal field problems, one per flagged field, declaration order.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldTypeError] {
        &self.field_errors
    }

    fn usable(&self) -> impl Iterator<Item = (&'a FieldDescriptor, &'a Type)> + '_ {
        let descriptor = self.descriptor;
        descriptor
            .fields
            .iter()
            .zip(&self.flagged)
            .filter(|(_, flagged)| !**flagged)
            .filter_map(|(field, _)| field.kind.optional_inner().map(|inner| (field, inner)))
    }

    /// Fields with a default to inject, with their `Option` inner type.
    pub fn default_fields(&self) -> impl Iterator<Item = (&'a FieldDescriptor, &'a Type)> + '_ {
        self.usable().filter(|(field, _)| field.default.is_some())
    }

    /// Fields that contribute equality predicates and property lookups.
    pub fn predicate_fields(&self) -> impl Iterator<Item = (&'a FieldDescriptor, &'a Type)> + '_ {
        self.usable()
            .filter(|(field, _)| field.is_predicate_eligible())
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;
    use crate::descriptor::Relation;

    fn user() -> EntityDescriptor {
        EntityDescriptor::new(parse_quote!(User))
            .field(FieldDescriptor::new(parse_quote!(id), parse_quote!(Option<i64>)).id())
            .field(FieldDescriptor::new(parse_quote!(name), parse_quote!(Option<String>)))
    }

    #[test]
    fn accepts_valid_entity() {
        let entity = user();
        let validated = validate(&entity).unwrap();
        assert_eq!(validated.id_field().ident, "id");
        let id_type: Type = parse_quote!(i64);
        assert_eq!(validated.id_type(), &id_type);
        assert!(validated.field_errors().is_empty());
        assert_eq!(validated.predicate_fields().count(), 2);
    }

    #[test]
    fn rejects_non_entity() {
        let entity = user().not_entity();
        assert_eq!(
            validate(&entity).unwrap_err(),
            StructuralError::NotAnEntity {
                entity: "User".into()
            }
        );
    }

    #[test]
    fn entity_check_runs_before_identifier_check() {
        let entity = EntityDescriptor::new(parse_quote!(Empty)).not_entity();
        assert!(matches!(
            validate(&entity),
            Err(StructuralError::NotAnEntity { .. })
        ));
    }

    #[test]
    fn rejects_missing_identifier() {
        let entity = EntityDescriptor::new(parse_quote!(Log))
            .field(FieldDescriptor::new(parse_quote!(line), parse_quote!(Option<String>)));
        assert_eq!(
            validate(&entity).unwrap_err().to_string(),
            "no identifier field found in `Log`"
        );
    }

    #[test]
    fn rejects_duplicate_identifier() {
        let entity = user().field(FieldDescriptor::new(parse_quote!(code), parse_quote!(Option<String>)).id());
        assert_eq!(
            validate(&entity).unwrap_err(),
            StructuralError::DuplicateIdentifier {
                entity: "User".into(),
                fields: vec!["id".into(), "code".into()]
            }
        );
    }

    #[test]
    fn primitive_field_flagged_once() {
        let entity = user()
            .field(
                FieldDescriptor::new(parse_quote!(age), parse_quote!(i32))
                    .default_value(DefaultSpec::scalar("1"))
            )
            .field(FieldDescriptor::new(parse_quote!(active), parse_quote!(bool)).transient());
        let validated = validate(&entity).unwrap();

        let errors = validated.field_errors();
        assert_eq!(errors.len(), 2);
        assert!(matches!(&errors[0], FieldTypeError::Primitive { field } if field == "age"));
        assert!(matches!(&errors[1], FieldTypeError::Primitive { field } if field == "active"));
        assert_eq!(validated.default_fields().count(), 0);
        assert_eq!(validated.predicate_fields().count(), 2);
    }

    #[test]
    fn required_field_flagged_only_when_used() {
        let entity = user()
            .field(FieldDescriptor::new(parse_quote!(email), parse_quote!(String)))
            .field(FieldDescriptor::new(parse_quote!(cache), parse_quote!(String)).transient())
            .field(
                FieldDescriptor::new(parse_quote!(owner), parse_quote!(Owner))
                    .relation(Relation::ManyToOne)
            );
        let validated = validate(&entity).unwrap();
        let errors = validated.field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "email");
        assert!(errors[0].to_string().contains("`String`"));
    }

    #[test]
    fn invalid_enum_default_flagged() {
        let entity = user().field(
            FieldDescriptor::new(parse_quote!(status), parse_quote!(Option<Status>))
                .default_value(DefaultSpec::variant("not a variant"))
        );
        let validated = validate(&entity).unwrap();
        assert!(matches!(
            &validated.field_errors()[0],
            FieldTypeError::InvalidVariant { literal, .. } if literal == "not a variant"
        ));
        assert_eq!(validated.default_fields().count(), 0);
        assert_eq!(validated.predicate_fields().count(), 2);
    }

    #[test]
    fn default_and_predicate_eligibility_are_independent() {
        let entity = user().field(
            FieldDescriptor::new(parse_quote!(note), parse_quote!(Option<String>))
                .transient()
                .default_value(DefaultSpec::scalar("n/a"))
        );
        let validated = validate(&entity).unwrap();
        let defaults: Vec<_> = validated.default_fields().map(|(f, _)| f.name()).collect();
        let predicates: Vec<_> = validated.predicate_fields().map(|(f, _)| f.name()).collect();
        assert_eq!(defaults, vec!["note"]);
        assert_eq!(predicates, vec!["id", "name"]);
    }
}
