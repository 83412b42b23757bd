// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method synthesizer.
//!
//! Pure functions from a [`ValidatedEntity`] to [`GeneratedMethod`] IR.
//!
//! # Base Methods
//!
//! | # | Method | Visibility | Depends on |
//! |---|--------|------------|------------|
//! | 1 | `new` | public | |
//! | 2 | `create_or_update` | public | |
//! | 3 | `get_predicate_list` | protected | |
//! | 4 | `get_search_query` | protected | 3 |
//! | 5 | `get_by_id` | public | |
//! | 6 | `search` | public | 4 |
//! | 7 | `search_unique_result` | public | 4 |
//!
//! # Variations
//!
//! [`query_method`] and [`search_method`] are parameterized by
//! [`SearchVariant`]. The base pair uses `SearchVariant::Base`; the six
//! variation methods are the same two generators over
//! [`SearchVariant::VARIATIONS`].

use crate::{
    descriptor::DefaultKind,
    ir::{
        DefaultValue, ErrorCondition, Fetch, GeneratedMethod, MethodName, MethodVisibility, Param,
        ParamType, ReturnType, SearchVariant, Statement
    },
    validate::ValidatedEntity
};

/// The seven base methods, in order.
#[must_use]
pub fn base_methods(entity: &ValidatedEntity<'_>) -> Vec<GeneratedMethod> {
    vec![
        constructor(),
        create_or_update(entity),
        get_predicate_list(entity),
        query_method(SearchVariant::Base),
        get_by_id(entity),
        search_method(SearchVariant::Base, 0),
        search_unique_result(),
    ]
}

/// The six variation methods: three query builders, then three searches.
#[must_use]
pub fn variation_methods(default_max_results: u32) -> Vec<GeneratedMethod> {
    let queries = SearchVariant::VARIATIONS.into_iter().map(query_method);
    let searches = SearchVariant::VARIATIONS
        .into_iter()
        .map(|variant| search_method(variant, default_max_results));
    queries.chain(searches).collect()
}

fn constructor() -> GeneratedMethod {
    GeneratedMethod {
        name:       MethodName::New,
        visibility: MethodVisibility::Public,
        params:     vec![Param::new("session_factory", ParamType::SessionFactory)],
        returns:    ReturnType::SelfType,
        body:       vec![Statement::ConstructBase],
        errors:     Vec::new()
    }
}

fn create_or_update(entity: &ValidatedEntity<'_>) -> GeneratedMethod {
    let mut body: Vec<Statement> = entity
        .default_fields()
        .filter_map(|(field, ty)| {
            let default = field.default.as_ref()?;
            let value = match default.kind {
                DefaultKind::Enum => DefaultValue::Variant(syn::parse_str(&default.literal).ok()?),
                DefaultKind::Scalar => DefaultValue::Parsed(default.literal.clone())
            };
            Some(Statement::InjectDefault {
                field: field.ident.clone(),
                ty: ty.clone(),
                value
            })
        })
        .collect();

    let parses = body.iter().any(|stmt| {
        matches!(
            stmt,
            Statement::InjectDefault {
                value: DefaultValue::Parsed(_),
                ..
            }
        )
    });
    let param = if body.is_empty() {
        Param::new("entity", ParamType::Entity)
    } else {
        Param::mutable("entity", ParamType::Entity)
    };
    body.push(Statement::Persist);

    let mut errors = vec![ErrorCondition::Session];
    if parses {
        errors.push(ErrorCondition::InvalidDefault);
    }

    GeneratedMethod {
        name: MethodName::CreateOrUpdate,
        visibility: MethodVisibility::Public,
        params: vec![param],
        returns: ReturnType::Entity,
        body,
        errors
    }
}

fn get_predicate_list(entity: &ValidatedEntity<'_>) -> GeneratedMethod {
    let mut body = vec![Statement::CollectPredicates];
    body.extend(
        entity
            .predicate_fields()
            .map(|(field, _)| Statement::EqualityPredicate {
                field: field.ident.clone()
            })
    );
    body.push(Statement::ReturnPredicates);

    GeneratedMethod {
        name: MethodName::GetPredicateList,
        visibility: MethodVisibility::Protected,
        params: vec![
            Param::new("search_query", ParamType::EntityRef),
            Param::new("criteria_builder", ParamType::CriteriaBuilderRef),
            Param::new("from", ParamType::RootRef),
        ],
        returns: ReturnType::PredicateList,
        body,
        errors: Vec::new()
    }
}

fn get_by_id(entity: &ValidatedEntity<'_>) -> GeneratedMethod {
    GeneratedMethod {
        name:       MethodName::GetById,
        visibility: MethodVisibility::Public,
        params:     vec![Param::new("id", ParamType::Identifier(entity.id_type().clone()))],
        returns:    ReturnType::OptionalEntity,
        body:       vec![Statement::LoadById],
        errors:     vec![ErrorCondition::Session]
    }
}

fn search_unique_result() -> GeneratedMethod {
    GeneratedMethod {
        name:       MethodName::SearchUniqueResult,
        visibility: MethodVisibility::Public,
        params:     vec![Param::new("search_query", ParamType::EntityRef)],
        returns:    ReturnType::OptionalEntity,
        body:       vec![Statement::RunQuery {
            source:   MethodName::GetSearchQuery(SearchVariant::Base),
            args:     vec!["search_query"],
            paginate: false,
            fetch:    Fetch::UniqueResult
        }],
        errors:     vec![ErrorCondition::Session, ErrorCondition::NonUniqueResult]
    }
}

fn variant_params(variant: SearchVariant, params_ty: ParamType) -> Vec<Param> {
    let mut params = vec![Param::new("search_query", ParamType::EntityRef)];
    if variant.has_params() {
        params.push(Param::new("search_params", params_ty));
    }
    if variant.has_predicate_list() {
        params.push(Param::new("search_restrictions", ParamType::PredicateList));
        params.push(Param::new("from", ParamType::Root));
        params.push(Param::new("query", ParamType::CriteriaQuery));
    }
    params
}

/// Query builder for one variant.
///
/// Without a caller-supplied predicate list the method builds its own
/// criteria query and root and derives predicates with
/// `get_predicate_list`. With search parameters, sorting is applied to the
/// selection before restrictions.
#[must_use]
pub fn query_method(variant: SearchVariant) -> GeneratedMethod {
    let derives = !variant.has_predicate_list();

    let mut body = vec![Statement::OpenSession];
    if derives || variant.has_params() {
        body.push(Statement::CriteriaBuilder);
    }
    if derives {
        body.push(Statement::CreateCriteria);
    }
    body.push(Statement::Select);
    if variant.has_params() {
        body.push(Statement::ApplySort);
    }
    if derives {
        body.push(Statement::DerivePredicates);
    }
    body.push(Statement::Restrict);
    body.push(Statement::CreateQuery);

    GeneratedMethod {
        name: MethodName::GetSearchQuery(variant),
        visibility: MethodVisibility::Protected,
        params: variant_params(variant, ParamType::SearchParams),
        returns: ReturnType::Query,
        body,
        errors: vec![ErrorCondition::Session]
    }
}

/// Public search for one variant.
///
/// With search parameters the method requires them to be present, resolves
/// the page window (`default_max_results` rows from offset 0 unless
/// overridden) and paginates the query. `default_max_results` is unused for
/// variants without search parameters.
#[must_use]
pub fn search_method(variant: SearchVariant, default_max_results: u32) -> GeneratedMethod {
    let params = variant_params(variant, ParamType::OptionalSearchParams);
    let args = params.iter().map(|param| param.name).collect();

    let mut body = Vec::new();
    let mut errors = vec![ErrorCondition::Session];
    if variant.has_params() {
        body.push(Statement::RequireSearchParams);
        body.push(Statement::ResolveWindow {
            default_max_results
        });
        errors.push(ErrorCondition::MissingSearchParams);
    }
    body.push(Statement::RunQuery {
        source: MethodName::GetSearchQuery(variant),
        args,
        paginate: variant.has_params(),
        fetch: Fetch::List
    });

    GeneratedMethod {
        name: MethodName::Search(variant),
        visibility: MethodVisibility::Public,
        params,
        returns: ReturnType::EntityList,
        body,
        errors
    }
}
