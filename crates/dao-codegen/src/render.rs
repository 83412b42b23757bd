// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! IR to Rust tokens.
//!
//! Rendering is a pure function of its input: the same IR always yields the
//! same tokens. Generated code refers to the runtime through absolute
//! `::dao_core::...` paths and to std through `::core` / `::std`, so it
//! compiles regardless of the caller's imports.
//!
//! # Output Shape
//!
//! ```rust,ignore
//! pub struct BrahmaUserDao<F: ::dao_core::SessionFactory> {
//!     inner: ::dao_core::AbstractDao<User, F>
//! }
//!
//! impl<F: ::dao_core::SessionFactory> BrahmaUserDao<F> {
//!     pub fn new(session_factory: F) -> Self { ... }
//!     pub fn create_or_update(&self, mut entity: User) -> Result<User, DaoError> { ... }
//!     pub(crate) fn get_predicate_list(&self, ...) -> Vec<Predicate> { ... }
//!     ...
//! }
//!
//! impl<F: ::dao_core::SessionFactory> Deref for BrahmaUserDao<F> {
//!     type Target = ::dao_core::AbstractDao<User, F>;
//!     ...
//! }
//! ```

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::ir::{
    DefaultValue, EntityModel, ErrorCondition, Fetch, GeneratedDaoType, GeneratedMethod, MethodName,
    MethodVisibility, ParamType, ReturnType, SearchVariant, Statement
};

/// Render a DAO type with its inherent, `Deref` and `Debug` impls.
#[must_use]
pub fn render_dao(dao: &GeneratedDaoType) -> TokenStream {
    let GeneratedDaoType {
        name,
        entity,
        vis,
        methods,
        ..
    } = dao;
    let name_str = name.to_string();
    let doc = format!(" Data access object for [`{entity}`].");
    let methods = methods.iter().map(|method| render_method(method, entity));

    quote! {
        #[doc = #doc]
        #vis struct #name<F: ::dao_core::SessionFactory> {
            inner: ::dao_core::AbstractDao<#entity, F>
        }

        impl<F: ::dao_core::SessionFactory> #name<F> {
            #(#methods)*
        }

        impl<F: ::dao_core::SessionFactory> ::core::ops::Deref for #name<F> {
            type Target = ::dao_core::AbstractDao<#entity, F>;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl<F> ::core::fmt::Debug for #name<F>
        where
            F: ::dao_core::SessionFactory + ::core::fmt::Debug
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(#name_str).field("inner", &self.inner).finish()
            }
        }
    }
}

/// Render the `dao_core::Entity` implementation.
#[must_use]
pub fn render_entity_model(model: &EntityModel) -> TokenStream {
    let EntityModel {
        entity,
        entity_name,
        id_field,
        id_type,
        id_optional,
        properties
    } = model;

    let id_body = if *id_optional {
        quote! { self.#id_field.clone() }
    } else {
        quote! { ::core::option::Option::Some(self.#id_field.clone()) }
    };
    let names = properties.iter().map(Ident::to_string);

    quote! {
        impl ::dao_core::Entity for #entity {
            type Id = #id_type;

            const NAME: &'static str = #entity_name;

            fn id(&self) -> ::core::option::Option<Self::Id> {
                #id_body
            }

            fn property(&self, name: &str) -> ::core::option::Option<::dao_core::Value> {
                match name {
                    #(#names => self.#properties.clone().map(::dao_core::Value::from),)*
                    _ => ::core::option::Option::None
                }
            }
        }
    }
}

/// Render one method.
#[must_use]
pub fn render_method(method: &GeneratedMethod, entity: &Ident) -> TokenStream {
    let name = method.name.ident();
    let vis = match method.visibility {
        MethodVisibility::Public => quote!(pub),
        MethodVisibility::Protected => quote!(pub(crate))
    };
    let receiver = if method.has_receiver() {
        quote!(&self,)
    } else {
        TokenStream::new()
    };
    let params = method.params.iter().map(|param| {
        let ident = Ident::new(param.name, Span::call_site());
        let ty = param_type(&param.ty, entity);
        if param.mutable {
            quote! { mut #ident: #ty }
        } else {
            quote! { #ident: #ty }
        }
    });

    let success = return_type(method.returns, entity);
    let returns = if method.is_fallible() {
        quote! { ::core::result::Result<#success, ::dao_core::DaoError> }
    } else {
        success
    };

    let pushes = method
        .body
        .iter()
        .any(|stmt| matches!(stmt, Statement::EqualityPredicate { .. }));
    let body = method
        .body
        .iter()
        .map(|stmt| render_statement(stmt, entity, pushes));

    let mut lints = Vec::new();
    if method.visibility == MethodVisibility::Protected {
        lints.push(quote!(dead_code));
    }
    if method.unused_params().next().is_some() {
        lints.push(quote!(unused_variables));
    }
    let allow = if lints.is_empty() {
        TokenStream::new()
    } else {
        quote! { #[allow(#(#lints),*)] }
    };

    let docs = method_docs(method).into_iter().map(|line| {
        let line = format!(" {line}");
        quote! { #[doc = #line] }
    });

    quote! {
        #(#docs)*
        #allow
        #vis fn #name(#receiver #(#params),*) -> #returns {
            #(#body)*
        }
    }
}

fn param_type(ty: &ParamType, entity: &Ident) -> TokenStream {
    match ty {
        ParamType::SessionFactory => quote!(F),
        ParamType::Entity => quote!(#entity),
        ParamType::EntityRef => quote!(&#entity),
        ParamType::CriteriaBuilderRef => quote!(&::dao_core::CriteriaBuilder),
        ParamType::RootRef => quote!(&::dao_core::Root<#entity>),
        ParamType::Root => quote!(::dao_core::Root<#entity>),
        ParamType::CriteriaQuery => quote!(::dao_core::CriteriaQuery<#entity>),
        ParamType::PredicateList => quote!(::std::vec::Vec<::dao_core::Predicate>),
        ParamType::SearchParams => quote!(&::dao_core::SearchMeta),
        ParamType::OptionalSearchParams => quote!(::core::option::Option<&::dao_core::SearchMeta>),
        ParamType::Identifier(id) => quote!(#id)
    }
}

fn return_type(returns: ReturnType, entity: &Ident) -> TokenStream {
    match returns {
        ReturnType::SelfType => quote!(Self),
        ReturnType::Entity => quote!(#entity),
        ReturnType::OptionalEntity => quote!(::core::option::Option<#entity>),
        ReturnType::EntityList => quote!(::std::vec::Vec<#entity>),
        ReturnType::PredicateList => quote!(::std::vec::Vec<::dao_core::Predicate>),
        ReturnType::Query => {
            quote!(::dao_core::Query<#entity, <F as ::dao_core::SessionFactory>::Session>)
        }
    }
}

fn render_statement(stmt: &Statement, entity: &Ident, pushes: bool) -> TokenStream {
    match stmt {
        Statement::ConstructBase => quote! {
            Self {
                inner: ::dao_core::AbstractDao::new(session_factory)
            }
        },
        Statement::InjectDefault {
            field,
            ty,
            value
        } => {
            let value = match value {
                DefaultValue::Variant(variant) => quote! { <#ty>::#variant },
                DefaultValue::Parsed(literal) => {
                    let field_str = field.to_string();
                    quote! {
                        #literal
                            .parse::<#ty>()
                            .map_err(|err| ::dao_core::DaoError::invalid_default(#field_str, #literal, err))?
                    }
                }
            };
            quote! {
                if entity.#field.is_none() {
                    entity.#field = ::core::option::Option::Some(#value);
                }
            }
        }
        Statement::Persist => quote! { self.inner.persist(entity) },
        Statement::CollectPredicates => {
            if pushes {
                quote! { let mut search_restrictions = ::std::vec::Vec::new(); }
            } else {
                quote! { let search_restrictions = ::std::vec::Vec::new(); }
            }
        }
        Statement::EqualityPredicate {
            field
        } => {
            let field_str = field.to_string();
            quote! {
                if let ::core::option::Option::Some(value) = &search_query.#field {
                    search_restrictions.push(criteria_builder.equal(from.get(#field_str), value.clone()));
                }
            }
        }
        Statement::ReturnPredicates => quote! { search_restrictions },
        Statement::OpenSession => quote! { let session = self.inner.current_session()?; },
        Statement::CriteriaBuilder => quote! {
            let criteria_builder = ::dao_core::Session::criteria_builder(&session);
        },
        Statement::CreateCriteria => quote! {
            let query = criteria_builder.create_query::<#entity>();
            let from = query.from();
        },
        Statement::Select => quote! { let select = query.select(&from); },
        Statement::ApplySort => quote! {
            let select = match search_params.sort_by.as_deref() {
                ::core::option::Option::Some(sort_by_value) => {
                    if search_params.is_descending() {
                        select.order_by(criteria_builder.desc(from.get(sort_by_value)))
                    } else {
                        select.order_by(criteria_builder.asc(from.get(sort_by_value)))
                    }
                }
                ::core::option::Option::None => select
            };
        },
        Statement::DerivePredicates => quote! {
            let search_restrictions = self.get_predicate_list(search_query, &criteria_builder, &from);
        },
        Statement::Restrict => quote! { let select = select.restrict(search_restrictions); },
        Statement::CreateQuery => quote! {
            ::core::result::Result::Ok(::dao_core::Session::create_query(&session, select))
        },
        Statement::RequireSearchParams => quote! {
            let search_params = search_params.ok_or(::dao_core::DaoError::MissingSearchParams)?;
        },
        Statement::ResolveWindow {
            default_max_results
        } => quote! {
            let query_size = search_params.max_results.unwrap_or(#default_max_results);
            let query_index = search_params.first_result.unwrap_or(0);
        },
        Statement::RunQuery {
            source,
            args,
            paginate,
            fetch
        } => {
            let source = source.ident();
            let args = args.iter().map(|arg| Ident::new(arg, Span::call_site()));
            let window = if *paginate {
                quote! { .set_max_results(query_size).set_first_result(query_index) }
            } else {
                TokenStream::new()
            };
            let fetch = match fetch {
                Fetch::List => quote!(list),
                Fetch::UniqueResult => quote!(unique_result)
            };
            quote! { self.#source(#(#args),*)? #window .#fetch() }
        }
        Statement::LoadById => quote! { self.inner.get(id) }
    }
}

fn variant_summary(variant: SearchVariant) -> &'static str {
    match variant {
        SearchVariant::Base => "",
        SearchVariant::PredicateList => " from caller-supplied predicates, root and criteria query",
        SearchVariant::SearchParams => " with sorting and pagination",
        SearchVariant::Both => {
            " from caller-supplied predicates, root and criteria query, with sorting and pagination"
        }
    }
}

fn method_docs(method: &GeneratedMethod) -> Vec<String> {
    let summary = match method.name {
        MethodName::New => "Create a DAO bound to `session_factory`.".to_owned(),
        MethodName::CreateOrUpdate => "Fill absent defaulted fields, then persist the entity.".to_owned(),
        MethodName::GetPredicateList => "Equality predicates for every present searchable field.".to_owned(),
        MethodName::GetSearchQuery(variant) => {
            format!("Build the search query{}.", variant_summary(variant))
        }
        MethodName::GetById => "Load the entity by identifier.".to_owned(),
        MethodName::Search(variant) => {
            format!("Search for matching entities{}.", variant_summary(variant))
        }
        MethodName::SearchUniqueResult => "Search for at most one matching entity.".to_owned()
    };

    let mut docs = vec![summary];
    if method.is_fallible() {
        docs.push(String::new());
        docs.push("# Errors".to_owned());
        docs.push(String::new());
        docs.extend(method.errors.iter().map(|error| error_doc(*error).to_owned()));
    }
    docs
}

const fn error_doc(error: ErrorCondition) -> &'static str {
    match error {
        ErrorCondition::Session => "- the session cannot be opened or the store fails",
        ErrorCondition::InvalidDefault => "- `DaoError::InvalidDefault` if a default does not parse",
        ErrorCondition::MissingSearchParams => "- `DaoError::MissingSearchParams` if `search_params` is `None`",
        ErrorCondition::NonUniqueResult => "- `DaoError::NonUniqueResult` if more than one row matches"
    }
}
