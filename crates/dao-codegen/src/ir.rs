// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method-level intermediate representation.
//!
//! The synthesizer produces [`GeneratedMethod`] values and the renderer
//! turns them into tokens. IR values are plain immutable data: nothing in
//! the IR refers to a `TokenStream`, so tests can assert on structure
//! instead of rendered text.
//!
//! # Naming
//!
//! Rust has no overloading. The IR keeps the logical name (`search`,
//! `get_search_query`) together with a [`SearchVariant`]; the rendered
//! identifier appends the variant suffix.
//!
//! | Variant | Suffix |
//! |---------|--------|
//! | `Base` | none |
//! | `SearchParams` | `_with_params` |
//! | `PredicateList` | `_with_predicate_list` |
//! | `Both` | `_with_params_and_predicate_list` |

use proc_macro2::Span;
use syn::{Ident, Type, Visibility};

/// Which optional inputs a query/search method accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchVariant {
    /// Entity only.
    Base,

    /// Caller-supplied predicates, root and criteria query.
    PredicateList,

    /// Sort and pagination parameters.
    SearchParams,

    /// Both of the above.
    Both
}

impl SearchVariant {
    /// Variants generated by `#[dao(variations)]`, in generation order.
    pub const VARIATIONS: [Self; 3] = [Self::SearchParams, Self::PredicateList, Self::Both];

    /// Check for the sort/pagination axis.
    #[must_use]
    pub const fn has_params(self) -> bool {
        matches!(self, Self::SearchParams | Self::Both)
    }

    /// Check for the caller-supplied predicate axis.
    #[must_use]
    pub const fn has_predicate_list(self) -> bool {
        matches!(self, Self::PredicateList | Self::Both)
    }

    /// Identifier suffix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Base => "",
            Self::PredicateList => "_with_predicate_list",
            Self::SearchParams => "_with_params",
            Self::Both => "_with_params_and_predicate_list"
        }
    }
}

/// Logical method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodName {
    /// Constructor.
    New,

    /// Default injection then persist.
    CreateOrUpdate,

    /// Equality predicates from present fields.
    GetPredicateList,

    /// Query builder.
    GetSearchQuery(SearchVariant),

    /// Load by identifier.
    GetById,

    /// Run a query and list rows.
    Search(SearchVariant),

    /// Run a query and fetch at most one row.
    SearchUniqueResult
}

impl MethodName {
    /// Name shared by every variant of an overload family.
    #[must_use]
    pub const fn logical(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::CreateOrUpdate => "create_or_update",
            Self::GetPredicateList => "get_predicate_list",
            Self::GetSearchQuery(_) => "get_search_query",
            Self::GetById => "get_by_id",
            Self::Search(_) => "search",
            Self::SearchUniqueResult => "search_unique_result"
        }
    }

    /// Rendered identifier text.
    #[must_use]
    pub fn rendered(self) -> String {
        match self {
            Self::GetSearchQuery(variant) | Self::Search(variant) => {
                format!("{}{}", self.logical(), variant.suffix())
            }
            _ => self.logical().to_owned()
        }
    }

    /// Rendered identifier.
    #[must_use]
    pub fn ident(self) -> Ident {
        Ident::new(&self.rendered(), Span::call_site())
    }
}

/// Method visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodVisibility {
    /// Part of the DAO's public API.
    Public,

    /// Building block for other methods and hand-written extensions in the
    /// same crate.
    Protected
}

/// Parameter type, resolved against the entity and factory at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// The session factory type parameter.
    SessionFactory,

    /// Entity by value.
    Entity,

    /// Entity by reference.
    EntityRef,

    /// `&CriteriaBuilder`.
    CriteriaBuilderRef,

    /// `&Root<Entity>`.
    RootRef,

    /// `Root<Entity>`.
    Root,

    /// `CriteriaQuery<Entity>`.
    CriteriaQuery,

    /// `Vec<Predicate>`.
    PredicateList,

    /// `&SearchMeta`.
    SearchParams,

    /// `Option<&SearchMeta>`.
    OptionalSearchParams,

    /// Identifier value type.
    Identifier(Type)
}

/// One method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Binding name.
    pub name: &'static str,

    /// Declared type.
    pub ty: ParamType,

    /// Bound with `mut`.
    pub mutable: bool
}

impl Param {
    /// Immutable parameter.
    #[must_use]
    pub const fn new(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            ty,
            mutable: false
        }
    }

    /// Mutable parameter.
    #[must_use]
    pub const fn mutable(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            ty,
            mutable: true
        }
    }
}

/// Success type of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
    /// `Self`.
    SelfType,

    /// The entity.
    Entity,

    /// `Option<Entity>`.
    OptionalEntity,

    /// `Vec<Entity>`.
    EntityList,

    /// `Vec<Predicate>`.
    PredicateList,

    /// Executable query over the factory's session.
    Query
}

/// Failure a method may report. A method with any condition returns
/// `Result<_, DaoError>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCondition {
    /// Session could not be opened or the store failed.
    Session,

    /// A scalar default failed to parse.
    InvalidDefault,

    /// Search parameters were `None`.
    MissingSearchParams,

    /// More than one row matched.
    NonUniqueResult
}

/// Value injected by default injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// `<Type>::<Variant>`.
    Variant(Ident),

    /// `"literal".parse::<Type>()`.
    Parsed(String)
}

/// How a delegating search materializes its query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    /// Every row.
    List,

    /// At most one row.
    UniqueResult
}

/// Statement template.
///
/// Bindings are fixed by name (`session`, `criteria_builder`, `query`,
/// `from`, `select`, `search_restrictions`, `query_size`, `query_index`),
/// so templates compose without the IR tracking scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Tail: build `Self` around a base DAO bound to `session_factory`.
    ConstructBase,

    /// Assign the default when the field is absent.
    InjectDefault {
        /// Field to fill.
        field: Ident,
        /// `Option` inner type.
        ty:    Type,
        /// Value to assign.
        value: DefaultValue
    },

    /// Tail: persist `entity`.
    Persist,

    /// `let mut search_restrictions = Vec::new();`
    CollectPredicates,

    /// Push an equality predicate when the field is present.
    EqualityPredicate {
        /// Field to compare.
        field: Ident
    },

    /// Tail: `search_restrictions`.
    ReturnPredicates,

    /// `let session = ...current_session()?;`
    OpenSession,

    /// `let criteria_builder = ...criteria_builder();`
    CriteriaBuilder,

    /// `let query = ...create_query(); let from = query.from();`
    CreateCriteria,

    /// `let select = query.select(&from);`
    Select,

    /// Order `select` by `search_params.sort_by`, descending only for the
    /// descending sentinel.
    ApplySort,

    /// `let search_restrictions = self.get_predicate_list(...);`
    DerivePredicates,

    /// `let select = select.restrict(search_restrictions);`
    Restrict,

    /// Tail: bind `select` to the session.
    CreateQuery,

    /// Unwrap `search_params` or fail with `MissingSearchParams`.
    RequireSearchParams,

    /// `query_size` / `query_index` from `search_params` with fallbacks.
    ResolveWindow {
        /// Fallback page size.
        default_max_results: u32
    },

    /// Tail: call a query builder and materialize its result.
    RunQuery {
        /// Query builder to call.
        source:   MethodName,
        /// Forwarded parameter names.
        args:     Vec<&'static str>,
        /// Apply `query_size` / `query_index`.
        paginate: bool,
        /// Materialization.
        fetch:    Fetch
    },

    /// Tail: load by `id`.
    LoadById
}

impl Statement {
    /// Check whether the statement reads the named parameter.
    #[must_use]
    pub fn reads(&self, name: &str) -> bool {
        match self {
            Self::ConstructBase => name == "session_factory",
            Self::InjectDefault {
                ..
            }
            | Self::Persist => name == "entity",
            Self::EqualityPredicate {
                ..
            } => matches!(name, "search_query" | "criteria_builder" | "from"),
            Self::Select => matches!(name, "query" | "from"),
            Self::ApplySort => matches!(name, "search_params" | "from"),
            Self::DerivePredicates => matches!(name, "search_query" | "from"),
            Self::Restrict => name == "search_restrictions",
            Self::RequireSearchParams
            | Self::ResolveWindow {
                ..
            } => name == "search_params",
            Self::RunQuery {
                args, ..
            } => args.iter().any(|arg| *arg == name),
            Self::LoadById => name == "id",
            Self::CollectPredicates
            | Self::ReturnPredicates
            | Self::OpenSession
            | Self::CriteriaBuilder
            | Self::CreateCriteria
            | Self::CreateQuery => false
        }
    }
}

/// One generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethod {
    /// Logical name.
    pub name: MethodName,

    /// Visibility.
    pub visibility: MethodVisibility,

    /// Parameters after `&self`; the constructor takes no receiver.
    pub params: Vec<Param>,

    /// Success type.
    pub returns: ReturnType,

    /// Body, in order.
    pub body: Vec<Statement>,

    /// Declared failures.
    pub errors: Vec<ErrorCondition>
}

impl GeneratedMethod {
    /// Check whether the method returns `Result`.
    #[must_use]
    pub fn is_fallible(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check whether the method takes `&self`.
    #[must_use]
    pub fn has_receiver(&self) -> bool {
        self.name != MethodName::New
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Parameters no statement reads.
    pub fn unused_params(&self) -> impl Iterator<Item = &Param> {
        self.params
            .iter()
            .filter(|param| !self.body.iter().any(|stmt| stmt.reads(param.name)))
    }
}

/// One generated DAO type.
///
/// Wraps `dao_core::AbstractDao<Entity, F>` and dereferences to it; the
/// constructor takes the session factory `F`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDaoType {
    /// Type name: prefix, entity name, `Dao`.
    pub name: Ident,

    /// Entity type.
    pub entity: Ident,

    /// Visibility, copied from the entity.
    pub vis: Visibility,

    /// Module path of the entity.
    pub namespace: Vec<String>,

    /// Methods in generation order.
    pub methods: Vec<GeneratedMethod>
}

impl GeneratedDaoType {
    /// Look up a method by logical name and variant.
    #[must_use]
    pub fn method(&self, name: MethodName) -> Option<&GeneratedMethod> {
        self.methods.iter().find(|method| method.name == name)
    }
}

/// `dao_core::Entity` implementation for the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityModel {
    /// Entity type.
    pub entity: Ident,

    /// Persistence name.
    pub entity_name: String,

    /// Identifier field.
    pub id_field: Ident,

    /// Identifier value type.
    pub id_type: Type,

    /// Identifier field is `Option<_>`.
    ///
    /// A bare identifier is always reported as
    /// [`FieldTypeError::NotOptional`](crate::error::FieldTypeError::NotOptional);
    /// the model still renders with the id wrapped in `Some` so that field
    /// error is the only one the user sees.
    pub id_optional: bool,

    /// Fields exposed through `property`, declaration order.
    pub properties: Vec<Ident>
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_names_apply_suffix() {
        assert_eq!(MethodName::Search(SearchVariant::Base).rendered(), "search");
        assert_eq!(
            MethodName::Search(SearchVariant::SearchParams).rendered(),
            "search_with_params"
        );
        assert_eq!(
            MethodName::GetSearchQuery(SearchVariant::Both).rendered(),
            "get_search_query_with_params_and_predicate_list"
        );
        assert_eq!(MethodName::GetById.rendered(), "get_by_id");
    }

    #[test]
    fn overloads_share_logical_name() {
        let names: Vec<_> = [SearchVariant::Base]
            .into_iter()
            .chain(SearchVariant::VARIATIONS)
            .map(|variant| MethodName::Search(variant).logical())
            .collect();
        assert!(names.iter().all(|name| *name == "search"));
    }

    #[test]
    fn variant_axes() {
        assert!(!SearchVariant::Base.has_params());
        assert!(!SearchVariant::Base.has_predicate_list());
        assert!(SearchVariant::SearchParams.has_params());
        assert!(SearchVariant::PredicateList.has_predicate_list());
        assert!(SearchVariant::Both.has_params() && SearchVariant::Both.has_predicate_list());
    }
}
