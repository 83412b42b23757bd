// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Module aggregator.
//!
//! One container type holding a session factory and, per DAO, an accessor
//! that builds the DAO on first call and returns the same instance after.
//!
//! ```rust,ignore
//! dao_module! {
//!     pub struct Daos {
//!         crate::dao::UserDao,
//!         crate::dao::OrderDao
//!     }
//! }
//!
//! let daos = Daos::new(factory);
//! let users = daos.get_user_dao();
//! ```
//!
//! An empty DAO list renders nothing. DAOs sharing a type name in different
//! modules get accessors qualified by their module path
//! (`get_billing_user_dao`, `get_crm_user_dao`).

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Ident, Path, Token, Visibility, braced,
    parse::{Parse, ParseStream},
    punctuated::Punctuated
};
use tracing::debug;

/// DAO registered in a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaoRef {
    /// Path to the DAO type.
    pub path: Path,

    /// Snake-case DAO name; names the cell field.
    pub slot: Ident,

    /// Accessor method: `get_` + snake-case DAO name.
    pub accessor: Ident
}

impl DaoRef {
    /// Derive slot and accessor names from the last path segment.
    #[must_use]
    pub fn new(path: Path) -> Self {
        let name = path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_default();
        Self::named(path, &name)
    }

    /// Derive slot and accessor names from the whole path, skipping a
    /// leading `crate`, `self` or `super`.
    #[must_use]
    pub fn qualified(path: Path) -> Self {
        let name = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .skip_while(|segment| matches!(segment.as_str(), "crate" | "self" | "super"))
            .collect::<Vec<_>>()
            .join("_");
        Self::named(path, &name)
    }

    fn named(path: Path, name: &str) -> Self {
        let name = name.to_case(Case::Snake);
        Self {
            slot: format_ident!("{}", name),
            accessor: format_ident!("get_{}", name),
            path
        }
    }
}

/// Module container type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModuleType {
    /// Type name.
    pub name: Ident,

    /// Visibility.
    pub vis: Visibility,

    /// DAOs, in registration order.
    pub daos: Vec<DaoRef>
}

impl GeneratedModuleType {
    /// Module from DAO paths.
    #[must_use]
    ///
    /// DAOs whose type names collide are registered under
    /// [`DaoRef::qualified`] names.
    pub fn new(name: Ident, vis: Visibility, daos: impl IntoIterator<Item = Path>) -> Self {
        let simple: Vec<DaoRef> = daos.into_iter().map(DaoRef::new).collect();
        let daos = simple
            .iter()
            .map(|dao| {
                if simple.iter().filter(|other| other.slot == dao.slot).count() > 1 {
                    debug!(module = %name, dao = %dao.slot, "dao name collides; qualifying accessor");
                    DaoRef::qualified(dao.path.clone())
                } else {
                    dao.clone()
                }
            })
            .collect();
        Self {
            name,
            vis,
            daos
        }
    }
}

/// `pub struct Name { path::ADao, path::BDao }`.
impl Parse for GeneratedModuleType {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let name: Ident = input.parse()?;
        let content;
        braced!(content in input);
        let paths = Punctuated::<Path, Token![,]>::parse_terminated(&content)?;
        Ok(Self::new(name, vis, paths))
    }
}

/// Render the module type, or nothing for an empty module.
#[must_use]
pub fn render_module(module: &GeneratedModuleType) -> TokenStream {
    if module.daos.is_empty() {
        return TokenStream::new();
    }

    let GeneratedModuleType {
        name,
        vis,
        daos
    } = module;
    let name_str = name.to_string();
    let slots: Vec<_> = daos.iter().map(|dao| &dao.slot).collect();
    let paths: Vec<_> = daos.iter().map(|dao| &dao.path).collect();
    let accessors = daos.iter().map(|dao| {
        let DaoRef {
            path,
            slot,
            accessor
        } = dao;
        let doc = format!(" Shared `{}`, built on first use.", quote!(#path).to_string().replace(' ', ""));
        quote! {
            #[doc = #doc]
            pub fn #accessor(&self) -> &#path<F> {
                self.#slot
                    .get_or_init(|| #path::new(::core::clone::Clone::clone(&self.session_factory)))
            }
        }
    });

    quote! {
        #[doc = " DAO singletons sharing one session factory."]
        #vis struct #name<F>
        where
            F: ::dao_core::SessionFactory + ::core::clone::Clone
        {
            session_factory: F,
            #(#slots: ::std::sync::OnceLock<#paths<F>>,)*
        }

        impl<F> #name<F>
        where
            F: ::dao_core::SessionFactory + ::core::clone::Clone
        {
            /// Create the module; DAOs are built lazily.
            pub fn new(session_factory: F) -> Self {
                Self {
                    session_factory,
                    #(#slots: ::std::sync::OnceLock::new(),)*
                }
            }

            /// Session factory shared by every DAO.
            pub fn session_factory(&self) -> &F {
                &self.session_factory
            }

            #(#accessors)*
        }

        impl<F> ::core::fmt::Debug for #name<F>
        where
            F: ::dao_core::SessionFactory + ::core::clone::Clone + ::core::fmt::Debug
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(#name_str)
                    .field("session_factory", &self.session_factory)
                    .finish_non_exhaustive()
            }
        }
    }
}
