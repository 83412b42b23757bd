// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Dao)]` entry point.

use dao_codegen::{GeneratorConfig, expand, reader};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Main entry point for the Dao derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match reader::read(&input) {
        Ok(entity) => generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(entity: &dao_codegen::EntityDescriptor) -> TokenStream2 {
    let expansion = match expand(entity, &GeneratorConfig::new()) {
        Ok(expansion) => expansion,
        Err(err) => return syn::Error::new(entity.ident.span(), err).to_compile_error()
    };

    let generated = expansion.to_tokens();
    let diagnostics = expansion
        .diagnostics
        .iter()
        .map(|err| syn::Error::new(err.span(), err).to_compile_error());

    quote! {
        #generated
        #(#diagnostics)*
    }
}
