// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `dao_module!` entry point.

use dao_codegen::{GeneratedModuleType, render_module};
use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Main entry point for the `dao_module!` macro.
pub fn expand(input: TokenStream) -> TokenStream {
    let module = parse_macro_input!(input as GeneratedModuleType);
    render_module(&module).into()
}
