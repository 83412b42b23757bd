// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Batch driver for build scripts.
//!
//! ```rust,ignore
//! // build.rs
//! let source = std::fs::read_to_string("src/model.rs")?;
//! let file = syn::parse_file(&source)?;
//!
//! let mut generator = Generator::new(GeneratorConfig::new().module("Daos"));
//! generator.add_file(&file, &["model".to_owned()])?;
//!
//! let mut emitter = FileEmitter::new(std::env::var("OUT_DIR")?);
//! let report = generator.emit(&mut emitter);
//! for warning in &report.warnings {
//!     println!("cargo:warning={warning}");
//! }
//! ```
//!
//! Entities are independent: a [`StructuralError`] drops that entity from
//! the output and is recorded in [`GenerationReport::aborted`]; the rest
//! are still generated.

use convert_case::{Case, Casing};
use proc_macro2::Span;
use syn::{Ident, Path, PathSegment, Token, punctuated::Punctuated};
use tracing::{debug, warn};

use crate::{
    assemble::expand,
    config::GeneratorConfig,
    descriptor::EntityDescriptor,
    emit::{EmissionError, Emitter, SourceUnit},
    error::{FieldTypeError, StructuralError},
    module::{GeneratedModuleType, render_module},
    reader
};

/// Field problem attributed to its entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDiagnostic {
    /// Entity name.
    pub entity: String,

    /// The problem.
    pub error: FieldTypeError
}

/// Result of one generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Generated files: one per DAO, then the module if configured.
    pub units: Vec<SourceUnit>,

    /// Field problems of generated entities.
    pub diagnostics: Vec<EntityDiagnostic>,

    /// Entities that produced no DAO.
    pub aborted: Vec<StructuralError>,

    /// Units that could not be written.
    pub warnings: Vec<EmissionError>
}

impl GenerationReport {
    /// Check whether every entity was generated and written without problems.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.aborted.is_empty() && self.warnings.is_empty()
    }
}

/// Batch DAO generator.
#[derive(Debug, Default)]
pub struct Generator {
    config:   GeneratorConfig,
    entities: Vec<EntityDescriptor>
}

impl Generator {
    /// Generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            entities: Vec::new()
        }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Queue one entity.
    pub fn add_entity(&mut self, entity: EntityDescriptor) -> &mut Self {
        self.entities.push(entity);
        self
    }

    /// Queue every `#[derive(Dao)]` struct of a parsed file.
    ///
    /// Well-formed structs are queued even when others fail to read.
    ///
    /// # Errors
    ///
    /// Returns the combined attribute errors of the structs that could not
    /// be read.
    pub fn add_file(&mut self, file: &syn::File, namespace: &[String]) -> darling::Result<usize> {
        let mut errors = Vec::new();
        let mut added = 0;
        for result in reader::read_file(file, namespace) {
            match result {
                Ok(entity) => {
                    self.entities.push(entity);
                    added += 1;
                }
                Err(err) => errors.push(err)
            }
        }
        if errors.is_empty() {
            Ok(added)
        } else {
            Err(darling::Error::multiple(errors))
        }
    }

    /// Generate every queued entity, in insertion order.
    #[must_use]
    pub fn generate(&self) -> GenerationReport {
        let mut report = GenerationReport::default();
        let mut dao_paths = Vec::new();

        for entity in &self.entities {
            debug!(entity = %entity.ident, "generating dao");
            match expand(entity, &self.config) {
                Ok(expansion) => {
                    for error in &expansion.diagnostics {
                        warn!(entity = %entity.ident, %error, "field skipped");
                    }
                    report
                        .diagnostics
                        .extend(expansion.diagnostics.iter().map(|error| EntityDiagnostic {
                            entity: entity.name(),
                            error:  error.clone()
                        }));

                    let dao = &expansion.dao;
                    dao_paths.push(crate_path(&dao.namespace, &dao.name));
                    report.units.push(SourceUnit::new(
                        dao.namespace.clone(),
                        file_name(&dao.name),
                        &expansion.to_tokens().to_string()
                    ));
                }
                Err(error) => {
                    warn!(entity = %entity.ident, %error, "entity aborted");
                    report.aborted.push(error);
                }
            }
        }

        if let Some(name) = self.config.module_name() {
            let Ok(name) = syn::parse_str::<Ident>(name) else {
                warn!(module = name, "module name is not an identifier; module skipped");
                return report;
            };
            let module = GeneratedModuleType::new(name, self.config.visibility().clone(), dao_paths);
            let tokens = render_module(&module);
            if !tokens.is_empty() {
                report.units.push(SourceUnit::new(
                    self.config.module_path().to_vec(),
                    file_name(&module.name),
                    &tokens.to_string()
                ));
            }
        }

        report
    }

    /// Generate, then write every unit through `emitter`.
    ///
    /// Write failures are recorded in [`GenerationReport::warnings`]; the
    /// remaining units are still written.
    pub fn emit(&self, emitter: &mut impl Emitter) -> GenerationReport {
        let mut report = self.generate();
        for unit in &report.units {
            if let Err(error) = emitter.emit(unit) {
                warn!(file = %unit.file_name, %error, "emission failed");
                report.warnings.push(error);
            }
        }
        report
    }
}

fn file_name(ident: &Ident) -> String {
    format!("{}.rs", ident.to_string().to_case(Case::Snake))
}

fn crate_path(namespace: &[String], name: &Ident) -> Path {
    let mut segments = Punctuated::<PathSegment, Token![::]>::new();
    segments.push(Ident::new("crate", Span::call_site()).into());
    for segment in namespace {
        segments.push(Ident::new(segment, Span::call_site()).into());
    }
    segments.push(name.clone().into());
    Path {
        leading_colon: None,
        segments
    }
}

#[cfg(test)]
mod tests;
