// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::io;

use syn::parse_quote;

use super::*;
use crate::{descriptor::FieldDescriptor, emit::FileEmitter};

fn entity(name: &str) -> EntityDescriptor {
    EntityDescriptor::new(Ident::new(name, Span::call_site()))
        .namespace(["model"])
        .field(FieldDescriptor::new(parse_quote!(id), parse_quote!(Option<i64>)).id())
        .field(FieldDescriptor::new(parse_quote!(name), parse_quote!(Option<String>)))
}

struct FailingEmitter;

impl Emitter for FailingEmitter {
    fn emit(&mut self, unit: &SourceUnit) -> Result<(), EmissionError> {
        Err(EmissionError::Io {
            path:   unit.relative_path(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only")
        })
    }
}

#[test]
fn one_unit_per_entity_in_order() {
    let mut generator = Generator::new(GeneratorConfig::new());
    generator
        .add_entity(entity("User"))
        .add_entity(entity("OrderLine"));
    let report = generator.generate();

    assert!(report.is_clean());
    let files: Vec<_> = report.units.iter().map(|u| u.file_name.as_str()).collect();
    assert_eq!(files, vec!["user_dao.rs", "order_line_dao.rs"]);
    assert_eq!(report.units[0].namespace, vec!["model".to_owned()]);
    assert!(report.units[0].contents.contains("struct UserDao"));
}

#[test]
fn aborted_entity_does_not_stop_others() {
    let mut generator = Generator::new(GeneratorConfig::new());
    generator
        .add_entity(entity("Ghost").not_entity())
        .add_entity(entity("User"));
    let report = generator.generate();

    assert_eq!(report.units.len(), 1);
    assert_eq!(report.aborted.len(), 1);
    assert_eq!(report.aborted[0].entity(), "Ghost");
    assert!(!report.is_clean());
}

#[test]
fn field_diagnostics_name_entity() {
    let mut generator = Generator::new(GeneratorConfig::new());
    generator.add_entity(
        entity("User").field(FieldDescriptor::new(parse_quote!(active), parse_quote!(bool)))
    );
    let report = generator.generate();

    assert_eq!(report.units.len(), 1);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].entity, "User");
    assert_eq!(report.diagnostics[0].error.field(), "active");
}

#[test]
fn module_unit_lists_generated_daos() {
    let config = GeneratorConfig::new()
        .prefix("Brahma")
        .module("DaoModule")
        .module_namespace(["di"]);
    let mut generator = Generator::new(config);
    generator
        .add_entity(entity("User"))
        .add_entity(entity("Ghost").not_entity());
    let report = generator.generate();

    assert_eq!(report.units.len(), 2);
    let module = &report.units[1];
    assert_eq!(module.file_name, "dao_module.rs");
    assert_eq!(module.namespace, vec!["di".to_owned()]);
    let compact: String = module.contents.split_whitespace().collect();
    assert!(compact.contains("fnget_brahma_user_dao(&self)->&crate::model::BrahmaUserDao<F>"));
    assert!(!compact.contains("Ghost"));
}

#[test]
fn module_qualifies_same_named_daos() {
    let mut generator = Generator::new(GeneratorConfig::new().module("DaoModule"));
    generator
        .add_entity(entity("User").namespace(["billing"]))
        .add_entity(entity("User").namespace(["crm"]))
        .add_entity(entity("Order"));
    let report = generator.generate();

    assert_eq!(report.units.len(), 4);
    assert_ne!(report.units[0].namespace, report.units[1].namespace);
    let compact: String = report.units[3].contents.split_whitespace().collect();
    assert!(compact.contains("fnget_billing_user_dao(&self)->&crate::billing::UserDao<F>"));
    assert!(compact.contains("fnget_crm_user_dao(&self)->&crate::crm::UserDao<F>"));
    assert!(compact.contains("fnget_order_dao(&self)->&crate::model::OrderDao<F>"));
    assert!(!compact.contains("fnget_user_dao"));
}

#[test]
fn empty_module_is_not_emitted() {
    let mut generator = Generator::new(GeneratorConfig::new().module("DaoModule"));
    generator.add_entity(entity("Ghost").not_entity());
    let report = generator.generate();
    assert!(report.units.is_empty());
}

#[test]
fn add_file_reads_derived_structs() {
    let file: syn::File = parse_quote! {
        #[derive(Clone, Dao)]
        #[entity]
        pub struct User {
            #[id]
            pub id: Option<i64>
        }

        pub struct Plain {
            pub id: i64
        }

        mod nested {
            #[derive(dao_derive::Dao)]
            #[entity]
            pub struct Tag {
                #[id]
                pub id: Option<String>
            }
        }
    };
    let mut generator = Generator::new(GeneratorConfig::new());
    assert_eq!(generator.add_file(&file, &["model".to_owned()]).unwrap(), 2);

    let report = generator.generate();
    assert_eq!(report.units.len(), 2);
    assert_eq!(report.units[1].namespace, vec!["model".to_owned(), "nested".to_owned()]);
}

#[test]
fn add_file_keeps_readable_structs() {
    let file: syn::File = parse_quote! {
        #[derive(Dao)]
        #[entity]
        #[dao(max_results = "many")]
        pub struct Broken {
            #[id]
            pub id: Option<i64>
        }

        #[derive(Dao)]
        #[entity]
        pub struct User {
            #[id]
            pub id: Option<i64>
        }
    };
    let mut generator = Generator::new(GeneratorConfig::new());
    assert!(generator.add_file(&file, &[]).is_err());
    assert_eq!(generator.generate().units.len(), 1);
}

#[test]
fn emission_failures_become_warnings() {
    let mut generator = Generator::new(GeneratorConfig::new());
    generator
        .add_entity(entity("User"))
        .add_entity(entity("Tag"));
    let report = generator.emit(&mut FailingEmitter);

    assert_eq!(report.units.len(), 2);
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].to_string().contains("user_dao.rs"));
}

#[test]
fn emit_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = Generator::new(GeneratorConfig::new());
    generator.add_entity(entity("User"));
    let report = generator.emit(&mut FileEmitter::new(dir.path()));

    assert!(report.warnings.is_empty());
    let written = std::fs::read_to_string(dir.path().join("model/user_dao.rs")).unwrap();
    assert!(written.starts_with(crate::emit::GENERATED_HEADER));
}
