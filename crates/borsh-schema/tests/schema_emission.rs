// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Schema emission end to end: declaration order, borsh-js rendering against a
// golden TypeScript module, determinism of table, JSON and fingerprint.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

mod common;

use borsh_schema::codec::max_encoded_len;
use borsh_schema::decl::TypeDecl;
use borsh_schema::{emit, SchemaError, TypeKind};
use common::{field, program_decls};
use std::sync::Arc;

const GOLDEN_SCHEMA_TS: &str = include_str!("golden/schema.ts");

#[test]
fn test_table_follows_declaration_order() {
    let table = emit(&program_decls()).expect("emit");
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        [
            "BTreeWrapper",
            "TestStruct",
            "OtherState",
            "TupleStruct",
            "RandomStruct",
            "TestEnum"
        ]
    );
    assert!(!table.contains("Amount"), "aliases are not table entries");
}

#[test]
fn test_borsh_js_matches_golden() {
    let table = emit(&program_decls()).expect("emit");
    let rendered = table.to_borsh_js();
    for (i, (got, want)) in rendered.lines().zip(GOLDEN_SCHEMA_TS.lines()).enumerate() {
        assert_eq!(got, want, "line {}", i + 1);
    }
    assert_eq!(rendered.trim_end(), GOLDEN_SCHEMA_TS.trim_end());
}

#[test]
fn test_emission_is_deterministic() {
    let decls = program_decls();
    let first = emit(&decls).expect("first");
    let second = emit(&decls).expect("second");

    assert_eq!(first, second);
    assert_eq!(
        first.names().collect::<Vec<_>>(),
        second.names().collect::<Vec<_>>()
    );
    assert_eq!(first.canonical_bytes(), second.canonical_bytes());
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert_eq!(first.to_borsh_js(), second.to_borsh_js());
    assert_eq!(first.to_json(), second.to_json());
}

#[test]
fn test_fingerprint_tracks_structure() {
    let base = emit(&program_decls()).expect("emit").fingerprint();

    let mut renamed = program_decls();
    if let Some(TypeDecl {
        kind: borsh_schema::decl::DeclKind::Struct(fields),
        ..
    }) = renamed.iter_mut().find(|d| d.name == "OtherState")
    {
        fields[0] = field("quantity", "u64");
    }
    let changed = emit(&renamed).expect("emit").fingerprint();
    assert_ne!(base, changed);

    let mut reordered = program_decls();
    reordered.swap(2, 3);
    assert_ne!(base, emit(&reordered).expect("emit").fingerprint());
}

#[test]
fn test_declarations_survive_json() {
    let decls = program_decls();
    let json = serde_json::to_string(&decls).expect("serialize declarations");
    let back: Vec<TypeDecl> = serde_json::from_str(&json).expect("parse declarations");
    assert_eq!(back, decls);
    assert_eq!(
        emit(&back).expect("emit").fingerprint(),
        emit(&decls).expect("emit").fingerprint()
    );
}

#[test]
fn test_references_share_descriptors() {
    let table = emit(&program_decls()).expect("emit");
    let other = table.get("OtherState").expect("OtherState");
    let tuple = table.get("TupleStruct").expect("TupleStruct");
    let TypeKind::TupleStruct(members) = &tuple.kind else {
        panic!("Expected tuple struct");
    };
    assert!(Arc::ptr_eq(&members[2], other));

    let random = table.get("RandomStruct").expect("RandomStruct");
    let e = table
        .get("TestEnum")
        .and_then(|d| d.as_enum())
        .expect("TestEnum");
    let TypeKind::TupleStruct(payload) = &e.variants[5].payload.kind else {
        panic!("Expected tuple payload");
    };
    assert!(Arc::ptr_eq(&payload[0], random));
}

#[test]
fn test_max_encoded_len_of_table_types() {
    let table = emit(&program_decls()).expect("emit");
    let len = |name: &str| max_encoded_len(table.get(name).expect("type"));
    assert_eq!(len("OtherState"), Some(16));
    assert_eq!(len("TupleStruct"), Some(1 + 4 + 16));
    assert_eq!(len("TestStruct"), None);
    assert_eq!(len("RandomStruct"), None);
}

#[test]
fn test_emission_errors_abort() {
    let mut decls = program_decls();
    decls.push(TypeDecl::structure(
        "Dangling",
        vec![field("target", "NotDeclared")],
    ));
    assert_eq!(
        emit(&decls),
        Err(SchemaError::UnresolvedReference {
            from: "Dangling".into(),
            name: "NotDeclared".into()
        })
    );

    let mut decls = program_decls();
    decls.push(TypeDecl::structure("OtherState", vec![]));
    assert_eq!(
        emit(&decls),
        Err(SchemaError::DuplicateType {
            name: "OtherState".into()
        })
    );
}
