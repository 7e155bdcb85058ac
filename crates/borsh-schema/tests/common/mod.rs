// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Shared declarations: a small account-state program with structs, a tuple
// struct, maps and a seven-variant enum.

#![allow(dead_code)]

use borsh_schema::decl::{FieldDecl, TypeDecl, TypeExpr, VariantDecl};

pub fn field(name: &str, ty: &str) -> FieldDecl {
    FieldDecl::parse(name, ty).expect("field type")
}

pub fn ty(src: &str) -> TypeExpr {
    src.parse().expect("type expression")
}

/// Declarations in source order.
pub fn program_decls() -> Vec<TypeDecl> {
    vec![
        TypeDecl::alias("UnixTimestamp", ty("i64")),
        TypeDecl::alias("Amount", ty("u64")),
        TypeDecl::structure(
            "BTreeWrapper",
            vec![
                field("map0", "BTreeMap<[u8; 32], Pubkey>"),
                field("map1", "BTreeMap<String, Option<u32>>"),
                field("map2", "BTreeMap<u16, String>"),
            ],
        ),
        TypeDecl::structure(
            "TestStruct",
            vec![
                field("field_a", "u64"),
                field("field_b", "u8"),
                field("field_c", "Option<Vec<OtherState>>"),
                field("skipped_field", "Option<u32>").skipped(),
            ],
        ),
        TypeDecl::structure(
            "OtherState",
            vec![field("amount", "Amount"), field("timestamp", "UnixTimestamp")],
        ),
        TypeDecl::tuple_struct("TupleStruct", vec![ty("u8"), ty("i32"), ty("OtherState")]),
        TypeDecl::structure(
            "RandomStruct",
            vec![field("field_a", "String"), field("field_b", "Option<[u8; 2]>")],
        ),
        TypeDecl::enumeration(
            "TestEnum",
            vec![
                VariantDecl::unit("VariantA"),
                VariantDecl::unit("VariantB"),
                VariantDecl::unnamed("VariantC", vec![ty("u64")]),
                VariantDecl::unnamed("VariantD", vec![ty("Option<Pubkey>")]),
                VariantDecl::unnamed("VariantE", vec![ty("Option<u8>")]),
                VariantDecl::unnamed("VariantF", vec![ty("RandomStruct")]),
                VariantDecl::named(
                    "VariantG",
                    vec![
                        field("hello", "Vec<u8>"),
                        field("bello", "[Pubkey; 3]"),
                        field("yello", "u16"),
                        field("zello", "bool"),
                    ],
                ),
            ],
        ),
    ]
}
