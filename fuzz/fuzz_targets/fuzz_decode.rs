// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use borsh_schema::decl::{FieldDecl, TypeDecl, VariantDecl};
use borsh_schema::{codec, emit, SchemaTable};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn table() -> &'static SchemaTable {
    static TABLE: OnceLock<SchemaTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let field = |name: &str, ty: &str| FieldDecl::parse(name, ty).expect("field");
        emit(&[
            TypeDecl::structure(
                "Wrapper",
                vec![
                    field("keys", "BTreeMap<[u8; 32], Pubkey>"),
                    field("labels", "HashMap<String, Option<u32>>"),
                    field("states", "Option<Vec<State>>"),
                    field("tag", "MaxLenString<16>"),
                ],
            ),
            TypeDecl::structure("State", vec![field("amount", "u64"), field("ts", "i64")]),
            TypeDecl::enumeration(
                "Action",
                vec![
                    VariantDecl::unit("Idle"),
                    VariantDecl::unnamed("Move", vec!["i128".parse().expect("ty")]),
                    VariantDecl::named("Set", vec![field("flags", "[bool; 3]")]),
                    VariantDecl::unnamed("Nested", vec!["Wrapper".parse().expect("ty")]),
                ],
            ),
        ])
        .expect("emit")
    })
}

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must return an error rather than panic, and a
    // successful decode must re-encode to the consumed prefix.
    for (_, desc) in table() {
        if let Ok((value, consumed)) = codec::decode(data, desc) {
            let bytes = codec::encode(&value, desc).expect("decoded value re-encodes");
            assert_eq!(bytes, &data[..consumed]);
        }
    }
});
