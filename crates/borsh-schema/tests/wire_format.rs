// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Borsh golden vectors: byte-exact encodings for known values, decoded back
// and re-encoded to the same bytes.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::missing_panics_doc)]

mod common;

use borsh_schema::codec::{decode, decode_exact, decode_variant, encode, encode_variant};
use borsh_schema::{emit, CodecError, PrimitiveKind, SchemaTable, TypeDescriptor, Value};
use common::program_decls;
use std::sync::Arc;

fn table() -> SchemaTable {
    emit(&program_decls()).expect("emit")
}

fn desc<'t>(table: &'t SchemaTable, name: &str) -> &'t Arc<TypeDescriptor> {
    table.get(name).expect("declared type")
}

fn other_state(amount: u64, timestamp: i64) -> Value {
    Value::structure([
        ("amount", Value::U64(amount)),
        ("timestamp", Value::I64(timestamp)),
    ])
}

/// Encode, compare, decode, re-encode.
fn check_golden(value: &Value, desc: &TypeDescriptor, expected: &[u8]) {
    let bytes = encode(value, desc).expect("encode");
    assert_eq!(bytes, expected);
    let decoded = decode_exact(&bytes, desc).expect("decode");
    assert_eq!(&decoded, value);
    assert_eq!(encode(&decoded, desc).expect("re-encode"), expected);
}

#[test]
fn test_other_state_scenario() {
    let t = table();
    let value = Value::structure([("amount", Value::U64(1)), ("timestamp", Value::I64(15))]);
    check_golden(
        &value,
        desc(&t, "OtherState"),
        &[
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // amount
            0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // timestamp
        ],
    );
}

#[test]
fn test_option_scenario() {
    let option_u32 = TypeDescriptor::option(Arc::new(TypeDescriptor::primitive(PrimitiveKind::U32)));
    check_golden(&Value::none(), &option_u32, &[0x00]);
    check_golden(&Value::some(15u32), &option_u32, &[0x01, 0x0F, 0x00, 0x00, 0x00]);
}

#[test]
fn test_enum_variant_scenario() {
    let t = table();
    let e = desc(&t, "TestEnum");
    let value = Value::enum_variant(2, Value::Tuple(vec![Value::U64(1)]));
    let expected = [0x02, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    check_golden(&value, e, &expected);

    let enum_desc = e.as_enum().expect("enum");
    assert_eq!(enum_desc.variant_index("VariantC"), Some(2));
    assert_eq!(
        encode_variant(2, &Value::Tuple(vec![Value::U64(1)]), enum_desc).expect("variant"),
        expected
    );
    assert_eq!(
        decode_variant(&expected, enum_desc).expect("variant"),
        (2, Value::Tuple(vec![Value::U64(1)]), expected.len())
    );
}

#[test]
fn test_map_duplicate_key_scenario() {
    let t = table();
    let wrapper = desc(&t, "BTreeWrapper");
    let map2 = &wrapper.field("map2").expect("map2").type_desc;

    // Two entries, both keyed 7u16.
    let bytes = [
        0x02, 0x00, 0x00, 0x00, // count
        0x07, 0x00, 0x01, 0x00, 0x00, 0x00, b'a', // 7 -> "a"
        0x07, 0x00, 0x01, 0x00, 0x00, 0x00, b'b', // 7 -> "b"
    ];
    assert_eq!(
        decode(&bytes, map2),
        Err(CodecError::DuplicateKey { offset: 11 })
    );
}

#[test]
fn test_map_keeps_insertion_order() {
    let t = table();
    let map2 = &desc(&t, "BTreeWrapper").field("map2").expect("map2").type_desc;
    let value = Value::Map(vec![
        (Value::U16(9), Value::from("z")),
        (Value::U16(1), Value::from("a")),
    ]);
    check_golden(
        &value,
        map2,
        &[
            0x02, 0x00, 0x00, 0x00, 0x09, 0x00, 0x01, 0x00, 0x00, 0x00, b'z', 0x01, 0x00, 0x01,
            0x00, 0x00, 0x00, b'a',
        ],
    );
}

#[test]
fn test_struct_with_none_and_skipped_field() {
    let t = table();
    let value = Value::structure([
        ("field_a", Value::U64(45678910)),
        ("field_b", Value::U8(103)),
        ("field_c", Value::none()),
    ]);
    check_golden(
        &value,
        desc(&t, "TestStruct"),
        &[0x3E, 0x01, 0xB9, 0x02, 0x00, 0x00, 0x00, 0x00, 0x67, 0x00],
    );
}

#[test]
fn test_struct_with_nested_sequence() {
    let t = table();
    let states = vec![
        other_state(1_000_000_000, 1234567890),
        other_state(2_000_000_000, 1234567891),
        other_state(3_000_000_000, 1234567892),
    ];
    let value = Value::structure([
        ("field_a", Value::U64(10)),
        ("field_b", Value::U8(113)),
        ("field_c", Value::some(Value::Sequence(states))),
    ]);

    let mut expected = vec![];
    expected.extend_from_slice(&10u64.to_le_bytes());
    expected.push(113);
    expected.push(1);
    expected.extend_from_slice(&3u32.to_le_bytes());
    for (amount, ts) in [
        (1_000_000_000u64, 1234567890i64),
        (2_000_000_000, 1234567891),
        (3_000_000_000, 1234567892),
    ] {
        expected.extend_from_slice(&amount.to_le_bytes());
        expected.extend_from_slice(&ts.to_le_bytes());
    }
    assert_eq!(expected.len(), 8 + 1 + 1 + 4 + 3 * 16);
    check_golden(&value, desc(&t, "TestStruct"), &expected);
}

#[test]
fn test_tuple_struct_signed_member() {
    let t = table();
    let value = Value::Tuple(vec![
        Value::U8(10),
        Value::I32(-2),
        other_state(1_000_000_000, 1234567890),
    ]);
    check_golden(
        &value,
        desc(&t, "TupleStruct"),
        &[
            0x0A, 0xFE, 0xFF, 0xFF, 0xFF, 0x00, 0xCA, 0x9A, 0x3B, 0x00, 0x00, 0x00, 0x00, 0xD2,
            0x02, 0x96, 0x49, 0x00, 0x00, 0x00, 0x00,
        ],
    );
}

#[test]
fn test_enum_struct_variant_with_fixed_array() {
    let t = table();
    let key = |b: u8| Value::Bytes(vec![b; 32]);
    let payload = Value::structure([
        ("hello", Value::from(vec![1u8, 2])),
        ("bello", Value::Array(vec![key(0xAA), key(0xBB), key(0xCC)])),
        ("yello", Value::U16(0x0102)),
        ("zello", Value::Bool(true)),
    ]);
    let value = Value::enum_variant(6, payload);

    let mut expected = vec![6, 2, 0, 0, 0, 1, 2];
    for b in [0xAA, 0xBB, 0xCC] {
        expected.extend_from_slice(&[b; 32]);
    }
    expected.extend_from_slice(&[0x02, 0x01, 0x01]);
    check_golden(&value, desc(&t, "TestEnum"), &expected);
}

#[test]
fn test_decode_errors_carry_offsets() {
    let t = table();
    let e = desc(&t, "TestEnum");
    assert_eq!(
        decode(&[7], e),
        Err(CodecError::UnknownVariant {
            type_name: "TestEnum".into(),
            offset: 0,
            discriminant: 7,
            variant_count: 7
        })
    );

    // VariantE(Option<u8>) with option tag 2.
    assert_eq!(
        decode(&[4, 2, 0], e),
        Err(CodecError::InvalidDiscriminant { offset: 1, tag: 2 })
    );

    // VariantG with zello = 5.
    let mut bytes = vec![6, 0, 0, 0, 0];
    bytes.extend_from_slice(&[0u8; 96]);
    bytes.extend_from_slice(&[0, 0, 5]);
    assert_eq!(
        decode(&bytes, e),
        Err(CodecError::InvalidBool {
            offset: 1 + 4 + 96 + 2,
            byte: 5
        })
    );
}

#[test]
fn test_encode_checks_value_shape() {
    let t = table();
    let wrong = Value::structure([("amount", Value::U64(1)), ("timestamp", Value::U64(15))]);
    assert_eq!(
        encode(&wrong, desc(&t, "OtherState")),
        Err(CodecError::ValueMismatch {
            expected: "i64".into(),
            found: "u64".into()
        })
    );

    assert!(matches!(
        encode(&Value::enum_variant(7, Value::unit()), desc(&t, "TestEnum")),
        Err(CodecError::VariantIndexOutOfRange { index: 7, .. })
    ));
}
