// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Canonical byte form of a schema table and its MD5 fingerprint.
//!
//! The canonical form is Borsh-encoded with `u64` counts and lengths, so no
//! width or bound is ever truncated: a `u64` entry count, then per entry the
//! type name (`u64` length + UTF-8) followed by the type body. Named
//! children are written as references (tag 1 + name), anonymous ones inline
//! (tag 0 + body), so shared descriptors are written once per entry.
//!
//! Body layout, one kind byte then:
//!
//! | kind | payload |
//! |---|---|
//! | 0 primitive | primitive code, then `Option<u64>` bound (string) or `u64` width (fixed bytes) |
//! | 1 fixed array | element ref, `u64` length |
//! | 2 sequence | element ref, `Option<u64>` bound |
//! | 3 map | key ref, value ref, `Option<u64>` bound |
//! | 4 option | inner ref |
//! | 5 struct | `u64` count, (name, ref)* |
//! | 6 tuple struct | `u64` count, ref* |
//! | 7 enum | tag width in bytes, `u64` count, (name, payload body)* |

use crate::codec::Writer;
use crate::config::{OPTION_NONE_TAG, OPTION_SOME_TAG};
use crate::types::{PrimitiveKind, TypeDescriptor, TypeKind};
use std::fmt;
use std::sync::Arc;

const INLINE: u8 = 0;
const REFERENCE: u8 = 1;

/// 16-byte MD5 digest of a table's canonical bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaHash([u8; 16]);

impl SchemaHash {
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Hash arbitrary canonical bytes.
    pub fn compute(canonical: &[u8]) -> Self {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(canonical);
        let result = hasher.finalize();

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&result);
        Self(bytes)
    }
}

impl fmt::Debug for SchemaHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchemaHash({})", self)
    }
}

impl fmt::Display for SchemaHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for SchemaHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Canonical bytes for `(name, descriptor)` entries in table order.
pub(crate) fn canonical_bytes<'a, I>(entries: I) -> Vec<u8>
where
    I: ExactSizeIterator<Item = (&'a str, &'a Arc<TypeDescriptor>)>,
{
    let mut w = Writer::new();
    write_count(&mut w, entries.len());
    for (name, desc) in entries {
        write_str(&mut w, name);
        write_body(&mut w, desc);
    }
    w.into_inner()
}

fn write_count(w: &mut Writer, n: usize) {
    // usize is at most 64 bits wide on every supported target.
    w.write_u64_le(n as u64);
}

fn write_str(w: &mut Writer, s: &str) {
    write_count(w, s.len());
    w.write_bytes(s.as_bytes());
}

fn write_bound(w: &mut Writer, bound: Option<usize>) {
    match bound {
        Some(max) => {
            w.write_u8(OPTION_SOME_TAG);
            write_count(w, max);
        }
        None => w.write_u8(OPTION_NONE_TAG),
    }
}

fn write_ref(w: &mut Writer, desc: &TypeDescriptor) {
    if desc.is_named() {
        w.write_u8(REFERENCE);
        write_str(w, &desc.name);
    } else {
        w.write_u8(INLINE);
        write_body(w, desc);
    }
}

fn primitive_code(kind: PrimitiveKind) -> u8 {
    match kind {
        PrimitiveKind::Bool => 0,
        PrimitiveKind::U8 => 1,
        PrimitiveKind::U16 => 2,
        PrimitiveKind::U32 => 3,
        PrimitiveKind::U64 => 4,
        PrimitiveKind::U128 => 5,
        PrimitiveKind::I8 => 6,
        PrimitiveKind::I16 => 7,
        PrimitiveKind::I32 => 8,
        PrimitiveKind::I64 => 9,
        PrimitiveKind::I128 => 10,
        PrimitiveKind::String { .. } => 11,
        PrimitiveKind::FixedBytes(_) => 12,
        PrimitiveKind::PublicKey => 13,
    }
}

fn write_body(w: &mut Writer, desc: &TypeDescriptor) {
    match &desc.kind {
        TypeKind::Primitive(p) => {
            w.write_u8(0);
            w.write_u8(primitive_code(*p));
            match p {
                PrimitiveKind::String { max_length } => write_bound(w, *max_length),
                PrimitiveKind::FixedBytes(n) => write_count(w, *n),
                _ => {}
            }
        }
        TypeKind::FixedArray(arr) => {
            w.write_u8(1);
            write_ref(w, &arr.element_type);
            write_count(w, arr.length);
        }
        TypeKind::Sequence(seq) => {
            w.write_u8(2);
            write_ref(w, &seq.element_type);
            write_bound(w, seq.max_length);
        }
        TypeKind::Map(map) => {
            w.write_u8(3);
            write_ref(w, &map.key_type);
            write_ref(w, &map.value_type);
            write_bound(w, map.max_length);
        }
        TypeKind::Option(inner) => {
            w.write_u8(4);
            write_ref(w, inner);
        }
        TypeKind::Struct(fields) => {
            w.write_u8(5);
            write_count(w, fields.len());
            for field in fields {
                write_str(w, &field.name);
                write_ref(w, &field.type_desc);
            }
        }
        TypeKind::TupleStruct(members) => {
            w.write_u8(6);
            write_count(w, members.len());
            for member in members {
                write_ref(w, member);
            }
        }
        TypeKind::Enum(e) => {
            w.write_u8(7);
            w.write_u8(e.tag_width.size() as u8);
            write_count(w, e.variants.len());
            for variant in &e.variants {
                write_str(w, &variant.name);
                write_body(w, &variant.payload);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StructBuilder;

    #[test]
    fn test_schema_hash_display() {
        let hash = SchemaHash::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0, 0, 0, 0, 0, 0, 0, 0xFF,
        ]);
        assert_eq!(hash.to_string(), "0123456789abcdef00000000000000ff");
        assert_eq!(
            format!("{:?}", hash),
            "SchemaHash(0123456789abcdef00000000000000ff)"
        );
    }

    #[test]
    fn test_schema_hash_compute() {
        // MD5 of the empty input.
        assert_eq!(
            SchemaHash::compute(&[]).to_string(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_canonical_bytes_layout() {
        let desc = Arc::new(
            StructBuilder::new("A")
                .field("x", PrimitiveKind::U8)
                .build()
                .expect("desc"),
        );
        let entries = [("A", &desc)];
        let bytes = canonical_bytes(entries.iter().map(|(n, d)| (*n, *d)));
        assert_eq!(
            bytes,
            [
                1, 0, 0, 0, 0, 0, 0, 0, // one entry
                1, 0, 0, 0, 0, 0, 0, 0, b'A', // name
                5, 1, 0, 0, 0, 0, 0, 0, 0, // struct, one field
                1, 0, 0, 0, 0, 0, 0, 0, b'x', // field name
                INLINE, 0, 1, // inline primitive u8
            ]
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_wide_fixed_bytes_keep_distinct_bytes() {
        let entry = |width: usize| {
            let desc = Arc::new(
                StructBuilder::new("A")
                    .field("x", PrimitiveKind::FixedBytes(width))
                    .build()
                    .expect("desc"),
            );
            let entries = [("A", &desc)];
            canonical_bytes(entries.iter().map(|(n, d)| (*n, *d)))
        };
        let wide = entry(1 << 32);
        assert_ne!(wide, entry(0));
        assert_eq!(wide[wide.len() - 8..], (1u64 << 32).to_le_bytes());
    }
}
