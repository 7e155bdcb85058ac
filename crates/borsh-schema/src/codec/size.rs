// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Upper bound on the encoded size of a descriptor.
//!
//! Useful to size a fixed account or buffer before any value exists.

use crate::config::{LENGTH_PREFIX_SIZE, OPTION_TAG_SIZE};
use crate::types::{PrimitiveKind, TypeDescriptor, TypeKind};

/// Largest possible encoding of any value of `desc`.
///
/// `None` when the size is unbounded (an unbounded string, sequence or map
/// anywhere in the tree) or does not fit in `usize`.
///
/// # Example
///
/// ```
/// use borsh_schema::codec::max_encoded_len;
/// use borsh_schema::types::{PrimitiveKind, StructBuilder, TypeDescriptor};
/// use std::sync::Arc;
///
/// let desc = StructBuilder::new("Foo")
///     .field("foo", PrimitiveKind::U64)
///     .option_field("bar", Arc::new(TypeDescriptor::primitive(PrimitiveKind::PublicKey)))
///     .build()
///     .unwrap();
/// assert_eq!(max_encoded_len(&desc), Some(8 + 1 + 32));
/// ```
pub fn max_encoded_len(desc: &TypeDescriptor) -> Option<usize> {
    match &desc.kind {
        TypeKind::Primitive(PrimitiveKind::String { max_length }) => {
            (*max_length)?.checked_add(LENGTH_PREFIX_SIZE)
        }
        TypeKind::Primitive(p) => p.size(),
        TypeKind::FixedArray(arr) => max_encoded_len(&arr.element_type)?.checked_mul(arr.length),
        TypeKind::Sequence(seq) => {
            let max = seq.max_length?;
            max_encoded_len(&seq.element_type)?
                .checked_mul(max)?
                .checked_add(LENGTH_PREFIX_SIZE)
        }
        TypeKind::Map(map) => {
            let max = map.max_length?;
            let pair = max_encoded_len(&map.key_type)?
                .checked_add(max_encoded_len(&map.value_type)?)?;
            pair.checked_mul(max)?.checked_add(LENGTH_PREFIX_SIZE)
        }
        TypeKind::Option(inner) => max_encoded_len(inner)?.checked_add(OPTION_TAG_SIZE),
        TypeKind::Struct(fields) => fields.iter().try_fold(0usize, |acc, f| {
            acc.checked_add(max_encoded_len(&f.type_desc)?)
        }),
        TypeKind::TupleStruct(members) => members
            .iter()
            .try_fold(0usize, |acc, m| acc.checked_add(max_encoded_len(m)?)),
        TypeKind::Enum(e) => {
            let widest = e.variants.iter().try_fold(0usize, |acc, v| {
                Some(acc.max(max_encoded_len(&v.payload)?))
            })?;
            widest.checked_add(e.tag_width.size())
        }
    }
}

/// Every value of `desc` encodes to no bytes at all.
pub(crate) fn is_zero_sized(desc: &TypeDescriptor) -> bool {
    max_encoded_len(desc) == Some(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        EnumBuilder, MapDescriptor, SequenceDescriptor, StructBuilder, TupleStructBuilder,
    };
    use std::sync::Arc;

    fn prim(kind: PrimitiveKind) -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::primitive(kind))
    }

    #[test]
    fn test_fixed_struct() {
        let foo = StructBuilder::new("FooStruct")
            .field("foo", PrimitiveKind::U64)
            .field("bar", PrimitiveKind::I32)
            .build()
            .expect("foo");
        assert_eq!(max_encoded_len(&foo), Some(12));

        let bar = StructBuilder::new("BarStruct")
            .field("foo", PrimitiveKind::FixedBytes(32))
            .bounded_sequence_field("bar", prim(PrimitiveKind::U16), 8)
            .option_field("baz", Arc::new(foo))
            .build()
            .expect("bar");
        assert_eq!(max_encoded_len(&bar), Some(65));
    }

    #[test]
    fn test_enum_takes_widest_variant() {
        let foo = Arc::new(
            StructBuilder::new("Foo")
                .field("a", PrimitiveKind::U64)
                .field("b", PrimitiveKind::PublicKey)
                .build()
                .expect("foo"),
        );
        let baz = Arc::new(
            TupleStructBuilder::new("Baz")
                .member_with_type(Arc::new(TypeDescriptor::option(prim(
                    PrimitiveKind::PublicKey,
                ))))
                .build(),
        );
        let quux = Arc::new(
            TupleStructBuilder::new("Quux")
                .member(PrimitiveKind::String {
                    max_length: Some(196),
                })
                .build(),
        );
        let desc = EnumBuilder::new("FooEnum")
            .variant("Foo", foo)
            .unit_variant("Bar")
            .variant("Baz", baz)
            .variant("Quux", quux)
            .build()
            .expect("enum");
        assert_eq!(max_encoded_len(&desc), Some(201));
    }

    #[test]
    fn test_bounded_map() {
        let map = TypeDescriptor::new(
            "",
            TypeKind::Map(MapDescriptor::bounded(
                prim(PrimitiveKind::U8),
                prim(PrimitiveKind::PublicKey),
                4,
            )),
        );
        assert_eq!(max_encoded_len(&map), Some(4 + 4 * 33));
    }

    #[test]
    fn test_zero_sized_shapes() {
        let empty = Arc::new(StructBuilder::new("Empty").build().expect("empty"));
        assert!(is_zero_sized(&empty));
        assert!(is_zero_sized(&TypeDescriptor::fixed_array(prim(PrimitiveKind::U64), 0)));
        assert!(is_zero_sized(&TypeDescriptor::fixed_array(empty.clone(), 3)));
        assert!(is_zero_sized(&TypeDescriptor::primitive(PrimitiveKind::FixedBytes(0))));
        assert!(!is_zero_sized(&TypeDescriptor::option(empty.clone())));
        assert!(!is_zero_sized(&TypeDescriptor::sequence(empty)));
    }

    #[test]
    fn test_unbounded_is_none() {
        assert_eq!(
            max_encoded_len(&TypeDescriptor::primitive(PrimitiveKind::String {
                max_length: None
            })),
            None
        );
        assert_eq!(
            max_encoded_len(&TypeDescriptor::sequence(prim(PrimitiveKind::U8))),
            None
        );
        let huge = TypeDescriptor::new(
            "",
            TypeKind::Sequence(SequenceDescriptor::bounded(prim(PrimitiveKind::U128), usize::MAX)),
        );
        assert_eq!(max_encoded_len(&huge), None);
    }
}
