// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bytes -> value, driven by a descriptor.
//!
//! Every read goes through [`Cursor`], so a short buffer surfaces as
//! `TruncatedInput` instead of a panic. Length prefixes are trusted only up
//! to `CodecConfig::max_preallocation` when reserving memory, and a non-zero
//! count of zero-sized elements is refused, so work stays bounded by input
//! size.

use super::cursor::Cursor;
use super::size::is_zero_sized;
use crate::config::{CodecConfig, OPTION_NONE_TAG, OPTION_SOME_TAG, PUBLIC_KEY_LEN};
use crate::error::{CodecError, CodecResult};
use crate::types::{PrimitiveKind, TypeDescriptor, TypeKind};
use crate::value::Value;
use std::collections::HashSet;

/// Borsh decoder for dynamic values.
pub(crate) struct Decoder<'a, 'c> {
    pub(super) cursor: Cursor<'a>,
    config: &'c CodecConfig,
    depth: usize,
}

impl<'a, 'c> Decoder<'a, 'c> {
    pub(crate) fn new(bytes: &'a [u8], config: &'c CodecConfig) -> Self {
        Self {
            cursor: Cursor::new(bytes),
            config,
            depth: 0,
        }
    }

    pub(crate) fn consumed(&self) -> usize {
        self.cursor.offset()
    }

    pub(super) fn enter(&mut self) -> CodecResult<()> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(CodecError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.depth -= 1;
    }

    fn capacity(&self, declared: usize) -> usize {
        declared.min(self.config.max_preallocation)
    }

    pub(crate) fn decode_value(&mut self, desc: &TypeDescriptor) -> CodecResult<Value> {
        if let TypeKind::Primitive(p) = &desc.kind {
            return self.decode_primitive(*p);
        }
        self.enter()?;
        let value = self.decode_composite(desc)?;
        self.leave();
        Ok(value)
    }

    fn decode_composite(&mut self, desc: &TypeDescriptor) -> CodecResult<Value> {
        match &desc.kind {
            TypeKind::FixedArray(arr) => {
                let mut elems = Vec::with_capacity(self.capacity(arr.length));
                for _ in 0..arr.length {
                    elems.push(self.decode_value(&arr.element_type)?);
                }
                Ok(Value::Array(elems))
            }
            TypeKind::Sequence(seq) => {
                let offset = self.cursor.offset();
                let len = self.read_length(seq.max_length)?;
                if len > 0 && is_zero_sized(&seq.element_type) {
                    return Err(CodecError::ZeroSizedElements {
                        offset,
                        length: len,
                    });
                }
                let mut elems = Vec::with_capacity(self.capacity(len));
                for _ in 0..len {
                    elems.push(self.decode_value(&seq.element_type)?);
                }
                Ok(Value::Sequence(elems))
            }
            TypeKind::Map(map) => {
                let len = self.read_length(map.max_length)?;
                let mut pairs = Vec::with_capacity(self.capacity(len));
                let mut seen: HashSet<&'a [u8]> = HashSet::with_capacity(self.capacity(len));
                for _ in 0..len {
                    let key_start = self.cursor.offset();
                    let key = self.decode_value(&map.key_type)?;
                    if !seen.insert(self.cursor.since(key_start)) {
                        return Err(CodecError::DuplicateKey { offset: key_start });
                    }
                    let value = self.decode_value(&map.value_type)?;
                    pairs.push((key, value));
                }
                Ok(Value::Map(pairs))
            }
            TypeKind::Option(inner) => {
                let offset = self.cursor.offset();
                match self.cursor.read_u8()? {
                    OPTION_NONE_TAG => Ok(Value::Option(None)),
                    OPTION_SOME_TAG => Ok(Value::some(self.decode_value(inner)?)),
                    tag => Err(CodecError::InvalidDiscriminant { offset, tag }),
                }
            }
            TypeKind::Struct(fields) => {
                let mut values = Vec::with_capacity(fields.len());
                for field in fields {
                    values.push((field.name.clone(), self.decode_value(&field.type_desc)?));
                }
                Ok(Value::Struct(values))
            }
            TypeKind::TupleStruct(members) => {
                let mut values = Vec::with_capacity(members.len());
                for member in members {
                    values.push(self.decode_value(member)?);
                }
                Ok(Value::Tuple(values))
            }
            TypeKind::Enum(enum_desc) => self.decode_enum(&desc.name, enum_desc),
            TypeKind::Primitive(p) => self.decode_primitive(*p),
        }
    }

    /// Read a `u32` length prefix and check the optional bound.
    fn read_length(&mut self, max: Option<usize>) -> CodecResult<usize> {
        let offset = self.cursor.offset();
        let len = self.cursor.read_u32_le()? as usize;
        if let Some(max) = max {
            if len > max {
                return Err(CodecError::BoundExceeded {
                    offset,
                    length: len,
                    max,
                });
            }
        }
        Ok(len)
    }

    fn decode_primitive(&mut self, kind: PrimitiveKind) -> CodecResult<Value> {
        let c = &mut self.cursor;
        let value = match kind {
            PrimitiveKind::Bool => {
                let offset = c.offset();
                match c.read_u8()? {
                    0 => Value::Bool(false),
                    1 => Value::Bool(true),
                    byte => return Err(CodecError::InvalidBool { offset, byte }),
                }
            }
            PrimitiveKind::U8 => Value::U8(c.read_u8()?),
            PrimitiveKind::U16 => Value::U16(c.read_u16_le()?),
            PrimitiveKind::U32 => Value::U32(c.read_u32_le()?),
            PrimitiveKind::U64 => Value::U64(c.read_u64_le()?),
            PrimitiveKind::U128 => Value::U128(c.read_u128_le()?),
            PrimitiveKind::I8 => Value::I8(c.read_i8()?),
            PrimitiveKind::I16 => Value::I16(c.read_i16_le()?),
            PrimitiveKind::I32 => Value::I32(c.read_i32_le()?),
            PrimitiveKind::I64 => Value::I64(c.read_i64_le()?),
            PrimitiveKind::I128 => Value::I128(c.read_i128_le()?),
            PrimitiveKind::String { max_length } => {
                let len = self.read_length(max_length)?;
                let offset = self.cursor.offset();
                let bytes = self.cursor.read_bytes(len)?;
                let s = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8 { offset })?;
                Value::String(s.to_string())
            }
            PrimitiveKind::FixedBytes(n) => Value::Bytes(c.read_bytes(n)?.to_vec()),
            PrimitiveKind::PublicKey => Value::Bytes(c.read_bytes(PUBLIC_KEY_LEN)?.to_vec()),
        };
        Ok(value)
    }
}
