// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Value -> bytes, checked against a descriptor.

use super::cursor::Writer;
use super::size::is_zero_sized;
use crate::config::{CodecConfig, OPTION_NONE_TAG, OPTION_SOME_TAG, PUBLIC_KEY_LEN};
use crate::error::{CodecError, CodecResult};
use crate::types::{FieldDescriptor, PrimitiveKind, TypeDescriptor, TypeKind};
use crate::value::Value;
use std::collections::HashSet;
use std::sync::Arc;

pub(crate) fn mismatch(desc: &TypeDescriptor, value: &Value) -> CodecError {
    CodecError::ValueMismatch {
        expected: desc.to_string(),
        found: value.kind_name().to_string(),
    }
}

/// Borsh encoder for dynamic values.
pub(crate) struct Encoder<'c> {
    pub(super) writer: Writer,
    config: &'c CodecConfig,
    depth: usize,
}

impl<'c> Encoder<'c> {
    pub(crate) fn new(config: &'c CodecConfig) -> Self {
        Self {
            writer: Writer::new(),
            config,
            depth: 0,
        }
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner()
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

    pub(crate) fn encode_value(&mut self, value: &Value, desc: &TypeDescriptor) -> CodecResult<()> {
        if let TypeKind::Primitive(p) = &desc.kind {
            return self.encode_primitive(value, *p, desc);
        }
        self.enter()?;
        self.encode_composite(value, desc)?;
        self.leave();
        Ok(())
    }

    fn encode_composite(&mut self, value: &Value, desc: &TypeDescriptor) -> CodecResult<()> {
        match (&desc.kind, value) {
            (TypeKind::FixedArray(arr), Value::Array(elems)) => {
                if elems.len() != arr.length {
                    return Err(CodecError::LengthMismatch {
                        offset: self.writer.offset(),
                        expected: arr.length,
                        actual: elems.len(),
                    });
                }
                for elem in elems {
                    self.encode_value(elem, &arr.element_type)?;
                }
                Ok(())
            }
            (TypeKind::Sequence(seq), Value::Sequence(elems)) => {
                if !elems.is_empty() && is_zero_sized(&seq.element_type) {
                    return Err(CodecError::ZeroSizedElements {
                        offset: self.writer.offset(),
                        length: elems.len(),
                    });
                }
                self.write_length(elems.len(), seq.max_length)?;
                for elem in elems {
                    self.encode_value(elem, &seq.element_type)?;
                }
                Ok(())
            }
            (TypeKind::Map(map), Value::Map(pairs)) => {
                self.write_length(pairs.len(), map.max_length)?;
                let mut seen: HashSet<Vec<u8>> = HashSet::with_capacity(pairs.len());
                for (key, val) in pairs {
                    let key_start = self.writer.offset();
                    self.encode_value(key, &map.key_type)?;
                    if !seen.insert(self.writer.since(key_start).to_vec()) {
                        return Err(CodecError::DuplicateKey { offset: key_start });
                    }
                    self.encode_value(val, &map.value_type)?;
                }
                Ok(())
            }
            (TypeKind::Option(_), Value::Option(None)) => {
                self.writer.write_u8(OPTION_NONE_TAG);
                Ok(())
            }
            (TypeKind::Option(inner), Value::Option(Some(v))) => {
                self.writer.write_u8(OPTION_SOME_TAG);
                self.encode_value(v, inner)
            }
            (TypeKind::Struct(fields), Value::Struct(values)) => {
                self.encode_fields(desc, fields, values)
            }
            (TypeKind::TupleStruct(members), Value::Tuple(values)) => {
                self.encode_members(desc, members, values)
            }
            // Empty payloads are interchangeable.
            (TypeKind::Struct(fields), Value::Tuple(values))
                if fields.is_empty() && values.is_empty() =>
            {
                Ok(())
            }
            (TypeKind::TupleStruct(members), Value::Struct(values))
                if members.is_empty() && values.is_empty() =>
            {
                Ok(())
            }
            (TypeKind::Enum(enum_desc), Value::Enum { variant, payload }) => {
                self.encode_enum(&desc.name, *variant, payload, enum_desc)
            }
            _ => Err(mismatch(desc, value)),
        }
    }

    fn encode_fields(
        &mut self,
        desc: &TypeDescriptor,
        fields: &[FieldDescriptor],
        values: &[(String, Value)],
    ) -> CodecResult<()> {
        if fields.len() != values.len() {
            return Err(CodecError::ValueMismatch {
                expected: format!("{} fields for '{}'", fields.len(), desc),
                found: format!("{} fields", values.len()),
            });
        }
        for (field, (name, value)) in fields.iter().zip(values) {
            if field.name != *name {
                return Err(CodecError::ValueMismatch {
                    expected: format!("field '{}'", field.name),
                    found: format!("field '{}'", name),
                });
            }
            self.encode_value(value, &field.type_desc)?;
        }
        Ok(())
    }

    fn encode_members(
        &mut self,
        desc: &TypeDescriptor,
        members: &[Arc<TypeDescriptor>],
        values: &[Value],
    ) -> CodecResult<()> {
        if members.len() != values.len() {
            return Err(CodecError::ValueMismatch {
                expected: format!("{} members for '{}'", members.len(), desc),
                found: format!("{} members", values.len()),
            });
        }
        for (member, value) in members.iter().zip(values) {
            self.encode_value(value, member)?;
        }
        Ok(())
    }

    /// Write a `u32` length prefix after checking the optional bound.
    fn write_length(&mut self, len: usize, max: Option<usize>) -> CodecResult<()> {
        let offset = self.writer.offset();
        if let Some(max) = max {
            if len > max {
                return Err(CodecError::BoundExceeded {
                    offset,
                    length: len,
                    max,
                });
            }
        }
        let prefix = u32::try_from(len).map_err(|_| CodecError::BoundExceeded {
            offset,
            length: len,
            max: u32::MAX as usize,
        })?;
        self.writer.write_u32_le(prefix);
        Ok(())
    }

    fn encode_primitive(
        &mut self,
        value: &Value,
        kind: PrimitiveKind,
        desc: &TypeDescriptor,
    ) -> CodecResult<()> {
        let w = &mut self.writer;
        match (kind, value) {
            (PrimitiveKind::Bool, Value::Bool(v)) => w.write_u8(u8::from(*v)),
            (PrimitiveKind::U8, Value::U8(v)) => w.write_u8(*v),
            (PrimitiveKind::U16, Value::U16(v)) => w.write_u16_le(*v),
            (PrimitiveKind::U32, Value::U32(v)) => w.write_u32_le(*v),
            (PrimitiveKind::U64, Value::U64(v)) => w.write_u64_le(*v),
            (PrimitiveKind::U128, Value::U128(v)) => w.write_u128_le(*v),
            (PrimitiveKind::I8, Value::I8(v)) => w.write_i8(*v),
            (PrimitiveKind::I16, Value::I16(v)) => w.write_i16_le(*v),
            (PrimitiveKind::I32, Value::I32(v)) => w.write_i32_le(*v),
            (PrimitiveKind::I64, Value::I64(v)) => w.write_i64_le(*v),
            (PrimitiveKind::I128, Value::I128(v)) => w.write_i128_le(*v),
            (PrimitiveKind::String { max_length }, Value::String(s)) => {
                self.write_length(s.len(), max_length)?;
                self.writer.write_bytes(s.as_bytes());
            }
            (PrimitiveKind::FixedBytes(n), Value::Bytes(b)) => self.write_fixed(b, n)?,
            (PrimitiveKind::PublicKey, Value::Bytes(b)) => self.write_fixed(b, PUBLIC_KEY_LEN)?,
            _ => return Err(mismatch(desc, value)),
        }
        Ok(())
    }

    fn write_fixed(&mut self, bytes: &[u8], width: usize) -> CodecResult<()> {
        if bytes.len() != width {
            return Err(CodecError::LengthMismatch {
                offset: self.writer.offset(),
                expected: width,
                actual: bytes.len(),
            });
        }
        self.writer.write_bytes(bytes);
        Ok(())
    }
}
