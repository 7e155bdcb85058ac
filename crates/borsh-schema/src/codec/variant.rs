// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enum discriminant and variant payload encoding.
//!
//! A variant is written as its index (little-endian, `TagWidth` bytes)
//! followed by the encoding of its struct payload. Unit variants carry an
//! empty payload and take no bytes past the discriminant.

use super::decoder::Decoder;
use super::encoder::Encoder;
use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::types::{EnumDescriptor, TagWidth};
use crate::value::Value;

/// Placeholder type name for enums encoded outside a named descriptor.
const ANONYMOUS_ENUM: &str = "<anonymous>";

/// Encode one variant of an enum.
///
/// # Example
///
/// ```
/// use borsh_schema::codec::encode_variant;
/// use borsh_schema::types::{EnumBuilder, TupleStructBuilder, PrimitiveKind};
/// use borsh_schema::Value;
/// use std::sync::Arc;
///
/// let payload = Arc::new(TupleStructBuilder::new("Amount").member(PrimitiveKind::U64).build());
/// let desc = EnumBuilder::new("Instruction")
///     .unit_variant("Init")
///     .variant("Deposit", payload)
///     .build()
///     .unwrap();
/// let enum_desc = desc.as_enum().unwrap();
///
/// let bytes = encode_variant(1, &Value::Tuple(vec![Value::U64(5)]), enum_desc).unwrap();
/// assert_eq!(bytes, [1, 5, 0, 0, 0, 0, 0, 0, 0]);
/// ```
pub fn encode_variant(
    variant_index: u32,
    payload: &Value,
    enum_desc: &EnumDescriptor,
) -> CodecResult<Vec<u8>> {
    let config = CodecConfig::default();
    encode_variant_with(&config, variant_index, payload, enum_desc)
}

/// Decode one variant of an enum.
///
/// Returns `(variant_index, payload, consumed)`.
pub fn decode_variant(
    bytes: &[u8],
    enum_desc: &EnumDescriptor,
) -> CodecResult<(u32, Value, usize)> {
    let config = CodecConfig::default();
    decode_variant_with(&config, bytes, enum_desc)
}

pub(crate) fn encode_variant_with(
    config: &CodecConfig,
    variant_index: u32,
    payload: &Value,
    enum_desc: &EnumDescriptor,
) -> CodecResult<Vec<u8>> {
    let mut encoder = Encoder::new(config);
    encoder.encode_enum(ANONYMOUS_ENUM, variant_index, payload, enum_desc)?;
    Ok(encoder.into_bytes())
}

pub(crate) fn decode_variant_with(
    config: &CodecConfig,
    bytes: &[u8],
    enum_desc: &EnumDescriptor,
) -> CodecResult<(u32, Value, usize)> {
    let mut decoder = Decoder::new(bytes, config);
    match decoder.decode_enum(ANONYMOUS_ENUM, enum_desc)? {
        Value::Enum { variant, payload } => Ok((variant, *payload, decoder.consumed())),
        other => Err(CodecError::ValueMismatch {
            expected: "enum".into(),
            found: other.kind_name().into(),
        }),
    }
}

impl Encoder<'_> {
    pub(super) fn encode_enum(
        &mut self,
        type_name: &str,
        variant_index: u32,
        payload: &Value,
        enum_desc: &EnumDescriptor,
    ) -> CodecResult<()> {
        let out_of_range = || CodecError::VariantIndexOutOfRange {
            type_name: type_name.to_string(),
            index: variant_index,
            variant_count: enum_desc.len(),
        };
        let variant = enum_desc.variant(variant_index).ok_or_else(out_of_range)?;

        match enum_desc.tag_width {
            TagWidth::U8 => {
                let tag = u8::try_from(variant_index).map_err(|_| out_of_range())?;
                self.writer.write_u8(tag);
            }
            TagWidth::U16 => {
                let tag = u16::try_from(variant_index).map_err(|_| out_of_range())?;
                self.writer.write_u16_le(tag);
            }
            TagWidth::U32 => self.writer.write_u32_le(variant_index),
        }

        self.enter()?;
        self.encode_value(payload, &variant.payload)?;
        self.leave();
        Ok(())
    }
}

impl Decoder<'_, '_> {
    pub(super) fn decode_enum(
        &mut self,
        type_name: &str,
        enum_desc: &EnumDescriptor,
    ) -> CodecResult<Value> {
        let offset = self.cursor.offset();
        let discriminant = match enum_desc.tag_width {
            TagWidth::U8 => u32::from(self.cursor.read_u8()?),
            TagWidth::U16 => u32::from(self.cursor.read_u16_le()?),
            TagWidth::U32 => self.cursor.read_u32_le()?,
        };
        let variant = enum_desc
            .variant(discriminant)
            .ok_or_else(|| CodecError::UnknownVariant {
                type_name: type_name.to_string(),
                offset,
                discriminant,
                variant_count: enum_desc.len(),
            })?;

        self.enter()?;
        let payload = self.decode_value(&variant.payload)?;
        self.leave();
        Ok(Value::enum_variant(discriminant, payload))
    }
}
