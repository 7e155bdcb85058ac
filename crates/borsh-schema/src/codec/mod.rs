// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Borsh codec engine.
//!
//! Encodes a [`Value`] against a [`TypeDescriptor`] and decodes bytes back
//! into a value. Calls are pure: no state survives between them, so one
//! [`Codec`] can be shared freely across threads.
//!
//! # Wire format
//!
//! | Shape | Encoding |
//! |---|---|
//! | integers | fixed width, little-endian, two's complement |
//! | bool | one byte, 0 or 1 |
//! | string | `u32` byte length + UTF-8 |
//! | fixed bytes / public key | raw bytes, no prefix |
//! | `[T; N]` | N elements, no prefix |
//! | `Vec<T>` | `u32` count + elements |
//! | map | `u32` count + (key, value) pairs |
//! | `Option<T>` | 0, or 1 + value |
//! | struct / tuple-struct | members in declaration order |
//! | enum | discriminant + variant payload |

mod cursor;
mod decoder;
mod encoder;
mod size;
mod variant;

pub use cursor::{Cursor, Writer};
pub use size::max_encoded_len;
pub use variant::{decode_variant, encode_variant};

use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::types::{EnumDescriptor, TypeDescriptor};
use crate::value::Value;
use decoder::Decoder;
use encoder::Encoder;

/// Codec bound to a set of resource limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `value` as an instance of `descriptor`.
    pub fn encode(&self, value: &Value, descriptor: &TypeDescriptor) -> CodecResult<Vec<u8>> {
        let mut encoder = Encoder::new(&self.config);
        encoder.encode_value(value, descriptor)?;
        Ok(encoder.into_bytes())
    }

    /// Decode one value from the front of `bytes`.
    ///
    /// Returns the value and the number of bytes consumed; trailing bytes
    /// are left alone.
    pub fn decode(&self, bytes: &[u8], descriptor: &TypeDescriptor) -> CodecResult<(Value, usize)> {
        let mut decoder = Decoder::new(bytes, &self.config);
        let value = decoder.decode_value(descriptor)?;
        Ok((value, decoder.consumed()))
    }

    /// Decode a value that must span all of `bytes`.
    pub fn decode_exact(&self, bytes: &[u8], descriptor: &TypeDescriptor) -> CodecResult<Value> {
        let (value, consumed) = self.decode(bytes, descriptor)?;
        if consumed != bytes.len() {
            log::trace!(
                "[Codec::decode_exact] {} trailing bytes after '{}'",
                bytes.len() - consumed,
                descriptor
            );
            return Err(CodecError::LengthMismatch {
                offset: consumed,
                expected: consumed,
                actual: bytes.len(),
            });
        }
        Ok(value)
    }

    /// See [`encode_variant`].
    pub fn encode_variant(
        &self,
        variant_index: u32,
        payload: &Value,
        enum_desc: &EnumDescriptor,
    ) -> CodecResult<Vec<u8>> {
        variant::encode_variant_with(&self.config, variant_index, payload, enum_desc)
    }

    /// See [`decode_variant`].
    pub fn decode_variant(
        &self,
        bytes: &[u8],
        enum_desc: &EnumDescriptor,
    ) -> CodecResult<(u32, Value, usize)> {
        variant::decode_variant_with(&self.config, bytes, enum_desc)
    }
}

/// Encode with the default limits.
///
/// # Example
///
/// ```
/// use borsh_schema::codec::encode;
/// use borsh_schema::types::{PrimitiveKind, TypeDescriptor};
/// use borsh_schema::Value;
/// use std::sync::Arc;
///
/// let desc = TypeDescriptor::option(Arc::new(TypeDescriptor::primitive(PrimitiveKind::U32)));
/// assert_eq!(encode(&Value::none(), &desc).unwrap(), [0]);
/// assert_eq!(encode(&Value::some(15u32), &desc).unwrap(), [1, 15, 0, 0, 0]);
/// ```
pub fn encode(value: &Value, descriptor: &TypeDescriptor) -> CodecResult<Vec<u8>> {
    Codec::default().encode(value, descriptor)
}

/// Decode with the default limits. Returns the value and bytes consumed.
pub fn decode(bytes: &[u8], descriptor: &TypeDescriptor) -> CodecResult<(Value, usize)> {
    Codec::default().decode(bytes, descriptor)
}

/// Decode with the default limits, rejecting trailing bytes.
pub fn decode_exact(bytes: &[u8], descriptor: &TypeDescriptor) -> CodecResult<Value> {
    Codec::default().decode_exact(bytes, descriptor)
}
