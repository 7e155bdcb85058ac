// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Primitive type registry.
//!
//! Fixed vocabulary of scalar types with their canonical schema names and
//! byte widths. Lookup is pure: no registration, no global state.

use crate::config::PUBLIC_KEY_LEN;
use crate::error::{SchemaError, SchemaResult};
use std::fmt;

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    /// UTF-8 string, `u32` byte-length prefix.
    String { max_length: Option<usize> },
    /// Fixed-width byte array, no prefix.
    FixedBytes(usize),
    /// 32-byte public key.
    PublicKey,
}

impl PrimitiveKind {
    /// Get the size in bytes (None for strings).
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::Bool | Self::U8 | Self::I8 => Some(1),
            Self::U16 | Self::I16 => Some(2),
            Self::U32 | Self::I32 => Some(4),
            Self::U64 | Self::I64 => Some(8),
            Self::U128 | Self::I128 => Some(16),
            Self::FixedBytes(n) => Some(*n),
            Self::PublicKey => Some(PUBLIC_KEY_LEN),
            Self::String { .. } => None,
        }
    }

    /// Canonical schema name (`u64`, `string`, `publicKey`, `[32]`, ...).
    pub fn name(&self) -> String {
        match self {
            Self::Bool => "bool".into(),
            Self::U8 => "u8".into(),
            Self::U16 => "u16".into(),
            Self::U32 => "u32".into(),
            Self::U64 => "u64".into(),
            Self::U128 => "u128".into(),
            Self::I8 => "i8".into(),
            Self::I16 => "i16".into(),
            Self::I32 => "i32".into(),
            Self::I64 => "i64".into(),
            Self::I128 => "i128".into(),
            Self::String { .. } => "string".into(),
            Self::FixedBytes(n) => format!("[{}]", n),
            Self::PublicKey => "publicKey".into(),
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128
        )
    }

    pub fn is_integer(&self) -> bool {
        !matches!(
            self,
            Self::Bool | Self::String { .. } | Self::FixedBytes(_) | Self::PublicKey
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Resolve a primitive by name.
///
/// Accepts the canonical names plus the Rust spellings `String`, `Pubkey`
/// and `[u8; N]`.
///
/// # Example
///
/// ```
/// use borsh_schema::types::{resolve, PrimitiveKind};
///
/// assert_eq!(resolve("u64").unwrap(), PrimitiveKind::U64);
/// assert_eq!(resolve("[u8; 32]").unwrap(), PrimitiveKind::FixedBytes(32));
/// assert!(resolve("u256").is_err());
/// ```
pub fn resolve(name: &str) -> SchemaResult<PrimitiveKind> {
    let trimmed = name.trim();
    let kind = match trimmed {
        "bool" => PrimitiveKind::Bool,
        "u8" => PrimitiveKind::U8,
        "u16" => PrimitiveKind::U16,
        "u32" => PrimitiveKind::U32,
        "u64" => PrimitiveKind::U64,
        "u128" => PrimitiveKind::U128,
        "i8" => PrimitiveKind::I8,
        "i16" => PrimitiveKind::I16,
        "i32" => PrimitiveKind::I32,
        "i64" => PrimitiveKind::I64,
        "i128" => PrimitiveKind::I128,
        "string" | "String" => PrimitiveKind::String { max_length: None },
        "publicKey" | "Pubkey" => PrimitiveKind::PublicKey,
        other => {
            return parse_fixed_bytes(other).ok_or_else(|| SchemaError::UnknownPrimitive {
                name: name.to_string(),
            })
        }
    };
    Ok(kind)
}

/// Whether `name` belongs to the primitive vocabulary.
pub fn is_primitive(name: &str) -> bool {
    resolve(name).is_ok()
}

/// `[N]` or `[u8; N]`.
fn parse_fixed_bytes(name: &str) -> Option<PrimitiveKind> {
    let inner = name.strip_prefix('[')?.strip_suffix(']')?.trim();
    let len = match inner.split_once(';') {
        Some((elem, len)) if elem.trim() == "u8" => len.trim(),
        Some(_) => return None,
        None => inner,
    };
    len.parse::<usize>().ok().map(PrimitiveKind::FixedBytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_size() {
        assert_eq!(PrimitiveKind::Bool.size(), Some(1));
        assert_eq!(PrimitiveKind::U32.size(), Some(4));
        assert_eq!(PrimitiveKind::I64.size(), Some(8));
        assert_eq!(PrimitiveKind::U128.size(), Some(16));
        assert_eq!(PrimitiveKind::PublicKey.size(), Some(32));
        assert_eq!(PrimitiveKind::FixedBytes(2).size(), Some(2));
        assert_eq!(PrimitiveKind::String { max_length: None }.size(), None);
    }

    #[test]
    fn test_resolve_canonical_names() {
        for kind in [
            PrimitiveKind::Bool,
            PrimitiveKind::U8,
            PrimitiveKind::U16,
            PrimitiveKind::U32,
            PrimitiveKind::U64,
            PrimitiveKind::U128,
            PrimitiveKind::I8,
            PrimitiveKind::I16,
            PrimitiveKind::I32,
            PrimitiveKind::I64,
            PrimitiveKind::I128,
            PrimitiveKind::String { max_length: None },
            PrimitiveKind::PublicKey,
            PrimitiveKind::FixedBytes(32),
        ] {
            assert_eq!(resolve(&kind.name()).expect("canonical name"), kind);
        }
    }

    #[test]
    fn test_resolve_rust_spellings() {
        assert_eq!(
            resolve("String").unwrap(),
            PrimitiveKind::String { max_length: None }
        );
        assert_eq!(resolve("Pubkey").unwrap(), PrimitiveKind::PublicKey);
        assert_eq!(resolve("[u8; 64]").unwrap(), PrimitiveKind::FixedBytes(64));
        assert_eq!(resolve(" [u8 ;2] ").unwrap(), PrimitiveKind::FixedBytes(2));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(
            resolve("f32"),
            Err(SchemaError::UnknownPrimitive { name: "f32".into() })
        );
        assert!(resolve("[u16; 4]").is_err());
        assert!(resolve("[x]").is_err());
        assert!(!is_primitive("OtherState"));
    }
}
