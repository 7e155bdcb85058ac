// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for schema emission and for the codec.
//!
//! Schema errors are fatal to one emission call; codec errors are fatal to one
//! encode/decode call. Neither is ever recovered or defaulted internally.

use thiserror::Error;

/// Errors raised while resolving primitives, building descriptors or emitting a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unknown primitive type '{name}'")]
    UnknownPrimitive { name: String },

    #[error("type '{from}' references '{name}', which is neither declared nor a primitive")]
    UnresolvedReference { from: String, name: String },

    #[error("cyclic type reference: {}", path.join(" -> "))]
    CyclicReference { path: Vec<String> },

    #[error("type '{name}' is declared more than once")]
    DuplicateType { name: String },

    #[error("field '{field}' is declared more than once in '{type_name}'")]
    DuplicateField { type_name: String, field: String },

    #[error("variant '{variant}' of '{type_name}' must carry a struct or tuple-struct payload")]
    InvalidVariantPayload { type_name: String, variant: String },

    #[error("invalid type expression '{input}': {reason}")]
    InvalidTypeExpr { input: String, reason: String },
}

/// Errors raised by the codec engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid option tag {tag} at offset {offset} (expected 0 or 1)")]
    InvalidDiscriminant { offset: usize, tag: u8 },

    #[error("unknown variant {discriminant} at offset {offset}: enum '{type_name}' has {variant_count} variants")]
    UnknownVariant {
        type_name: String,
        offset: usize,
        discriminant: u32,
        variant_count: usize,
    },

    #[error("variant index {index} out of range: enum '{type_name}' has {variant_count} variants")]
    VariantIndexOutOfRange {
        type_name: String,
        index: u32,
        variant_count: usize,
    },

    #[error("truncated input at offset {offset}: need {needed} bytes, have {remaining}")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("length mismatch at offset {offset}: expected {expected}, got {actual}")]
    LengthMismatch {
        offset: usize,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate map key at offset {offset}")]
    DuplicateKey { offset: usize },

    #[error("length {length} at offset {offset} exceeds bound {max}")]
    BoundExceeded {
        offset: usize,
        length: usize,
        max: usize,
    },

    #[error("length {length} at offset {offset} counts elements that encode to zero bytes")]
    ZeroSizedElements { offset: usize, length: usize },

    #[error("value mismatch: expected {expected}, found {found}")]
    ValueMismatch { expected: String, found: String },

    #[error("invalid bool byte {byte:#04x} at offset {offset}")]
    InvalidBool { offset: usize, byte: u8 },

    #[error("invalid UTF-8 string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("nesting depth exceeds limit {limit}")]
    DepthLimitExceeded { limit: usize },
}

pub type SchemaResult<T> = Result<T, SchemaError>;
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::UnresolvedReference {
            from: "TestStruct".into(),
            name: "Missing".into(),
        };
        assert_eq!(
            err.to_string(),
            "type 'TestStruct' references 'Missing', which is neither declared nor a primitive"
        );

        let err = SchemaError::CyclicReference {
            path: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(err.to_string(), "cyclic type reference: A -> B -> A");
    }

    #[test]
    fn test_codec_error_display_carries_offset() {
        let err = CodecError::TruncatedInput {
            offset: 12,
            needed: 8,
            remaining: 3,
        };
        assert_eq!(
            err.to_string(),
            "truncated input at offset 12: need 8 bytes, have 3"
        );

        let err = CodecError::InvalidBool {
            offset: 4,
            byte: 2,
        };
        assert_eq!(err.to_string(), "invalid bool byte 0x02 at offset 4");

        let err = CodecError::ZeroSizedElements {
            offset: 0,
            length: 7,
        };
        assert_eq!(
            err.to_string(),
            "length 7 at offset 0 counts elements that encode to zero bytes"
        );
    }
}
