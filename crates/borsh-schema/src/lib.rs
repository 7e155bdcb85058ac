// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # borsh-schema - Borsh schema compiler and codec
//!
//! Turns structural type declarations into an ordered schema table and
//! encodes/decodes values against it, byte-for-byte compatible with Borsh.
//!
//! ## Quick Start
//!
//! ```rust
//! use borsh_schema::decl::{FieldDecl, TypeDecl};
//! use borsh_schema::{codec, schema, Value};
//!
//! let table = schema::emit(&[TypeDecl::structure(
//!     "OtherState",
//!     vec![
//!         FieldDecl::parse("amount", "u64").unwrap(),
//!         FieldDecl::parse("timestamp", "u64").unwrap(),
//!     ],
//! )])
//! .unwrap();
//!
//! let desc = table.get("OtherState").unwrap();
//! let value = Value::structure([("amount", Value::U64(1)), ("timestamp", Value::U64(15))]);
//!
//! let bytes = codec::encode(&value, desc).unwrap();
//! assert_eq!(bytes, [1, 0, 0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 0, 0, 0, 0]);
//! assert_eq!(codec::decode_exact(&bytes, desc).unwrap(), value);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------+
//! |  decl      TypeDecl / TypeExpr (data or Rust-like strings)  |
//! +-------------------------------------------------------------+
//! |  schema    emit -> SchemaTable -> borsh-js / JSON / MD5     |
//! +-------------------------------------------------------------+
//! |  types     PrimitiveKind registry, TypeDescriptor, builders |
//! +-------------------------------------------------------------+
//! |  codec     encode / decode / variants / size bounds         |
//! +-------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TypeDecl`] | Declaration of a struct, tuple-struct, enum or alias |
//! | [`SchemaTable`] | Ordered, immutable `name -> descriptor` mapping |
//! | [`TypeDescriptor`] | Structural layout of one type |
//! | [`Value`] | Dynamic value checked against a descriptor |
//! | [`Codec`] | Encoder/decoder bound to [`CodecConfig`] limits |
//!
//! The library logs through the `log` facade and never installs a logger.

/// Codec engine (wire format, variants, size bounds).
pub mod codec;
/// Wire constants and codec limits.
pub mod config;
/// Type declarations and the type-expression parser.
pub mod decl;
/// Schema and codec error types.
pub mod error;
/// Schema emission, table, borsh-js and JSON rendering, fingerprint.
pub mod schema;
/// Primitive registry, descriptors and builders.
pub mod types;
/// Dynamic values.
pub mod value;

pub use codec::{decode, decode_exact, encode, Codec};
pub use config::CodecConfig;
pub use decl::{TypeDecl, TypeExpr};
pub use error::{CodecError, CodecResult, SchemaError, SchemaResult};
pub use schema::{emit, SchemaHash, SchemaTable};
pub use types::{PrimitiveKind, TypeDescriptor, TypeKind};
pub use value::Value;
