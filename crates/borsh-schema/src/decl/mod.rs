// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type declarations: the input of [`emit`](crate::schema::emit).
//!
//! Declarations describe types as data. They can be written by hand, parsed
//! from Rust-like type strings, or loaded from JSON through `serde`.
//!
//! # Example
//!
//! ```
//! use borsh_schema::decl::{FieldDecl, TypeDecl};
//!
//! let decl = TypeDecl::structure(
//!     "TestStruct",
//!     vec![
//!         FieldDecl::parse("field_a", "u64").unwrap(),
//!         FieldDecl::parse("field_c", "Option<Vec<OtherState>>").unwrap(),
//!         FieldDecl::parse("skipped_field", "Option<u32>").unwrap().skipped(),
//!     ],
//! );
//! assert_eq!(decl.name, "TestStruct");
//! ```

mod type_expr;

pub use type_expr::{TypeExpr, MAX_TYPE_DEPTH};

use crate::error::SchemaResult;
use crate::types::TagWidth;
use serde::{Deserialize, Serialize};

/// A named type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub kind: DeclKind,
}

/// Shape of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Struct(Vec<FieldDecl>),
    TupleStruct(Vec<TypeExpr>),
    Enum {
        variants: Vec<VariantDecl>,
        #[serde(default, with = "tag_width_serde")]
        tag_width: TagWidth,
    },
    /// Transparent alias, never a schema table entry.
    Alias(TypeExpr),
}

/// A struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeExpr,
    /// Left out of the schema and of the wire encoding.
    #[serde(default)]
    pub skip: bool,
}

/// An enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDecl {
    pub name: String,
    #[serde(default)]
    pub fields: VariantFields,
}

/// Payload of an enum variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantFields {
    #[default]
    Unit,
    Named(Vec<FieldDecl>),
    Unnamed(Vec<TypeExpr>),
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Struct with named fields.
    pub fn structure(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self::new(name, DeclKind::Struct(fields))
    }

    /// Struct with positional members.
    pub fn tuple_struct(name: impl Into<String>, members: Vec<TypeExpr>) -> Self {
        Self::new(name, DeclKind::TupleStruct(members))
    }

    /// Enum with a one-byte discriminant.
    pub fn enumeration(name: impl Into<String>, variants: Vec<VariantDecl>) -> Self {
        Self::new(
            name,
            DeclKind::Enum {
                variants,
                tag_width: TagWidth::U8,
            },
        )
    }

    pub fn alias(name: impl Into<String>, target: TypeExpr) -> Self {
        Self::new(name, DeclKind::Alias(target))
    }

    /// Set the discriminant width of an enum declaration. No effect on other kinds.
    #[must_use]
    pub fn with_tag_width(mut self, width: TagWidth) -> Self {
        if let DeclKind::Enum { tag_width, .. } = &mut self.kind {
            *tag_width = width;
        }
        self
    }

    pub fn is_alias(&self) -> bool {
        matches!(self.kind, DeclKind::Alias(_))
    }
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            skip: false,
        }
    }

    /// Field whose type is given in Rust syntax.
    pub fn parse(name: impl Into<String>, ty: &str) -> SchemaResult<Self> {
        Ok(Self::new(name, ty.parse()?))
    }

    /// Mark the field as excluded from the schema.
    #[must_use]
    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }
}

impl VariantDecl {
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: VariantFields::Unit,
        }
    }

    pub fn named(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self {
            name: name.into(),
            fields: VariantFields::Named(fields),
        }
    }

    pub fn unnamed(name: impl Into<String>, members: Vec<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            fields: VariantFields::Unnamed(members),
        }
    }
}

mod tag_width_serde {
    use crate::types::TagWidth;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(width: &TagWidth, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_u8(width.size() as u8)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<TagWidth, D::Error> {
        match u8::deserialize(de)? {
            1 => Ok(TagWidth::U8),
            2 => Ok(TagWidth::U16),
            4 => Ok(TagWidth::U32),
            other => Err(serde::de::Error::custom(format!(
                "tag width must be 1, 2 or 4 bytes, got {}",
                other
            ))),
        }
    }
}
