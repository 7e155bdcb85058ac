// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors: structural layout of a type, independent of any value.
//!
//! Descriptors are immutable once built. Composite descriptors hold their
//! children as `Arc<TypeDescriptor>` so that several parents can share one
//! child by identity.

use crate::error::{SchemaError, SchemaResult};
use crate::types::PrimitiveKind;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Type kind enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// Primitive type.
    Primitive(PrimitiveKind),
    /// Array (fixed length, no prefix).
    FixedArray(ArrayDescriptor),
    /// Sequence (`u32` length prefix).
    Sequence(SequenceDescriptor),
    /// Map (`u32` count prefix, key/value pairs).
    Map(MapDescriptor),
    /// Option (one tag byte).
    Option(Arc<TypeDescriptor>),
    /// Struct with named fields.
    Struct(Vec<FieldDescriptor>),
    /// Struct with positional members.
    TupleStruct(Vec<Arc<TypeDescriptor>>),
    /// Tagged union of struct payloads.
    Enum(EnumDescriptor),
}

/// A complete type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Type name (empty for anonymous inline types).
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Create a new type descriptor.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create an anonymous primitive descriptor.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new("", TypeKind::Primitive(kind))
    }

    /// Create a struct descriptor, rejecting duplicate field names.
    pub fn struct_type(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> SchemaResult<Self> {
        let name = name.into();
        check_unique(&name, fields.iter().map(|f| f.name.as_str()))?;
        Ok(Self::new(name, TypeKind::Struct(fields)))
    }

    /// Create a tuple-struct descriptor.
    pub fn tuple_struct(name: impl Into<String>, members: Vec<Arc<TypeDescriptor>>) -> Self {
        Self::new(name, TypeKind::TupleStruct(members))
    }

    /// Create an enum descriptor.
    ///
    /// Every variant payload must be a struct or tuple-struct, and variant
    /// names must be unique.
    pub fn enum_type(name: impl Into<String>, enum_desc: EnumDescriptor) -> SchemaResult<Self> {
        let name = name.into();
        check_unique(&name, enum_desc.variants.iter().map(|v| v.name.as_str()))?;
        if let Some(bad) = enum_desc
            .variants
            .iter()
            .find(|v| !v.payload.is_struct_like())
        {
            return Err(SchemaError::InvalidVariantPayload {
                type_name: name,
                variant: bad.name.clone(),
            });
        }
        Ok(Self::new(name, TypeKind::Enum(enum_desc)))
    }

    /// Anonymous `Option<T>`.
    pub fn option(inner: Arc<TypeDescriptor>) -> Self {
        Self::new("", TypeKind::Option(inner))
    }

    /// Anonymous unbounded `Vec<T>`.
    pub fn sequence(element_type: Arc<TypeDescriptor>) -> Self {
        Self::new(
            "",
            TypeKind::Sequence(SequenceDescriptor::unbounded(element_type)),
        )
    }

    /// Anonymous unbounded map.
    pub fn map(key_type: Arc<TypeDescriptor>, value_type: Arc<TypeDescriptor>) -> Self {
        Self::new(
            "",
            TypeKind::Map(MapDescriptor::unbounded(key_type, value_type)),
        )
    }

    /// Anonymous `[T; N]`.
    pub fn fixed_array(element_type: Arc<TypeDescriptor>, length: usize) -> Self {
        Self::new(
            "",
            TypeKind::FixedArray(ArrayDescriptor::new(element_type, length)),
        )
    }

    /// Check if this is a named (declared) type.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// Check if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    /// Check if this is a struct type.
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_))
    }

    /// Struct or tuple-struct: the shapes allowed as enum variant payloads.
    pub fn is_struct_like(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_) | TypeKind::TupleStruct(_))
    }

    /// Get fields if this is a struct.
    pub fn fields(&self) -> Option<&[FieldDescriptor]> {
        match &self.kind {
            TypeKind::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields()?.iter().find(|f| f.name == name)
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields()?.iter().position(|f| f.name == name)
    }

    /// Get the enum descriptor if this is an enum.
    pub fn as_enum(&self) -> Option<&EnumDescriptor> {
        match &self.kind {
            TypeKind::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// Number of members of a struct-like payload (0 for other kinds).
    pub fn member_count(&self) -> usize {
        match &self.kind {
            TypeKind::Struct(fields) => fields.len(),
            TypeKind::TupleStruct(members) => members.len(),
            _ => 0,
        }
    }

    /// Short label of the kind, used in error messages.
    pub fn kind_label(&self) -> String {
        match &self.kind {
            TypeKind::Primitive(p) => p.name(),
            TypeKind::FixedArray(_) => "fixed array".into(),
            TypeKind::Sequence(_) => "sequence".into(),
            TypeKind::Map(_) => "map".into(),
            TypeKind::Option(_) => "option".into(),
            TypeKind::Struct(_) => "struct".into(),
            TypeKind::TupleStruct(_) => "tuple struct".into(),
            TypeKind::Enum(_) => "enum".into(),
        }
    }
}

/// Rust-like spelling: named types by name, anonymous ones structurally.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_named() {
            return f.write_str(&self.name);
        }
        match &self.kind {
            TypeKind::Primitive(p) => write!(f, "{}", p),
            TypeKind::FixedArray(arr) => write!(f, "[{}; {}]", arr.element_type, arr.length),
            TypeKind::Sequence(seq) => write!(f, "Vec<{}>", seq.element_type),
            TypeKind::Map(map) => write!(f, "Map<{}, {}>", map.key_type, map.value_type),
            TypeKind::Option(inner) => write!(f, "Option<{}>", inner),
            TypeKind::Struct(_) => f.write_str("struct"),
            TypeKind::TupleStruct(members) => {
                f.write_str("(")?;
                for (i, m) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", m)?;
                }
                f.write_str(")")
            }
            TypeKind::Enum(_) => f.write_str("enum"),
        }
    }
}

fn check_unique<'a>(type_name: &str, names: impl Iterator<Item = &'a str>) -> SchemaResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(SchemaError::DuplicateField {
                type_name: type_name.to_string(),
                field: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Field descriptor for struct members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Field type.
    pub type_desc: Arc<TypeDescriptor>,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            type_desc,
        }
    }
}

/// Sequence type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDescriptor {
    /// Element type.
    pub element_type: Arc<TypeDescriptor>,
    /// Maximum length (None = unbounded).
    pub max_length: Option<usize>,
}

impl SequenceDescriptor {
    /// Create unbounded sequence.
    pub fn unbounded(element_type: Arc<TypeDescriptor>) -> Self {
        Self {
            element_type,
            max_length: None,
        }
    }

    /// Create bounded sequence.
    pub fn bounded(element_type: Arc<TypeDescriptor>, max_length: usize) -> Self {
        Self {
            element_type,
            max_length: Some(max_length),
        }
    }
}

/// Map type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDescriptor {
    pub key_type: Arc<TypeDescriptor>,
    pub value_type: Arc<TypeDescriptor>,
    /// Maximum entry count (None = unbounded).
    pub max_length: Option<usize>,
}

impl MapDescriptor {
    pub fn unbounded(key_type: Arc<TypeDescriptor>, value_type: Arc<TypeDescriptor>) -> Self {
        Self {
            key_type,
            value_type,
            max_length: None,
        }
    }

    pub fn bounded(
        key_type: Arc<TypeDescriptor>,
        value_type: Arc<TypeDescriptor>,
        max_length: usize,
    ) -> Self {
        Self {
            key_type,
            value_type,
            max_length: Some(max_length),
        }
    }
}

/// Array type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDescriptor {
    /// Element type.
    pub element_type: Arc<TypeDescriptor>,
    /// Fixed length.
    pub length: usize,
}

impl ArrayDescriptor {
    /// Create array descriptor.
    pub fn new(element_type: Arc<TypeDescriptor>, length: usize) -> Self {
        Self {
            element_type,
            length,
        }
    }
}

/// Width of an enum discriminant on the wire (little-endian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagWidth {
    #[default]
    U8,
    U16,
    U32,
}

impl TagWidth {
    /// Size in bytes.
    pub fn size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }

    /// Largest discriminant the width can carry.
    pub fn max_discriminant(self) -> u32 {
        match self {
            Self::U8 => u32::from(u8::MAX),
            Self::U16 => u32::from(u16::MAX),
            Self::U32 => u32::MAX,
        }
    }
}

/// Enumeration type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// Variants in declaration order; the index is the discriminant.
    pub variants: Vec<VariantDescriptor>,
    /// Discriminant width (default one byte).
    pub tag_width: TagWidth,
}

impl EnumDescriptor {
    /// Create enum descriptor with a one-byte discriminant.
    pub fn new(variants: Vec<VariantDescriptor>) -> Self {
        Self {
            variants,
            tag_width: TagWidth::U8,
        }
    }

    /// Create with a specific discriminant width.
    pub fn with_tag_width(mut self, tag_width: TagWidth) -> Self {
        self.tag_width = tag_width;
        self
    }

    /// Get variant by discriminant.
    pub fn variant(&self, index: u32) -> Option<&VariantDescriptor> {
        self.variants.get(index as usize)
    }

    /// Get discriminant by variant name.
    pub fn variant_index(&self, name: &str) -> Option<u32> {
        self.variants
            .iter()
            .position(|v| v.name == name)
            .and_then(|i| u32::try_from(i).ok())
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Enum variant: a name and a struct-like payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDescriptor {
    /// Variant name.
    pub name: String,
    /// Payload descriptor (struct or tuple-struct, possibly empty).
    pub payload: Arc<TypeDescriptor>,
}

impl VariantDescriptor {
    /// Create enum variant.
    pub fn new(name: impl Into<String>, payload: Arc<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Variant without fields.
    pub fn unit(name: impl Into<String>) -> Self {
        let name = name.into();
        let payload = Arc::new(TypeDescriptor::new(
            name.clone(),
            TypeKind::Struct(Vec::new()),
        ));
        Self { name, payload }
    }
}
