// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builders for struct, tuple-struct and enum descriptors.

use crate::error::SchemaResult;
use crate::types::{
    ArrayDescriptor, EnumDescriptor, FieldDescriptor, MapDescriptor, PrimitiveKind,
    SequenceDescriptor, TagWidth, TypeDescriptor, TypeKind, VariantDescriptor,
};
use std::sync::Arc;

fn primitive(kind: PrimitiveKind) -> Arc<TypeDescriptor> {
    Arc::new(TypeDescriptor::primitive(kind))
}

/// Builder for struct descriptors.
#[derive(Debug)]
pub struct StructBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl StructBuilder {
    /// Create a new builder for a struct type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a primitive field.
    pub fn field(self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        self.field_with_type(name, primitive(kind))
    }

    /// Add a field with a type descriptor.
    pub fn field_with_type(mut self, name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a string field.
    pub fn string_field(self, name: impl Into<String>) -> Self {
        self.field(name, PrimitiveKind::String { max_length: None })
    }

    pub fn bounded_string_field(self, name: impl Into<String>, max_length: usize) -> Self {
        self.field(
            name,
            PrimitiveKind::String {
                max_length: Some(max_length),
            },
        )
    }

    /// Add an `Option<T>` field.
    pub fn option_field(self, name: impl Into<String>, inner: Arc<TypeDescriptor>) -> Self {
        self.field_with_type(name, Arc::new(TypeDescriptor::option(inner)))
    }

    /// Add a `Vec<T>` field.
    pub fn sequence_field(self, name: impl Into<String>, element_type: Arc<TypeDescriptor>) -> Self {
        self.field_with_type(name, Arc::new(TypeDescriptor::sequence(element_type)))
    }

    /// Add a bounded sequence field.
    pub fn bounded_sequence_field(
        self,
        name: impl Into<String>,
        element_type: Arc<TypeDescriptor>,
        max_length: usize,
    ) -> Self {
        let seq_desc = SequenceDescriptor::bounded(element_type, max_length);
        self.field_with_type(name, Arc::new(TypeDescriptor::new("", TypeKind::Sequence(seq_desc))))
    }

    /// Add a map field.
    pub fn map_field(
        self,
        name: impl Into<String>,
        key_type: Arc<TypeDescriptor>,
        value_type: Arc<TypeDescriptor>,
    ) -> Self {
        let map_desc = MapDescriptor::unbounded(key_type, value_type);
        self.field_with_type(name, Arc::new(TypeDescriptor::new("", TypeKind::Map(map_desc))))
    }

    /// Add a fixed array field.
    pub fn array_field(
        self,
        name: impl Into<String>,
        element_type: Arc<TypeDescriptor>,
        length: usize,
    ) -> Self {
        let arr_desc = ArrayDescriptor::new(element_type, length);
        self.field_with_type(name, Arc::new(TypeDescriptor::new("", TypeKind::FixedArray(arr_desc))))
    }

    /// Build the descriptor; fails on duplicate field names.
    pub fn build(self) -> SchemaResult<TypeDescriptor> {
        TypeDescriptor::struct_type(self.name, self.fields)
    }
}

/// Builder for tuple-struct descriptors.
#[derive(Debug)]
pub struct TupleStructBuilder {
    name: String,
    members: Vec<Arc<TypeDescriptor>>,
}

impl TupleStructBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a primitive member.
    pub fn member(self, kind: PrimitiveKind) -> Self {
        self.member_with_type(primitive(kind))
    }

    /// Add a member with a type descriptor.
    pub fn member_with_type(mut self, type_desc: Arc<TypeDescriptor>) -> Self {
        self.members.push(type_desc);
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::tuple_struct(self.name, self.members)
    }
}

/// Builder for enum descriptors.
///
/// Variants are numbered in the order they are added.
#[derive(Debug)]
pub struct EnumBuilder {
    name: String,
    variants: Vec<VariantDescriptor>,
    tag_width: TagWidth,
}

impl EnumBuilder {
    /// Create a new enum builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
            tag_width: TagWidth::U8,
        }
    }

    /// Add a variant without fields.
    pub fn unit_variant(mut self, name: impl Into<String>) -> Self {
        self.variants.push(VariantDescriptor::unit(name));
        self
    }

    /// Add a variant with a struct or tuple-struct payload.
    pub fn variant(mut self, name: impl Into<String>, payload: Arc<TypeDescriptor>) -> Self {
        self.variants.push(VariantDescriptor::new(name, payload));
        self
    }

    /// Set the discriminant width.
    pub fn tag_width(mut self, tag_width: TagWidth) -> Self {
        self.tag_width = tag_width;
        self
    }

    /// Build the descriptor; fails on duplicate variant names or non-struct payloads.
    pub fn build(self) -> SchemaResult<TypeDescriptor> {
        let enum_desc = EnumDescriptor::new(self.variants).with_tag_width(self.tag_width);
        TypeDescriptor::enum_type(self.name, enum_desc)
    }
}
