// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type system: primitive registry, descriptors and builders.

mod builder;
mod descriptor;
mod primitive;

pub use builder::{EnumBuilder, StructBuilder, TupleStructBuilder};
pub use descriptor::{
    ArrayDescriptor, EnumDescriptor, FieldDescriptor, MapDescriptor, SequenceDescriptor, TagWidth,
    TypeDescriptor, TypeKind, VariantDescriptor,
};
pub use primitive::{is_primitive, resolve, PrimitiveKind};
