// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Declarations -> schema table.
//!
//! Resolution is a depth-first walk with a memo: each declaration is built
//! once and every reference to it receives the same `Arc`. Forward references
//! are fine; a declaration reached again while it is still being built is a
//! cycle.

use super::table::SchemaTable;
use crate::decl::{DeclKind, FieldDecl, TypeDecl, TypeExpr, VariantDecl, VariantFields};
use crate::error::{SchemaError, SchemaResult};
use crate::types::{
    is_primitive, resolve, EnumDescriptor, FieldDescriptor, MapDescriptor, PrimitiveKind,
    SequenceDescriptor, TagWidth, TypeDescriptor, TypeKind, VariantDescriptor,
};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Emit the schema table for `declared_types`.
///
/// All-or-nothing: the first error aborts the emission. Aliases are resolved
/// transparently and do not appear in the table.
///
/// # Example
///
/// ```
/// use borsh_schema::decl::{FieldDecl, TypeDecl};
/// use borsh_schema::schema::emit;
///
/// let table = emit(&[
///     TypeDecl::structure("TestStruct", vec![
///         FieldDecl::parse("field_c", "Option<Vec<OtherState>>").unwrap(),
///     ]),
///     TypeDecl::structure("OtherState", vec![
///         FieldDecl::parse("amount", "u64").unwrap(),
///         FieldDecl::parse("timestamp", "i64").unwrap(),
///     ]),
/// ])
/// .unwrap();
///
/// assert_eq!(table.names().collect::<Vec<_>>(), ["TestStruct", "OtherState"]);
/// ```
pub fn emit(declared_types: &[TypeDecl]) -> SchemaResult<SchemaTable> {
    SchemaEmitter::new(declared_types).emit()
}

/// Single-use resolver over one declaration set.
#[derive(Debug)]
pub struct SchemaEmitter<'d> {
    decls: &'d [TypeDecl],
    by_name: HashMap<&'d str, &'d TypeDecl>,
    built: HashMap<&'d str, Arc<TypeDescriptor>>,
    visiting: Vec<&'d str>,
}

impl<'d> SchemaEmitter<'d> {
    pub fn new(decls: &'d [TypeDecl]) -> Self {
        Self {
            decls,
            by_name: HashMap::with_capacity(decls.len()),
            built: HashMap::with_capacity(decls.len()),
            visiting: Vec::new(),
        }
    }

    /// Resolve every declaration and build the table.
    pub fn emit(mut self) -> SchemaResult<SchemaTable> {
        log::debug!(
            "[SchemaEmitter::emit] resolving {} declarations",
            self.decls.len()
        );

        for decl in self.decls {
            if self.by_name.insert(decl.name.as_str(), decl).is_some() {
                return Err(SchemaError::DuplicateType {
                    name: decl.name.clone(),
                });
            }
        }

        let mut entries = IndexMap::with_capacity(self.decls.len());
        for decl in self.decls {
            let desc = self.resolve_decl(decl)?;
            if decl.is_alias() {
                log::trace!(
                    "[SchemaEmitter::emit] alias '{}' resolves to '{}'",
                    decl.name,
                    desc
                );
                continue;
            }
            entries.insert(decl.name.clone(), desc);
        }

        log::debug!("[SchemaEmitter::emit] emitted {} types", entries.len());
        Ok(SchemaTable::from_entries(entries))
    }

    fn resolve_decl(&mut self, decl: &'d TypeDecl) -> SchemaResult<Arc<TypeDescriptor>> {
        let name = decl.name.as_str();
        if let Some(desc) = self.built.get(name) {
            return Ok(desc.clone());
        }
        if let Some(pos) = self.visiting.iter().position(|n| *n == name) {
            let mut path: Vec<String> = self.visiting[pos..].iter().map(|n| n.to_string()).collect();
            path.push(name.to_string());
            log::debug!("[SchemaEmitter::resolve] cycle through '{}'", name);
            return Err(SchemaError::CyclicReference { path });
        }

        self.visiting.push(name);
        let desc = self.build_decl(decl)?;
        self.visiting.pop();

        self.built.insert(name, desc.clone());
        Ok(desc)
    }

    fn build_decl(&mut self, decl: &'d TypeDecl) -> SchemaResult<Arc<TypeDescriptor>> {
        let name = &decl.name;
        let desc = match &decl.kind {
            DeclKind::Struct(fields) => {
                TypeDescriptor::struct_type(name.clone(), self.build_fields(name, fields)?)?
            }
            DeclKind::TupleStruct(members) => {
                TypeDescriptor::tuple_struct(name.clone(), self.build_members(name, members)?)
            }
            DeclKind::Enum {
                variants,
                tag_width,
            } => self.build_enum(name, variants, *tag_width)?,
            DeclKind::Alias(target) => return self.resolve_expr(target, name),
        };
        Ok(Arc::new(desc))
    }

    fn build_fields(
        &mut self,
        owner: &str,
        fields: &'d [FieldDecl],
    ) -> SchemaResult<Vec<FieldDescriptor>> {
        let mut out = Vec::with_capacity(fields.len());
        for f in fields.iter().filter(|f| !f.skip) {
            out.push(FieldDescriptor::new(
                f.name.clone(),
                self.resolve_expr(&f.ty, owner)?,
            ));
        }
        Ok(out)
    }

    fn build_members(
        &mut self,
        owner: &str,
        members: &'d [TypeExpr],
    ) -> SchemaResult<Vec<Arc<TypeDescriptor>>> {
        let mut out = Vec::with_capacity(members.len());
        for m in members {
            out.push(self.resolve_expr(m, owner)?);
        }
        Ok(out)
    }

    fn build_enum(
        &mut self,
        name: &str,
        variants: &'d [VariantDecl],
        tag_width: TagWidth,
    ) -> SchemaResult<TypeDescriptor> {
        let mut descs = Vec::with_capacity(variants.len());
        for variant in variants {
            // Payload named after its borsh-js class.
            let payload_name = format!("{}{}", name, variant.name);
            let payload = match &variant.fields {
                VariantFields::Unit => TypeDescriptor::new(payload_name, TypeKind::Struct(Vec::new())),
                VariantFields::Named(fields) => {
                    TypeDescriptor::struct_type(payload_name, self.build_fields(name, fields)?)?
                }
                VariantFields::Unnamed(members) => {
                    TypeDescriptor::tuple_struct(payload_name, self.build_members(name, members)?)
                }
            };
            descs.push(VariantDescriptor::new(variant.name.clone(), Arc::new(payload)));
        }
        TypeDescriptor::enum_type(name, EnumDescriptor::new(descs).with_tag_width(tag_width))
    }

    fn resolve_expr(&mut self, expr: &'d TypeExpr, owner: &str) -> SchemaResult<Arc<TypeDescriptor>> {
        let desc = match expr {
            TypeExpr::Primitive(name) => TypeDescriptor::primitive(resolve(name)?),
            TypeExpr::Named(name) => {
                if let Some(decl) = self.by_name.get(name.as_str()).copied() {
                    return self.resolve_decl(decl);
                }
                if is_primitive(name) {
                    TypeDescriptor::primitive(resolve(name)?)
                } else {
                    return Err(SchemaError::UnresolvedReference {
                        from: owner.to_string(),
                        name: name.clone(),
                    });
                }
            }
            TypeExpr::Vec(inner) => TypeDescriptor::sequence(self.resolve_expr(inner, owner)?),
            TypeExpr::BoundedVec(inner, max) => TypeDescriptor::new(
                "",
                TypeKind::Sequence(SequenceDescriptor::bounded(
                    self.resolve_expr(inner, owner)?,
                    *max,
                )),
            ),
            TypeExpr::Option(inner) => TypeDescriptor::option(self.resolve_expr(inner, owner)?),
            TypeExpr::Map(key, value) => TypeDescriptor::map(
                self.resolve_expr(key, owner)?,
                self.resolve_expr(value, owner)?,
            ),
            TypeExpr::BoundedMap(key, value, max) => TypeDescriptor::new(
                "",
                TypeKind::Map(MapDescriptor::bounded(
                    self.resolve_expr(key, owner)?,
                    self.resolve_expr(value, owner)?,
                    *max,
                )),
            ),
            TypeExpr::Array(inner, length) => {
                TypeDescriptor::fixed_array(self.resolve_expr(inner, owner)?, *length)
            }
            TypeExpr::Bytes(n) => TypeDescriptor::primitive(PrimitiveKind::FixedBytes(*n)),
            TypeExpr::BoundedString(max) => TypeDescriptor::primitive(PrimitiveKind::String {
                max_length: Some(*max),
            }),
        };
        Ok(Arc::new(desc))
    }
}
