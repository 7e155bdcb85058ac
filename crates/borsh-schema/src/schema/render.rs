// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! borsh-js TypeScript rendering of a schema table.
//!
//! Output is one class per struct, enum and enum variant, followed by the
//! `SCHEMA` map consumed by `borsh.serialize` / `borsh.deserialize`. The text
//! layout (indentation and tabs included) is stable so generated files diff
//! cleanly.

use super::table::SchemaTable;
use crate::types::{PrimitiveKind, TypeDescriptor, TypeKind};
use heck::ToLowerCamelCase;
use std::fmt::Write;

const HEADER: &str = r#"import { PublicKey } from "@solana/web3.js";
import BN from "bn.js";
import Enum from "./extensions/enum";
import Struct from "./extensions/struct";
import { borshPublicKey } from "./extensions/publicKey";

borshPublicKey();

"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassKind {
    Struct,
    Enum,
}

impl ClassKind {
    fn base(self) -> &'static str {
        match self {
            Self::Struct => "Struct",
            Self::Enum => "Enum",
        }
    }

    fn schema_head(self) -> &'static str {
        match self {
            Self::Struct => "kind: 'struct', fields:",
            Self::Enum => "kind: 'enum', field: 'enum', values:",
        }
    }
}

/// One class member: `(name, TypeScript type, borsh-js schema type)`.
#[derive(Debug)]
struct Member {
    name: String,
    class_type: String,
    schema_type: String,
}

/// A generated class with its schema entry.
#[derive(Debug)]
struct ClassLayout {
    name: String,
    kind: ClassKind,
    members: Vec<Member>,
}

impl ClassLayout {
    /// Layouts for one table entry; an enum yields itself plus one per variant.
    fn from_entry(name: &str, desc: &TypeDescriptor) -> Vec<Self> {
        match &desc.kind {
            TypeKind::Enum(e) => {
                let mut layouts = Vec::with_capacity(e.len() + 1);
                let mut members = Vec::with_capacity(e.len());
                let mut variants = Vec::with_capacity(e.len());
                for variant in &e.variants {
                    let class = format!("{}{}", name, variant.name);
                    members.push(Member {
                        name: class.to_lower_camel_case(),
                        class_type: class.clone(),
                        schema_type: class.clone(),
                    });
                    variants.push(Self::struct_like(class, &variant.payload));
                }
                layouts.push(Self {
                    name: name.to_string(),
                    kind: ClassKind::Enum,
                    members,
                });
                layouts.extend(variants);
                layouts
            }
            _ => vec![Self::struct_like(name.to_string(), desc)],
        }
    }

    fn struct_like(name: String, desc: &TypeDescriptor) -> Self {
        let members = match &desc.kind {
            TypeKind::Struct(fields) => fields
                .iter()
                .map(|f| Member::new(f.name.to_lower_camel_case(), &f.type_desc))
                .collect(),
            TypeKind::TupleStruct(members) => members
                .iter()
                .enumerate()
                .map(|(i, m)| Member::new(format!("unnamed_{}", i), m))
                .collect(),
            // A non-struct entry renders as a single-member wrapper.
            _ => vec![Member::new("unnamed_0".to_string(), desc)],
        };
        Self {
            name,
            kind: ClassKind::Struct,
            members,
        }
    }

    fn write_class(&self, out: &mut String) {
        let _ = write!(out, "export class {} extends {} {{", self.name, self.kind.base());
        for m in &self.members {
            let _ = write!(out, "\n    {}: {};", m.name, m.class_type);
        }
        out.push_str("\n};\n\n");
    }

    fn write_schema_entry(&self, out: &mut String) {
        let mut fields = String::new();
        for m in &self.members {
            let _ = write!(fields, "\n\t\t\t['{}', {}],", m.name, m.schema_type);
        }
        let _ = write!(
            out,
            "\n    [\n            {},\n            {{\n                {} [{}\n                ],\n            }},\n    ],",
            self.name,
            self.kind.schema_head(),
            fields
        );
    }
}

impl Member {
    fn new(name: String, desc: &TypeDescriptor) -> Self {
        Self {
            name,
            class_type: class_type(desc),
            schema_type: schema_type(desc),
        }
    }
}

/// TypeScript type of a class member.
fn class_type(desc: &TypeDescriptor) -> String {
    if desc.is_named() {
        return desc.name.clone();
    }
    match &desc.kind {
        TypeKind::Primitive(p) => match p {
            PrimitiveKind::Bool => "boolean".into(),
            PrimitiveKind::U64
            | PrimitiveKind::U128
            | PrimitiveKind::I64
            | PrimitiveKind::I128 => "BN".into(),
            PrimitiveKind::String { .. } => "string".into(),
            PrimitiveKind::PublicKey => "PublicKey".into(),
            PrimitiveKind::FixedBytes(n) => format!("[{}]", n),
            _ => "number".into(),
        },
        TypeKind::FixedArray(arr) => array_of(&arr.element_type),
        TypeKind::Sequence(seq) => array_of(&seq.element_type),
        TypeKind::Map(map) => format!(
            "Map<{}, {}>",
            class_type(&map.key_type),
            class_type(&map.value_type)
        ),
        TypeKind::Option(inner) => format!("{} | null", class_type(inner)),
        TypeKind::Struct(_) | TypeKind::TupleStruct(_) | TypeKind::Enum(_) => "any".into(),
    }
}

fn array_of(element: &TypeDescriptor) -> String {
    let inner = class_type(element);
    if matches!(element.kind, TypeKind::Option(_)) && !element.is_named() {
        format!("({})[]", inner)
    } else {
        format!("{}[]", inner)
    }
}

/// borsh-js schema type of a member.
fn schema_type(desc: &TypeDescriptor) -> String {
    if desc.is_named() {
        return desc.name.clone();
    }
    match &desc.kind {
        TypeKind::Primitive(p) => match p {
            PrimitiveKind::Bool | PrimitiveKind::U8 | PrimitiveKind::I8 => "'u8'".into(),
            PrimitiveKind::U16 | PrimitiveKind::I16 => "'u16'".into(),
            PrimitiveKind::U32 | PrimitiveKind::I32 => "'u32'".into(),
            PrimitiveKind::U64 | PrimitiveKind::I64 => "'u64'".into(),
            PrimitiveKind::U128 | PrimitiveKind::I128 => "'u128'".into(),
            PrimitiveKind::String { .. } => "'string'".into(),
            PrimitiveKind::PublicKey => "'publicKey'".into(),
            PrimitiveKind::FixedBytes(n) => format!("[{}]", n),
        },
        TypeKind::FixedArray(arr) => format!("[{}, {}]", schema_type(&arr.element_type), arr.length),
        TypeKind::Sequence(seq) => format!("[{}]", schema_type(&seq.element_type)),
        TypeKind::Map(map) => format!(
            "{{ kind: 'map', key: {}, value: {} }}",
            schema_type(&map.key_type),
            schema_type(&map.value_type)
        ),
        TypeKind::Option(inner) => format!("{{ kind: 'option', type: {} }}", schema_type(inner)),
        TypeKind::Struct(_) | TypeKind::TupleStruct(_) | TypeKind::Enum(_) => "undefined".into(),
    }
}

impl SchemaTable {
    /// Render the table as a borsh-js TypeScript module.
    pub fn to_borsh_js(&self) -> String {
        let layouts: Vec<ClassLayout> = self
            .iter()
            .flat_map(|(name, desc)| ClassLayout::from_entry(name, desc))
            .collect();

        let mut out = String::from(HEADER);
        for layout in &layouts {
            layout.write_class(&mut out);
        }
        out.push_str("export const SCHEMA = new Map<any, any>([");
        for layout in &layouts {
            layout.write_schema_entry(&mut out);
        }
        out.push_str("\n]);\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{FieldDecl, TypeDecl, TypeExpr, VariantDecl};
    use crate::schema::emit;

    fn field(name: &str, ty: &str) -> FieldDecl {
        FieldDecl::parse(name, ty).expect("field type")
    }

    #[test]
    fn test_struct_class_and_schema() {
        let table = emit(&[TypeDecl::structure(
            "RandomStruct",
            vec![field("field_a", "String"), field("field_b", "Option<[u8; 2]>")],
        )])
        .expect("emit");
        let ts = table.to_borsh_js();

        assert!(ts.starts_with(HEADER));
        assert!(ts.contains(
            "export class RandomStruct extends Struct {\n    fieldA: string;\n    fieldB: [2] | null;\n};\n\n"
        ));
        assert!(ts.contains(
            "    [\n            RandomStruct,\n            {\n                kind: 'struct', fields: [\n\t\t\t['fieldA', 'string'],\n\t\t\t['fieldB', { kind: 'option', type: [2] }],\n                ],\n            },\n    ],"
        ));
        assert!(ts.ends_with("    ],\n]);\n"));
    }

    #[test]
    fn test_enum_expands_variant_classes() {
        let table = emit(&[TypeDecl::enumeration(
            "TestEnum",
            vec![
                VariantDecl::unit("VariantA"),
                VariantDecl::unnamed("VariantD", vec![field("x", "Option<Pubkey>").ty]),
                VariantDecl::named(
                    "VariantG",
                    vec![field("hello", "Vec<u8>"), field("bello", "[Pubkey; 3]")],
                ),
            ],
        )])
        .expect("emit");
        let ts = table.to_borsh_js();

        assert!(ts.contains(
            "export class TestEnum extends Enum {\n    testEnumVariantA: TestEnumVariantA;\n    testEnumVariantD: TestEnumVariantD;\n    testEnumVariantG: TestEnumVariantG;\n};"
        ));
        assert!(ts.contains("export class TestEnumVariantA extends Struct {\n};"));
        assert!(ts.contains("    unnamed_0: PublicKey | null;"));
        assert!(ts.contains("kind: 'enum', field: 'enum', values: [\n\t\t\t['testEnumVariantA', TestEnumVariantA],"));
        assert!(ts.contains("\t\t\t['hello', ['u8']],\n\t\t\t['bello', ['publicKey', 3]],"));
        assert!(ts.contains("    hello: number[];\n    bello: PublicKey[];"));
    }

    #[test]
    fn test_scalar_names() {
        let table = emit(&[TypeDecl::tuple_struct(
            "TupleStruct",
            vec![
                TypeExpr::primitive("u8"),
                TypeExpr::primitive("i32"),
                TypeExpr::primitive("bool"),
                TypeExpr::primitive("i64"),
            ],
        )])
        .expect("emit");
        let ts = table.to_borsh_js();
        assert!(ts.contains("\t\t\t['unnamed_0', 'u8'],\n\t\t\t['unnamed_1', 'u32'],\n\t\t\t['unnamed_2', 'u8'],\n\t\t\t['unnamed_3', 'u64'],"));
        assert!(ts.contains("    unnamed_1: number;\n    unnamed_2: boolean;\n    unnamed_3: BN;"));
    }
}
