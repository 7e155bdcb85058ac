// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural JSON export of a schema table.
//!
//! ```json
//! { "types": [
//!     { "name": "OtherState", "kind": "struct",
//!       "fields": [ { "name": "amount", "type": "u64" } ] }
//! ] }
//! ```
//!
//! Primitives are written by canonical name, named children as
//! `{ "ref": "<name>" }`, anonymous containers inline.

use super::table::SchemaTable;
use crate::types::{PrimitiveKind, TypeDescriptor, TypeKind};
use serde_json::{json, Map, Value};

fn type_ref(desc: &TypeDescriptor) -> Value {
    if desc.is_named() {
        json!({ "ref": desc.name })
    } else {
        type_body(desc)
    }
}

/// Attach a name to a body; primitive bodies are wrapped.
fn named(name: &str, body: Value) -> Value {
    match body {
        Value::Object(mut obj) => {
            obj.insert("name".into(), json!(name));
            Value::Object(obj)
        }
        other => json!({ "name": name, "type": other }),
    }
}

fn with_bound(mut obj: Map<String, Value>, bound: Option<usize>) -> Value {
    if let Some(max) = bound {
        obj.insert("max_length".into(), json!(max));
    }
    Value::Object(obj)
}

fn type_body(desc: &TypeDescriptor) -> Value {
    match &desc.kind {
        TypeKind::Primitive(PrimitiveKind::String {
            max_length: Some(max),
        }) => json!({ "kind": "string", "max_length": max }),
        TypeKind::Primitive(p) => json!(p.name()),
        TypeKind::FixedArray(arr) => json!({
            "kind": "array",
            "type": type_ref(&arr.element_type),
            "length": arr.length,
        }),
        TypeKind::Sequence(seq) => {
            let mut obj = Map::new();
            obj.insert("kind".into(), json!("sequence"));
            obj.insert("type".into(), type_ref(&seq.element_type));
            with_bound(obj, seq.max_length)
        }
        TypeKind::Map(map) => {
            let mut obj = Map::new();
            obj.insert("kind".into(), json!("map"));
            obj.insert("key".into(), type_ref(&map.key_type));
            obj.insert("value".into(), type_ref(&map.value_type));
            with_bound(obj, map.max_length)
        }
        TypeKind::Option(inner) => json!({ "kind": "option", "type": type_ref(inner) }),
        TypeKind::Struct(fields) => json!({
            "kind": "struct",
            "fields": fields
                .iter()
                .map(|f| json!({ "name": f.name, "type": type_ref(&f.type_desc) }))
                .collect::<Vec<_>>(),
        }),
        TypeKind::TupleStruct(members) => json!({
            "kind": "tuple_struct",
            "members": members.iter().map(|m| type_ref(m)).collect::<Vec<_>>(),
        }),
        TypeKind::Enum(e) => json!({
            "kind": "enum",
            "tag_width": e.tag_width.size(),
            "variants": e
                .variants
                .iter()
                .map(|v| named(&v.name, type_body(&v.payload)))
                .collect::<Vec<_>>(),
        }),
    }
}

impl SchemaTable {
    /// Structural JSON description, in declaration order.
    pub fn to_json(&self) -> Value {
        let types: Vec<Value> = self
            .iter()
            .map(|(name, desc)| named(name, type_body(desc)))
            .collect();
        json!({ "types": types })
    }
}
