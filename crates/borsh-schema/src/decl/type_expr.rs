// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type expressions used in declarations, parsed from Rust type syntax with `syn`.
//!
//! Accepted forms:
//!
//! | Syntax | Expression |
//! |---|---|
//! | `u64`, `bool`, `String`, `Pubkey` | [`TypeExpr::Primitive`] |
//! | `OtherState`, `crate::state::OtherState` | [`TypeExpr::Named`] (last path segment) |
//! | `Vec<T>` | [`TypeExpr::Vec`] |
//! | `Option<T>` | [`TypeExpr::Option`] |
//! | `BTreeMap<K, V>`, `HashMap<K, V>` | [`TypeExpr::Map`] |
//! | `[u8; N]`, `[N]` | [`TypeExpr::Bytes`] |
//! | `[T; N]` | [`TypeExpr::Array`] |
//! | `MaxLenVec<T, N>`, `MaxLenString<N>`, `MaxLenBTreeMap<K, V, N>` | bounded variants |
//! | `Box<T>` | `T` |

use crate::error::{SchemaError, SchemaResult};
use crate::types::is_primitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use syn::{Expr, ExprLit, GenericArgument, Lit, PathArguments, Type, TypePath};

/// A reference to a type inside a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeExpr {
    /// Primitive, resolved through the registry.
    Primitive(String),
    /// Another declaration (or a primitive spelled as a bare name).
    Named(String),
    Vec(Box<TypeExpr>),
    BoundedVec(Box<TypeExpr>, usize),
    Option(Box<TypeExpr>),
    Map(Box<TypeExpr>, Box<TypeExpr>),
    BoundedMap(Box<TypeExpr>, Box<TypeExpr>, usize),
    /// `[T; N]`
    Array(Box<TypeExpr>, usize),
    /// `[u8; N]`
    Bytes(usize),
    BoundedString(usize),
}

impl TypeExpr {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn vec(inner: TypeExpr) -> Self {
        Self::Vec(Box::new(inner))
    }

    pub fn option(inner: TypeExpr) -> Self {
        Self::Option(Box::new(inner))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    pub fn array(inner: TypeExpr, length: usize) -> Self {
        Self::Array(Box::new(inner), length)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(name) | Self::Named(name) => f.write_str(name),
            Self::Vec(inner) => write!(f, "Vec<{}>", inner),
            Self::BoundedVec(inner, max) => write!(f, "MaxLenVec<{}, {}>", inner, max),
            Self::Option(inner) => write!(f, "Option<{}>", inner),
            Self::Map(k, v) => write!(f, "BTreeMap<{}, {}>", k, v),
            Self::BoundedMap(k, v, max) => write!(f, "MaxLenBTreeMap<{}, {}, {}>", k, v, max),
            Self::Array(inner, len) => write!(f, "[{}; {}]", inner, len),
            Self::Bytes(len) => write!(f, "[u8; {}]", len),
            Self::BoundedString(max) => write!(f, "MaxLenString<{}>", max),
        }
    }
}

/// Deepest generic or array nesting accepted in one expression.
pub const MAX_TYPE_DEPTH: usize = 64;

impl FromStr for TypeExpr {
    type Err = SchemaError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        // Checked before syn sees the input: its parser recurses per level.
        if nesting_depth(input) > MAX_TYPE_DEPTH {
            return Err(invalid(input, "nesting too deep"));
        }
        if let Some(width) = bytes_shorthand(input) {
            return Ok(TypeExpr::Bytes(width));
        }
        let ty = syn::parse_str::<syn::Type>(input).map_err(|e| invalid(input, e.to_string()))?;
        TypeMapper { input }.map_type(&ty, 0)
    }
}

impl TryFrom<String> for TypeExpr {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeExpr> for String {
    fn from(expr: TypeExpr) -> Self {
        expr.to_string()
    }
}

fn invalid(input: &str, reason: impl Into<String>) -> SchemaError {
    SchemaError::InvalidTypeExpr {
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn nesting_depth(input: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    for b in input.bytes() {
        match b {
            b'<' | b'[' | b'(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'>' | b']' | b')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// `[N]`, the schema spelling of `[u8; N]`. Not Rust type syntax.
fn bytes_shorthand(input: &str) -> Option<usize> {
    let inner = input.trim().strip_prefix('[')?.strip_suffix(']')?;
    syn::parse_str::<syn::LitInt>(inner)
        .ok()?
        .base10_parse()
        .ok()
}

// =======================================================================
// syn::Type -> TypeExpr
// =======================================================================

struct TypeMapper<'a> {
    input: &'a str,
}

impl TypeMapper<'_> {
    fn error(&self, reason: impl Into<String>) -> SchemaError {
        invalid(self.input, reason)
    }

    fn map_type(&self, ty: &Type, depth: usize) -> SchemaResult<TypeExpr> {
        if depth > MAX_TYPE_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        match ty {
            Type::Path(TypePath { qself: None, path }) => self.map_path(path, depth),
            Type::Array(arr) => {
                let length = self.length(&arr.len)?;
                match self.map_type(&arr.elem, depth + 1)? {
                    TypeExpr::Primitive(ref p) if p == "u8" => Ok(TypeExpr::Bytes(length)),
                    element => Ok(TypeExpr::array(element, length)),
                }
            }
            Type::Paren(inner) => self.map_type(&inner.elem, depth + 1),
            Type::Group(inner) => self.map_type(&inner.elem, depth + 1),
            Type::Path(_) => Err(self.error("qualified paths are not supported")),
            Type::Reference(_) => Err(self.error("references are not supported")),
            Type::Tuple(_) => Err(self.error("tuples are not supported")),
            Type::Slice(_) => Err(self.error("slices need a length")),
            _ => Err(self.error("unsupported type syntax")),
        }
    }

    fn map_path(&self, path: &syn::Path, depth: usize) -> SchemaResult<TypeExpr> {
        let segment = path
            .segments
            .last()
            .ok_or_else(|| self.error("empty path"))?;
        let name = segment.ident.to_string();
        let args: Vec<&GenericArgument> = match &segment.arguments {
            PathArguments::None => {
                return Ok(if is_primitive(&name) {
                    TypeExpr::Primitive(name)
                } else {
                    TypeExpr::Named(name)
                });
            }
            PathArguments::AngleBracketed(generic) => generic.args.iter().collect(),
            PathArguments::Parenthesized(_) => {
                return Err(self.error(format!("'{}' takes no parenthesized arguments", name)))
            }
        };

        let next = depth + 1;
        match (name.as_str(), args.as_slice()) {
            ("Vec" | "VecDeque", [inner]) => Ok(TypeExpr::vec(self.type_arg(inner, next)?)),
            ("Option", [inner]) => Ok(TypeExpr::option(self.type_arg(inner, next)?)),
            ("Box" | "Rc" | "Arc", [inner]) => self.type_arg(inner, next),
            ("BTreeMap" | "HashMap", [key, value]) => Ok(TypeExpr::map(
                self.type_arg(key, next)?,
                self.type_arg(value, next)?,
            )),
            ("MaxLenVec", [inner, max]) => Ok(TypeExpr::BoundedVec(
                Box::new(self.type_arg(inner, next)?),
                self.length_arg(max)?,
            )),
            ("MaxLenString", [max]) => Ok(TypeExpr::BoundedString(self.length_arg(max)?)),
            ("MaxLenBTreeMap" | "MaxLenBTree", [key, value, max]) => Ok(TypeExpr::BoundedMap(
                Box::new(self.type_arg(key, next)?),
                Box::new(self.type_arg(value, next)?),
                self.length_arg(max)?,
            )),
            (
                "Vec" | "VecDeque" | "Option" | "Box" | "Rc" | "Arc" | "BTreeMap" | "HashMap"
                | "MaxLenVec" | "MaxLenString" | "MaxLenBTreeMap" | "MaxLenBTree",
                _,
            ) => Err(self.error(format!(
                "'{}' given {} generic arguments",
                name,
                args.len()
            ))),
            (other, _) => Err(self.error(format!("unsupported generic type '{}'", other))),
        }
    }

    fn type_arg(&self, arg: &GenericArgument, depth: usize) -> SchemaResult<TypeExpr> {
        match arg {
            GenericArgument::Type(ty) => self.map_type(ty, depth),
            _ => Err(self.error("expected a type argument")),
        }
    }

    fn length_arg(&self, arg: &GenericArgument) -> SchemaResult<usize> {
        match arg {
            GenericArgument::Const(expr) => self.length(expr),
            _ => Err(self.error("expected a length argument")),
        }
    }

    fn length(&self, expr: &Expr) -> SchemaResult<usize> {
        match expr {
            Expr::Lit(ExprLit {
                lit: Lit::Int(n), ..
            }) => n
                .base10_parse()
                .map_err(|_| self.error(format!("bad length '{}'", n))),
            _ => Err(self.error("expected an integer length")),
        }
    }
}
