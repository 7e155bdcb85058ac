// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value tree, checked against a descriptor by the codec.

/// A value of any describable type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    // Primitives
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    String(String),
    /// Fixed bytes or public key.
    Bytes(Vec<u8>),

    // Composites
    /// Fixed-length array.
    Array(Vec<Value>),
    /// Length-prefixed sequence.
    Sequence(Vec<Value>),
    /// Key/value pairs in insertion order.
    Map(Vec<(Value, Value)>),
    Option(Option<Box<Value>>),
    /// Fields in declaration order.
    Struct(Vec<(String, Value)>),
    /// Tuple-struct members.
    Tuple(Vec<Value>),
    Enum { variant: u32, payload: Box<Value> },
}

macro_rules! scalar_accessors {
    ($($variant:ident => $method:ident: $ty:ty),* $(,)?) => {
        impl Value {
            $(
                pub fn $method(&self) -> Option<$ty> {
                    match self {
                        Self::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

scalar_accessors! {
    Bool => as_bool: bool,
    U8 => as_u8: u8,
    U16 => as_u16: u16,
    U32 => as_u32: u32,
    U64 => as_u64: u64,
    U128 => as_u128: u128,
    I8 => as_i8: i8,
    I16 => as_i16: i16,
    I32 => as_i32: i32,
    I64 => as_i64: i64,
    I128 => as_i128: i128,
}

impl Value {
    /// Struct value from `(name, value)` pairs.
    pub fn structure<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        Self::Struct(fields.into_iter().map(|(n, v)| (n.into(), v)).collect())
    }

    /// Empty struct (payload of a unit enum variant).
    pub fn unit() -> Self {
        Self::Struct(Vec::new())
    }

    pub fn some(inner: impl Into<Value>) -> Self {
        Self::Option(Some(Box::new(inner.into())))
    }

    pub fn none() -> Self {
        Self::Option(None)
    }

    pub fn enum_variant(variant: u32, payload: Value) -> Self {
        Self::Enum {
            variant,
            payload: Box::new(payload),
        }
    }

    /// Short label of the value's shape, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::U128(_) => "u128",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::I128(_) => "i128",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Array(_) => "fixed array",
            Self::Sequence(_) => "sequence",
            Self::Map(_) => "map",
            Self::Option(_) => "option",
            Self::Struct(_) => "struct",
            Self::Tuple(_) => "tuple struct",
            Self::Enum { .. } => "enum",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Elements of an array, sequence or tuple.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Self::Array(v) | Self::Sequence(v) | Self::Tuple(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// `Some(None)` for an absent option, `None` if not an option.
    pub fn as_option(&self) -> Option<Option<&Value>> {
        match self {
            Self::Option(v) => Some(v.as_deref()),
            _ => None,
        }
    }

    /// `(variant index, payload)` of an enum value.
    pub fn as_enum(&self) -> Option<(u32, &Value)> {
        match self {
            Self::Enum { variant, payload } => Some((*variant, payload)),
            _ => None,
        }
    }

    /// Struct field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Struct(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(v: [u8; N]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Self::Option(v.map(|inner| Box::new(inner.into())))
    }
}
