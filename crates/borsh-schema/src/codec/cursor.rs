// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Little-endian read cursor and write buffer for the Borsh wire format.

use crate::error::{CodecError, CodecResult};

/// Generate little-endian write methods for integer types.
macro_rules! impl_write_le {
    ($($name:ident: $type:ty),* $(,)?) => {
        $(
            pub fn $name(&mut self, value: $type) {
                self.buffer.extend_from_slice(&value.to_le_bytes());
            }
        )*
    };
}

/// Generate little-endian read methods for integer types.
///
/// Each generated method checks the remaining length first and reports
/// `TruncatedInput` at the current offset when the buffer is short.
macro_rules! impl_read_le {
    ($($name:ident: $type:ty),* $(,)?) => {
        $(
            pub fn $name(&mut self) -> CodecResult<$type> {
                const SIZE: usize = std::mem::size_of::<$type>();
                let mut bytes = [0u8; SIZE];
                bytes.copy_from_slice(self.read_bytes(SIZE)?);
                Ok(<$type>::from_le_bytes(bytes))
            }
        )*
    };
}

/// Growable output buffer.
#[derive(Debug, Default)]
pub struct Writer {
    buffer: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    impl_write_le!(
        write_u8: u8,
        write_u16_le: u16,
        write_u32_le: u32,
        write_u64_le: u64,
        write_u128_le: u128,
        write_i8: i8,
        write_i16_le: i16,
        write_i32_le: i32,
        write_i64_le: i64,
        write_i128_le: i128,
    );

    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Bytes written so far.
    pub fn offset(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes written since `start`.
    pub fn since(&self, start: usize) -> &[u8] {
        &self.buffer[start.min(self.buffer.len())..]
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

/// Immutable cursor for reading (bounds-checked, zero-copy).
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_read_le!(
        read_u8: u8,
        read_u16_le: u16,
        read_u32_le: u32,
        read_u64_le: u64,
        read_u128_le: u128,
        read_i8: i8,
        read_i16_le: i16,
        read_i32_le: i32,
        read_i64_le: i64,
        read_i128_le: i128,
    );

    pub fn read_bytes(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::TruncatedInput {
                offset: self.offset,
                needed: len,
                remaining,
            });
        }
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    /// Input consumed between `start` and the current offset.
    pub fn since(&self, start: usize) -> &'a [u8] {
        &self.buffer[start.min(self.offset)..self.offset]
    }
}
