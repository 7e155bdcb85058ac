// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema emission, the schema table and its renderings.

mod emitter;
mod fingerprint;
mod json;
mod render;
mod table;

pub use emitter::{emit, SchemaEmitter};
pub use fingerprint::SchemaHash;
pub use table::SchemaTable;
