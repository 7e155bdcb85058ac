// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire constants and codec configuration.
//!
//! The constants are fixed by the Borsh wire format and must not be changed;
//! any decoder implementing the same format relies on them.
//! [`CodecConfig`] only holds resource limits, it never alters the bytes
//! produced for a given value.
//!
//! # Example
//!
//! ```
//! use borsh_schema::config::CodecConfig;
//!
//! let config = CodecConfig::default().with_max_depth(32);
//! assert_eq!(config.max_depth, 32);
//!
//! let loaded: CodecConfig = serde_json::from_str(r#"{ "max_depth": 16 }"#).unwrap();
//! assert_eq!(loaded.max_depth, 16);
//! assert_eq!(loaded.max_preallocation, CodecConfig::default().max_preallocation);
//! ```

use serde::{Deserialize, Serialize};

// =======================================================================
// Borsh wire format
// =======================================================================

/// Size of the little-endian `u32` prefix in front of strings, sequences and maps.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Option tag for an absent value.
pub const OPTION_NONE_TAG: u8 = 0;

/// Option tag for a present value.
pub const OPTION_SOME_TAG: u8 = 1;

/// Size of an option tag.
pub const OPTION_TAG_SIZE: usize = 1;

/// Length of a public key (ed25519 / Solana `Pubkey`).
pub const PUBLIC_KEY_LEN: usize = 32;

// =======================================================================
// Resource limits
// =======================================================================

/// Default maximum nesting depth accepted by the codec.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default cap on elements reserved up front from a decoded length prefix.
///
/// Containers larger than this still decode; they simply grow on demand.
pub const DEFAULT_MAX_PREALLOCATION: usize = 4096;

/// Resource limits for [`Codec`](crate::codec::Codec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Maximum nesting depth of composite values.
    pub max_depth: usize,
    /// Upper bound on elements pre-allocated for a sequence or map.
    pub max_preallocation: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_preallocation: DEFAULT_MAX_PREALLOCATION,
        }
    }
}

impl CodecConfig {
    /// Set the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the pre-allocation cap.
    #[must_use]
    pub fn with_max_preallocation(mut self, max_preallocation: usize) -> Self {
        self.max_preallocation = max_preallocation;
        self
    }
}
