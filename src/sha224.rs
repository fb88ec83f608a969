// SPDX-License-Identifier: CC0-1.0

//! SHA224 implementation.
//!
//! SHA224 is SHA256 started from a different initial chaining value, with the output
//! truncated to 224 bits.

use crate::{sha256, HashEngine as _};

crate::internal_macros::hash_type! {
    224,
    "Output of the SHA224 hash function."
}

/// Engine to compute SHA224 hash function.
pub type HashEngine = sha256::Engine<28>;
