// SPDX-License-Identifier: CC0-1.0

//! SHA384 implementation.

use crate::{sha512, HashEngine as _};

crate::internal_macros::hash_type! {
    384,
    "Output of the SHA384 hash function."
}

/// Engine to compute SHA384 hash function.
pub type HashEngine = sha512::Engine<48>;
