// SPDX-License-Identifier: CC0-1.0

//! Merkle–Damgård Cryptographic Hash Functions.
//!
//! This is a small, allocation-free library which implements the classic Merkle–Damgård
//! family of cryptographic hash functions used by SSH and friends. At the moment this includes:
//! - MD5
//! - SHA-1
//! - SHA-2
//!   - SHA224
//!   - SHA256
//!   - SHA384
//!   - SHA512
//! - RIPEMD-160
//! - HMAC-x (where x is any of the hash functions above), with optional output truncation.
//!
//! ## Commonly used operations
//!
//! Hashing a single byte slice or a string:
//!
//! ```rust
//! use chf_md::sha256;
//!
//! let bytes = [0u8; 5];
//! let hash_of_bytes = sha256::Hash::hash(&bytes);
//! let hash_of_string = sha256::Hash::hash("some string".as_bytes());
//! ```
//!
//!
//! Hashing content incrementally, re-using the engine afterwards:
//!
//! ```rust
//! use chf_md::{sha1, HashEngine as _};
//!
//! let mut engine = sha1::HashEngine::new();
//! engine.input(b"hello");
//! engine.input(b" ");
//! engine.input(b"world");
//! let first = engine.finalize();
//!
//! // `finalize` leaves the engine as if it were freshly constructed.
//! engine.input(b"hello world");
//! assert_eq!(engine.finalize(), first);
//! ```
//!
//!
//! Hashing content from a reader:
//!
//! ```rust
//! use chf_md::sha256;
//!
//! #[cfg(feature = "std")]
//! # fn main() -> std::io::Result<()> {
//! let mut reader: &[u8] = b"hello"; // in real code, this could be a `File` or `TcpStream`
//! let mut engine = sha256::HashEngine::new();
//! std::io::copy(&mut reader, &mut engine)?;
//! let hash = sha256::Hash::from_engine(engine);
//! # Ok(())
//! # }
//!
//! #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```
//!
//!
//! Computing a truncated HMAC:
//!
//! ```rust
//! use chf_md::{md5, HmacEngine};
//!
//! let mut engine = HmacEngine::<md5::HashEngine, 16>::with_output_bits(&[0x0c; 16], 96)
//!     .expect("96 bits fits into an MD5 digest");
//! engine.input(b"Test With Truncation");
//! let tag = engine.finalize();
//! assert_eq!(tag.to_string(), "56461ef2342edc00f9bab995");
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(bench, feature(test))]
// Coding conventions.
#![warn(missing_docs)]
// Exclude lints we don't think are valuable.
#![allow(clippy::needless_question_mark)] // https://github.com/rust-bitcoin/rust-bitcoin/pull/2134
#![allow(clippy::manual_range_contains)] // More readable than clippy's format.
#![allow(clippy::needless_borrows_for_generic_args)] // https://github.com/rust-lang/rust-clippy/issues/12454

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate core;

#[cfg(feature = "serde")]
/// A generic serialization/deserialization framework.
pub extern crate serde;

#[cfg(all(test, feature = "serde"))]
extern crate serde_test;
#[cfg(bench)]
extern crate test;

/// Re-export the `hex-conservative` crate.
pub extern crate hex;

#[doc(hidden)]
pub mod _export {
    /// A re-export of core::*
    pub mod _core {
        pub use core::*;
    }
}

#[cfg(feature = "schemars")]
extern crate schemars;

mod internal_macros;
mod util;
#[macro_use]
pub mod serde_macros;
pub mod hmac;
#[cfg(any(feature = "std", feature = "bitcoin-io"))]
mod impls;
pub mod md5;
pub mod ripemd160;
pub mod sha1;
pub mod sha224;
pub mod sha256;
pub mod sha384;
pub mod sha512;

use core::fmt;

pub use hmac::{Hmac, HmacEngine};

/// A hashing engine which bytes can be serialized into.
///
/// Engines are incremental: data may be fed through [`HashEngine::input`] in chunks of any
/// size and the resulting digest is identical to hashing the concatenation in one go.
/// [`HashEngine::finalize`] returns the digest *and* resets the engine, so a single engine can
/// be reused for any number of independent computations.
pub trait HashEngine<const N: usize>: Clone + Default {
    /// Length of the hash's internal block size, in bytes.
    const BLOCK_SIZE: usize;

    /// Length of the digest, in bytes.
    const DIGEST_SIZE: usize = N;

    /// Returns the natural digest size, in bits.
    fn digest_bits() -> usize { N * 8 }

    /// Creates a new hash engine.
    fn new() -> Self { Default::default() }

    /// Restores the initial chaining state, discarding any pending data.
    fn reset(&mut self);

    /// Add data to the hash engine.
    fn input(&mut self, data: &[u8]);

    /// Return the number of bytes already n_bytes_hashed(inputted).
    fn n_bytes_hashed(&self) -> u64;

    /// Pads the message, returns the final digest and resets the engine.
    fn finalize(&mut self) -> [u8; N];

    /// Creates a default hash engine, adds `bytes` to it, then finalizes the engine.
    ///
    /// # Returns
    ///
    /// The digest created by hashing `bytes` with engine's hashing algorithm.
    fn hash(bytes: &[u8]) -> [u8; N] {
        let mut engine = Self::new();
        engine.input(bytes);
        engine.finalize()
    }

    /// Hashes all the byte slices retrieved from the iterator together.
    fn hash_byte_chunks<B, I>(byte_slices: I) -> [u8; N]
    where
        B: AsRef<[u8]>,
        I: IntoIterator<Item = B>,
    {
        let mut engine = Self::new();
        for slice in byte_slices {
            engine.input(slice.as_ref());
        }
        engine.finalize()
    }
}

/// Attempted to create a hash from an invalid length slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromSliceError {
    expected: usize,
    got: usize,
}

impl FromSliceError {
    /// Returns the expected slice length.
    pub fn expected_length(&self) -> usize { self.expected }

    /// Returns the invalid slice length.
    pub fn invalid_length(&self) -> usize { self.got }
}

impl fmt::Display for FromSliceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid slice length {} (expected {})", self.got, self.expected)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromSliceError {}
