// SPDX-License-Identifier: CC0-1.0

//! Non-public macros

/// Adds `AsRef` implementation to a given type `$ty`.
macro_rules! as_ref_impl(
    ($ty:ident) => (
        impl $crate::_export::_core::convert::AsRef<[u8]> for $ty {
            fn as_ref(&self) -> &[u8] { &self[..] }
        }

        impl $crate::_export::_core::borrow::Borrow<[u8]> for $ty {
            fn borrow(&self) -> &[u8] { &self[..] }
        }
    )
);
pub(crate) use as_ref_impl;

/// Adds the `HashEngine::input` and `HashEngine::n_bytes_hashed` methods.
///
/// The engine must have a `buffer: [u8; BLOCK_SIZE]` field, a `bytes_hashed: u64` field and a
/// `state` field whose `compress(&mut self, block: &[u8])` method runs the compression function.
macro_rules! engine_input_impl(
    () => (
        #[inline]
        fn n_bytes_hashed(&self) -> u64 { self.bytes_hashed }

        fn input(&mut self, inp: &[u8]) {
            let state = &mut self.state;
            $crate::util::buffered_input(&mut self.buffer, &mut self.bytes_hashed, inp, |block| {
                state.compress(block)
            });
        }
    )
);
pub(crate) use engine_input_impl;

macro_rules! arr_newtype_fmt_impl {
    ($ty:ident, $bytes:expr) => {
        impl $crate::_export::_core::fmt::LowerHex for $ty {
            #[inline]
            fn fmt(&self, f: &mut $crate::_export::_core::fmt::Formatter) -> $crate::_export::_core::fmt::Result {
                $crate::hex::fmt_hex_exact!(f, $bytes, self.0.iter(), $crate::hex::Case::Lower)
            }
        }

        impl $crate::_export::_core::fmt::UpperHex for $ty {
            #[inline]
            fn fmt(&self, f: &mut $crate::_export::_core::fmt::Formatter) -> $crate::_export::_core::fmt::Result {
                $crate::hex::fmt_hex_exact!(f, $bytes, self.0.iter(), $crate::hex::Case::Upper)
            }
        }

        impl $crate::_export::_core::fmt::Display for $ty {
            #[inline]
            fn fmt(&self, f: &mut $crate::_export::_core::fmt::Formatter) -> $crate::_export::_core::fmt::Result {
                $crate::_export::_core::fmt::LowerHex::fmt(self, f)
            }
        }

        impl $crate::_export::_core::fmt::Debug for $ty {
            #[inline]
            fn fmt(&self, f: &mut $crate::_export::_core::fmt::Formatter) -> $crate::_export::_core::fmt::Result {
                write!(f, "{:#}", self)
            }
        }
    }
}
pub(crate) use arr_newtype_fmt_impl;

/// Adds trait impls to the type called `Hash` in the current scope.
///
/// Implements hex parsing and formatting, serde support and the slice conversion traits.
///
/// Arguments:
///
/// * `$bits` - number of bits this hash type has
macro_rules! hash_trait_impls {
    ($bits:expr) => {
        impl $crate::_export::_core::str::FromStr for Hash {
            type Err = $crate::hex::HexToArrayError;
            fn from_str(s: &str) -> $crate::_export::_core::result::Result<Self, Self::Err> {
                use $crate::hex::FromHex;

                let bytes = <[u8; $bits / 8]>::from_hex(s)?;
                Ok(Self::from_byte_array(bytes))
            }
        }

        $crate::internal_macros::arr_newtype_fmt_impl!(Hash, $bits / 8);
        $crate::serde_impl!(Hash, $bits / 8);
        $crate::internal_macros::as_ref_impl!(Hash);

        impl $crate::_export::_core::convert::AsRef<[u8; $bits / 8]> for Hash {
            fn as_ref(&self) -> &[u8; $bits / 8] { &self.0 }
        }

        impl<I: $crate::_export::_core::slice::SliceIndex<[u8]>> $crate::_export::_core::ops::Index<I> for Hash {
            type Output = I::Output;

            #[inline]
            fn index(&self, index: I) -> &Self::Output { &self.0[index] }
        }
    };
}
pub(crate) use hash_trait_impls;

/// Creates a type called `Hash` and implements standard interface for it.
///
/// The created type has a single field, the digest bytes, and wraps the `HashEngine` type
/// found in the calling module (which must implement `crate::HashEngine<{ $bits / 8 }>` and
/// have a `const fn new()`).
///
/// Arguments:
///
/// * `$bits` - the number of bits of the hash type
/// * `$doc` - doc string to put on the type
macro_rules! hash_type {
    ($bits:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct Hash([u8; $bits / 8]);

        impl Hash {
            /// Length of the hash, in bytes.
            pub const LEN: usize = $bits / 8;

            /// Creates a default hash engine, adds `bytes` to it, then finalizes the engine.
            ///
            /// # Returns
            ///
            /// The digest created by hashing `bytes` with engine's hashing algorithm.
            #[allow(clippy::self_named_constructors)] // `hash` is a verb but `Hash` is a noun.
            pub fn hash(bytes: &[u8]) -> Self {
                let mut engine = Self::engine();
                engine.input(bytes);
                Self(engine.finalize())
            }

            /// Returns a hash engine that is ready to be used for data.
            pub fn engine() -> HashEngine { HashEngine::new() }

            /// Creates a `Hash` from an `engine`.
            ///
            /// This is equivalent to calling `Hash::from_byte_array(engine.finalize())`.
            pub fn from_engine(mut engine: HashEngine) -> Self {
                let digest = engine.finalize();
                Self(digest)
            }

            /// Copies a byte slice into a hash object.
            pub fn from_slice(sl: &[u8]) -> Result<Self, crate::FromSliceError> {
                if sl.len() != $bits / 8 {
                    Err(crate::FromSliceError { expected: $bits / 8, got: sl.len() })
                } else {
                    let mut ret = [0; $bits / 8];
                    ret.copy_from_slice(sl);
                    Ok(Self::from_byte_array(ret))
                }
            }

            /// Constructs a hash from the underlying byte array.
            pub fn from_byte_array(bytes: [u8; $bits / 8]) -> Self { Self(bytes) }

            /// Returns the underlying byte array.
            pub fn to_byte_array(self) -> [u8; $bits / 8] { self.0 }

            /// Returns a reference to the underlying byte array.
            pub fn as_byte_array(&self) -> &[u8; $bits / 8] { &self.0 }

            /// Returns an all zero hash.
            ///
            /// No known input hashes to this value; it is handy as a placeholder.
            pub fn all_zeros() -> Self { Self([0x00; $bits / 8]) }
        }

        #[cfg(feature = "schemars")]
        impl schemars::JsonSchema for Hash {
            fn schema_name() -> String { "Hash".to_owned() }

            fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
                let len = $bits / 8;
                let mut schema: schemars::schema::SchemaObject = <String>::json_schema(gen).into();
                schema.string = Some(Box::new(schemars::schema::StringValidation {
                    max_length: Some(len * 2),
                    min_length: Some(len * 2),
                    pattern: Some("[0-9a-fA-F]+".to_owned()),
                }));
                schema.into()
            }
        }

        crate::internal_macros::hash_trait_impls!($bits);
    };
}
pub(crate) use hash_type;
