// SPDX-License-Identifier: CC0-1.0

//! Hash-based Message Authentication Code (HMAC).
//!
//! [`HmacEngine`] is generic over every engine in this crate and follows RFC 2104: keys longer
//! than the engine's block size are hashed down first, the inner pad primes the engine, and the
//! outer pad is hashed together with the inner digest on [`HmacEngine::finalize`]. The tag may
//! be truncated to any whole number of bytes up to the natural digest size.

use core::{borrow, fmt};

use hex::DisplayHex;
use zeroize::Zeroize;

use crate::HashEngine;

/// Largest block size supported by [`HmacEngine`], in bytes.
const MAX_BLOCK_SIZE: usize = 128;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// An HMAC tag, possibly truncated.
///
/// Holds up to `N` bytes; only the first [`Hmac::len`] are part of the tag and the rest are
/// always zero.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hmac<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> Hmac<N> {
    /// Returns the tag bytes.
    pub fn as_bytes(&self) -> &[u8] { &self.bytes[..self.len] }

    /// Returns the length of the tag, in bytes.
    pub fn len(&self) -> usize { self.len }

    /// Returns true if the tag holds no bytes.
    ///
    /// Always false for tags produced by [`HmacEngine`].
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the full backing array, zero filled past [`Hmac::len`].
    pub fn to_byte_array(self) -> [u8; N] { self.bytes }
}

impl<const N: usize> AsRef<[u8]> for Hmac<N> {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

impl<const N: usize> borrow::Borrow<[u8]> for Hmac<N> {
    fn borrow(&self) -> &[u8] { self.as_bytes() }
}

impl<const N: usize> fmt::LowerHex for Hmac<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.as_bytes().as_hex(), f)
    }
}

impl<const N: usize> fmt::UpperHex for Hmac<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.as_bytes().as_hex(), f)
    }
}

impl<const N: usize> fmt::Display for Hmac<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

impl<const N: usize> fmt::Debug for Hmac<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

/// Requested HMAC output size cannot be produced by the underlying engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSizeError {
    requested_bits: usize,
    max_bits: usize,
}

impl OutputSizeError {
    /// Returns the output size that was asked for, in bits.
    pub fn requested_bits(&self) -> usize { self.requested_bits }

    /// Returns the natural digest size of the engine, in bits.
    pub fn max_bits(&self) -> usize { self.max_bits }
}

impl fmt::Display for OutputSizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid HMAC output size {} bits (must be a non-zero multiple of 8 no larger than {})",
            self.requested_bits, self.max_bits
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutputSizeError {}

/// Keyed HMAC engine wrapping a single hash engine `E` with an `N` byte digest.
#[derive(Clone)]
pub struct HmacEngine<E: HashEngine<N>, const N: usize> {
    engine: E,
    ipad: [u8; MAX_BLOCK_SIZE],
    opad: [u8; MAX_BLOCK_SIZE],
    key: [u8; MAX_BLOCK_SIZE],
    key_len: usize,
    output_bits: usize,
}

impl<E: HashEngine<N>, const N: usize> HmacEngine<E, N> {
    /// Constructs a new keyed HMAC from `key`, producing full length tags.
    ///
    /// We only support underlying hashes whose block sizes are ≤ 128 bytes, which covers
    /// every engine in this crate.
    pub fn new(key: &[u8]) -> Self {
        debug_assert!(E::BLOCK_SIZE <= MAX_BLOCK_SIZE);

        let mut ret = HmacEngine {
            engine: E::default(),
            ipad: [0; MAX_BLOCK_SIZE],
            opad: [0; MAX_BLOCK_SIZE],
            key: [0; MAX_BLOCK_SIZE],
            key_len: 0,
            output_bits: E::digest_bits(),
        };
        ret.set_key(key);
        ret
    }

    /// Constructs a new keyed HMAC from `key` whose tags are truncated to `output_bits`.
    ///
    /// # Errors
    ///
    /// If `output_bits` is zero, not a multiple of 8, or larger than the digest size of `E`.
    pub fn with_output_bits(key: &[u8], output_bits: usize) -> Result<Self, OutputSizeError> {
        let max_bits = E::digest_bits();
        if output_bits == 0 || output_bits % 8 != 0 || output_bits > max_bits {
            return Err(OutputSizeError { requested_bits: output_bits, max_bits });
        }
        let mut ret = Self::new(key);
        ret.output_bits = output_bits;
        Ok(ret)
    }

    /// Replaces the key.
    ///
    /// Any data input since the last [`HmacEngine::finalize`] is discarded: the engine is reset,
    /// both pads are derived from `key` again, and the engine is primed with the new inner pad.
    pub fn set_key(&mut self, key: &[u8]) {
        let block_size = E::BLOCK_SIZE;

        self.key.zeroize();
        if key.len() > block_size {
            let digest = E::hash(key);
            self.key[..N].copy_from_slice(&digest);
            self.key_len = N;
        } else {
            self.key[..key.len()].copy_from_slice(key);
            self.key_len = key.len();
        }

        for ((i, o), k) in self.ipad.iter_mut().zip(self.opad.iter_mut()).zip(&self.key) {
            *i = k ^ IPAD;
            *o = k ^ OPAD;
        }

        self.engine.reset();
        self.engine.input(&self.ipad[..block_size]);
    }

    /// Returns the key in use, hashed down to the digest size if it was longer than a block.
    pub fn key(&self) -> &[u8] { &self.key[..self.key_len] }

    /// Adds message data.
    #[inline]
    pub fn input(&mut self, data: &[u8]) { self.engine.input(data) }

    /// Returns the number of message bytes input since the last finalize or re-key.
    pub fn n_bytes_hashed(&self) -> u64 { self.engine.n_bytes_hashed() - E::BLOCK_SIZE as u64 }

    /// Returns the configured tag size, in bits.
    pub fn output_bits(&self) -> usize { self.output_bits }

    /// Returns the block size of the underlying engine, in bytes.
    pub fn block_size(&self) -> usize { E::BLOCK_SIZE }

    /// Produces the tag and leaves the engine ready for a new message under the same key.
    pub fn finalize(&mut self) -> Hmac<N> {
        let mut inner = self.engine.finalize();
        self.engine.input(&self.opad[..E::BLOCK_SIZE]);
        self.engine.input(&inner);
        inner.zeroize();
        let outer = self.engine.finalize();
        self.engine.input(&self.ipad[..E::BLOCK_SIZE]);

        let len = self.output_bits / 8;
        let mut bytes = [0; N];
        bytes[..len].copy_from_slice(&outer[..len]);
        Hmac { bytes, len }
    }

    /// Computes the tag of `data` in one go.
    ///
    /// Data input earlier and not yet finalized is included in the tag.
    pub fn compute(&mut self, data: &[u8]) -> Hmac<N> {
        self.input(data);
        self.finalize()
    }
}

impl<E: HashEngine<N>, const N: usize> fmt::Debug for HmacEngine<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HmacEngine")
            .field("block_size", &E::BLOCK_SIZE)
            .field("output_bits", &self.output_bits)
            .field("bytes_hashed", &self.n_bytes_hashed())
            .finish()
    }
}

impl<E: HashEngine<N>, const N: usize> Drop for HmacEngine<E, N> {
    fn drop(&mut self) {
        self.key.zeroize();
        self.ipad.zeroize();
        self.opad.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{md5, ripemd160, sha1, sha256, sha384, sha512};

    #[cfg(feature = "alloc")]
    fn check<E: HashEngine<N>, const N: usize>(key: &[u8], data: &[u8], expected: &str) {
        let mut engine = HmacEngine::<E, N>::new(key);
        engine.input(data);
        assert_eq!(engine.finalize().to_string(), expected);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn test() {
        #[derive(Clone)]
        struct Test {
            key: Vec<u8>,
            input: Vec<u8>,
            output: Vec<u8>,
        }

        #[rustfmt::skip]
        let tests = vec![
            // Test vectors copied from libsecp256k1
            Test {
                key: vec![ 0x0b; 20],
                input: vec![0x48, 0x69, 0x20, 0x54, 0x68, 0x65, 0x72, 0x65],
                output: vec![
                    0xb0, 0x34, 0x4c, 0x61, 0xd8, 0xdb, 0x38, 0x53,
                    0x5c, 0xa8, 0xaf, 0xce, 0xaf, 0x0b, 0xf1, 0x2b,
                    0x88, 0x1d, 0xc2, 0x00, 0xc9, 0x83, 0x3d, 0xa7,
                    0x26, 0xe9, 0x37, 0x6c, 0x2e, 0x32, 0xcf, 0xf7,
                ],
            },
            Test {
                key: vec![ 0x4a, 0x65, 0x66, 0x65 ],
                input: vec![
                    0x77, 0x68, 0x61, 0x74, 0x20, 0x64, 0x6f, 0x20,
                    0x79, 0x61, 0x20, 0x77, 0x61, 0x6e, 0x74, 0x20,
                    0x66, 0x6f, 0x72, 0x20, 0x6e, 0x6f, 0x74, 0x68,
                    0x69, 0x6e, 0x67, 0x3f,
                ],
                output: vec![
                    0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e,
                    0x6a, 0x04, 0x24, 0x26, 0x08, 0x95, 0x75, 0xc7,
                    0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83,
                    0x9d, 0xec, 0x58, 0xb9, 0x64, 0xec, 0x38, 0x43,
                ],
            },
            Test {
                key: vec![ 0xaa; 20 ],
                input: vec![ 0xdd; 50 ],
                output: vec![
                    0x77, 0x3e, 0xa9, 0x1e, 0x36, 0x80, 0x0e, 0x46,
                    0x85, 0x4d, 0xb8, 0xeb, 0xd0, 0x91, 0x81, 0xa7,
                    0x29, 0x59, 0x09, 0x8b, 0x3e, 0xf8, 0xc1, 0x22,
                    0xd9, 0x63, 0x55, 0x14, 0xce, 0xd5, 0x65, 0xfe,
                ],
            },
            Test {
                key: vec![
                    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
                    0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10,
                    0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18,
                    0x19
                ],
                input: vec![ 0xcd; 50 ],
                output: vec![
                    0x82, 0x55, 0x8a, 0x38, 0x9a, 0x44, 0x3c, 0x0e,
                    0xa4, 0xcc, 0x81, 0x98, 0x99, 0xf2, 0x08, 0x3a,
                    0x85, 0xf0, 0xfa, 0xa3, 0xe5, 0x78, 0xf8, 0x07,
                    0x7a, 0x2e, 0x3f, 0xf4, 0x67, 0x29, 0x66, 0x5b,
                ],
            },
            Test {
                key: vec! [ 0xaa; 131 ],
                input: b"Test Using Larger Than Block-Size Key - Hash Key First".to_vec(),
                output: vec![
                    0x60, 0xe4, 0x31, 0x59, 0x1e, 0xe0, 0xb6, 0x7f,
                    0x0d, 0x8a, 0x26, 0xaa, 0xcb, 0xf5, 0xb7, 0x7f,
                    0x8e, 0x0b, 0xc6, 0x21, 0x37, 0x28, 0xc5, 0x14,
                    0x05, 0x46, 0x04, 0x0f, 0x0e, 0xe3, 0x7f, 0x54,
                ],
            },
            Test {
                key: vec! [ 0xaa; 131 ],
                input: b"This is a test using a larger than block-size key and a larger than \
                         block-size data. The key needs to be hashed before being used by the \
                         HMAC algorithm."
                    .to_vec(),
                output: vec![
                    0x9b, 0x09, 0xff, 0xa7, 0x1b, 0x94, 0x2f, 0xcb,
                    0x27, 0x63, 0x5f, 0xbc, 0xd5, 0xb0, 0xe9, 0x44,
                    0xbf, 0xdc, 0x63, 0x64, 0x4f, 0x07, 0x13, 0x93,
                    0x8a, 0x7f, 0x51, 0x53, 0x5c, 0x3a, 0x35, 0xe2,
                ],
            },
        ];

        for test in tests {
            let mut engine = HmacEngine::<sha256::HashEngine, 32>::new(&test.key);
            engine.input(&test.input);
            let hash = engine.finalize();
            assert_eq!(hash.as_bytes(), &test.output[..]);
            assert_eq!(hash.len(), 32);
        }
    }

    // RFC 2202 section 2.
    #[test]
    #[cfg(feature = "alloc")]
    fn hmac_md5() {
        type E = md5::HashEngine;

        check::<E, 16>(&[0x0b; 16], b"Hi There", "9294727a3638bb1c13f48ef8158bfc9d");
        check::<E, 16>(b"Jefe", b"what do ya want for nothing?", "750c783e6ab0b503eaa86e310a5db738");
        check::<E, 16>(&[0xaa; 16], &[0xdd; 50], "56be34521d144c88dbb8c733f0e8b3f6");
        let key: Vec<u8> = (0x01..=0x19).collect();
        check::<E, 16>(&key, &[0xcd; 50], "697eaf0aca3a3aea3a75164746ffaa79");
        check::<E, 16>(&[0x0c; 16], b"Test With Truncation", "56461ef2342edc00f9bab995690efd4c");
        check::<E, 16>(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key - Hash Key First",
            "6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd",
        );
        check::<E, 16>(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data",
            "6f630fad67cda0ee1fb1f562db3aa53e",
        );
    }

    // RFC 2202 section 3.
    #[test]
    #[cfg(feature = "alloc")]
    fn hmac_sha1() {
        type E = sha1::HashEngine;

        check::<E, 20>(&[0x0b; 20], b"Hi There", "b617318655057264e28bc0b6fb378c8ef146be00");
        check::<E, 20>(
            b"Jefe",
            b"what do ya want for nothing?",
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
        );
        check::<E, 20>(&[0xaa; 20], &[0xdd; 50], "125d7342b9ac11cd91a39af48aa17b4f63f175d3");
        let key: Vec<u8> = (0x01..=0x19).collect();
        check::<E, 20>(&key, &[0xcd; 50], "4c9007f4026250c6bc8414f9bf50c86c2d7235da");
        check::<E, 20>(
            &[0x0c; 20],
            b"Test With Truncation",
            "4c1a03424b55e07fe7f27be1d58bb9324a9a5a04",
        );
        check::<E, 20>(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key - Hash Key First",
            "aa4ae5e15272d00e95705637ce8a3b55ed402112",
        );
        check::<E, 20>(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data",
            "e8e99d0f45237d786d6bbaa7965c7808bbff1a91",
        );
    }

    // RFC 4231.
    #[test]
    #[cfg(feature = "alloc")]
    fn hmac_sha384_and_sha512() {
        check::<sha384::HashEngine, 48>(
            &[0x0b; 20],
            b"Hi There",
            "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59cfaea9ea9076ede7f4af152e8b2fa9cb6",
        );
        check::<sha384::HashEngine, 48>(
            b"Jefe",
            b"what do ya want for nothing?",
            "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649",
        );
        check::<sha384::HashEngine, 48>(
            &[0xaa; 131],
            b"Test Using Larger Than Block-Size Key - Hash Key First",
            "4ece084485813e9088d2c63a041bc5b44f9ef1012a2b588f3cd11f05033ac4c60c2ef6ab4030fe8296248df163f44952",
        );
        check::<sha512::HashEngine, 64>(
            &[0x0b; 20],
            b"Hi There",
            "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cdedaa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
        );
        check::<sha512::HashEngine, 64>(
            b"Jefe",
            b"what do ya want for nothing?",
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
        );
        check::<sha512::HashEngine, 64>(
            &[0xaa; 131],
            b"Test Using Larger Than Block-Size Key - Hash Key First",
            "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f3526b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598",
        );
    }

    // RFC 2286.
    #[test]
    #[cfg(feature = "alloc")]
    fn hmac_ripemd160() {
        type E = ripemd160::HashEngine;

        check::<E, 20>(&[0x0b; 20], b"Hi There", "24cb4bd67d20fc1a5d2ed7732dcc39377f0a5668");
        check::<E, 20>(
            b"Jefe",
            b"what do ya want for nothing?",
            "dda6c0213a485a9e24f4742064a7f033b43c4069",
        );
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn truncated_output() {
        let mut engine =
            HmacEngine::<md5::HashEngine, 16>::with_output_bits(&[0x0c; 16], 96).unwrap();
        assert_eq!(engine.output_bits(), 96);
        let tag = engine.compute(b"Test With Truncation");
        assert_eq!(tag.len(), 12);
        assert_eq!(tag.to_string(), "56461ef2342edc00f9bab995");
        assert_eq!(format!("{:X}", tag), "56461EF2342EDC00F9BAB995");
        assert_eq!(&tag.to_byte_array()[12..], &[0; 4]);

        let mut engine =
            HmacEngine::<sha1::HashEngine, 20>::with_output_bits(&[0x0c; 20], 96).unwrap();
        assert_eq!(engine.compute(b"Test With Truncation").to_string(), "4c1a03424b55e07fe7f27be1");

        let mut engine =
            HmacEngine::<sha384::HashEngine, 48>::with_output_bits(&[0x0c; 20], 128).unwrap();
        assert_eq!(
            engine.compute(b"Test With Truncation").to_string(),
            "3abf34c3503b2a23a46efc619baef897"
        );

        let mut engine =
            HmacEngine::<sha512::HashEngine, 64>::with_output_bits(&[0x0c; 20], 128).unwrap();
        assert_eq!(
            engine.compute(b"Test With Truncation").to_string(),
            "415fad6271580a531d4179bc891d87a6"
        );
    }

    #[test]
    fn invalid_output_sizes() {
        type E = sha256::HashEngine;

        for bits in [0, 7, 100, 264, 512].iter() {
            let err = HmacEngine::<E, 32>::with_output_bits(b"key", *bits).unwrap_err();
            assert_eq!(err.requested_bits(), *bits);
            assert_eq!(err.max_bits(), 256);
        }
        assert!(HmacEngine::<E, 32>::with_output_bits(b"key", 256).is_ok());
        assert!(HmacEngine::<E, 32>::with_output_bits(b"key", 8).is_ok());
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn output_size_error_display() {
        let err = HmacEngine::<md5::HashEngine, 16>::with_output_bits(b"key", 136).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid HMAC output size 136 bits (must be a non-zero multiple of 8 no larger than 128)"
        );
    }

    // The next three mirror how a caller re-keys a long lived instance.
    #[test]
    #[cfg(feature = "alloc")]
    fn compute_reinitializes() {
        let mut hmac = HmacEngine::<md5::HashEngine, 16>::new(&[0xaa; 80]);
        let tag = hmac.compute(
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data",
        );
        assert_eq!(tag.to_string(), "6f630fad67cda0ee1fb1f562db3aa53e");
        assert_eq!(hmac.n_bytes_hashed(), 0);

        let tag = hmac.compute(b"Test Using Larger Than Block-Size Key - Hash Key First");
        assert_eq!(tag.to_string(), "6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd");
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn set_key_before_compute() {
        let mut hmac = HmacEngine::<md5::HashEngine, 16>::new(&[0x01; 80]);
        hmac.set_key(&[0xaa; 80]);
        let tag = hmac.compute(
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data",
        );
        assert_eq!(tag.to_string(), "6f630fad67cda0ee1fb1f562db3aa53e");
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn set_key_after_compute() {
        let mut hmac = HmacEngine::<md5::HashEngine, 16>::new(&[0xaa; 80]);
        let tag = hmac.compute(
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data",
        );
        assert_eq!(tag.to_string(), "6f630fad67cda0ee1fb1f562db3aa53e");

        // Shorter than a block.
        hmac.set_key(b"Jefe");
        let tag = hmac.compute(b"what do ya want for nothing?");
        assert_eq!(tag.to_string(), "750c783e6ab0b503eaa86e310a5db738");

        // Longer than a block.
        hmac.set_key(&[0xaa; 80]);
        let tag = hmac.compute(
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data",
        );
        assert_eq!(tag.to_string(), "6f630fad67cda0ee1fb1f562db3aa53e");
    }

    #[test]
    fn set_key_discards_pending_input() {
        let mut hmac = HmacEngine::<sha256::HashEngine, 32>::new(b"old");
        hmac.input(b"half a message");
        assert_eq!(hmac.n_bytes_hashed(), 14);
        hmac.set_key(b"new");
        assert_eq!(hmac.n_bytes_hashed(), 0);

        let mut fresh = HmacEngine::<sha256::HashEngine, 32>::new(b"new");
        assert_eq!(hmac.compute(b"msg"), fresh.compute(b"msg"));
    }

    #[test]
    fn key_is_hashed_only_when_longer_than_a_block() {
        let block = [0x42; 64];
        let hmac = HmacEngine::<sha1::HashEngine, 20>::new(&block);
        assert_eq!(hmac.key(), &block[..]);

        let long = [0x42; 65];
        let mut hmac = HmacEngine::<sha1::HashEngine, 20>::new(&long);
        let digest = sha1::HashEngine::hash(&long);
        assert_eq!(hmac.key(), &digest[..]);

        let mut hashed = HmacEngine::<sha1::HashEngine, 20>::new(&digest);
        assert_eq!(hmac.compute(b"data"), hashed.compute(b"data"));
    }

    #[test]
    fn reported_sizes() {
        let hmac = HmacEngine::<sha384::HashEngine, 48>::new(b"key");
        assert_eq!(hmac.block_size(), 128);
        assert_eq!(hmac.output_bits(), 384);

        let hmac = HmacEngine::<ripemd160::HashEngine, 20>::new(b"key");
        assert_eq!(hmac.block_size(), 64);
        assert_eq!(hmac.output_bits(), 160);
    }
}

#[cfg(bench)]
mod benches {
    use test::Bencher;

    use crate::{sha256, HmacEngine};

    #[bench]
    pub fn hmac_sha256_10(bh: &mut Bencher) {
        let mut engine = HmacEngine::<sha256::HashEngine, 32>::new(b"key");
        let bytes = [1u8; 10];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn hmac_sha256_1k(bh: &mut Bencher) {
        let mut engine = HmacEngine::<sha256::HashEngine, 32>::new(b"key");
        let bytes = [1u8; 1024];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn hmac_sha256_64k(bh: &mut Bencher) {
        let mut engine = HmacEngine::<sha256::HashEngine, 32>::new(b"key");
        let bytes = [1u8; 65536];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }
}
