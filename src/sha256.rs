// SPDX-License-Identifier: CC0-1.0

//! SHA256 implementation.
//!
//! The compression function here also drives SHA224, which only differs in its initial
//! chaining value and in truncating the output to 28 bytes, see [`Engine`].

use core::fmt;

use zeroize::Zeroize;

use crate::{util, HashEngine as _};

crate::internal_macros::hash_type! {
    256,
    "Output of the SHA256 hash function."
}

/// Engine to compute SHA256 hash function.
pub type HashEngine = Engine<32>;

const BLOCK_SIZE: usize = 64;

pub(crate) const SHA256_INIT: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

pub(crate) const SHA224_INIT: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

#[rustfmt::skip]
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[inline(always)]
fn big_sigma0(x: u32) -> u32 { x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22) }
#[inline(always)]
fn big_sigma1(x: u32) -> u32 { x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25) }
#[inline(always)]
fn small_sigma0(x: u32) -> u32 { x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3) }
#[inline(always)]
fn small_sigma1(x: u32) -> u32 { x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10) }

#[derive(Clone)]
struct State {
    h: [u32; 8],
    w: [u32; 64],
}

impl State {
    fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);

        let w = &mut self.w;
        util::u32s_from_be_bytes(&mut w[..16], block);
        for i in 16..64 {
            w[i] = small_sigma1(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(small_sigma0(w[i - 15]))
                .wrapping_add(w[i - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.h;
        for (k, wi) in K.iter().zip(w.iter()) {
            let ch = (e & f) ^ (!e & g);
            let maj = (a & b) ^ (a & c) ^ (b & c);
            let t1 =
                h.wrapping_add(big_sigma1(e)).wrapping_add(ch).wrapping_add(*k).wrapping_add(*wi);
            let t2 = big_sigma0(a).wrapping_add(maj);
            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (s, v) in self.h.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *s = s.wrapping_add(v);
        }
        self.w.zeroize();
    }
}

/// Engine running the SHA256 compression function, producing an `N` byte digest.
///
/// `Engine<32>` is SHA256 and `Engine<28>` is SHA224; the two share everything but the
/// initial chaining value (carried by the engine so that [`crate::HashEngine::reset`] can
/// restore it) and the number of output bytes.
#[derive(Clone)]
pub struct Engine<const N: usize> {
    iv: [u32; 8],
    state: State,
    buffer: [u8; BLOCK_SIZE],
    bytes_hashed: u64,
}

impl<const N: usize> Engine<N> {
    const fn with_iv(iv: [u32; 8]) -> Self {
        Self { iv, state: State { h: iv, w: [0; 64] }, buffer: [0; BLOCK_SIZE], bytes_hashed: 0 }
    }
}

impl Engine<32> {
    /// Constructs a new SHA256 hash engine.
    pub const fn new() -> Self { Self::with_iv(SHA256_INIT) }
}

impl Engine<28> {
    /// Constructs a new SHA224 hash engine.
    pub const fn new() -> Self { Self::with_iv(SHA224_INIT) }
}

impl Default for Engine<32> {
    fn default() -> Self { Self::new() }
}

impl Default for Engine<28> {
    fn default() -> Self { Self::new() }
}

impl<const N: usize> fmt::Debug for Engine<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("sha256::Engine")
            .field("digest_len", &N)
            .field("bytes_hashed", &self.bytes_hashed)
            .finish()
    }
}

impl<const N: usize> Drop for Engine<N> {
    fn drop(&mut self) {
        self.state.h.zeroize();
        self.state.w.zeroize();
        self.buffer.zeroize();
    }
}

impl<const N: usize> crate::HashEngine<N> for Engine<N>
where
    Engine<N>: Default,
{
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn reset(&mut self) {
        self.state.h = self.iv;
        self.buffer.zeroize();
        self.bytes_hashed = 0;
    }

    crate::internal_macros::engine_input_impl!();

    fn finalize(&mut self) -> [u8; N] {
        let bit_len = self.bytes_hashed.wrapping_mul(8).to_be_bytes();
        let state = &mut self.state;
        util::pad_and_compress(&mut self.buffer, self.bytes_hashed, &bit_len, |block| {
            state.compress(block)
        });

        let mut ret = [0; N];
        util::u32s_to_be_bytes(&mut ret, &self.state.h);
        self.reset();
        ret
    }
}


#[cfg(bench)]
mod benches {
    use test::Bencher;

    use crate::{sha256, HashEngine};

    #[bench]
    pub fn sha256_10(bh: &mut Bencher) {
        let mut engine = sha256::Hash::engine();
        let bytes = [1u8; 10];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn sha256_1k(bh: &mut Bencher) {
        let mut engine = sha256::Hash::engine();
        let bytes = [1u8; 1024];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn sha256_64k(bh: &mut Bencher) {
        let mut engine = sha256::Hash::engine();
        let bytes = [1u8; 65536];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }
}
