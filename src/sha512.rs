// SPDX-License-Identifier: CC0-1.0

//! SHA512 implementation.
//!
//! The compression function here also drives SHA384, see [`Engine`].

use core::fmt;

use zeroize::Zeroize;

use crate::{util, HashEngine as _};

crate::internal_macros::hash_type! {
    512,
    "Output of the SHA512 hash function."
}

/// Engine to compute SHA512 hash function.
pub type HashEngine = Engine<64>;

const BLOCK_SIZE: usize = 128;

#[rustfmt::skip]
const SHA512_INIT: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

#[rustfmt::skip]
const SHA384_INIT: [u64; 8] = [
    0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
    0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

#[rustfmt::skip]
const K: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

#[inline(always)]
fn big_sigma0(x: u64) -> u64 { x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39) }
#[inline(always)]
fn big_sigma1(x: u64) -> u64 { x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41) }
#[inline(always)]
fn small_sigma0(x: u64) -> u64 { x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7) }
#[inline(always)]
fn small_sigma1(x: u64) -> u64 { x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6) }

#[derive(Clone)]
struct State {
    h: [u64; 8],
    w: [u64; 80],
}

impl State {
    fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);

        let w = &mut self.w;
        util::u64s_from_be_bytes(&mut w[..16], block);
        for i in 16..80 {
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

/// Engine running the SHA512 compression function, producing an `N` byte digest.
///
/// `Engine<64>` is SHA512 and `Engine<48>` is SHA384.
#[derive(Clone)]
pub struct Engine<const N: usize> {
    iv: [u64; 8],
    state: State,
    buffer: [u8; BLOCK_SIZE],
    bytes_hashed: u64,
}

impl<const N: usize> Engine<N> {
    const fn with_iv(iv: [u64; 8]) -> Self {
        Self { iv, state: State { h: iv, w: [0; 80] }, buffer: [0; BLOCK_SIZE], bytes_hashed: 0 }
    }
}

impl Engine<64> {
    /// Constructs a new SHA512 hash engine.
    pub const fn new() -> Self { Self::with_iv(SHA512_INIT) }
}

impl Engine<48> {
    /// Constructs a new SHA384 hash engine.
    pub const fn new() -> Self { Self::with_iv(SHA384_INIT) }
}

impl Default for Engine<64> {
    fn default() -> Self { Self::new() }
}

impl Default for Engine<48> {
    fn default() -> Self { Self::new() }
}

impl<const N: usize> fmt::Debug for Engine<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("sha512::Engine")
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
        // 128 bit length field; the byte counter cannot overflow it.
        let bit_len = (u128::from(self.bytes_hashed) * 8).to_be_bytes();
        let state = &mut self.state;
        util::pad_and_compress(&mut self.buffer, self.bytes_hashed, &bit_len, |block| {
            state.compress(block)
        });

        let mut ret = [0; N];
        util::u64s_to_be_bytes(&mut ret, &self.state.h);
        self.reset();
        ret
    }
}


#[cfg(bench)]
mod benches {
    use test::Bencher;

    use crate::{sha512, HashEngine};

    #[bench]
    pub fn sha512_10(bh: &mut Bencher) {
        let mut engine = sha512::Hash::engine();
        let bytes = [1u8; 10];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn sha512_1k(bh: &mut Bencher) {
        let mut engine = sha512::Hash::engine();
        let bytes = [1u8; 1024];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn sha512_64k(bh: &mut Bencher) {
        let mut engine = sha512::Hash::engine();
        let bytes = [1u8; 65536];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }
}
