// SPDX-License-Identifier: CC0-1.0

//! MD5 implementation (RFC 1321).
//!
//! MD5 is broken as a collision-resistant hash; it is provided because legacy protocols
//! (HMAC-MD5 in SSH, for one) still need it.

use core::fmt;

use zeroize::Zeroize;

use crate::{util, HashEngine as _};

crate::internal_macros::hash_type! {
    128,
    "Output of the MD5 hash function."
}

const BLOCK_SIZE: usize = 64;

const INIT: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// `K[i] = floor(2^32 * abs(sin(i + 1)))`.
#[rustfmt::skip]
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-step left rotation amounts, four per round.
#[rustfmt::skip]
const S: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

#[derive(Clone)]
struct State {
    h: [u32; 4],
}

impl State {
    fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);

        let mut x = [0u32; 16];
        util::u32s_from_le_bytes(&mut x, block);

        let [mut a, mut b, mut c, mut d] = self.h;
        for i in 0..64 {
            let round = i / 16;
            let (f, g) = match round {
                0 => ((b & c) | (!b & d), i),
                1 => ((b & d) | (c & !d), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };
            let t = a.wrapping_add(f).wrapping_add(K[i]).wrapping_add(x[g]);
            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(t.rotate_left(S[round][i % 4]));
        }

        self.h[0] = self.h[0].wrapping_add(a);
        self.h[1] = self.h[1].wrapping_add(b);
        self.h[2] = self.h[2].wrapping_add(c);
        self.h[3] = self.h[3].wrapping_add(d);
        x.zeroize();
    }
}

/// Engine to compute MD5 hash function.
#[derive(Clone)]
pub struct HashEngine {
    state: State,
    buffer: [u8; BLOCK_SIZE],
    bytes_hashed: u64,
}

impl HashEngine {
    /// Constructs a new MD5 hash engine.
    pub const fn new() -> Self {
        Self { state: State { h: INIT }, buffer: [0; BLOCK_SIZE], bytes_hashed: 0 }
    }
}

impl Default for HashEngine {
    fn default() -> Self { Self::new() }
}

impl fmt::Debug for HashEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("md5::HashEngine").field("bytes_hashed", &self.bytes_hashed).finish()
    }
}

impl Drop for HashEngine {
    fn drop(&mut self) {
        self.state.h.zeroize();
        self.buffer.zeroize();
    }
}

impl crate::HashEngine<16> for HashEngine {
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn reset(&mut self) {
        self.state.h = INIT;
        self.buffer.zeroize();
        self.bytes_hashed = 0;
    }

    crate::internal_macros::engine_input_impl!();

    fn finalize(&mut self) -> [u8; 16] {
        let bit_len = self.bytes_hashed.wrapping_mul(8).to_le_bytes();
        let state = &mut self.state;
        util::pad_and_compress(&mut self.buffer, self.bytes_hashed, &bit_len, |block| {
            state.compress(block)
        });

        let mut ret = [0; 16];
        util::u32s_to_le_bytes(&mut ret, &self.state.h);
        self.reset();
        ret
    }
}


#[cfg(bench)]
mod benches {
    use test::Bencher;

    use crate::{md5, HashEngine};

    #[bench]
    pub fn md5_10(bh: &mut Bencher) {
        let mut engine = md5::Hash::engine();
        let bytes = [1u8; 10];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn md5_1k(bh: &mut Bencher) {
        let mut engine = md5::Hash::engine();
        let bytes = [1u8; 1024];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn md5_64k(bh: &mut Bencher) {
        let mut engine = md5::Hash::engine();
        let bytes = [1u8; 65536];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }
}
