// SPDX-License-Identifier: CC0-1.0

//! RIPEMD160 implementation.

use core::fmt;

use zeroize::Zeroize;

use crate::{util, HashEngine as _};

crate::internal_macros::hash_type! {
    160,
    "Output of the RIPEMD160 hash function."
}

const BLOCK_SIZE: usize = 64;

const INIT: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Message word selection, left line.
#[rustfmt::skip]
const R_LEFT: [usize; 80] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
    3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
    1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
    4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];

/// Message word selection, right line.
#[rustfmt::skip]
const R_RIGHT: [usize; 80] = [
    5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
    6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
    15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
    8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
    12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

/// Left rotation amounts, left line.
#[rustfmt::skip]
const S_LEFT: [u32; 80] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
    7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
    11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
    11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
    9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];

/// Left rotation amounts, right line.
#[rustfmt::skip]
const S_RIGHT: [u32; 80] = [
    8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
    9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
    9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
    15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
    8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

const K_LEFT: [u32; 5] = [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e];
const K_RIGHT: [u32; 5] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000];

/// The five boolean functions; the right line walks them in reverse.
#[inline(always)]
fn f(round: usize, x: u32, y: u32, z: u32) -> u32 {
    match round {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        3 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

#[derive(Clone)]
struct State {
    h: [u32; 5],
}

impl State {
    fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);

        let mut x = [0u32; 16];
        util::u32s_from_le_bytes(&mut x, block);

        let [mut al, mut bl, mut cl, mut dl, mut el] = self.h;
        let [mut ar, mut br, mut cr, mut dr, mut er] = self.h;

        for j in 0..80 {
            let round = j / 16;

            let t = al
                .wrapping_add(f(round, bl, cl, dl))
                .wrapping_add(x[R_LEFT[j]])
                .wrapping_add(K_LEFT[round])
                .rotate_left(S_LEFT[j])
                .wrapping_add(el);
            al = el;
            el = dl;
            dl = cl.rotate_left(10);
            cl = bl;
            bl = t;

            let t = ar
                .wrapping_add(f(4 - round, br, cr, dr))
                .wrapping_add(x[R_RIGHT[j]])
                .wrapping_add(K_RIGHT[round])
                .rotate_left(S_RIGHT[j])
                .wrapping_add(er);
            ar = er;
            er = dr;
            dr = cr.rotate_left(10);
            cr = br;
            br = t;
        }

        let h = &mut self.h;
        let t = h[1].wrapping_add(cl).wrapping_add(dr);
        h[1] = h[2].wrapping_add(dl).wrapping_add(er);
        h[2] = h[3].wrapping_add(el).wrapping_add(ar);
        h[3] = h[4].wrapping_add(al).wrapping_add(br);
        h[4] = h[0].wrapping_add(bl).wrapping_add(cr);
        h[0] = t;

        x.zeroize();
    }
}

/// Engine to compute RIPEMD160 hash function.
#[derive(Clone)]
pub struct HashEngine {
    state: State,
    buffer: [u8; BLOCK_SIZE],
    bytes_hashed: u64,
}

impl HashEngine {
    /// Constructs a new RIPEMD160 hash engine.
    pub const fn new() -> Self {
        Self { state: State { h: INIT }, buffer: [0; BLOCK_SIZE], bytes_hashed: 0 }
    }
}

impl Default for HashEngine {
    fn default() -> Self { Self::new() }
}

impl fmt::Debug for HashEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ripemd160::HashEngine").field("bytes_hashed", &self.bytes_hashed).finish()
    }
}

impl Drop for HashEngine {
    fn drop(&mut self) {
        self.state.h.zeroize();
        self.buffer.zeroize();
    }
}

impl crate::HashEngine<20> for HashEngine {
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn reset(&mut self) {
        self.state.h = INIT;
        self.buffer.zeroize();
        self.bytes_hashed = 0;
    }

    crate::internal_macros::engine_input_impl!();

    fn finalize(&mut self) -> [u8; 20] {
        let bit_len = self.bytes_hashed.wrapping_mul(8).to_le_bytes();
        let state = &mut self.state;
        util::pad_and_compress(&mut self.buffer, self.bytes_hashed, &bit_len, |block| {
            state.compress(block)
        });

        let mut ret = [0; 20];
        util::u32s_to_le_bytes(&mut ret, &self.state.h);
        self.reset();
        ret
    }
}


#[cfg(bench)]
mod benches {
    use test::Bencher;

    use crate::{ripemd160, HashEngine};

    #[bench]
    pub fn ripemd160_10(bh: &mut Bencher) {
        let mut engine = ripemd160::Hash::engine();
        let bytes = [1u8; 10];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn ripemd160_1k(bh: &mut Bencher) {
        let mut engine = ripemd160::Hash::engine();
        let bytes = [1u8; 1024];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn ripemd160_64k(bh: &mut Bencher) {
        let mut engine = ripemd160::Hash::engine();
        let bytes = [1u8; 65536];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }
}
