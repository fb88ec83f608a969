// SPDX-License-Identifier: CC0-1.0

//! SHA1 implementation.

use core::fmt;

use zeroize::Zeroize;

use crate::{util, HashEngine as _};

crate::internal_macros::hash_type! {
    160,
    "Output of the SHA1 hash function."
}

const BLOCK_SIZE: usize = 64;

const INIT: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

#[derive(Clone)]
struct State {
    h: [u32; 5],
    // Message schedule, cleared after every block.
    w: [u32; 80],
}

impl State {
    fn compress(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);

        let w = &mut self.w;
        util::u32s_from_be_bytes(&mut w[..16], block);
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.h;
        for (i, wi) in w.iter().enumerate() {
            let (f, k) = match i / 20 {
                0 => ((b & c) | (!b & d), 0x5a827999),
                1 => (b ^ c ^ d, 0x6ed9eba1),
                2 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
                _ => (b ^ c ^ d, 0xca62c1d6),
            };
            let t = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(*wi);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = t;
        }

        self.h[0] = self.h[0].wrapping_add(a);
        self.h[1] = self.h[1].wrapping_add(b);
        self.h[2] = self.h[2].wrapping_add(c);
        self.h[3] = self.h[3].wrapping_add(d);
        self.h[4] = self.h[4].wrapping_add(e);

        self.w.zeroize();
    }
}

/// Engine to compute SHA1 hash function.
#[derive(Clone)]
pub struct HashEngine {
    state: State,
    buffer: [u8; BLOCK_SIZE],
    bytes_hashed: u64,
}

impl HashEngine {
    /// Constructs a new SHA1 hash engine.
    pub const fn new() -> Self {
        Self { state: State { h: INIT, w: [0; 80] }, buffer: [0; BLOCK_SIZE], bytes_hashed: 0 }
    }
}

impl Default for HashEngine {
    fn default() -> Self { Self::new() }
}

impl fmt::Debug for HashEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("sha1::HashEngine").field("bytes_hashed", &self.bytes_hashed).finish()
    }
}

impl Drop for HashEngine {
    fn drop(&mut self) {
        self.state.h.zeroize();
        self.state.w.zeroize();
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
        let bit_len = self.bytes_hashed.wrapping_mul(8).to_be_bytes();
        let state = &mut self.state;
        util::pad_and_compress(&mut self.buffer, self.bytes_hashed, &bit_len, |block| {
            state.compress(block)
        });

        let mut ret = [0; 20];
        util::u32s_to_be_bytes(&mut ret, &self.state.h);
        self.reset();
        ret
    }
}


#[cfg(bench)]
mod benches {
    use test::Bencher;

    use crate::{sha1, HashEngine};

    #[bench]
    pub fn sha1_10(bh: &mut Bencher) {
        let mut engine = sha1::Hash::engine();
        let bytes = [1u8; 10];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn sha1_1k(bh: &mut Bencher) {
        let mut engine = sha1::Hash::engine();
        let bytes = [1u8; 1024];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }

    #[bench]
    pub fn sha1_64k(bh: &mut Bencher) {
        let mut engine = sha1::Hash::engine();
        let bytes = [1u8; 65536];
        bh.iter(|| {
            engine.input(&bytes);
        });
        bh.bytes = bytes.len() as u64;
    }
}
