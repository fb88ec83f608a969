// SPDX-License-Identifier: CC0-1.0

//! Word packing helpers and the Merkle–Damgård skeleton shared by every engine.

use core::cmp;

/// Fills `words` with big-endian 32-bit words read from `bytes`.
#[inline]
pub(crate) fn u32s_from_be_bytes(words: &mut [u32], bytes: &[u8]) {
    debug_assert_eq!(words.len() * 4, bytes.len());
    for (w, c) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_be_bytes([c[0], c[1], c[2], c[3]]);
    }
}

/// Fills `words` with little-endian 32-bit words read from `bytes`.
#[inline]
pub(crate) fn u32s_from_le_bytes(words: &mut [u32], bytes: &[u8]) {
    debug_assert_eq!(words.len() * 4, bytes.len());
    for (w, c) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
    }
}

/// Fills `words` with big-endian 64-bit words read from `bytes`.
#[inline]
pub(crate) fn u64s_from_be_bytes(words: &mut [u64], bytes: &[u8]) {
    debug_assert_eq!(words.len() * 8, bytes.len());
    for (w, c) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        *w = u64::from_be_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]);
    }
}

/// Writes `words` into `bytes` in big-endian order, stopping when either runs out.
///
/// Stopping early is what truncates SHA-224 and SHA-384 output.
#[inline]
pub(crate) fn u32s_to_be_bytes(bytes: &mut [u8], words: &[u32]) {
    for (c, w) in bytes.chunks_mut(4).zip(words) {
        c.copy_from_slice(&w.to_be_bytes()[..c.len()]);
    }
}

/// Writes `words` into `bytes` in little-endian order.
#[inline]
pub(crate) fn u32s_to_le_bytes(bytes: &mut [u8], words: &[u32]) {
    for (c, w) in bytes.chunks_mut(4).zip(words) {
        c.copy_from_slice(&w.to_le_bytes()[..c.len()]);
    }
}

/// Writes `words` into `bytes` in big-endian order, stopping when either runs out.
#[inline]
pub(crate) fn u64s_to_be_bytes(bytes: &mut [u8], words: &[u64]) {
    for (c, w) in bytes.chunks_mut(8).zip(words) {
        c.copy_from_slice(&w.to_be_bytes()[..c.len()]);
    }
}

/// Number of bytes sitting in the pending buffer of an engine with block size `B`.
#[inline]
pub(crate) fn incomplete_block_len<const B: usize>(bytes_hashed: u64) -> usize {
    (bytes_hashed % B as u64) as usize
}

/// Feeds `inp` through the pending `buffer`, calling `compress` once per completed block.
///
/// Whole blocks are handed to `compress` straight out of `inp`; only the head (topping up a
/// partially filled buffer) and the tail (less than one block) are copied.
pub(crate) fn buffered_input<const B: usize, F>(
    buffer: &mut [u8; B],
    bytes_hashed: &mut u64,
    mut inp: &[u8],
    mut compress: F,
) where
    F: FnMut(&[u8]),
{
    let buf_idx = incomplete_block_len::<B>(*bytes_hashed);
    *bytes_hashed += inp.len() as u64;

    if buf_idx > 0 {
        let write_len = cmp::min(B - buf_idx, inp.len());
        buffer[buf_idx..buf_idx + write_len].copy_from_slice(&inp[..write_len]);
        inp = &inp[write_len..];
        if buf_idx + write_len < B {
            return;
        }
        compress(&buffer[..]);
    }

    let mut blocks = inp.chunks_exact(B);
    for block in &mut blocks {
        compress(block);
    }
    let rem = blocks.remainder();
    buffer[..rem.len()].copy_from_slice(rem);
}

/// Appends the `0x80` terminator, zero padding and `length_field` to the pending data and
/// compresses the result (one or two blocks).
pub(crate) fn pad_and_compress<const B: usize, F>(
    buffer: &mut [u8; B],
    bytes_hashed: u64,
    length_field: &[u8],
    mut compress: F,
) where
    F: FnMut(&[u8]),
{
    let buf_idx = incomplete_block_len::<B>(bytes_hashed);
    let len_pos = B - length_field.len();

    buffer[buf_idx] = 0x80;
    buffer[buf_idx + 1..].fill(0);

    if buf_idx >= len_pos {
        compress(&buffer[..]);
        buffer[..len_pos].fill(0);
    }

    buffer[len_pos..].copy_from_slice(length_field);
    compress(&buffer[..]);
}
