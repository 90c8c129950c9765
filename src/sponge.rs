//! Sponge construction over Keccak-f\[1600\]: absorb, pad, squeeze.
//!
//! The state is written and read through a byte-granular window of `rate`
//! bytes at the start of the lane array (little-endian lane packing); the
//! remaining `capacity` bits are never touched outside the permutation.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::permutation::{keccak_f1600, LANES, WIDTH};

/// State width in bytes; also the upper bound on any rate.
pub(crate) const WIDTH_BYTES: usize = WIDTH / 8;

/// A 1600-bit Keccak state together with its rate.
///
/// Owned by exactly one hash object at a time; cloning yields a fully
/// independent state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Sponge {
    lanes: [u64; LANES],
    /// Rate in bytes. The byte granularity makes the rate a multiple of
    /// 8 bits by construction, as the output stream requires.
    #[zeroize(skip)]
    rate: usize,
}

impl Sponge {
    pub(crate) fn new(rate: usize) -> Self {
        assert!(0 < rate && rate < WIDTH_BYTES, "rate must leave capacity");
        Self {
            lanes: [0; LANES],
            rate,
        }
    }

    pub(crate) fn rate(&self) -> usize {
        self.rate
    }

    pub(crate) fn reset(&mut self) {
        self.lanes.zeroize();
    }

    fn xor_byte(&mut self, index: usize, byte: u8) {
        self.lanes[index / 8] ^= u64::from(byte) << ((index % 8) * 8);
    }

    fn byte_at(&self, index: usize) -> u8 {
        (self.lanes[index / 8] >> ((index % 8) * 8)) as u8
    }

    /// XOR one full rate-sized block into the state and permute.
    pub(crate) fn absorb_block(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), self.rate);
        let full_lanes = block.len() / 8;
        for (i, chunk) in block.chunks_exact(8).enumerate() {
            let mut lane = [0u8; 8];
            lane.copy_from_slice(chunk);
            self.lanes[i] ^= u64::from_le_bytes(lane);
        }
        // rates that are not a whole number of lanes spill into a partial one
        for (i, &byte) in block[full_lanes * 8..].iter().enumerate() {
            self.xor_byte(full_lanes * 8 + i, byte);
        }
        keccak_f1600(&mut self.lanes);
    }

    /// Close the input stream: append the delimiter (domain-separation
    /// suffix bits plus the first bit of pad10*1), pad with the closing bit
    /// and absorb. The remainder is always shorter than the rate, so one
    /// block suffices; the two pad bits land in the same byte when the
    /// remainder fills the block to one byte short.
    pub(crate) fn pad_and_absorb_final(&mut self, remainder: &[u8], delimiter: u8) {
        debug_assert!(remainder.len() < self.rate);
        let mut block = [0u8; WIDTH_BYTES];
        block[..remainder.len()].copy_from_slice(remainder);
        block[remainder.len()] ^= delimiter;
        block[self.rate - 1] ^= 0x80;
        let rate = self.rate;
        self.absorb_block(&block[..rate]);
        block.zeroize();
    }

    /// Read output bytes from the current block, leaving the state untouched.
    pub(crate) fn squeeze_block(&self, offset: usize, out: &mut [u8]) {
        debug_assert!(offset + out.len() <= self.rate);
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.byte_at(offset + i);
        }
    }

    /// Advance to the next output block, then read from its start.
    pub(crate) fn squeeze_more(&mut self, out: &mut [u8]) {
        keccak_f1600(&mut self.lanes);
        self.squeeze_block(0, out);
    }
}
