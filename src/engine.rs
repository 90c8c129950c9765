//! Incremental absorb/squeeze state machine on top of the sponge.
//!
//! The engine buffers partial input blocks so callers may feed data in any
//! chunking, and keeps the two phases of the sponge apart: absorbing is
//! re-enterable (fixed digests finalize a clone of the state), while the
//! transition into squeezing is one-way.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::StateError;
use crate::sponge::{Sponge, WIDTH_BYTES};

/// Phase of the sponge lifecycle.
///
/// `pos` tracks how many bytes of the current output block have been
/// emitted already.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Absorbing,
    Squeezing { pos: usize },
}

/// Buffering state machine over one exclusively-owned sponge state.
#[derive(Clone)]
pub(crate) struct Engine {
    sponge: Sponge,
    /// Not-yet-absorbed input; always shorter than the rate between calls.
    buffer: [u8; WIDTH_BYTES],
    buffered: usize,
    /// Domain-separation suffix bits plus the first bit of pad10*1.
    delimiter: u8,
    mode: Mode,
}

impl Engine {
    pub(crate) fn new(rate: usize, delimiter: u8) -> Self {
        Self {
            sponge: Sponge::new(rate),
            buffer: [0; WIDTH_BYTES],
            buffered: 0,
            delimiter,
            mode: Mode::Absorbing,
        }
    }

    /// Absorb input without a phase check.
    ///
    /// Only for callers that keep the engine in the absorbing phase by
    /// construction (the fixed-output hashes never leave it).
    pub(crate) fn absorb_unchecked(&mut self, mut input: &[u8]) {
        debug_assert!(self.mode == Mode::Absorbing);
        let rate = self.sponge.rate();

        // top up a partial block first
        if self.buffered != 0 {
            let take = usize::min(rate - self.buffered, input.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];
            if self.buffered == rate {
                self.sponge.absorb_block(&self.buffer[..rate]);
                self.buffered = 0;
            }
        }

        let mut blocks = input.chunks_exact(rate);
        for block in blocks.by_ref() {
            self.sponge.absorb_block(block);
        }
        let rest = blocks.remainder();
        if !rest.is_empty() {
            self.buffer[..rest.len()].copy_from_slice(rest);
            self.buffered = rest.len();
        }
    }

    /// Absorb input, failing once the squeezing phase has begun.
    pub(crate) fn absorb(&mut self, input: &[u8]) -> Result<(), StateError> {
        match self.mode {
            Mode::Absorbing => {
                self.absorb_unchecked(input);
                Ok(())
            }
            Mode::Squeezing { .. } => Err(StateError::UpdateAfterSqueeze),
        }
    }

    /// Finalize a clone of the current state into `out`, leaving the live
    /// engine untouched so it can keep absorbing.
    pub(crate) fn peek_digest(&self, out: &mut [u8]) {
        let mut snapshot = self.clone();
        snapshot.squeeze(out);
    }

    /// Stream output bytes, entering the squeezing phase on first call.
    ///
    /// Concatenated calls produce the same stream as one large call.
    pub(crate) fn squeeze(&mut self, out: &mut [u8]) {
        let mut pos = match self.mode {
            Mode::Absorbing => {
                self.sponge
                    .pad_and_absorb_final(&self.buffer[..self.buffered], self.delimiter);
                self.buffer.zeroize();
                self.buffered = 0;
                0
            }
            Mode::Squeezing { pos } => pos,
        };

        let rate = self.sponge.rate();
        let mut out = out;
        while !out.is_empty() {
            if pos == rate {
                let take = usize::min(rate, out.len());
                let (chunk, rest) = out.split_at_mut(take);
                self.sponge.squeeze_more(chunk);
                pos = take;
                out = rest;
            } else {
                let take = usize::min(rate - pos, out.len());
                let (chunk, rest) = out.split_at_mut(take);
                self.sponge.squeeze_block(pos, chunk);
                pos += take;
                out = rest;
            }
        }
        self.mode = Mode::Squeezing { pos };
    }

    /// Return to the pristine absorbing state.
    pub(crate) fn reset(&mut self) {
        self.sponge.reset();
        self.buffer.zeroize();
        self.buffered = 0;
        self.mode = Mode::Absorbing;
    }
}

impl Zeroize for Engine {
    fn zeroize(&mut self) {
        self.sponge.zeroize();
        self.buffer.zeroize();
        self.buffered = 0;
        self.mode = Mode::Absorbing;
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Engine {}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_of(chunks: &[&[u8]]) -> [u8; 32] {
        let mut engine = Engine::new(136, 0x01);
        for chunk in chunks {
            engine.absorb_unchecked(chunk);
        }
        let mut out = [0u8; 32];
        engine.peek_digest(&mut out);
        out
    }

    /// The digest is independent of how the input was chunked.
    #[test]
    fn chunking_invariance() {
        let single = digest_of(&[b"the quick brown fox jumps over the lazy dog" as &[u8]]);
        let split = digest_of(&[
            b"the quick brown fox " as &[u8],
            b"",
            b"jumps over the lazy dog",
        ]);
        let bytes: Vec<&[u8]> = b"the quick brown fox jumps over the lazy dog"
            .chunks(1)
            .collect();
        assert_eq!(single, split);
        assert_eq!(single, digest_of(&bytes));
    }

    /// Inputs spanning multiple rate blocks flush the buffer correctly.
    #[test]
    fn multi_block_absorb() {
        let long = vec![0x5au8; 500];
        let mut whole = Engine::new(136, 0x01);
        whole.absorb_unchecked(&long);
        let mut pieces = Engine::new(136, 0x01);
        pieces.absorb_unchecked(&long[..137]);
        pieces.absorb_unchecked(&long[137..300]);
        pieces.absorb_unchecked(&long[300..]);

        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        whole.peek_digest(&mut a);
        pieces.peek_digest(&mut b);
        assert_eq!(a, b);
    }

    /// peek_digest leaves the live engine absorbing.
    #[test]
    fn peek_is_non_consuming() {
        let mut engine = Engine::new(104, 0x01);
        engine.absorb_unchecked(b"prefix");
        let mut first = [0u8; 48];
        engine.peek_digest(&mut first);
        let mut again = [0u8; 48];
        engine.peek_digest(&mut again);
        assert_eq!(first, again);
        assert!(engine.absorb(b"more").is_ok());
    }

    /// Once squeezing, absorbing fails and the output stream is stable
    /// under re-chunking.
    #[test]
    fn squeeze_transition_is_one_way() {
        let mut engine = Engine::new(128, 0x01);
        engine.absorb_unchecked(b"seed");
        let mut reference = engine.clone();
        let mut expected = vec![0u8; 300];
        reference.squeeze(&mut expected);

        let mut out = vec![0u8; 300];
        let (head, tail) = out.split_at_mut(17);
        engine.squeeze(head);
        assert_eq!(engine.absorb(b"nope"), Err(StateError::UpdateAfterSqueeze));
        engine.squeeze(tail);
        assert_eq!(out, expected);
    }

    /// Clones evolve independently.
    #[test]
    fn clone_independence() {
        let mut original = Engine::new(136, 0x01);
        original.absorb_unchecked(b"shared");
        let mut fork = original.clone();
        fork.absorb_unchecked(b" divergence");

        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        original.peek_digest(&mut a);
        fork.peek_digest(&mut b);
        assert_ne!(a, b);
        assert_eq!(a, digest_of(&[b"shared" as &[u8]]));
    }
}
