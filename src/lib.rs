//! Keccak/SHA-3 family hashing with an incremental sponge API.
//!
//! This crate implements the original Keccak submission's hash functions:
//! the fixed-output digests of 224, 256, 384 and 512 bits (under their
//! pysha3-compatible names [`Sha3_224`] through [`Sha3_512`]) and the
//! default arbitrary-output instance [`Keccak`]. All of them share the
//! in-crate Keccak-f\[1600\] permutation and sponge; padding is plain
//! pad10*1 with an empty domain-separation suffix, so the digests match
//! the pre-NIST Keccak known-answer vectors.
//!
//! Hash objects follow the classic incremental protocol: construct, feed
//! data in any chunking, finalize. Finalizing a fixed-output hash never
//! consumes it, and [`Clone`] yields an independent copy of the state.
//!
//! ```
//! use keccak_sponge::Sha3_256;
//!
//! let mut hash = Sha3_256::new();
//! hash.update([0xCC]);
//! assert_eq!(
//!     hash.hexdigest(),
//!     "eead6dbfc7340a56caedc044696a168870549a6a7f6f56961e84a54bd9970b8a",
//! );
//! ```
//!
//! The extendable-output variant streams as much output as requested; the
//! first squeeze permanently ends the absorbing phase:
//!
//! ```
//! use keccak_sponge::Keccak;
//!
//! # fn main() -> Result<(), keccak_sponge::StateError> {
//! let mut xof = Keccak::new();
//! xof.update(b"input")?;
//! let head = xof.squeeze(16);
//! let tail = xof.squeeze(16);
//! assert_ne!(head, tail);
//! assert!(xof.update(b"more").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! Every variant also implements the [`digest`] traits, so the types plug
//! into anything generic over hash objects ([`digest::Digest`],
//! [`digest::ExtendableOutput`], HMAC constructions, the type-erased
//! [`digest::DynDigest`] handed out by [`registry::new_hash`]).

/// The Keccak-f\[1600\] permutation.
pub mod permutation;
/// Sponge construction: absorb, pad, squeeze.
mod sponge;
/// Incremental absorb/squeeze state machine.
mod engine;
/// Per-variant hash objects.
mod hasher;
/// Per-variant configuration table.
pub mod variant;
/// Lookup of hash objects by name or bit length.
pub mod registry;
/// Error types.
mod errors;
/// Known-answer-test fixture tooling.
pub mod kat;

pub use errors::{AlgorithmError, StateError};
pub use hasher::{Keccak, KeccakReader, Sha3_224, Sha3_256, Sha3_384, Sha3_512};
pub use registry::{new_hash, sha3};
pub use variant::Variant;
