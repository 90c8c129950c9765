//! Lookup of fixed-output hash objects by name or bit length.
//!
//! The table is built once at compile time and is read-only thereafter, so
//! it may be shared across threads without synchronization. Factories hand
//! out boxed [`DynDigest`] objects, the type-erased form of the generic
//! hash-object protocol; the extendable-output [`crate::Keccak`] has no
//! fixed digest and is constructed directly instead.

use digest::DynDigest;

use crate::errors::AlgorithmError;
use crate::hasher::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

type Factory = fn() -> Box<dyn DynDigest>;

/// Name-to-factory table for every fixed-output variant.
pub static ALGORITHMS: &[(&str, Factory)] = &[
    ("sha3_224", || Box::new(Sha3_224::new())),
    ("sha3_256", || Box::new(Sha3_256::new())),
    ("sha3_384", || Box::new(Sha3_384::new())),
    ("sha3_512", || Box::new(Sha3_512::new())),
];

/// Construct a hash object by its registered name.
pub fn new_hash(name: &str) -> Result<Box<dyn DynDigest>, AlgorithmError> {
    for (known, factory) in ALGORITHMS {
        if *known == name {
            return Ok(factory());
        }
    }
    log::debug!("unknown hash algorithm {name:?}");
    Err(AlgorithmError::UnknownAlgorithm(name.to_string()))
}

/// Construct a hash object by digest bit length, pysha3-style.
///
/// Exactly 224, 256, 384 and 512 are supported; anything else is a
/// configuration error detected before any object is built.
pub fn sha3(bits: usize) -> Result<Box<dyn DynDigest>, AlgorithmError> {
    match bits {
        224 => Ok(Box::new(Sha3_224::new())),
        256 => Ok(Box::new(Sha3_256::new())),
        384 => Ok(Box::new(Sha3_384::new())),
        512 => Ok(Box::new(Sha3_512::new())),
        _ => Err(AlgorithmError::UnsupportedBitLength(bits)),
    }
}
