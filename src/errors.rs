//! Error types.
//!
//! Two kinds of failure exist, both reported synchronously and never
//! retried: [`StateError`] for driving a hash object's absorb/squeeze state
//! machine backwards, and [`AlgorithmError`] for construction-time variant
//! resolution. The permutation and the sponge themselves are total and
//! produce no errors. Feeding text where bytes are expected is a compile
//! error in this crate, not a runtime one.

use std::error::Error;
use std::fmt::Display;

/// A hash object was driven against its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// `update` was called on an extendable-output hash that has already
    /// squeezed output. Absorbing and squeezing are mutually exclusive for
    /// the lifetime of the object.
    UpdateAfterSqueeze,
}

/// A hash variant could not be resolved at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The requested name is not in the variant table.
    UnknownAlgorithm(String),
    /// The requested digest bit length is not one of 224, 256, 384 or 512.
    UnsupportedBitLength(usize),
}

impl Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpdateAfterSqueeze => {
                write!(f, "update is not permitted once squeezing has begun")
            }
        }
    }
}

impl Display for AlgorithmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAlgorithm(name) => write!(f, "unsupported hash algorithm {name:?}"),
            Self::UnsupportedBitLength(bits) => {
                write!(f, "bit length must be one of 224, 256, 384 or 512, got {bits}")
            }
        }
    }
}

impl Error for StateError {}
impl Error for AlgorithmError {}
