//! Per-variant configuration table.
//!
//! One read-only [`Variant`] record per hash function, fixed at compile
//! time and shared freely: rate plus capacity always sum to the 1600-bit
//! permutation width, and the delimiter carries the domain-separation
//! suffix bits together with the first bit of pad10*1. These variants
//! predate the NIST domain separation, so the suffix is empty and the
//! delimiter is the bare padding bit.

/// Fixed configuration of a single hash variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    /// Display name, matching the hashlib-style registry.
    pub name: &'static str,
    /// Digest size in bytes; `None` for the extendable-output variant.
    pub digest_size: Option<usize>,
    /// Rate in bytes.
    pub rate: usize,
    /// Capacity in bits.
    pub capacity: usize,
    /// Domain-separation suffix bits plus the first padding bit, packed
    /// into the byte XORed right after the final input byte.
    pub delimiter: u8,
    /// Input block size in bytes for MAC constructions; `None` where no
    /// conventional block size applies.
    pub block_size: Option<usize>,
}

/// 224-bit digest, Keccak\[r=1152, c=448\].
pub const SHA3_224: Variant = Variant {
    name: "sha3_224",
    digest_size: Some(28),
    rate: 144,
    capacity: 448,
    delimiter: 0x01,
    block_size: Some(144),
};

/// 256-bit digest, Keccak\[r=1088, c=512\].
pub const SHA3_256: Variant = Variant {
    name: "sha3_256",
    digest_size: Some(32),
    rate: 136,
    capacity: 512,
    delimiter: 0x01,
    block_size: Some(136),
};

/// 384-bit digest, Keccak\[r=832, c=768\].
pub const SHA3_384: Variant = Variant {
    name: "sha3_384",
    digest_size: Some(48),
    rate: 104,
    capacity: 768,
    delimiter: 0x01,
    block_size: Some(104),
};

/// 512-bit digest, Keccak\[r=576, c=1024\].
pub const SHA3_512: Variant = Variant {
    name: "sha3_512",
    digest_size: Some(64),
    rate: 72,
    capacity: 1024,
    delimiter: 0x01,
    block_size: Some(72),
};

/// The default arbitrary-output instance, Keccak\[r=1024, c=576\].
pub const KECCAK: Variant = Variant {
    name: "keccak",
    digest_size: None,
    rate: 128,
    capacity: 576,
    delimiter: 0x01,
    block_size: None,
};

/// Every variant this crate implements.
pub const VARIANTS: [&Variant; 5] = [&SHA3_224, &SHA3_256, &SHA3_384, &SHA3_512, &KECCAK];
