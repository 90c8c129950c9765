//! Per-variant hash objects.
//!
//! One sealed concrete type per variant: the fixed-output hashes
//! [`Sha3_224`], [`Sha3_256`], [`Sha3_384`] and [`Sha3_512`], and the
//! extendable-output [`Keccak`]. The inherent API mirrors the classic
//! hash-object protocol (`update`, `digest`, `hexdigest`, `Clone` as copy,
//! read-only introspection); the [`digest`] trait impls make the same types
//! usable by anything generic over hash objects, HMAC constructions
//! included.

use digest::core_api::BlockSizeUser;
use digest::consts::{U104, U136, U144, U28, U32, U48, U64, U72};
use digest::{
    ExtendableOutput, ExtendableOutputReset, FixedOutput, FixedOutputReset, HashMarker, Output,
    OutputSizeUser, Reset, Update, XofReader,
};
use zeroize::Zeroize;

use crate::engine::Engine;
use crate::errors::StateError;
use crate::variant::{self, Variant};

macro_rules! fixed_hash {
    (
        $(#[$doc:meta])*
        $name:ident, $variant:path, $digest_size:literal, $out:ty, $block:ty
    ) => {
        $(#[$doc])*
        ///
        /// Finalization never consumes the object: `digest` operates on a
        /// snapshot, so updates may continue afterwards and `digest` may be
        /// called any number of times.
        #[derive(Clone)]
        pub struct $name(Engine);

        impl $name {
            /// Configuration of this variant.
            pub const VARIANT: &'static Variant = &$variant;

            /// New hash object with an empty input stream.
            pub fn new() -> Self {
                Self(Engine::new($variant.rate, $variant.delimiter))
            }

            /// New hash object that has already consumed `data`.
            pub fn new_with_prefix(data: impl AsRef<[u8]>) -> Self {
                let mut hash = Self::new();
                hash.update(data);
                hash
            }

            /// Feed more message bytes. The digest is independent of how
            /// the input was split across calls.
            pub fn update(&mut self, data: impl AsRef<[u8]>) {
                self.0.absorb_unchecked(data.as_ref());
            }

            /// Digest of everything absorbed so far.
            pub fn digest(&self) -> [u8; $digest_size] {
                let mut out = [0u8; $digest_size];
                self.0.peek_digest(&mut out);
                out
            }

            /// Lowercase hex form of [`Self::digest`].
            pub fn hexdigest(&self) -> String {
                hex::encode(self.digest())
            }

            /// Display name of the variant.
            pub fn name(&self) -> &'static str {
                $variant.name
            }

            /// Digest size in bytes.
            pub fn digest_size(&self) -> usize {
                $digest_size
            }

            /// Input block size in bytes, as consumed by MAC constructions.
            pub fn block_size(&self) -> usize {
                $variant.rate
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Zeroize for $name {
            fn zeroize(&mut self) {
                self.0.zeroize();
            }
        }

        impl HashMarker for $name {}

        impl Update for $name {
            fn update(&mut self, data: &[u8]) {
                self.0.absorb_unchecked(data);
            }
        }

        impl OutputSizeUser for $name {
            type OutputSize = $out;
        }

        impl BlockSizeUser for $name {
            type BlockSize = $block;
        }

        impl FixedOutput for $name {
            fn finalize_into(self, out: &mut Output<Self>) {
                self.0.peek_digest(out.as_mut_slice());
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.0.reset();
            }
        }

        impl FixedOutputReset for $name {
            fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                self.0.peek_digest(out.as_mut_slice());
                self.0.reset();
            }
        }
    };
}

fixed_hash!(
    /// Keccak-224, rate 1152 / capacity 448.
    Sha3_224,
    variant::SHA3_224,
    28,
    U28,
    U144
);
fixed_hash!(
    /// Keccak-256, rate 1088 / capacity 512.
    Sha3_256,
    variant::SHA3_256,
    32,
    U32,
    U136
);
fixed_hash!(
    /// Keccak-384, rate 832 / capacity 768.
    Sha3_384,
    variant::SHA3_384,
    48,
    U48,
    U104
);
fixed_hash!(
    /// Keccak-512, rate 576 / capacity 1024.
    Sha3_512,
    variant::SHA3_512,
    64,
    U64,
    U72
);

/// The extendable-output variant: the default Keccak instance
/// Keccak\[r=1024, c=576\] squeezing as many bytes as the caller asks for.
///
/// The first `squeeze` call pads the input and moves the object
/// permanently into the squeezing phase; `update` fails from then on.
/// Repeated squeezes continue the output stream, so the concatenation of
/// several calls equals one larger call.
#[derive(Clone)]
pub struct Keccak(Engine);

impl Keccak {
    /// Configuration of this variant.
    pub const VARIANT: &'static Variant = &variant::KECCAK;

    /// New hash object with an empty input stream.
    pub fn new() -> Self {
        Self(Engine::new(variant::KECCAK.rate, variant::KECCAK.delimiter))
    }

    /// New hash object that has already consumed `data`.
    pub fn new_with_prefix(data: impl AsRef<[u8]>) -> Self {
        let mut hash = Self::new();
        hash.0.absorb_unchecked(data.as_ref());
        hash
    }

    /// Feed more message bytes.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> Result<(), StateError> {
        self.0.absorb(data.as_ref())
    }

    /// Fill `out` with the next output bytes, entering the squeezing phase
    /// on the first call.
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        self.0.squeeze(out);
    }

    /// The next `n` output bytes.
    pub fn squeeze(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.0.squeeze(&mut out);
        out
    }

    /// The next `n` output bytes as `2n` lowercase hex characters.
    pub fn squeeze_hex(&mut self, n: usize) -> String {
        hex::encode(self.squeeze(n))
    }

    /// Display name of the variant.
    pub fn name(&self) -> &'static str {
        variant::KECCAK.name
    }

    /// `None`: the output length is unbounded.
    pub fn digest_size(&self) -> Option<usize> {
        None
    }

    /// `None`: no conventional block size applies to the XOF.
    pub fn block_size(&self) -> Option<usize> {
        None
    }
}

impl Default for Keccak {
    fn default() -> Self {
        Self::new()
    }
}

impl Zeroize for Keccak {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Update for Keccak {
    /// # Panics
    ///
    /// The [`digest`] traits have no fallible update, so this panics where
    /// the inherent [`Keccak::update`] would return
    /// [`StateError::UpdateAfterSqueeze`].
    fn update(&mut self, data: &[u8]) {
        match self.0.absorb(data) {
            Ok(()) => {}
            Err(err) => panic!("{err}"),
        }
    }
}

impl ExtendableOutput for Keccak {
    type Reader = KeccakReader;

    fn finalize_xof(mut self) -> KeccakReader {
        self.0.squeeze(&mut []);
        KeccakReader(self.0)
    }
}

impl Reset for Keccak {
    fn reset(&mut self) {
        self.0.reset();
    }
}

impl ExtendableOutputReset for Keccak {
    fn finalize_xof_reset(&mut self) -> KeccakReader {
        let mut engine = std::mem::replace(
            &mut self.0,
            Engine::new(variant::KECCAK.rate, variant::KECCAK.delimiter),
        );
        engine.squeeze(&mut []);
        KeccakReader(engine)
    }
}

/// Output stream of a finalized [`Keccak`] hasher.
#[derive(Clone)]
pub struct KeccakReader(Engine);

impl XofReader for KeccakReader {
    fn read(&mut self, buffer: &mut [u8]) {
        self.0.squeeze(buffer);
    }
}
