//! Generate RSA private keys.

use crate::{
    errors::{Error, Result},
    PrivateKey,
};
use rand_core::{CryptoRngCore, OsRng};
use rsa::RsaPrivateKey;

/// Smallest key size [`KeyGenerator::generate`] accepts, in bits.
pub const MIN_BITS: usize = 1024;

/// Key size used by [`KeyGenerator::generate_default`], in bits.
pub const DEFAULT_BITS: usize = 4096;

/// Check a requested key size without generating anything.
///
/// The size must be a non-zero multiple of 8 ([`Error::InvalidBitSize`]) and
/// at least [`MIN_BITS`] ([`Error::BitSizeTooSmall`]), checked in that order.
pub fn validate_bits(bits: usize) -> Result<()> {
    if bits == 0 || bits % 8 != 0 {
        return Err(Error::InvalidBitSize);
    }
    if bits < MIN_BITS {
        return Err(Error::BitSizeTooSmall);
    }

    Ok(())
}

/// Generates RSA private keys from a cryptographically secure RNG.
#[derive(Clone, Debug)]
pub struct KeyGenerator<R = OsRng> {
    rng: R,
}

impl KeyGenerator<OsRng> {
    /// Create a generator backed by the operating system's RNG.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for KeyGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CryptoRngCore> KeyGenerator<R> {
    /// Create a generator backed by `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a new private key of `bits` bits.
    ///
    /// The size is checked with [`validate_bits`] before any work is done.
    /// A failure inside the RSA provider is reported as
    /// [`Error::Generation`].
    pub fn generate(&mut self, bits: usize) -> Result<PrivateKey> {
        validate_bits(bits)?;

        tracing::debug!(bits, "generating RSA private key");
        let inner = RsaPrivateKey::new(&mut self.rng, bits).map_err(Error::Generation)?;
        Ok(PrivateKey::from(inner))
    }

    /// Generate a new [`DEFAULT_BITS`] bit private key.
    ///
    /// # Panics
    ///
    /// Panics if the RSA provider fails, which only happens when the
    /// randomness source is broken.
    pub fn generate_default(&mut self) -> PrivateKey {
        match self.generate(DEFAULT_BITS) {
            Ok(key) => key,
            Err(err) => panic!("failed to generate a {DEFAULT_BITS} bit RSA key: {err}"),
        }
    }
}

/// Generate a new private key of `bits` bits using the operating system's
/// RNG. See [`KeyGenerator::generate`].
pub fn generate(bits: usize) -> Result<PrivateKey> {
    KeyGenerator::new().generate(bits)
}

/// Generate a new [`DEFAULT_BITS`] bit private key using the operating
/// system's RNG. See [`KeyGenerator::generate_default`].
pub fn generate_default() -> PrivateKey {
    KeyGenerator::new().generate_default()
}
