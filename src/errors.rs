//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-keys` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Requested key size is zero or not a multiple of 8.
    #[error("bits must be positive and a multiple of 8")]
    InvalidBitSize,

    /// Requested key size is below [`MIN_BITS`](crate::MIN_BITS).
    #[error("minimum bit size is {}", crate::MIN_BITS)]
    BitSizeTooSmall,

    /// The RSA provider could not produce a key.
    #[error("key generation failed: {0}")]
    Generation(#[source] rsa::Error),

    /// No PEM block could be parsed from a private key document.
    #[error("failed to parse PEM block")]
    InvalidPrivateKeyPem,

    /// The PEM body is not a valid RSA private key.
    #[error("failed to parse private key")]
    InvalidPrivateKey,

    /// No PEM block could be parsed from a public key document.
    #[error("invalid PEM")]
    InvalidPem,

    /// The document holds a public key for some algorithm other than RSA.
    #[error("not an RSA public key")]
    NotRsaPublicKey,

    /// The PEM body is not a structurally valid public key.
    #[error("failed to decode public key: {0}")]
    Decode(#[from] spki::Error),
}
