//! PKCS#1, PKCS#8 and SubjectPublicKeyInfo encoding support.
//!
//! Private keys are written as PKCS#1 `RSAPrivateKey` structures framed with
//! the `RSA PRIVATE KEY` label. Public keys are written as X.509
//! `SubjectPublicKeyInfo` structures framed with the `RSA PUBLIC KEY` label.
//!
//! Decoding reads the first PEM block in the input. Text around it is
//! ignored, body lines may have any width, and the PEM label is not checked:
//! the DER body decides whether a document is accepted.

use crate::{
    errors::{Error, Result},
    PrivateKey, PublicKey,
};
use core::str::FromStr;
use pem_rfc7468::LineEnding;
use pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use pkcs8::{DecodePrivateKey, EncodePrivateKey};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use spki::{
    der::{asn1::AnyRef, asn1::Null, Decode},
    AlgorithmIdentifierRef, EncodePublicKey, SubjectPublicKeyInfoRef,
};
use zeroize::Zeroizing;

/// PEM label written by [`PrivateKey::to_pem`].
pub const PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

/// PEM label written by [`PublicKey::to_pem`].
pub const PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";

/// PEM label written by [`PrivateKey::to_pkcs8_pem`].
pub const PKCS8_PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

const LINE_ENDING: LineEnding = LineEnding::LF;

/// Largest modulus accepted when decoding a public key.
///
/// Matches [`crate::generate`], which has no upper bound.
const MAX_MODULUS_BITS: usize = usize::MAX;

/// Strip the PEM armor from the first block in `pem`, returning the DER body.
fn decode_pem(pem: &str, canonical_label: &str) -> Option<Zeroizing<Vec<u8>>> {
    let block = pem::parse(pem).ok()?;
    if block.tag() != canonical_label {
        tracing::debug!(
            label = block.tag(),
            canonical_label,
            "decoding PEM block with non-canonical label"
        );
    }
    Some(Zeroizing::new(block.into_contents()))
}

/// Verify that the `AlgorithmIdentifier` names `rsaEncryption` with `NULL`
/// parameters.
fn verify_algorithm_id(algorithm: &AlgorithmIdentifierRef<'_>) -> Result<()> {
    if algorithm.oid != pkcs1::ALGORITHM_OID {
        return Err(Error::NotRsaPublicKey);
    }

    if algorithm.parameters != Some(AnyRef::from(Null)) {
        return Err(spki::Error::KeyMalformed.into());
    }

    Ok(())
}

impl PrivateKey {
    /// Parse a PEM encoded PKCS#1 private key.
    ///
    /// Fails with [`Error::InvalidPrivateKeyPem`] if no PEM block can be
    /// parsed, and with [`Error::InvalidPrivateKey`] if the block does not
    /// hold a PKCS#1 RSA private key.
    pub fn from_pem(pem: &str) -> Result<Self> {
        let der = decode_pem(pem, PRIVATE_KEY_LABEL).ok_or(Error::InvalidPrivateKeyPem)?;
        Self::from_der(&der)
    }

    /// Parse a DER encoded PKCS#1 private key.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        RsaPrivateKey::from_pkcs1_der(der)
            .map(Self::from)
            .map_err(|_| Error::InvalidPrivateKey)
    }

    /// Parse a PEM encoded PKCS#8 private key.
    ///
    /// Errors are reported the same way as [`PrivateKey::from_pem`].
    pub fn from_pkcs8_pem(pem: &str) -> Result<Self> {
        let der = decode_pem(pem, PKCS8_PRIVATE_KEY_LABEL).ok_or(Error::InvalidPrivateKeyPem)?;
        RsaPrivateKey::from_pkcs8_der(&der)
            .map(Self::from)
            .map_err(|_| Error::InvalidPrivateKey)
    }

    /// Serialize as PEM encoded PKCS#1 with the `RSA PRIVATE KEY` label.
    ///
    /// # Panics
    ///
    /// Panics if the provider cannot encode the key, which means the key
    /// was constructed in an inconsistent state.
    pub fn to_pem(&self) -> Zeroizing<String> {
        self.as_inner()
            .to_pkcs1_pem(LINE_ENDING)
            .expect("PKCS#1 encoding of a constructed RSA private key failed")
    }

    /// Serialize as DER encoded PKCS#1.
    ///
    /// # Panics
    ///
    /// See [`PrivateKey::to_pem`].
    pub fn to_der(&self) -> Zeroizing<Vec<u8>> {
        let document = self
            .as_inner()
            .to_pkcs1_der()
            .expect("PKCS#1 encoding of a constructed RSA private key failed");
        Zeroizing::new(document.as_bytes().to_vec())
    }

    /// Serialize as PEM encoded PKCS#8 with the `PRIVATE KEY` label.
    ///
    /// # Panics
    ///
    /// See [`PrivateKey::to_pem`].
    pub fn to_pkcs8_pem(&self) -> Zeroizing<String> {
        self.as_inner()
            .to_pkcs8_pem(LINE_ENDING)
            .expect("PKCS#8 encoding of a constructed RSA private key failed")
    }
}

impl PublicKey {
    /// Parse a PEM encoded `SubjectPublicKeyInfo`.
    ///
    /// Fails with [`Error::InvalidPem`] if no PEM block can be parsed,
    /// [`Error::Decode`] if the block is not a valid `SubjectPublicKeyInfo`,
    /// and [`Error::NotRsaPublicKey`] if it is one for another algorithm.
    pub fn from_pem(pem: &str) -> Result<Self> {
        let der = decode_pem(pem, PUBLIC_KEY_LABEL).ok_or(Error::InvalidPem)?;
        Self::from_der(&der)
    }

    /// Parse a DER encoded `SubjectPublicKeyInfo`.
    ///
    /// Any modulus size is accepted, so every key [`crate::generate`] can
    /// produce decodes again.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let spki = SubjectPublicKeyInfoRef::from_der(der).map_err(spki::Error::from)?;
        verify_algorithm_id(&spki.algorithm)?;

        let key_bytes = spki
            .subject_public_key
            .as_bytes()
            .ok_or(spki::Error::KeyMalformed)?;
        let key = pkcs1::RsaPublicKey::from_der(key_bytes)
            .map_err(|_| spki::Error::KeyMalformed)?;

        let n = BigUint::from_bytes_be(key.modulus.as_bytes());
        let e = BigUint::from_bytes_be(key.public_exponent.as_bytes());
        let inner = RsaPublicKey::new_with_max_size(n, e, MAX_MODULUS_BITS)
            .map_err(|_| spki::Error::KeyMalformed)?;

        Ok(Self::from(inner))
    }

    /// Serialize as PEM encoded `SubjectPublicKeyInfo` with the
    /// `RSA PUBLIC KEY` label.
    ///
    /// The output is deterministic: the same key always yields the same text.
    ///
    /// # Panics
    ///
    /// Panics if the provider cannot encode the key.
    pub fn to_pem(&self) -> String {
        pem_rfc7468::encode_string(PUBLIC_KEY_LABEL, LINE_ENDING, &self.to_der())
            .expect("PEM encoding of an RSA public key failed")
    }

    /// Serialize as DER encoded `SubjectPublicKeyInfo`.
    ///
    /// # Panics
    ///
    /// Panics if the provider cannot encode the key.
    pub fn to_der(&self) -> Vec<u8> {
        self.as_inner()
            .to_public_key_der()
            .expect("SubjectPublicKeyInfo encoding of an RSA public key failed")
            .as_bytes()
            .to_vec()
    }
}

impl FromStr for PrivateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_pem(s)
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_pem(s)
    }
}
