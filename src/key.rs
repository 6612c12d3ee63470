use core::fmt;

use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Represents the public part of an RSA key.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PublicKey {
    inner: RsaPublicKey,
}

/// Represents a whole RSA key, public and private parts.
///
/// Secret material is zeroized by the underlying [`RsaPrivateKey`] when the
/// key is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    inner: RsaPrivateKey,
}

impl PublicKey {
    /// Returns the key size in **bytes**, i.e. the length of the modulus.
    ///
    /// Note that [`PrivateKey::size`] reports bits instead. Use
    /// [`PublicKey::size_bits`] or [`PublicKey::size_bytes`] when the unit
    /// matters to the caller.
    pub fn size(&self) -> usize {
        self.size_bytes()
    }

    /// Returns the modulus length in bytes.
    pub fn size_bytes(&self) -> usize {
        self.inner.size()
    }

    /// Returns the modulus length in bits, rounded up to a whole byte.
    pub fn size_bits(&self) -> usize {
        self.inner.size() * 8
    }

    /// Borrows the wrapped [`RsaPublicKey`].
    pub fn as_inner(&self) -> &RsaPublicKey {
        &self.inner
    }

    /// Consumes the wrapper, returning the [`RsaPublicKey`].
    pub fn into_inner(self) -> RsaPublicKey {
        self.inner
    }
}

impl PrivateKey {
    /// Returns the key size in **bits**, computed from the modulus length in
    /// bytes.
    pub fn size(&self) -> usize {
        self.size_bits()
    }

    /// Returns the modulus length in bits, rounded up to a whole byte.
    pub fn size_bits(&self) -> usize {
        self.inner.size() * 8
    }

    /// Returns the modulus length in bytes.
    pub fn size_bytes(&self) -> usize {
        self.inner.size()
    }

    /// Derives the public key sharing this key's modulus and public exponent.
    ///
    /// The returned value is independent of `self`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: self.inner.to_public_key(),
        }
    }

    /// Borrows the wrapped [`RsaPrivateKey`].
    pub fn as_inner(&self) -> &RsaPrivateKey {
        &self.inner
    }

    /// Consumes the wrapper, returning the [`RsaPrivateKey`].
    pub fn into_inner(self) -> RsaPrivateKey {
        self.inner
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(inner: RsaPublicKey) -> Self {
        PublicKey { inner }
    }
}

impl From<RsaPrivateKey> for PrivateKey {
    fn from(inner: RsaPrivateKey) -> Self {
        PrivateKey { inner }
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(private_key: &PrivateKey) -> Self {
        private_key.public_key()
    }
}

impl From<PrivateKey> for PublicKey {
    fn from(private_key: PrivateKey) -> Self {
        private_key.public_key()
    }
}

impl AsRef<RsaPublicKey> for PublicKey {
    fn as_ref(&self) -> &RsaPublicKey {
        &self.inner
    }
}

impl AsRef<RsaPrivateKey> for PrivateKey {
    fn as_ref(&self) -> &RsaPrivateKey {
        &self.inner
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bits", &self.size_bits())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{PrivateKey, PublicKey};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for PublicKey {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_pem())
        }
    }

    impl<'de> Deserialize<'de> for PublicKey {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let pem = String::deserialize(deserializer)?;
            PublicKey::from_pem(&pem).map_err(de::Error::custom)
        }
    }

    impl Serialize for PrivateKey {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_pem())
        }
    }

    impl<'de> Deserialize<'de> for PrivateKey {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let pem = zeroize::Zeroizing::new(String::deserialize(deserializer)?);
            PrivateKey::from_pem(&pem).map_err(de::Error::custom)
        }
    }
}
