use std::time::Instant;

use rand::{CryptoRng, RngCore};
use rsa::{
    BigUint, RsaPrivateKey,
    pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey},
    traits::PublicKeyParts,
};

use crate::{
    MAX_RSA_BITS, MIN_RSA_BITS, RSA_PUBLIC_EXPONENT,
    error::{GenerationError, KeyGenError, Result},
    spec::KeyAlgorithm,
};

pub const RSA_PEM_LABEL: &str = "RSA PRIVATE KEY";

/// A generated private key, one variant per supported family.
#[derive(Debug, Clone, PartialEq)]
pub enum PrivateKey {
    Rsa(RsaPrivateKey),
}

impl PrivateKey {
    /// Generates a fresh key for `algorithm`, drawing all randomness from `rng`.
    ///
    /// Callers wanting unpredictable keys pass `rand::rngs::OsRng`. A seeded
    /// generator yields reproducible keys, which is only useful in tests.
    pub fn generate<R>(algorithm: &KeyAlgorithm, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        match *algorithm {
            KeyAlgorithm::Rsa { bits } => {
                let size = usize::try_from(bits)
                    .ok()
                    .filter(|size| (MIN_RSA_BITS..=MAX_RSA_BITS).contains(size))
                    .ok_or(GenerationError::KeySize { bits })?;

                let started = Instant::now();
                let exponent = BigUint::from(RSA_PUBLIC_EXPONENT);
                let key = RsaPrivateKey::new_with_exp(rng, size, &exponent)
                    .map_err(GenerationError::from)?;
                tracing::debug!(bits = size, elapsed = ?started.elapsed(), "generated RSA key");

                Ok(PrivateKey::Rsa(key))
            }
        }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            PrivateKey::Rsa(key) => KeyAlgorithm::Rsa {
                bits: key.n().bits() as i64,
            },
        }
    }

    /// Armor label for this key's canonical encoding.
    pub fn pem_label(&self) -> &'static str {
        match self {
            PrivateKey::Rsa(_) => RSA_PEM_LABEL,
        }
    }

    /// Canonical binary form: PKCS#1 `RSAPrivateKey` DER for RSA.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        match self {
            PrivateKey::Rsa(key) => Ok(key.to_pkcs1_der()?.as_bytes().to_vec()),
        }
    }

    /// Decodes `text` the same way the generated module does at load time.
    pub fn load_embedded(algorithm: &KeyAlgorithm, text: &str) -> Result<Self> {
        match algorithm {
            KeyAlgorithm::Rsa { .. } => Ok(PrivateKey::Rsa(RsaPrivateKey::from_pkcs1_pem(text)?)),
        }
    }

    pub fn from_der(label: &str, der: &[u8]) -> Result<Self> {
        match label {
            RSA_PEM_LABEL => Ok(PrivateKey::Rsa(RsaPrivateKey::from_pkcs1_der(der)?)),
            other => Err(KeyGenError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}
