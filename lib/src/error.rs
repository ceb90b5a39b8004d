use std::num::ParseIntError;

use thiserror::Error;

use crate::{MAX_RSA_BITS, MIN_RSA_BITS};

#[derive(Error, Debug)]
pub enum KeyGenError {
    #[error("invalid key spec '{0}'")]
    MalformedSpec(String),
    #[error("unsupported key type '{0}'")]
    UnsupportedAlgorithm(String),
    #[error("invalid key size: {0}")]
    InvalidParameter(#[from] ParseIntError),
    #[error("duplicate key identifier '{0}'")]
    DuplicateIdentifier(String),
    #[error("failed to generate key: {0}")]
    Generation(#[from] GenerationError),
    #[error("PKCS#1 encoding failed: {0}")]
    Encoding(#[from] rsa::pkcs1::Error),
    #[error("failed to decode armored key: {0}")]
    Armor(#[from] pem::PemError),
    #[error("failed to render source: {0}")]
    Render(#[from] RenderError),
    #[error("key spec '{spec}'")]
    Spec {
        spec: String,
        #[source]
        source: Box<KeyGenError>,
    },
}

impl KeyGenError {
    /// Attaches the offending spec string, unless one is already attached.
    pub fn for_spec(self, spec: &str) -> Self {
        match self {
            e @ KeyGenError::Spec { .. } => e,
            e => KeyGenError::Spec {
                spec: spec.to_string(),
                source: Box::new(e),
            },
        }
    }

    /// The underlying error with any spec context peeled off.
    pub fn root(&self) -> &KeyGenError {
        match self {
            KeyGenError::Spec { source, .. } => source.root(),
            e => e,
        }
    }
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(
        "RSA key size {bits} is outside the supported range {min}..={max}",
        min = MIN_RSA_BITS,
        max = MAX_RSA_BITS
    )]
    KeySize { bits: i64 },
    #[error(transparent)]
    Rsa(#[from] rsa::Error),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no keys to emit")]
    Empty,
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, KeyGenError>;
