use std::{collections::HashSet, fmt, str::FromStr};

use crate::error::{KeyGenError, Result};

/// Key family plus its family-specific parameter.
///
/// RSA sizes are kept signed and unchecked; the generator owns range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    Rsa { bits: i64 },
}

impl KeyAlgorithm {
    pub fn tag(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa { .. } => "rsa",
        }
    }

    fn from_parts(tag: &str, parameter: &str) -> Result<Self> {
        match tag {
            "rsa" => Ok(KeyAlgorithm::Rsa {
                bits: parameter.parse()?,
            }),
            _ => Err(KeyGenError::UnsupportedAlgorithm(tag.to_string())),
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Rsa { bits } => write!(f, "rsa:{bits}"),
        }
    }
}

/// A parsed `identifier:algorithm:parameter` request for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    pub identifier: String,
    pub algorithm: KeyAlgorithm,
}

impl KeySpec {
    pub fn parse(spec: &str) -> Result<Self> {
        let parts: Vec<&str> = spec.split(':').collect();
        let [identifier, tag, parameter] = parts[..] else {
            return Err(KeyGenError::MalformedSpec(spec.to_string()));
        };

        Ok(Self {
            identifier: identifier.to_string(),
            algorithm: KeyAlgorithm::from_parts(tag, parameter)?,
        })
    }
}

impl FromStr for KeySpec {
    type Err = KeyGenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.identifier, self.algorithm)
    }
}

/// Fails on the first identifier that has already been seen.
pub fn ensure_unique<'a>(identifiers: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for identifier in identifiers {
        if !seen.insert(identifier) {
            return Err(KeyGenError::DuplicateIdentifier(identifier.to_string()));
        }
    }
    Ok(())
}
