use pem::{EncodeConfig, LineEnding, Pem};

use crate::{crypto::PrivateKey, error::Result};

/// PEM armored form of a [`PrivateKey`], ready to embed in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeyBlock {
    pub label: &'static str,
    pub text: String,
}

fn config() -> EncodeConfig {
    EncodeConfig::new().set_line_ending(LineEnding::LF)
}

/// Wraps the key's DER in a PEM envelope with LF line endings and 64 column
/// base64 lines. The output always ends in a newline.
pub fn encode(key: &PrivateKey) -> Result<EncodedKeyBlock> {
    let label = key.pem_label();
    let block = Pem::new(label, key.to_der()?);

    Ok(EncodedKeyBlock {
        label,
        text: pem::encode_config(&block, config()),
    })
}

/// Returns the armor label and the raw DER bytes.
pub fn decode(text: &str) -> Result<(String, Vec<u8>)> {
    let block = pem::parse(text)?;
    Ok((block.tag().to_string(), block.into_contents()))
}

pub fn decode_key(text: &str) -> Result<PrivateKey> {
    let (label, der) = decode(text)?;
    PrivateKey::from_der(&label, &der)
}
