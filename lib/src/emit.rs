//! Renders a Rust module that rebuilds the embedded keys when the consuming
//! program loads.
//!
//! The generated module needs `rsa` and `static_init` in the consumer's
//! dependencies. Each key is a `#[dynamic]` static, which `static_init`
//! initializes before `main` (or on first access on platforms without load
//! time constructors).

use std::fmt::Write;

use crate::{
    armor::EncodedKeyBlock,
    error::{RenderError, Result},
    spec::{KeyAlgorithm, ensure_unique},
};

pub const HEADER: &str = "// Generated by gen-test-keys. DO NOT EDIT.";

/// What the generated code does with an embedded block it cannot decode.
///
/// Blocks are written and read back by this crate before rendering, so a
/// decoding failure at load time means the file was edited by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Keys are `Option`s; a malformed block leaves its key `None`.
    #[default]
    Lenient,
    /// Keys are bare values; a malformed block panics at load time.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionRecord {
    pub identifier: String,
    pub algorithm: KeyAlgorithm,
    pub block: EncodedKeyBlock,
}

struct Decoder {
    imports: &'static [&'static str],
    key_type: &'static str,
    helper: &'static str,
    parse: &'static str,
}

fn decoder(algorithm: &KeyAlgorithm) -> Decoder {
    match algorithm {
        KeyAlgorithm::Rsa { .. } => Decoder {
            imports: &["rsa::{RsaPrivateKey, pkcs1::DecodeRsaPrivateKey}"],
            key_type: "RsaPrivateKey",
            helper: "rsa_key",
            parse: "RsaPrivateKey::from_pkcs1_pem(enc)",
        },
    }
}

fn value_type(policy: LoadPolicy, key_type: &str) -> String {
    match policy {
        LoadPolicy::Lenient => format!("Option<{key_type}>"),
        LoadPolicy::Strict => key_type.to_string(),
    }
}

/// Renders the module `package` declaring one static per record, in record
/// order. Pure: the same input always produces the same text.
pub fn render(package: &str, records: &[EmissionRecord], policy: LoadPolicy) -> Result<String> {
    if records.is_empty() {
        return Err(RenderError::Empty.into());
    }
    ensure_unique(records.iter().map(|r| r.identifier.as_str()))?;

    let mut decoders: Vec<Decoder> = vec![];
    for record in records {
        let d = decoder(&record.algorithm);
        if !decoders.iter().any(|seen| seen.helper == d.helper) {
            decoders.push(d);
        }
    }

    let mut out = String::new();
    write_module(&mut out, package, records, &decoders, policy).map_err(RenderError::from)?;

    tracing::debug!(package, keys = records.len(), bytes = out.len(), "rendered key module");
    Ok(out)
}

fn write_module(
    out: &mut String,
    package: &str,
    records: &[EmissionRecord],
    decoders: &[Decoder],
    policy: LoadPolicy,
) -> std::fmt::Result {
    writeln!(out, "{HEADER}")?;
    writeln!(out)?;
    writeln!(out, "#[allow(non_upper_case_globals)]")?;
    writeln!(out, "pub mod {package} {{")?;

    for d in decoders {
        for import in d.imports {
            writeln!(out, "    use {import};")?;
        }
    }
    writeln!(out, "    use static_init::dynamic;")?;

    for d in decoders {
        writeln!(out)?;
        write_helper(out, d, policy)?;
    }

    for record in records {
        let d = decoder(&record.algorithm);
        writeln!(out)?;
        writeln!(out, "    #[dynamic]")?;
        writeln!(
            out,
            "    pub static {}: {} = {}(",
            record.identifier,
            value_type(policy, d.key_type),
            d.helper
        )?;
        writeln!(out, "        {:?},", record.identifier)?;
        writeln!(out, "        r\"{}\",", record.block.text)?;
        writeln!(out, "    );")?;
    }

    writeln!(out, "}}")
}

fn write_helper(out: &mut String, d: &Decoder, policy: LoadPolicy) -> std::fmt::Result {
    let Decoder {
        key_type,
        helper,
        parse,
        ..
    } = d;

    match policy {
        LoadPolicy::Lenient => {
            writeln!(
                out,
                "    // Blocks below were produced together with this file and are trusted.\n    \
                 // One that fails to decode leaves its key as `None`."
            )?;
            writeln!(out, "    fn {helper}(_name: &str, enc: &str) -> Option<{key_type}> {{")?;
            writeln!(out, "        {parse}.ok()")?;
            writeln!(out, "    }}")
        }
        LoadPolicy::Strict => {
            writeln!(out, "    fn {helper}(name: &str, enc: &str) -> {key_type} {{")?;
            writeln!(out, "        match {parse} {{")?;
            writeln!(out, "            Ok(key) => key,")?;
            writeln!(
                out,
                "            Err(e) => panic!(\"embedded key `{{name}}` is malformed: {{e}}\"),"
            )?;
            writeln!(out, "        }}")?;
            writeln!(out, "    }}")
        }
    }
}
