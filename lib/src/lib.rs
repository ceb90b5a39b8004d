pub const MIN_RSA_BITS: usize = 512;
pub const MAX_RSA_BITS: usize = 16384;
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;
pub const DEFAULT_PACKAGE: &str = "keys";

pub mod armor;
pub mod crypto;
pub mod emit;
pub mod error;
pub mod pipeline;
pub mod spec;

pub use crate::{
    crypto::PrivateKey,
    emit::{EmissionRecord, LoadPolicy},
    error::{KeyGenError, Result},
    pipeline::{Options, generate_source},
    spec::{KeyAlgorithm, KeySpec},
};
