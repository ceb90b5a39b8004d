//! Key modules generated by the build script, compiled the same way a
//! downstream test crate would compile them.

include!(concat!(env!("OUT_DIR"), "/testkeys.rs"));
include!(concat!(env!("OUT_DIR"), "/strict_keys.rs"));
include!(concat!(env!("OUT_DIR"), "/edited_keys.rs"));
