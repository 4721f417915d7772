//! Pure structural fingerprinting (no IO).
//!
//! Input: a class declaration snapshot constructed elsewhere.
//! Output: a stable 64-bit fingerprint suitable for `serialVersionUID`.

#![forbid(unsafe_code)]

pub mod digest;
pub mod modifiers;
pub mod writer;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use digest::{DigestAlgorithm, fold_digest};
pub use engine::{
    Fingerprint, canonical_bytes, canonical_hex, compute_fingerprint, compute_fingerprint_with,
    fingerprint_declaration,
};
pub use svuid_types::declaration as model;
