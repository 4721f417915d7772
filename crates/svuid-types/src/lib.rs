//! Stable DTOs and IDs used across the svuid workspace.
//!
//! This crate is intentionally boring:
//! - the declaration snapshot handed over by the editor integration
//! - the emitted fingerprint report
//! - stable schema IDs and literal format names

#![forbid(unsafe_code)]

pub mod declaration;
pub mod format;
pub mod ids;
pub mod report;

pub use declaration::{
    ClassDeclaration, Constructor, DeclarationDocument, InitializerBlock, Member, MemberKind,
    Visibility,
};
pub use format::LiteralFormat;
pub use report::{FingerprintEntry, FingerprintReport, ToolMeta};
