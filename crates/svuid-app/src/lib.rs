//! Use case orchestration for svuid.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It is intentionally thin and delegates heavy lifting to the appropriate
//! layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod bytes;
mod document;
mod error;
mod fingerprint;
mod report;

pub use bytes::{CanonicalDump, run_bytes};
pub use document::parse_document;
pub use error::LoadError;
pub use fingerprint::{FingerprintInput, FingerprintOutput, run_fingerprint};
pub use report::{parse_report_json, serialize_report};
pub use svuid_render::render_markdown;
pub use svuid_settings::Overrides;
