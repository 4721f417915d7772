//! Stable schema identifiers.
//!
//! Each identifier is a dotted namespace ending with a version suffix.

pub const SCHEMA_DECLARATION_V1: &str = "svuid.declaration.v1";
pub const SCHEMA_REPORT_V1: &str = "svuid.report.v1";
pub const SCHEMA_CONFIG_V1: &str = "svuid.config.v1";

/// Name used for unnamed classes in human-facing output.
pub const ANONYMOUS_CLASS: &str = "<anonymous>";
