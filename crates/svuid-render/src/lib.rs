//! Rendering utilities for editors and CI surfaces (source literals, Markdown).

#![forbid(unsafe_code)]

mod literal;
mod markdown;

pub use literal::render_literal;
pub use markdown::render_markdown;
