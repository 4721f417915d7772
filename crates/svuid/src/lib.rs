//! Structural `serialVersionUID` fingerprints.
//!
//! The editor integration builds a [`ClassDeclaration`] snapshot and receives a
//! stable `i64` back:
//!
//! ```
//! use svuid::{ClassDeclaration, Constructor, Member, Visibility, compute_fingerprint};
//!
//! let decl = ClassDeclaration {
//!     visibility: Visibility::Public,
//!     supertypes: vec!["java.io.Serializable".to_string()],
//!     primary_constructor: Some(Constructor::new(Visibility::Public, "(val id: Long)")),
//!     members: vec![Member::property("id", Visibility::Public).with_modifier_text("public")],
//!     ..ClassDeclaration::named("Account")
//! };
//!
//! assert_eq!(compute_fingerprint(&decl), compute_fingerprint(&decl.clone()));
//! ```

#![forbid(unsafe_code)]

pub use svuid_domain::{
    DigestAlgorithm, Fingerprint, canonical_bytes, canonical_hex, compute_fingerprint,
    compute_fingerprint_with, fingerprint_declaration, fold_digest,
};
pub use svuid_types::{
    ClassDeclaration, Constructor, InitializerBlock, Member, MemberKind, Visibility,
};
