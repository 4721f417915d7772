//! Fuzz target for declaration snapshot parsing.
//!
//! Goal: loading and fingerprinting a snapshot should **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_declaration_json
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(declarations) = svuid_app::parse_document(text)
    {
        for decl in &declarations {
            let _ = svuid_domain::canonical_bytes(decl);
            let _ = svuid_domain::compute_fingerprint(decl);
        }
    }
});
