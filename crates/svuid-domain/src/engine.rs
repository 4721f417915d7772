use crate::digest::{DigestAlgorithm, fold_digest};
use crate::modifiers::{INITIALIZER_MARKER, class_word, constructor_word, member_word};
use crate::writer::CanonicalWriter;
use svuid_types::{ClassDeclaration, Constructor, Member};

/// A fingerprint together with the size of the byte sequence it was taken over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fingerprint {
    pub value: i64,
    pub canonical_len: usize,
}

/// Fingerprint a declaration with the default digest (SHA-256).
pub fn compute_fingerprint(decl: &ClassDeclaration) -> i64 {
    compute_fingerprint_with(decl, DigestAlgorithm::default())
}

pub fn compute_fingerprint_with(decl: &ClassDeclaration, algorithm: DigestAlgorithm) -> i64 {
    fingerprint_declaration(decl, algorithm).value
}

/// Serializes `decl` once and reports both the fingerprint and the byte count.
pub fn fingerprint_declaration(
    decl: &ClassDeclaration,
    algorithm: DigestAlgorithm,
) -> Fingerprint {
    let bytes = canonical_bytes(decl);
    let value = fold_digest(&algorithm.digest(&bytes));

    tracing::debug!(
        class = decl.name.as_deref().unwrap_or_default(),
        canonical_len = bytes.len(),
        digest = %algorithm,
        fingerprint = value,
        "computed structural fingerprint"
    );

    Fingerprint {
        value,
        canonical_len: bytes.len(),
    }
}

/// The exact byte sequence that gets digested.
///
/// Ordering:
/// 1) class header (name, modifier word, sorted supertypes)
/// 2) primary constructor, then secondary constructors
/// 3) initializer blocks
/// 4) non-private properties, then non-private functions
pub fn canonical_bytes(decl: &ClassDeclaration) -> Vec<u8> {
    let mut out = CanonicalWriter::new();

    write_class_header(&mut out, decl);
    for ctor in decl.constructors() {
        write_constructor(&mut out, ctor);
    }
    for block in &decl.initializer_blocks {
        out.write_string(block.name.as_deref());
        out.write_int32(INITIALIZER_MARKER);
        out.write_string(block.source_text.as_deref());
    }
    for member in decl.properties().chain(decl.functions()) {
        write_member(&mut out, member);
    }

    out.into_bytes()
}

/// [`canonical_bytes`] as lowercase hex, for debugging golden vectors.
pub fn canonical_hex(decl: &ClassDeclaration) -> String {
    hex::encode(canonical_bytes(decl))
}

fn write_class_header(out: &mut CanonicalWriter, decl: &ClassDeclaration) {
    out.write_string(decl.name.as_deref());
    out.write_int32(class_word(decl));

    let mut supertypes: Vec<&str> = decl.supertypes.iter().map(String::as_str).collect();
    supertypes.sort_unstable();
    out.write_string(Some(&supertypes.join(" ")));
}

fn write_constructor(out: &mut CanonicalWriter, ctor: &Constructor) {
    out.write_string(ctor.name.as_deref());
    out.write_int32(constructor_word(ctor));
    out.write_string(ctor.source_text.as_deref());
}

fn write_member(out: &mut CanonicalWriter, member: &Member) {
    if member.visibility.is_private() {
        return;
    }
    out.write_string(member.name.as_deref());
    out.write_int32(member_word(member));
    out.write_string(member.modifier_text.as_deref());
}
