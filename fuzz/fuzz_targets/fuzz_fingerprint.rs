//! Structured fuzz target for the fingerprint engine.
//!
//! Checks that the fingerprint is deterministic, ignores supertype order, and
//! ignores private members.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_fingerprint
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use svuid_domain::model::{
    ClassDeclaration, Constructor, InitializerBlock, Member, MemberKind, Visibility,
};
use svuid_domain::{canonical_bytes, compute_fingerprint};

#[derive(Arbitrary, Debug)]
enum FuzzVisibility {
    Public,
    Protected,
    Private,
    Internal,
}

impl From<FuzzVisibility> for Visibility {
    fn from(v: FuzzVisibility) -> Self {
        match v {
            FuzzVisibility::Public => Visibility::Public,
            FuzzVisibility::Protected => Visibility::Protected,
            FuzzVisibility::Private => Visibility::Private,
            FuzzVisibility::Internal => Visibility::Internal,
        }
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzConstructor {
    name: Option<String>,
    visibility: FuzzVisibility,
    is_abstract: bool,
    is_overridable: bool,
    source_text: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct FuzzMember {
    is_function: bool,
    name: Option<String>,
    visibility: FuzzVisibility,
    is_overridable: bool,
    modifier_text: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct FuzzDeclaration {
    name: Option<String>,
    visibility: FuzzVisibility,
    is_abstract: bool,
    is_inheritable: bool,
    supertypes: Vec<String>,
    primary_constructor: Option<FuzzConstructor>,
    secondary_constructors: Vec<FuzzConstructor>,
    initializer_blocks: Vec<(Option<String>, Option<String>)>,
    members: Vec<FuzzMember>,
}

fn constructor(c: FuzzConstructor) -> Constructor {
    Constructor {
        name: c.name,
        visibility: c.visibility.into(),
        is_abstract: c.is_abstract,
        is_overridable: c.is_overridable,
        source_text: c.source_text,
    }
}

fn declaration(d: FuzzDeclaration) -> ClassDeclaration {
    ClassDeclaration {
        name: d.name,
        visibility: d.visibility.into(),
        is_abstract: d.is_abstract,
        is_inheritable: d.is_inheritable,
        supertypes: d.supertypes,
        primary_constructor: d.primary_constructor.map(constructor),
        secondary_constructors: d.secondary_constructors.into_iter().map(constructor).collect(),
        initializer_blocks: d
            .initializer_blocks
            .into_iter()
            .map(|(name, source_text)| InitializerBlock { name, source_text })
            .collect(),
        members: d
            .members
            .into_iter()
            .map(|m| Member {
                kind: if m.is_function {
                    MemberKind::Function
                } else {
                    MemberKind::Property
                },
                name: m.name,
                visibility: m.visibility.into(),
                is_overridable: m.is_overridable,
                modifier_text: m.modifier_text,
            })
            .collect(),
    }
}

fuzz_target!(|input: FuzzDeclaration| {
    let decl = declaration(input);
    let fingerprint = compute_fingerprint(&decl);
    assert_eq!(fingerprint, compute_fingerprint(&decl));

    let mut reversed = decl.clone();
    reversed.supertypes.reverse();
    assert_eq!(fingerprint, compute_fingerprint(&reversed));

    let mut visible_only = decl.clone();
    visible_only.members.retain(|m| !m.visibility.is_private());
    assert_eq!(canonical_bytes(&decl), canonical_bytes(&visible_only));
});
