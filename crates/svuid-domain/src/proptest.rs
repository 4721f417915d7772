//! Property-based tests for the fingerprint engine.
//!
//! These tests use proptest to verify invariants around:
//! - Determinism of the canonical serialization
//! - Normalization of supertype order
//! - Invisibility of private members
//! - Sensitivity to declaration order and modifiers

use crate::digest::fold_digest;
use crate::engine::{canonical_bytes, compute_fingerprint};
use proptest::prelude::*;
use svuid_types::{
    ClassDeclaration, Constructor, InitializerBlock, Member, MemberKind, Visibility,
};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,15}").unwrap()
}

/// Free-form text, including NUL and non-BMP characters.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[ -~]{0,40}").unwrap(),
        any::<String>(),
    ]
}

fn arb_visibility() -> impl Strategy<Value = Visibility> {
    prop_oneof![
        Just(Visibility::Public),
        Just(Visibility::Protected),
        Just(Visibility::Private),
        Just(Visibility::Internal),
    ]
}

fn arb_non_private_visibility() -> impl Strategy<Value = Visibility> {
    prop_oneof![
        Just(Visibility::Public),
        Just(Visibility::Protected),
        Just(Visibility::Internal),
    ]
}

fn arb_constructor() -> impl Strategy<Value = Constructor> {
    (
        prop::option::of(arb_identifier()),
        arb_visibility(),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(arb_text()),
    )
        .prop_map(
            |(name, visibility, is_abstract, is_overridable, source_text)| Constructor {
                name,
                visibility,
                is_abstract,
                is_overridable,
                source_text,
            },
        )
}

fn arb_initializer() -> impl Strategy<Value = InitializerBlock> {
    (prop::option::of(arb_identifier()), prop::option::of(arb_text()))
        .prop_map(|(name, source_text)| InitializerBlock { name, source_text })
}

fn arb_member() -> impl Strategy<Value = Member> {
    (
        prop_oneof![Just(MemberKind::Property), Just(MemberKind::Function)],
        prop::option::of(arb_identifier()),
        arb_visibility(),
        any::<bool>(),
        prop::option::of(arb_text()),
    )
        .prop_map(
            |(kind, name, visibility, is_overridable, modifier_text)| Member {
                kind,
                name,
                visibility,
                is_overridable,
                modifier_text,
            },
        )
}

fn arb_declaration() -> impl Strategy<Value = ClassDeclaration> {
    (
        prop::option::of(arb_identifier()),
        arb_visibility(),
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec(arb_identifier(), 0..5),
        prop::option::of(arb_constructor()),
        prop::collection::vec(arb_constructor(), 0..4),
        prop::collection::vec(arb_initializer(), 0..3),
        prop::collection::vec(arb_member(), 0..8),
    )
        .prop_map(
            |(
                name,
                visibility,
                is_abstract,
                is_inheritable,
                supertypes,
                primary_constructor,
                secondary_constructors,
                initializer_blocks,
                members,
            )| ClassDeclaration {
                name,
                visibility,
                is_abstract,
                is_inheritable,
                supertypes,
                primary_constructor,
                secondary_constructors,
                initializer_blocks,
                members,
            },
        )
}

// ============================================================================
// Property tests: determinism and normalization
// ============================================================================

proptest! {
    #[test]
    fn fingerprint_is_deterministic(decl in arb_declaration()) {
        prop_assert_eq!(canonical_bytes(&decl), canonical_bytes(&decl.clone()));
        prop_assert_eq!(compute_fingerprint(&decl), compute_fingerprint(&decl));
    }

    #[test]
    fn supertype_permutations_share_a_fingerprint(
        (decl, shuffled) in arb_declaration().prop_flat_map(|decl| {
            let supertypes = decl.supertypes.clone();
            (Just(decl), Just(supertypes).prop_shuffle())
        })
    ) {
        let permuted = ClassDeclaration {
            supertypes: shuffled,
            ..decl.clone()
        };
        prop_assert_eq!(compute_fingerprint(&decl), compute_fingerprint(&permuted));
    }

    #[test]
    fn private_members_never_contribute(
        decl in arb_declaration(),
        extra in arb_member(),
        index in any::<prop::sample::Index>(),
    ) {
        let hidden = Member {
            visibility: Visibility::Private,
            ..extra
        };
        let mut with_hidden = decl.clone();
        let at = index.index(with_hidden.members.len() + 1);
        with_hidden.members.insert(at, hidden);

        prop_assert_eq!(canonical_bytes(&decl), canonical_bytes(&with_hidden));
    }

    #[test]
    fn visible_members_always_contribute(
        decl in arb_declaration(),
        name in arb_identifier(),
        visibility in arb_non_private_visibility(),
    ) {
        let mut with_member = decl.clone();
        with_member.members.push(Member::property(name, visibility));

        prop_assert!(canonical_bytes(&with_member).len() > canonical_bytes(&decl).len());
        prop_assert_ne!(compute_fingerprint(&decl), compute_fingerprint(&with_member));
    }

    #[test]
    fn abstract_flag_is_observed(decl in arb_declaration()) {
        let flipped = ClassDeclaration {
            is_abstract: !decl.is_abstract,
            ..decl.clone()
        };
        prop_assert_ne!(compute_fingerprint(&decl), compute_fingerprint(&flipped));
    }

    #[test]
    fn swapping_distinct_secondary_constructors_changes_fingerprint(
        decl in arb_declaration(),
        a in arb_text(),
        b in arb_text(),
    ) {
        prop_assume!(a != b);
        let forward = ClassDeclaration {
            secondary_constructors: vec![
                Constructor::new(Visibility::Public, a.clone()),
                Constructor::new(Visibility::Public, b.clone()),
            ],
            ..decl.clone()
        };
        let backward = ClassDeclaration {
            secondary_constructors: vec![
                Constructor::new(Visibility::Public, b),
                Constructor::new(Visibility::Public, a),
            ],
            ..decl
        };
        prop_assert_ne!(compute_fingerprint(&forward), compute_fingerprint(&backward));
    }
}

// ============================================================================
// Property tests: digest folding
// ============================================================================

proptest! {
    #[test]
    fn fold_only_reads_the_first_eight_bytes(
        head in prop::collection::vec(any::<u8>(), 8),
        tail in prop::collection::vec(any::<u8>(), 0..56),
    ) {
        let mut full = head.clone();
        full.extend_from_slice(&tail);
        prop_assert_eq!(fold_digest(&head), fold_digest(&full));
    }

    #[test]
    fn fold_of_short_digest_fits_its_width(bytes in prop::collection::vec(any::<u8>(), 0..8)) {
        let folded = fold_digest(&bytes) as u64;
        let width = bytes.len() * 8;
        prop_assert!(folded < (1u64 << width));
        prop_assert_eq!(folded.to_le_bytes()[..bytes.len()].to_vec(), bytes);
    }
}
