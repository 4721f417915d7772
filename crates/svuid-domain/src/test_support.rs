use svuid_types::{ClassDeclaration, Constructor, Member, Visibility};

/// Public class `Foo` with an unnamed public primary constructor and one
/// public property `x`. Its bytes and fingerprint are pinned in the engine tests.
pub fn foo_class() -> ClassDeclaration {
    ClassDeclaration {
        name: Some("Foo".to_string()),
        visibility: Visibility::Public,
        primary_constructor: Some(Constructor::new(Visibility::Public, "constructor()")),
        members: vec![public_property("x").with_modifier_text("public")],
        ..ClassDeclaration::default()
    }
}

pub fn public_property(name: &str) -> Member {
    Member::property(name, Visibility::Public)
}

pub fn secondary(source_text: &str) -> Constructor {
    Constructor::new(Visibility::Public, source_text)
}
