//! Declaration snapshots handed over by the editor integration.
//!
//! A snapshot is a plain value: the integration resolves visibility, modifier
//! flags, supertype text and source ranges once, and the engine only reads the
//! result. Missing JSON fields fall back to their defaults so a sparse snapshot
//! still describes a class.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// Kotlin `internal`, Java package-private. This is the hash baseline.
    #[default]
    #[serde(alias = "package_private")]
    Internal,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    pub fn is_protected(self) -> bool {
        self == Visibility::Protected
    }

    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ClassDeclaration {
    /// Simple name of the class. Absent for degenerate or anonymous inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub visibility: Visibility,
    pub is_abstract: bool,
    /// `open` in Kotlin, non-final in Java.
    pub is_inheritable: bool,
    /// Textual supertype entries, in any order.
    pub supertypes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_constructor: Option<Constructor>,
    pub secondary_constructors: Vec<Constructor>,
    pub initializer_blocks: Vec<InitializerBlock>,
    /// Body properties and functions, interleaved in declaration order.
    pub members: Vec<Member>,
}

impl ClassDeclaration {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn properties(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| m.kind == MemberKind::Property)
    }

    pub fn functions(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| m.kind == MemberKind::Function)
    }

    /// All constructors: primary first, then secondaries in declaration order.
    pub fn constructors(&self) -> impl Iterator<Item = &Constructor> {
        self.primary_constructor
            .iter()
            .chain(self.secondary_constructors.iter())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Constructor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub is_overridable: bool,
    /// Full text of the constructor, so body edits change the fingerprint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
}

impl Constructor {
    pub fn new(visibility: Visibility, source_text: impl Into<String>) -> Self {
        Self {
            visibility,
            source_text: Some(source_text.into()),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct InitializerBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
}

impl InitializerBlock {
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            name: None,
            source_text: Some(source_text.into()),
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    #[default]
    Property,
    Function,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Member {
    pub kind: MemberKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub visibility: Visibility,
    pub is_overridable: bool,
    /// Literal modifier list as written, e.g. `"@Transient public open"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_text: Option<String>,
}

impl Member {
    pub fn property(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            kind: MemberKind::Property,
            name: Some(name.into()),
            visibility,
            ..Self::default()
        }
    }

    pub fn function(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            kind: MemberKind::Function,
            name: Some(name.into()),
            visibility,
            ..Self::default()
        }
    }

    pub fn with_modifier_text(mut self, text: impl Into<String>) -> Self {
        self.modifier_text = Some(text.into());
        self
    }

    pub fn overridable(mut self) -> Self {
        self.is_overridable = true;
        self
    }
}

/// Envelope form of a snapshot document carrying several declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeclarationDocument {
    /// Optional schema string for tooling (`svuid.declaration.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub declarations: Vec<ClassDeclaration>,
}
