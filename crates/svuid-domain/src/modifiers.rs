//! Modifier words.
//!
//! Every word starts from [`PUBLIC_MASK`] and accumulates one bit per flag.
//! Internal and private visibility add nothing on top of the base value, so
//! they produce the same word.

use svuid_types::{ClassDeclaration, Constructor, Member, Visibility};

pub const PUBLIC_MASK: i32 = 0x0001;
pub const PROTECTED_MASK: i32 = 0x0004;
/// Sentinel written in place of a modifier word for initializer blocks.
pub const INITIALIZER_MARKER: i32 = 0x0008;
pub const ABSTRACT_MASK: i32 = 0x0400;
pub const OPEN_MASK: i32 = 0x2000;

pub const BASE_WORD: i32 = PUBLIC_MASK;

/// Accumulates modifier bits on top of [`BASE_WORD`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModifierWord(i32);

impl Default for ModifierWord {
    fn default() -> Self {
        ModifierWord(BASE_WORD)
    }
}

impl ModifierWord {
    pub fn visibility(self, visibility: Visibility) -> Self {
        match visibility {
            Visibility::Public => ModifierWord(self.0 + PUBLIC_MASK),
            Visibility::Protected => ModifierWord(self.0 + PROTECTED_MASK),
            Visibility::Private | Visibility::Internal => self,
        }
    }

    pub fn flag(self, set: bool, mask: i32) -> Self {
        if set { ModifierWord(self.0 + mask) } else { self }
    }

    pub fn bits(self) -> i32 {
        self.0
    }
}

pub fn class_word(decl: &ClassDeclaration) -> i32 {
    ModifierWord::default()
        .visibility(decl.visibility)
        .flag(decl.is_abstract, ABSTRACT_MASK)
        .flag(decl.is_inheritable, OPEN_MASK)
        .bits()
}

pub fn constructor_word(ctor: &Constructor) -> i32 {
    ModifierWord::default()
        .visibility(ctor.visibility)
        .flag(ctor.is_abstract, ABSTRACT_MASK)
        .flag(ctor.is_overridable, OPEN_MASK)
        .bits()
}

/// Body members never carry the abstract bit.
pub fn member_word(member: &Member) -> i32 {
    ModifierWord::default()
        .visibility(member.visibility)
        .flag(member.is_overridable, OPEN_MASK)
        .bits()
}
