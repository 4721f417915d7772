use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a fingerprint is rendered for humans and editors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralFormat {
    /// Plain signed decimal, e.g. `-1234`.
    Decimal,
    /// Two's-complement bits as `0x` + 16 hex digits.
    Hex,
    /// Kotlin `Long` literal, e.g. `-1234L`.
    #[default]
    Kotlin,
    /// Java `long` literal, e.g. `-1234L`.
    Java,
    /// Full Kotlin companion field declaration.
    KotlinField,
    /// Full Java field declaration.
    JavaField,
}

impl LiteralFormat {
    pub const ALL: [LiteralFormat; 6] = [
        LiteralFormat::Decimal,
        LiteralFormat::Hex,
        LiteralFormat::Kotlin,
        LiteralFormat::Java,
        LiteralFormat::KotlinField,
        LiteralFormat::JavaField,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LiteralFormat::Decimal => "decimal",
            LiteralFormat::Hex => "hex",
            LiteralFormat::Kotlin => "kotlin",
            LiteralFormat::Java => "java",
            LiteralFormat::KotlinField => "kotlin-field",
            LiteralFormat::JavaField => "java-field",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_serde_representation() {
        for format in LiteralFormat::ALL {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{}\"", format.as_str()));
            assert_eq!(LiteralFormat::from_name(format.as_str()), Some(format));
        }
        assert_eq!(LiteralFormat::from_name("octal"), None);
    }
}
