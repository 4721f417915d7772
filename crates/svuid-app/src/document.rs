//! Snapshot documents: a single declaration object or a
//! `{ "schema": ..., "declarations": [...] }` envelope.

use crate::error::LoadError;
use serde_json::Value;
use svuid_types::{ClassDeclaration, DeclarationDocument, ids};

pub fn parse_document(text: &str) -> Result<Vec<ClassDeclaration>, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    let Some(obj) = value.as_object() else {
        return Err(LoadError::NotAnObject);
    };

    if !obj.contains_key("declarations") {
        let decl: ClassDeclaration = serde_json::from_value(value)?;
        return Ok(vec![decl]);
    }

    let doc: DeclarationDocument = serde_json::from_value(value)?;
    if let Some(found) = doc.schema
        && found != ids::SCHEMA_DECLARATION_V1
    {
        return Err(LoadError::UnsupportedSchema {
            found,
            expected: ids::SCHEMA_DECLARATION_V1,
        });
    }
    Ok(doc.declarations)
}
