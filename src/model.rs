//! Extracted schema model, independent of any output language.

use crate::types::{FieldType, TypeExpr};

/// One row of a definitions table, as written in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    pub name: String,
    /// Raw type annotation, e.g. "[Schema Object]".
    pub type_text: String,
    /// Description with any "Required. " marker removed.
    pub description: String,
    pub required: bool,
}

/// Everything extracted from one document, in emission order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Schema {
    /// Objects scraped from tables, in document order.
    pub objects: Vec<ObjectDecl>,
    /// Mapping types from the special-type table, in configuration order.
    pub aliases: Vec<AliasDecl>,
}

/// A record type scraped from a heading and its field table.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDecl {
    pub name: String,
    /// Paragraphs that followed the heading, one entry per paragraph.
    pub comment: Vec<String>,
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Key used by both serialization formats.
    pub key: String,
    pub ty: FieldType,
    pub description: String,
    pub required: bool,
}

/// A special type, declared as a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasDecl {
    pub name: String,
    pub comment: Vec<String>,
    pub target: TypeExpr,
}

impl Schema {
    pub fn object(&self, name: &str) -> Option<&ObjectDecl> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn alias(&self, name: &str) -> Option<&AliasDecl> {
        self.aliases.iter().find(|a| a.name == name)
    }
}

impl ObjectDecl {
    pub fn field(&self, key: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.key == key)
    }
}
