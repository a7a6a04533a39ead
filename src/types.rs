//! Resolution of free-text type annotations from definition tables.
//!
//! The specification writes types for humans: `string`, `[Schema Object]`,
//! `Any | null`, `Path Item Object`. These are turned into a [`TypeExpr`]
//! that each renderer can spell in its own language. Resolution never fails;
//! text that matches no rule becomes a named reference.

use crate::config::{is_special, SpecialType};

/// Scalar types the specification names with a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Integer,
    /// `Any` or `*`: an arbitrary value.
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Primitive(Primitive),
    Sequence(Box<TypeExpr>),
    /// Mapping from string keys to the inner type.
    Map(Box<TypeExpr>),
    /// Another declaration, by its resolved name.
    Named(String),
}

/// How a field holds its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Stored by value.
    InPlace(TypeExpr),
    /// Optional reference to another declared object.
    Reference(String),
}

fn keyword(s: &str) -> Option<TypeExpr> {
    let p = match s {
        "string" => Primitive::String,
        "number" => Primitive::Number,
        "boolean" => Primitive::Boolean,
        "integer" => Primitive::Integer,
        "Any" | "*" => Primitive::Any,
        _ => return None,
    };
    Some(TypeExpr::Primitive(p))
}

/// Resolve a type annotation such as `[Schema Object]` or `string | boolean`.
///
/// Of a union only the first alternative is kept.
pub fn resolve_type_name(raw: &str) -> TypeExpr {
    let s = raw.trim();
    if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        return TypeExpr::Sequence(Box::new(resolve_type_name(inner)));
    }
    if let Some(t) = keyword(s) {
        return t;
    }
    if let Some((first, _)) = s.split_once('|') {
        return resolve_type_name(first);
    }
    let name = object_name(s);
    if name.is_empty() {
        return TypeExpr::Primitive(Primitive::Any);
    }
    TypeExpr::Named(name)
}

/// Declaration name for an object title: "Path Item Object" → "PathItem".
pub fn object_name(title: &str) -> String {
    let title = title.trim();
    title
        .strip_suffix("Object")
        .unwrap_or(title)
        .split_whitespace()
        .collect()
}

/// Decide whether a resolved field type is held by value or by reference.
///
/// Special types are mappings and stay by value. Other names starting with
/// an upper-case letter are declared objects and become optional references.
pub fn resolve_field_type(expr: TypeExpr, specials: &[SpecialType]) -> FieldType {
    match expr {
        TypeExpr::Named(name) if is_special(specials, &name) => {
            FieldType::InPlace(TypeExpr::Named(name))
        }
        TypeExpr::Named(name) if name.chars().next().is_some_and(char::is_uppercase) => {
            FieldType::Reference(name)
        }
        other => FieldType::InPlace(other),
    }
}

/// Exported field identifier: `$ref` → `Ref`, otherwise every word title-cased.
pub fn declaration_field_name(raw: &str) -> String {
    if raw == "$ref" {
        return "Ref".to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut word_start = true;
    for c in raw.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}
