//! Rust renderer: serde structs usable with both serde_json and serde_yaml.
//!
//! Optional fields become `Option<T>` and are skipped when absent, so a
//! document deserialized and serialized again keeps exactly its keys.
//! References to other objects are boxed; the object graph is recursive
//! (a Schema holds Schema items).

use super::{push_comment, unique_names, Renderer, GENERATED_HEADER};
use crate::config::OutputConfig;
use crate::model::{AliasDecl, FieldDecl, ObjectDecl, Schema};
use crate::types::{FieldType, Primitive, TypeExpr};
use regex::Regex;
use std::sync::LazyLock;

const DERIVES: &str = "#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]";

static RE_CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

static RE_NON_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super"];

pub struct RustRenderer {
    comment_width: usize,
    field_comment_width: usize,
}

impl RustRenderer {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            comment_width: output.comment_width,
            field_comment_width: output.field_comment_width,
        }
    }
}

impl Renderer for RustRenderer {
    fn render(&self, schema: &Schema) -> String {
        let mut out = format!(
            "{GENERATED_HEADER}\n\nuse serde::{{Deserialize, Serialize}};\nuse std::collections::BTreeMap;\n"
        );
        for object in &schema.objects {
            self.render_object(&mut out, object);
        }
        for alias in &schema.aliases {
            self.render_alias(&mut out, alias);
        }
        out
    }

    fn file_extension(&self) -> &str {
        "rs"
    }
}

impl RustRenderer {
    fn render_object(&self, out: &mut String, object: &ObjectDecl) {
        out.push('\n');
        push_comment(out, &object.comment, "/// ", self.comment_width);
        out.push_str(DERIVES);
        out.push('\n');
        out.push_str(&format!("pub struct {} {{\n", object.name));
        let names = unique_names(object.fields.iter().map(|f| field_name(&f.key)));
        for (field, name) in object.fields.iter().zip(&names) {
            self.render_field(out, field, name);
        }
        out.push_str("}\n");
    }

    fn render_field(&self, out: &mut String, field: &FieldDecl, name: &str) {
        let description = [field.description.clone()];
        push_comment(out, &description, "    /// ", self.field_comment_width);

        let key = &field.key;
        if field.required {
            out.push_str(&format!("    #[serde(rename = {key:?})]\n"));
        } else {
            out.push_str(&format!(
                "    #[serde(rename = {key:?}, default, skip_serializing_if = \"Option::is_none\")]\n"
            ));
        }
        out.push_str(&format!(
            "    pub {name}: {},\n",
            field_type(&field.ty, field.required)
        ));
    }

    fn render_alias(&self, out: &mut String, alias: &AliasDecl) {
        out.push('\n');
        push_comment(out, &alias.comment, "/// ", self.comment_width);
        out.push_str(&format!("pub type {} = {};\n", alias.name, rust_type(&alias.target)));
    }
}

/// Rust spelling of a resolved type.
pub fn rust_type(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Primitive(p) => match p {
            Primitive::String => "String",
            Primitive::Number => "f64",
            Primitive::Boolean => "bool",
            Primitive::Integer => "i64",
            Primitive::Any => "serde_json::Value",
        }
        .to_string(),
        TypeExpr::Sequence(inner) => format!("Vec<{}>", rust_type(inner)),
        TypeExpr::Map(inner) => format!("BTreeMap<String, {}>", rust_type(inner)),
        TypeExpr::Named(name) => name.clone(),
    }
}

fn field_type(ty: &FieldType, required: bool) -> String {
    let inner = match ty {
        FieldType::Reference(name) => format!("Box<{name}>"),
        FieldType::InPlace(t) => rust_type(t),
    };
    if required {
        inner
    } else {
        format!("Option<{inner}>")
    }
}

/// snake_case field identifier for a serialization key.
///
/// `$ref` becomes `reference`; keywords become raw identifiers.
pub fn field_name(key: &str) -> String {
    if key == "$ref" {
        return "reference".to_string();
    }
    let snake = RE_CAMEL_BOUNDARY.replace_all(key, "${1}_${2}");
    let snake = RE_NON_IDENT
        .replace_all(&snake, "_")
        .trim_matches('_')
        .to_lowercase();

    if snake.is_empty() {
        return "field".to_string();
    }
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{snake}");
    }
    if RESERVED.contains(&snake.as_str()) {
        return format!("{snake}_");
    }
    if KEYWORDS.contains(&snake.as_str()) {
        return format!("r#{snake}");
    }
    snake
}
