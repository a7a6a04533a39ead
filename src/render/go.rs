//! Go renderer: structs with `json` and `yaml` struct tags.

use super::{push_comment, unique_names, Renderer, GENERATED_HEADER};
use crate::config::OutputConfig;
use crate::model::{AliasDecl, FieldDecl, ObjectDecl, Schema};
use crate::types::{declaration_field_name, FieldType, Primitive, TypeExpr};

pub struct GoRenderer {
    package: String,
    comment_width: usize,
    field_comment_width: usize,
}

impl GoRenderer {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            package: output.package.clone(),
            comment_width: output.comment_width,
            field_comment_width: output.field_comment_width,
        }
    }
}

impl Renderer for GoRenderer {
    fn render(&self, schema: &Schema) -> String {
        let mut out = format!("{GENERATED_HEADER}\n\npackage {}\n", self.package);
        for object in &schema.objects {
            self.render_object(&mut out, object);
        }
        for alias in &schema.aliases {
            self.render_alias(&mut out, alias);
        }
        out
    }

    fn file_extension(&self) -> &str {
        "go"
    }
}

impl GoRenderer {
    fn render_object(&self, out: &mut String, object: &ObjectDecl) {
        out.push('\n');
        push_comment(out, &object.comment, "// ", self.comment_width);
        out.push_str(&format!("type {} struct {{\n", object.name));
        let names = unique_names(object.fields.iter().map(|f| declaration_field_name(&f.key)));
        for (field, name) in object.fields.iter().zip(&names) {
            self.render_field(out, field, name);
        }
        out.push_str("}\n");
    }

    fn render_field(&self, out: &mut String, field: &FieldDecl, name: &str) {
        let description = [field.description.clone()];
        push_comment(out, &description, "\t// ", self.field_comment_width);

        let key = if field.required {
            field.key.clone()
        } else {
            format!("{},omitempty", field.key)
        };
        out.push_str(&format!(
            "\t{name} {} `json:\"{key}\" yaml:\"{key}\"`\n",
            field_type(&field.ty),
        ));
    }

    fn render_alias(&self, out: &mut String, alias: &AliasDecl) {
        out.push('\n');
        push_comment(out, &alias.comment, "// ", self.comment_width);
        out.push_str(&format!("type {} {}\n", alias.name, go_type(&alias.target)));
    }
}

/// Go spelling of a resolved type.
pub fn go_type(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Primitive(p) => match p {
            Primitive::String => "string",
            Primitive::Number => "float64",
            Primitive::Boolean => "bool",
            Primitive::Integer => "int",
            Primitive::Any => "interface{}",
        }
        .to_string(),
        TypeExpr::Sequence(inner) => format!("[]{}", go_type(inner)),
        TypeExpr::Map(inner) => format!("map[string]{}", go_type(inner)),
        TypeExpr::Named(name) => name.clone(),
    }
}

fn field_type(ty: &FieldType) -> String {
    match ty {
        FieldType::Reference(name) => format!("*{name}"),
        FieldType::InPlace(t) => go_type(t),
    }
}
