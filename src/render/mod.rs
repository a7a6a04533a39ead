//! Renderer module — trait-based dispatch over output languages.

pub mod go;
pub mod rust;

use crate::config::OutputConfig;
use crate::model::Schema;
use crate::wrap::wrap;
use std::collections::HashSet;
use thiserror::Error;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// This file was generated by specgen. DO NOT EDIT.";

/// Turns an extracted [`Schema`] into source text for one language.
pub trait Renderer {
    fn render(&self, schema: &Schema) -> String;
    fn file_extension(&self) -> &str;
}

#[derive(Debug, Error)]
#[error("unknown target: {0}. Use rust or go")]
pub struct UnknownTarget(pub String);

/// Create a renderer for the given target name.
pub fn create_renderer(
    target: &str,
    output: &OutputConfig,
) -> Result<Box<dyn Renderer>, UnknownTarget> {
    match target {
        "rust" | "rs" => Ok(Box::new(rust::RustRenderer::new(output))),
        "go" => Ok(Box::new(go::GoRenderer::new(output))),
        _ => Err(UnknownTarget(target.to_string())),
    }
}

/// Write `paragraphs` as a comment block, wrapped at `width`.
///
/// Every line gets `prefix`; paragraphs are separated by a bare prefix line.
fn push_comment(out: &mut String, paragraphs: &[String], prefix: &str, width: usize) {
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            out.push_str(prefix.trim_end());
            out.push('\n');
        }
        for line in wrap(paragraph, width) {
            out.push_str(format!("{prefix}{line}").trim_end());
            out.push('\n');
        }
    }
}

/// Identifiers for the fields of one declaration, with repeats suffixed
/// `_2`, `_3`, ... in field order. Distinct keys can map to the same
/// identifier (`$ref` and `reference`).
fn unique_names(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(|name| {
            if seen.insert(name.clone()) {
                return name;
            }
            let base = name.strip_prefix("r#").unwrap_or(&name).to_string();
            (2..)
                .map(|n| format!("{base}_{n}"))
                .find(|candidate| seen.insert(candidate.clone()))
                .unwrap_or(base)
        })
        .collect()
}
