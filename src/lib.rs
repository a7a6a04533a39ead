//! specgen: generate typed declarations from the HTML rendition of the
//! Swagger 2.0 specification.
//!
//! Pipeline: HTML → [`dom`] tree → [`walker`] (objects and their field
//! tables, via [`table`] and [`types`]) → [`model::Schema`] → a
//! [`render::Renderer`] for the chosen language.

pub mod config;
pub mod dom;
pub mod error;
pub mod model;
pub mod render;
pub mod table;
pub mod types;
pub mod walker;
pub mod wrap;

use crate::config::Config;
use crate::error::GenerateError;
use crate::model::Schema;
use crate::render::Renderer;

/// Parse `html` and extract its object catalogue.
pub fn extract(html: &str, config: &Config) -> Result<Schema, GenerateError> {
    let dom = dom::parse(html);
    walker::extract(&dom.document, config)
}

/// Extract the catalogue of `html` and render it as one source file.
pub fn generate(
    html: &str,
    config: &Config,
    renderer: &dyn Renderer,
) -> Result<String, GenerateError> {
    let schema = extract(html, config)?;
    Ok(renderer.render(&schema))
}
