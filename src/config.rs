//! Generator configuration.
//!
//! `defaults/specgen.default.toml` is embedded in the binary. A user file
//! passed with `--config` is layered on top through [`Loader`] before the
//! result is deserialized into [`Config`].

use crate::types::{resolve_type_name, TypeExpr};
use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/specgen.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub layout: LayoutConfig,
    pub output: OutputConfig,
    pub special_types: Vec<SpecialType>,
}

/// Structural conventions of the scraped document.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Fragment linked from the heading that opens the object catalogue.
    pub anchor_href: String,
    pub fixed_fields_heading: String,
    /// Objects whose table follows their heading without a trigger heading.
    pub eager_table_objects: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Package name for targets that declare one.
    pub package: String,
    pub comment_width: usize,
    pub field_comment_width: usize,
}

/// An object declared as a mapping from string keys to `value` instead of
/// being scraped from a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpecialType {
    pub name: String,
    /// Value type, written the way the document writes types.
    pub value: String,
}

impl SpecialType {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The declared type: a mapping from string to the resolved value.
    pub fn target(&self) -> TypeExpr {
        TypeExpr::Map(Box::new(resolve_type_name(&self.value)))
    }
}

pub fn is_special(specials: &[SpecialType], name: &str) -> bool {
    specials.iter().any(|t| t.name == name)
}

/// Layers configuration sources over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = ::config::Config::builder()
            .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file. A missing file is an error at [`Loader::build`].
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<Config, ConfigError> {
    Loader::new().build()
}
