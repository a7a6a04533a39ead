//! Section walker. Turns the object catalogue of the document into a [`Schema`].
//!
//! The catalogue starts at the heading that links to the configured anchor
//! (`#schema`) and runs over that heading's following siblings until a
//! heading of the same or a higher level. Inside it:
//!
//! - a heading one level down opens an object ("Swagger Object" → `Swagger`)
//!   and is followed by the paragraphs that make up its comment;
//! - a heading two levels down reading "Fixed Fields" points at the table
//!   that lists the object's fields.
//!
//! The walk is a small state machine driven by the tag of each sibling.

use crate::config::{is_special, Config};
use crate::dom::{
    by_tag, find, following_siblings, has_attr, has_child, heading_level, is_element,
    next_sibling, tag_name, text,
};
use crate::error::GenerateError;
use crate::model::{AliasDecl, FieldDecl, ObjectDecl, Schema};
use crate::table::TableParser;
use crate::types::{object_name, resolve_field_type, resolve_type_name};
use markup5ever_rcdom::Handle;
use std::collections::HashMap;
use std::ops::ControlFlow;
use tracing::{debug, info, warn};

/// Section level assumed when the anchor element is not itself a heading.
const DEFAULT_SECTION_LEVEL: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any object, or done with the current one.
    ScanningForHeading,
    /// Right after an object heading, collecting its paragraphs.
    AccumulatingComment,
    /// Comment done; waiting for the "Fixed Fields" heading.
    AwaitingTable,
}

/// Paragraphs captured under each object heading during one run.
#[derive(Debug, Default)]
pub struct Comments {
    by_object: HashMap<String, Vec<String>>,
}

impl Comments {
    fn reset(&mut self, object: &str) {
        self.by_object.insert(object.to_string(), Vec::new());
    }

    fn push(&mut self, object: &str, paragraph: String) {
        self.by_object
            .entry(object.to_string())
            .or_default()
            .push(paragraph);
    }

    pub fn get(&self, object: &str) -> &[String] {
        self.by_object.get(object).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The object whose heading was seen last.
#[derive(Debug)]
struct CurrentObject {
    name: String,
    heading: Handle,
}

struct SectionWalker<'a> {
    config: &'a Config,
    section_level: u8,
    state: State,
    current: Option<CurrentObject>,
    comments: Comments,
    schema: Schema,
}

/// Extract every object declaration from a parsed document.
pub fn extract(root: &Handle, config: &Config) -> Result<Schema, GenerateError> {
    let anchor = find_anchor(root, &config.layout.anchor_href).ok_or_else(|| {
        GenerateError::AnchorNotFound {
            href: config.layout.anchor_href.clone(),
        }
    })?;
    let section_level = heading_level(&anchor).unwrap_or(DEFAULT_SECTION_LEVEL);
    debug!(section_level, "found schema anchor");

    let mut walker = SectionWalker::new(config, section_level);
    for node in following_siblings(&anchor) {
        if walker.step(&node)?.is_break() {
            break;
        }
    }
    walker.finish()
}

/// The element that has a direct `<a href="{href}">` child.
fn find_anchor(root: &Handle, href: &str) -> Option<Handle> {
    let link = |n: &Handle| tag_name(n) == Some("a") && has_attr(n, "href", href);
    find(root, &|n: &Handle| has_child(n, &link))
}

impl<'a> SectionWalker<'a> {
    fn new(config: &'a Config, section_level: u8) -> Self {
        Self {
            config,
            section_level,
            state: State::ScanningForHeading,
            current: None,
            comments: Comments::default(),
            schema: Schema::default(),
        }
    }

    fn step(&mut self, node: &Handle) -> Result<ControlFlow<()>, GenerateError> {
        if !is_element(node) {
            return Ok(ControlFlow::Continue(()));
        }
        let level = heading_level(node);

        if self.state == State::AccumulatingComment {
            if tag_name(node) == Some("p") {
                self.push_paragraph(node);
                return Ok(ControlFlow::Continue(()));
            }
            self.end_comment()?;
        }

        match level {
            Some(l) if l <= self.section_level => return Ok(ControlFlow::Break(())),
            Some(l) if l == self.section_level + 1 => self.open_object(node),
            Some(l) if l == self.section_level + 2 && self.state == State::AwaitingTable => {
                if text(node) == self.config.layout.fixed_fields_heading {
                    self.fixed_fields(node)?;
                }
            }
            _ => {}
        }
        Ok(ControlFlow::Continue(()))
    }

    fn open_object(&mut self, heading: &Handle) {
        let name = object_name(&text(heading));
        debug!(object = %name, "object heading");
        self.comments.reset(&name);
        self.current = Some(CurrentObject {
            name,
            heading: heading.clone(),
        });
        self.state = State::AccumulatingComment;
    }

    fn push_paragraph(&mut self, p: &Handle) {
        if let Some(current) = &self.current {
            self.comments.push(&current.name, text(p));
        }
    }

    /// Leave the comment state. Objects listed as eager get their table
    /// parsed now, since no "Fixed Fields" heading will announce it.
    fn end_comment(&mut self) -> Result<(), GenerateError> {
        self.state = State::AwaitingTable;
        let Some(current) = &self.current else {
            return Ok(());
        };
        let eager = self
            .config
            .layout
            .eager_table_objects
            .iter()
            .any(|n| *n == current.name);
        if eager && !self.is_special(&current.name) {
            let heading = current.heading.clone();
            self.emit_object(&heading)?;
        }
        Ok(())
    }

    fn fixed_fields(&mut self, trigger: &Handle) -> Result<(), GenerateError> {
        let Some(current) = &self.current else {
            return Ok(());
        };
        if self.is_special(&current.name) {
            debug!(object = %current.name, "special type, table skipped");
            self.state = State::ScanningForHeading;
            return Ok(());
        }
        self.emit_object(trigger)
    }

    /// Parse the first table after `from` into a declaration for the current object.
    fn emit_object(&mut self, from: &Handle) -> Result<(), GenerateError> {
        self.state = State::ScanningForHeading;
        let Some(current) = &self.current else {
            return Ok(());
        };
        let name = current.name.clone();

        let table = next_sibling(from, &by_tag("table")).ok_or_else(|| {
            GenerateError::TableNotFound {
                object: name.clone(),
            }
        })?;
        let table_error = |source| GenerateError::Table {
            object: name.clone(),
            source,
        };
        let records = TableParser::new(&table)
            .and_then(|p| p.fields())
            .map_err(table_error)?;

        if self.schema.object(&name).is_some() {
            warn!(object = %name, "duplicate object declaration skipped");
            return Ok(());
        }

        let specials = &self.config.special_types;
        let fields = records
            .into_iter()
            .map(|r| FieldDecl {
                ty: resolve_field_type(resolve_type_name(&r.type_text), specials),
                key: r.name,
                description: r.description,
                required: r.required,
            })
            .collect::<Vec<_>>();
        debug!(object = %name, fields = fields.len(), "object declared");

        self.schema.objects.push(ObjectDecl {
            comment: self.comments.get(&name).to_vec(),
            name,
            fields,
        });
        Ok(())
    }

    fn finish(mut self) -> Result<Schema, GenerateError> {
        if self.state == State::AccumulatingComment {
            self.end_comment()?;
        }

        for special in &self.config.special_types {
            if self.schema.alias(&special.name).is_some() {
                warn!(alias = %special.name, "special type listed twice, skipped");
                continue;
            }
            let comment = self.comments.get(&special.name).to_vec();
            if comment.is_empty() {
                warn!(alias = %special.name, "special type has no description");
            }
            self.schema.aliases.push(AliasDecl {
                name: special.name.clone(),
                comment,
                target: special.target(),
            });
        }

        info!(
            objects = self.schema.objects.len(),
            aliases = self.schema.aliases.len(),
            "schema extracted"
        );
        Ok(self.schema)
    }

    fn is_special(&self, name: &str) -> bool {
        is_special(&self.config.special_types, name)
    }
}
