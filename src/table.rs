//! Parser for "Fixed Fields" definition tables.
//!
//! Columns are located by header text, so their order does not matter and
//! unknown columns are ignored.

use crate::dom::{by_tag, find, find_all, tag_name, text};
use crate::error::TableError;
use crate::model::FieldRecord;
use markup5ever_rcdom::Handle;

const COL_FIELD_NAME: &str = "Field Name";
const COL_TYPE: &str = "Type";
const COL_VALIDITY: &str = "Validity";
const COL_DESCRIPTION: &str = "Description";

const REQUIRED_PREFIX: &str = "Required. ";

#[derive(Debug)]
pub struct TableParser {
    table: Handle,
    name_index: usize,
    type_index: usize,
    validity_index: Option<usize>,
    description_index: usize,
}

impl TableParser {
    pub fn new(node: &Handle) -> Result<Self, TableError> {
        if tag_name(node) != Some("table") {
            return Err(TableError::NotATable);
        }

        let mut name_index = None;
        let mut type_index = None;
        let mut validity_index = None;
        let mut description_index = None;

        for (i, th) in find_all(node, &by_tag("th")).iter().enumerate() {
            match text(th).as_str() {
                COL_FIELD_NAME => name_index = Some(i),
                COL_TYPE => type_index = Some(i),
                COL_VALIDITY => validity_index = Some(i),
                COL_DESCRIPTION => description_index = Some(i),
                _ => {}
            }
        }

        Ok(Self {
            table: node.clone(),
            name_index: name_index.ok_or(TableError::MissingColumn(COL_FIELD_NAME))?,
            type_index: type_index.ok_or(TableError::MissingColumn(COL_TYPE))?,
            validity_index,
            description_index: description_index
                .ok_or(TableError::MissingColumn(COL_DESCRIPTION))?,
        })
    }

    /// Column of the optional "Validity" header. Located but never emitted.
    pub fn validity_index(&self) -> Option<usize> {
        self.validity_index
    }

    /// Body rows as field records, in row order.
    ///
    /// A table without a body has no fields. Rows without any `<td>` (a
    /// header row that ended up in the body) are skipped; rows that have
    /// cells but fewer than the located columns need are an error.
    pub fn fields(&self) -> Result<Vec<FieldRecord>, TableError> {
        let Some(body) = find(&self.table, &by_tag("tbody")) else {
            return Ok(Vec::new());
        };
        let needed = self
            .name_index
            .max(self.type_index)
            .max(self.description_index)
            + 1;

        let mut fields = Vec::new();
        for (i, row) in find_all(&body, &by_tag("tr")).iter().enumerate() {
            let cells = find_all(row, &by_tag("td"));
            if cells.is_empty() {
                continue;
            }
            if cells.len() < needed {
                return Err(TableError::ShortRow {
                    row: i + 1,
                    cells: cells.len(),
                    needed,
                });
            }
            let (description, required) = strip_required(text(&cells[self.description_index]));
            fields.push(FieldRecord {
                name: text(&cells[self.name_index]),
                type_text: text(&cells[self.type_index]),
                description,
                required,
            });
        }
        Ok(fields)
    }
}

/// Remove the "Required. " marker, reporting whether it was there.
fn strip_required(description: String) -> (String, bool) {
    let mut rest = description.as_str();
    let mut required = false;
    while let Some(stripped) = rest.strip_prefix(REQUIRED_PREFIX) {
        rest = stripped;
        required = true;
    }
    (rest.to_string(), required)
}
