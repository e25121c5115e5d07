//! Outline reconstruction.
//!
//! A definition matrix is a flat list of rows whose `layer` column encodes
//! nesting. [`TreeBuilder`] rebuilds the implied tree in one forward scan:
//!
//! ```text
//! layer  name           tree
//! 0      User           User
//! 1      id               ├─ id
//! 1      address          └─ address
//! 2      Address              └─ Address
//! 3      zipCode                 └─ zipCode
//! ```
//!
//! At a level with base layer `b`, a row with even layer `b - 1` starts a
//! definition, a row deeper than `b` opens a nested block (recursing with
//! base `b + 2`) owned by the field just read, and any other row at layer
//! `>= b` is a plain field. A row shallower than `b - 1` closes the level.
//! Logically deleted rows are skipped but still consumed.

mod display;

use dtogen_ir::{Definition, Field, RowRecord};

pub use display::{DisplayStyle, OutlineDisplay};

use crate::{Error, Result};

/// Index of the first row of a matrix.
pub const START_INDEX: usize = 0;
/// Base layer of the top-level forest.
pub const BASE_LAYER: usize = 1;
/// Nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// A forest together with the number of rows it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    pub forest: Vec<Definition>,
    /// Rows advanced past from the start index; the caller resumes at
    /// `start + consumed`.
    pub consumed: usize,
}

/// Rebuilds definition trees from matrix rows.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build the forest of one level, starting at `start` with `base_layer`.
    ///
    /// Returns an empty forest when no rows remain.
    pub fn build_forest(
        &self,
        rows: &[RowRecord],
        start: usize,
        base_layer: usize,
    ) -> Result<Outline> {
        self.build_level(rows, start, base_layer, 0)
    }

    /// Build the complete outline of a matrix.
    ///
    /// Fails with [`Error::EmptyDefinition`] when the matrix holds no definition.
    pub fn build_outline(&self, rows: &[RowRecord]) -> Result<Vec<Definition>> {
        let outline = self.build_forest(rows, START_INDEX, BASE_LAYER)?;
        if outline.forest.is_empty() {
            return Err(Error::EmptyDefinition);
        }
        tracing::debug!(
            definitions = outline.forest.len(),
            rows = outline.consumed,
            "outline built"
        );
        Ok(outline.forest)
    }

    fn build_level(
        &self,
        rows: &[RowRecord],
        start: usize,
        base_layer: usize,
        depth: usize,
    ) -> Result<Outline> {
        if depth > self.max_depth {
            return Err(Error::DepthExceeded {
                max_depth: self.max_depth,
                line: rows.get(start).map(|row| row.line),
            });
        }

        let mut level = LevelBuilder::default();
        let mut cursor = start;
        // Layer of the definition headers at this level; none for base layer 0
        let header_layer = base_layer.checked_sub(1);

        while let Some(row) = rows.get(cursor) {
            if row.is_logically_deleted() {
                tracing::trace!(line = row.line, "skipping deleted row");
                cursor += 1;
                continue;
            }

            let layer = parse_layer(row)?;

            if header_layer.is_some_and(|header| layer < header) {
                break;
            }

            if header_layer == Some(layer) && layer % 2 == 0 {
                level.start_definition(row)?;
                cursor += 1;
            } else if layer > base_layer {
                if !level.has_pending_field() {
                    return Err(Error::structural("orphan nested block", Some(row.line)));
                }
                let child_layer = base_layer.checked_add(2).ok_or_else(|| Error::Format {
                    line: row.line,
                    value: row.layer().to_string(),
                })?;
                let nested = self.build_level(rows, cursor, child_layer, depth + 1)?;
                level.attach_children(nested.forest);
                cursor += nested.consumed;
            } else {
                level.push_field(row)?;
                cursor += 1;
            }
        }

        Ok(Outline {
            forest: level.finish()?,
            consumed: cursor - start,
        })
    }
}

/// Build the outline of a matrix with default settings.
pub fn build_outline(rows: &[RowRecord]) -> Result<Vec<Definition>> {
    TreeBuilder::default().build_outline(rows)
}

fn parse_layer(row: &RowRecord) -> Result<usize> {
    row.layer().trim().parse().map_err(|_| Error::Format {
        line: row.line,
        value: row.layer().to_string(),
    })
}

/// Accumulates one level of the forest.
///
/// The most recent field stays pending until the next sibling arrives, so a
/// nested block is attached to the field value itself.
#[derive(Default)]
struct LevelBuilder {
    forest: Vec<Definition>,
    current: Option<OpenDefinition>,
}

struct OpenDefinition {
    definition: Definition,
    line: usize,
    pending: Option<Field>,
}

impl OpenDefinition {
    fn flush(&mut self) {
        if let Some(field) = self.pending.take() {
            self.definition.fields.push(field);
        }
    }

    fn close(mut self) -> Result<Definition> {
        self.flush();
        if self.definition.fields.is_empty() {
            return Err(Error::structural(
                format!("definition '{}' is empty", self.definition.name),
                Some(self.line),
            ));
        }
        Ok(self.definition)
    }
}

impl LevelBuilder {
    fn start_definition(&mut self, row: &RowRecord) -> Result<()> {
        self.close_current()?;
        tracing::debug!(line = row.line, name = row.name(), "definition");
        self.current = Some(OpenDefinition {
            definition: Definition::new(row.name(), row.description()),
            line: row.line,
            pending: None,
        });
        Ok(())
    }

    fn push_field(&mut self, row: &RowRecord) -> Result<()> {
        let current = self
            .current
            .as_mut()
            .ok_or_else(|| Error::structural("field outside definition", Some(row.line)))?;
        current.flush();
        tracing::trace!(line = row.line, name = row.name(), "field");
        current.pending = Some(Field {
            name: row.name().to_string(),
            data_type: row.data_type().to_string(),
            initial_value: row.initial_value().to_string(),
            invariant: row.is_invariant(),
            description: row.description().to_string(),
            children: Vec::new(),
        });
        Ok(())
    }

    fn has_pending_field(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| current.pending.is_some())
    }

    fn attach_children(&mut self, children: Vec<Definition>) {
        if let Some(field) = self
            .current
            .as_mut()
            .and_then(|current| current.pending.as_mut())
        {
            field.children.extend(children);
        }
    }

    fn close_current(&mut self) -> Result<()> {
        if let Some(open) = self.current.take() {
            self.forest.push(open.close()?);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Definition>> {
        self.close_current()?;
        Ok(self.forest)
    }
}
