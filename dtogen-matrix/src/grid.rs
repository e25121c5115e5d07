//! Raw grid extraction from CSV files or inline tables.

use std::{io, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{Error, MatrixConfig, Result};

/// Header plus data rows, before column mapping.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub header: Vec<String>,
    pub rows: Vec<GridRow>,
}

/// One data row of the grid.
#[derive(Debug, Clone)]
pub struct GridRow {
    /// 1-based line in the source.
    pub line: usize,
    pub cells: Vec<String>,
}

impl GridRow {
    /// Cell at `index`, or `""` for short rows.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or_default()
    }

    fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}

impl Grid {
    /// Load the grid described by a `[matrix]` table.
    pub fn load(config: &MatrixConfig, base_dir: &Path) -> Result<Self> {
        let delimiter = match config.delimiter {
            None => b',',
            Some(c) => u8::try_from(c)
                .ok()
                .filter(u8::is_ascii)
                .ok_or_else(|| Box::new(Error::InvalidDelimiter { delimiter: c }))?,
        };

        match (&config.path, &config.header) {
            (Some(path), _) => Self::read_csv(&base_dir.join(path), delimiter),
            (None, Some(header)) => Ok(Self::inline(header, &config.rows)),
            (None, None) => Err(Box::new(Error::EmptyMatrix)),
        }
    }

    /// Read a CSV file whose first record is the header.
    pub fn read_csv(path: &Path, delimiter: u8) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        tracing::debug!(path = %path.display(), "reading matrix");
        Self::from_reader(file, delimiter).map_err(|source| {
            Box::new(Error::Csv {
                path: path.to_path_buf(),
                source,
            })
        })
    }

    /// Parse CSV from any reader.
    pub fn from_reader(reader: impl io::Read, delimiter: u8) -> csv::Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let header = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let line = record_line(&record).unwrap_or(index + 2);
            let row = GridRow {
                line,
                cells: record.iter().map(str::to_string).collect(),
            };
            if row.is_blank() {
                tracing::trace!(line, "skipping blank row");
                continue;
            }
            rows.push(row);
        }

        Ok(Self { header, rows })
    }

    /// Build a grid from an inline `header` and `rows`.
    pub fn inline(header: &[String], rows: &[Vec<toml::Value>]) -> Self {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(index, cells)| GridRow {
                line: index + 1,
                cells: cells.iter().map(toml_value_to_string).collect(),
            })
            .filter(|row| !row.is_blank())
            .collect();

        Self {
            header: header.iter().map(|h| h.trim().to_string()).collect(),
            rows,
        }
    }
}

fn record_line(record: &StringRecord) -> Option<usize> {
    record
        .position()
        .and_then(|pos| usize::try_from(pos.line()).ok())
}

/// Convert a TOML cell to its string representation
fn toml_value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.trim().to_string(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        // `true` marks a flag cell; `false` must read as blank
        toml::Value::Boolean(true) => "true".to_string(),
        _ => String::new(),
    }
}
