//! Purpose: Own the validated record set and render it as a text table.
//! Exports: `Table`, `ColumnWidths`.
//! Role: Envelope validation, column-width tracking, and row rendering.
//! Invariants: A load replaces records and widths in one step or not at all;
//! no half-updated table is ever observable.
//! Invariants: Widths stay consistent with the loaded records and never drop
//! below the seeded minimums.
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::record::Record;
use crate::json;

const COLUMN_TITLES: [&str; 4] = ["name", "group", "avg", "debt"];

/// Per-column character widths, seeded at fixed minimums and grown to fit
/// the widest rendered value plus one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnWidths {
    pub name: usize,
    pub group: usize,
    pub avg: usize,
    pub debt: usize,
}

impl ColumnWidths {
    pub const MINIMUMS: ColumnWidths = ColumnWidths {
        name: 15,
        group: 8,
        avg: 6,
        debt: 15,
    };

    fn observe(&mut self, record: &Record) {
        self.name = self.name.max(record.name().len() + 1);
        self.group = self.group.max(record.group().cell_text().len() + 1);
        self.avg = self.avg.max(record.avg_cell_text().len() + 1);
        self.debt = self.debt.max(record.debt().cell_text().len() + 1);
    }
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self::MINIMUMS
    }
}

#[derive(Debug, Default)]
pub struct Table {
    records: Vec<Record>,
    widths: ColumnWidths,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn widths(&self) -> ColumnWidths {
        self.widths
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reads `path` and loads it like [`Table::load_from_text`]. An empty
    /// path is rejected before touching the filesystem.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::new(ErrorKind::Input).with_message("path is empty"));
        }
        let text = fs::read_to_string(path).map_err(|err| {
            Error::new(ErrorKind::Resource)
                .with_message("cannot read roster file")
                .with_path(path)
                .with_source(err)
        })?;
        self.load_from_text(&text)
    }

    /// Parses and validates `text`, then replaces the record set and widths.
    /// Any failure leaves the table exactly as it was.
    pub fn load_from_text(&mut self, text: &str) -> Result<(), Error> {
        let root: Value = json::parse::from_str(text).map_err(|err| {
            Error::new(ErrorKind::Parse)
                .with_message("document is not valid JSON")
                .with_source(err)
        })?;

        let items = validate_envelope(&root)?;

        let mut records = Vec::with_capacity(items.len());
        let mut widths = ColumnWidths::MINIMUMS;
        for (index, item) in items.iter().enumerate() {
            let record = Record::from_value(item).map_err(|err| err.with_record(index))?;
            widths.observe(&record);
            records.push(record);
        }

        tracing::debug!(records = records.len(), "roster loaded");
        self.records = records;
        self.widths = widths;
        Ok(())
    }

    pub fn separator_line(&self) -> String {
        let w = self.widths;
        format!(
            "|{}|{}|{}|{}|",
            "-".repeat(w.name),
            "-".repeat(w.group),
            "-".repeat(w.avg),
            "-".repeat(w.debt)
        )
    }

    /// Header row, separator line, then one row per record, each line
    /// terminated with a newline. Cells are left-aligned and padded to the
    /// current column widths.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let [name, group, avg, debt] = COLUMN_TITLES;
        let _ = writeln!(out, "{}", self.row_line(name, group, avg, debt));
        let _ = writeln!(out, "{}", self.separator_line());
        for record in &self.records {
            let _ = writeln!(
                out,
                "{}",
                self.row_line(
                    record.name(),
                    &record.group().cell_text(),
                    &record.avg_cell_text(),
                    &record.debt().cell_text(),
                )
            );
        }
        out
    }

    fn row_line(&self, name: &str, group: &str, avg: &str, debt: &str) -> String {
        let w = self.widths;
        format!(
            "|{name:<nw$}|{group:<gw$}|{avg:<aw$}|{debt:<dw$}|",
            nw = w.name,
            gw = w.group,
            aw = w.avg,
            dw = w.debt,
        )
    }
}

/// Checks the top-level document shape: an object holding an `items` array
/// and a `_meta.count` integer equal to the array length.
fn validate_envelope(root: &Value) -> Result<&Vec<Value>, Error> {
    let object = root
        .as_object()
        .ok_or_else(|| schema("document root is not a JSON object"))?;

    let items = object
        .get("items")
        .ok_or_else(|| schema("required key `items` is missing"))?
        .as_array()
        .ok_or_else(|| schema("`items` is not an array"))?;

    let count = object
        .get("_meta")
        .and_then(Value::as_object)
        .ok_or_else(|| schema("`_meta` object is missing"))?
        .get("count")
        .and_then(Value::as_i64)
        .ok_or_else(|| schema("`_meta.count` is not an integer"))?;

    if count != items.len() as i64 {
        return Err(schema(format!(
            "`_meta.count` is {count} but `items` holds {} records",
            items.len()
        )));
    }

    Ok(items)
}

fn schema(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Schema).with_message(message.into())
}
