//! CSV parsing and row-set extraction.

use serde::Serialize;
use tracing::warn;

use super::ComparableSet;
use crate::error::DiffError;

/// Separator placed between column values when a row is rendered.
pub const ROW_SEPARATOR: &str = " | ";

/// A parsed CSV document: a header row and its data rows.
///
/// `Table` serializes by content, so it can be passed as an argument to
/// [`crate::CacheKey::derive`] and two separately parsed copies of the same
/// data produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV text with a header row.
    ///
    /// Blank lines are skipped. Every data row must have as many fields as
    /// the header; a missing header, a ragged row or a quoted field left open
    /// at end of input is a parse error naming `file_name`.
    ///
    /// ```
    /// use diff_cache::Table;
    ///
    /// let table = Table::parse("people.csv", "id,name\n1,Alice\n").unwrap();
    /// assert_eq!(table.columns, vec!["id", "name"]);
    /// assert_eq!(table.row_strings(), vec!["1 | Alice"]);
    /// ```
    pub fn parse(file_name: &str, content: &str) -> Result<Table, DiffError> {
        if let Some(line) = unterminated_quote_line(content) {
            return Err(DiffError::parse(
                file_name,
                format!("EOF inside quoted field starting on line {}", line),
            ));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let columns: Vec<String> = reader
            .headers()
            .map_err(|err| DiffError::parse(file_name, err))?
            .iter()
            .map(str::to_owned)
            .collect();
        if columns.is_empty() {
            return Err(DiffError::parse(file_name, "no columns to parse"));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| DiffError::parse(file_name, err))?;
            rows.push(record.iter().map(str::to_owned).collect());
        }

        Ok(Table { columns, rows })
    }

    /// Render every row as its values in column order, joined by
    /// [`ROW_SEPARATOR`].
    pub fn row_strings(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.join(ROW_SEPARATOR)).collect()
    }

    /// Number of data rows, duplicates included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has a header but no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Line (1-based) of a quoted field that is still open at end of input.
///
/// The csv reader accepts such input and lets the field swallow the rest of
/// the file. Quotes only open a field at its start; inside a quoted field a
/// doubled `""` is an escaped quote.
fn unterminated_quote_line(content: &str) -> Option<usize> {
    let mut bytes = content.bytes().peekable();
    let mut line = 1;
    let mut field_start = true;
    let mut open_at = None;

    while let Some(b) = bytes.next() {
        if open_at.is_some() {
            match b {
                b'"' if bytes.peek() == Some(&b'"') => {
                    bytes.next();
                }
                b'"' => {
                    open_at = None;
                    field_start = false;
                }
                b'\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' if field_start => {
                open_at = Some(line);
                field_start = false;
            }
            b'\n' => {
                line += 1;
                field_start = true;
            }
            b',' | b'\r' => field_start = true,
            _ => field_start = false,
        }
    }

    open_at
}

/// Parse both sides and collect their distinct rendered rows.
///
/// Rows are compared by value alone; differing headers are reported in the
/// log but do not stop the comparison.
pub(crate) fn row_sets(
    name_a: &str,
    content_a: &str,
    name_b: &str,
    content_b: &str,
) -> Result<(ComparableSet, ComparableSet), DiffError> {
    let a = Table::parse(name_a, content_a)?;
    let b = Table::parse(name_b, content_b)?;

    if a.columns != b.columns {
        warn!(
            file_a = name_a,
            file_b = name_b,
            columns_a = ?a.columns,
            columns_b = ?b.columns,
            "comparing tables with different headers"
        );
    }

    Ok((
        a.row_strings().into_iter().collect(),
        b.row_strings().into_iter().collect(),
    ))
}
