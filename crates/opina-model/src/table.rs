//! In-memory string table shared by every pipeline stage.

use crate::schema;

/// A rows-by-columns table of untyped string cells.
///
/// Rows are always exactly as wide as `headers`; `push_row` pads or
/// truncates to enforce this, so later stages can index cells without
/// bounds anxiety.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell value, or `""` when the row or column does not exist.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Rename the first column matching `from` to `to`.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if let Some(index) = self.column_index(from) {
            self.headers[index] = to.to_string();
        }
    }

    /// Append a new column with every cell set to `fill`.
    pub fn add_column(&mut self, name: &str, fill: &str) {
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(fill.to_string());
        }
    }

    /// Project the table onto `columns`, in the given order.
    ///
    /// Columns not present in the table are skipped; columns not named
    /// are dropped. This is the allow-list projection used by schema
    /// reconciliation.
    pub fn retain_columns(&mut self, columns: &[&str]) {
        let kept: Vec<usize> = columns
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();
        self.headers = kept.iter().map(|&i| self.headers[i].clone()).collect();
        for row in &mut self.rows {
            *row = kept.iter().map(|&i| row[i].clone()).collect();
        }
    }

    /// Typed view of a canonical-schema row.
    ///
    /// Returns `None` when the row index is out of range. Cells of
    /// canonical columns the table lacks come back empty.
    pub fn record(&self, row: usize) -> Option<CommentRecord> {
        if row >= self.rows.len() {
            return None;
        }
        let get = |name: &str| {
            self.column_index(name)
                .map(|col| self.cell(row, col).to_string())
                .unwrap_or_default()
        };
        Some(CommentRecord {
            commenter_id: get(schema::COMMENTER_ID),
            country: get(schema::COUNTRY),
            comment_text: get(schema::COMMENT_TEXT),
            sentiment_label: get(schema::SENTIMENT_LABEL),
        })
    }
}

/// One cleaned comment in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub commenter_id: String,
    pub country: String,
    pub comment_text: String,
    pub sentiment_label: String,
}
