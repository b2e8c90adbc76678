//! Response types for the spreadsheet `values` endpoint.
//!
//! ## Observed shape
//!
//! `GET /v4/spreadsheets/{id}/values/{range}` returns
//! `{ "range": "Sheet1!A1:D20", "majorDimension": "ROWS", "values": [[…], …] }`.
//!
//! - `values` is omitted entirely when the range is empty.
//! - Trailing empty cells are dropped, so rows can be shorter than the range.
//! - With the default `FORMATTED_VALUE` render option every cell is a string,
//!   but numbers and booleans appear when a caller asks for unformatted
//!   values. Cells are kept as raw JSON and coerced by [`cell_text`].

use serde::Deserialize;
use serde_json::Value;

/// One spreadsheet row: `[name, validity text, min purchase, image]`.
pub type RawRow = Vec<Value>;

pub const NAME_COLUMN: usize = 0;
pub const VALIDITY_COLUMN: usize = 1;
pub const MIN_PURCHASE_COLUMN: usize = 2;
pub const IMAGE_COLUMN: usize = 3;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Option<Vec<RawRow>>,
}

/// Text form of the cell at `index`. Missing and `null` cells are empty.
#[must_use]
pub fn cell_text(row: &[Value], index: usize) -> String {
    match row.get(index) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}
