//! Normalization from raw sheet rows to [`promos_core::Product`].
//!
//! Row 0 of every range is the header. Rows without a usable name are
//! dropped; every other irregularity degrades to an empty field.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use promos_core::Product;
use regex::Regex;
use serde_json::Value;

use crate::id::generate_id;
use crate::types::{
    cell_text, RawRow, IMAGE_COLUMN, MIN_PURCHASE_COLUMN, NAME_COLUMN, VALIDITY_COLUMN,
};

static VALIDITY_WINDOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)del\s+([0-9]{2}/[0-9]{2}/[0-9]{4})\s+al\s+([0-9]{2}/[0-9]{2}/[0-9]{4})")
        .expect("valid validity window regex")
});

/// Normalizes a full sheet range, stamping products with the current time.
///
/// `None`, an empty table, or a header-only table all yield an empty vec.
#[must_use]
pub fn normalize_rows(rows: Option<&[RawRow]>) -> Vec<Product> {
    normalize_rows_at(rows, Utc::now())
}

/// Same as [`normalize_rows`] with an explicit `generated_at` timestamp.
#[must_use]
pub fn normalize_rows_at(rows: Option<&[RawRow]>, generated_at: DateTime<Utc>) -> Vec<Product> {
    let Some(rows) = rows else {
        return Vec::new();
    };
    if rows.len() <= 1 {
        return Vec::new();
    }

    let products: Vec<Product> = rows
        .iter()
        .skip(1)
        .filter_map(|row| normalize_row(row, generated_at))
        .collect();

    tracing::debug!(
        data_rows = rows.len() - 1,
        products = products.len(),
        "normalized sheet rows"
    );
    products
}

/// Normalizes one data row, or returns `None` when its name is missing or blank.
#[must_use]
pub fn normalize_row(row: &[Value], generated_at: DateTime<Utc>) -> Option<Product> {
    let name = cell_text(row, NAME_COLUMN).trim().to_owned();
    if name.is_empty() {
        return None;
    }

    let validity_text = cell_text(row, VALIDITY_COLUMN);
    let (validity_start, validity_end) = parse_validity_window(&validity_text).unwrap_or_default();

    Some(Product {
        id: generate_id(&name),
        name,
        validity_text,
        validity_start,
        validity_end,
        min_purchase: cell_text(row, MIN_PURCHASE_COLUMN),
        image: cell_text(row, IMAGE_COLUMN).trim().to_owned(),
        generated_at,
    })
}

/// Extracts `(start, end)` from text like `"Vigencia del 01/01/2024 al 31/01/2024"`.
///
/// Both dates or neither: a lone date never produces a half-filled window.
#[must_use]
pub fn parse_validity_window(text: &str) -> Option<(String, String)> {
    let caps = VALIDITY_WINDOW.captures(text)?;
    Some((caps[1].to_owned(), caps[2].to_owned()))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
