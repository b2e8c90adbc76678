pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod id;
pub mod normalize;
mod retry;
pub mod types;

pub use catalog::Catalog;
pub use client::SheetsClient;
pub use config::SheetsConfig;
pub use error::SheetsError;
pub use id::generate_id;
pub use normalize::{normalize_row, normalize_rows, normalize_rows_at, parse_validity_window};
pub use types::{RawRow, ValueRange};
