//! Read models shared by the HTTP API and the CLI.

use serde::Serialize;

use crate::products::Product;
use crate::validation::{validate, Validation};

/// A product with its validation result inlined next to its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub validation: Validation,
}

impl ProductDetail {
    #[must_use]
    pub fn new(product: Product) -> Self {
        let validation = validate(&product);
        Self {
            product,
            validation,
        }
    }
}

/// One line of the validation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationItem {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub validation: Validation,
}

/// Validates every product in sheet order.
///
/// With `only_invalid`, products that pass are left out.
#[must_use]
pub fn validation_report(products: Vec<Product>, only_invalid: bool) -> Vec<ValidationItem> {
    products
        .into_iter()
        .map(|p| ValidationItem {
            validation: validate(&p),
            id: p.id,
            name: p.name,
        })
        .filter(|item| !only_invalid || !item.validation.is_valid)
        .collect()
}
