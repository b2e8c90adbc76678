//! Completeness checks for normalized products.
//!
//! Validation is advisory: an invalid product is still listed and served,
//! it is only counted and logged.

use serde::Serialize;

use crate::products::Product;

pub const MISSING_NAME: &str = "name is required";
pub const MISSING_IMAGE: &str = "image is required";
pub const MISSING_MIN_PURCHASE: &str = "minimum purchase is required";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

/// Checks name, image, and minimum purchase, in that order.
///
/// Every field is checked; a missing name does not hide a missing image.
#[must_use]
pub fn validate(product: &Product) -> Validation {
    let mut errors = Vec::new();

    if product.name.is_empty() {
        errors.push(MISSING_NAME);
    }
    if product.image.is_empty() {
        errors.push(MISSING_IMAGE);
    }
    if product.min_purchase.is_empty() {
        errors.push(MISSING_MIN_PURCHASE);
    }

    Validation {
        is_valid: errors.is_empty(),
        errors,
    }
}
