use serde::Serialize;

use crate::products::Product;
use crate::validation::validate;

/// Summary counts over one normalized product collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductStats {
    pub total_count: usize,
    /// Every normalized product is active; there is no inactive state.
    pub active_count: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub with_image_count: usize,
    pub without_image_count: usize,
    pub with_validity_count: usize,
}

#[must_use]
pub fn summarize(products: &[Product]) -> ProductStats {
    let total_count = products.len();
    let valid_count = products.iter().filter(|p| validate(p).is_valid).count();
    let with_image_count = products.iter().filter(|p| p.has_image()).count();
    let with_validity_count = products.iter().filter(|p| p.has_validity()).count();

    ProductStats {
        total_count,
        active_count: total_count,
        valid_count,
        invalid_count: total_count - valid_count,
        with_image_count,
        without_image_count: total_count - with_image_count,
        with_validity_count,
    }
}
