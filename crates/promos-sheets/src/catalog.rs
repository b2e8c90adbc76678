//! Read-side query layer over the live sheet.
//!
//! There is no cache: every call fetches the range again and re-normalizes
//! it, so callers always see the sheet as it is now.

use promos_core::{validate, Product};

use crate::client::SheetsClient;
use crate::error::SheetsError;
use crate::normalize::normalize_rows;

pub struct Catalog {
    client: SheetsClient,
}

impl Catalog {
    #[must_use]
    pub fn new(client: SheetsClient) -> Self {
        Self { client }
    }

    /// Fetches and normalizes every product, in sheet order.
    ///
    /// Invalid products are logged and kept.
    ///
    /// # Errors
    ///
    /// Propagates any [`SheetsError`] from the fetch.
    pub async fn list_all(&self) -> Result<Vec<Product>, SheetsError> {
        let range = self.client.fetch_values().await?;
        let products = normalize_rows(range.values.as_deref());

        for product in &products {
            let validation = validate(product);
            if !validation.is_valid {
                tracing::warn!(
                    product_id = %product.id,
                    errors = ?validation.errors,
                    "product is incomplete"
                );
            }
        }

        Ok(products)
    }

    /// Fetches the sheet and returns the first product with this id.
    ///
    /// `Ok(None)` means the sheet was read and no row matched.
    ///
    /// # Errors
    ///
    /// Propagates any [`SheetsError`] from the fetch.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>, SheetsError> {
        let products = self.list_all().await?;
        Ok(promos_core::find_by_id(&products, id).cloned())
    }
}
