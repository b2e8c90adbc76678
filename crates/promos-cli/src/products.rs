//! Product command handlers for the CLI.
//!
//! Each handler reads the live sheet through [`Catalog`] and returns the JSON
//! document that `main` prints to stdout.

use promos_core::{summarize, validation_report, ListingMeta, Product, ProductDetail};
use promos_sheets::Catalog;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct ProductListing {
    data: Vec<Product>,
    meta: ListingMeta,
}

/// All products in sheet order plus listing metadata.
///
/// # Errors
///
/// Returns an error if the sheet cannot be fetched.
pub(crate) async fn run_list(catalog: &Catalog) -> anyhow::Result<Value> {
    let products = catalog.list_all().await?;
    let meta = ListingMeta::for_listing(&products);

    Ok(serde_json::to_value(ProductListing {
        data: products,
        meta,
    })?)
}

/// One product with its validation result.
///
/// # Errors
///
/// Returns an error if the sheet cannot be fetched or no product has `id`.
pub(crate) async fn run_show(catalog: &Catalog, id: &str) -> anyhow::Result<Value> {
    let product = catalog
        .find_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("product '{id}' not found"))?;

    Ok(serde_json::to_value(ProductDetail::new(product))?)
}

/// Aggregate counts over every product.
///
/// # Errors
///
/// Returns an error if the sheet cannot be fetched.
pub(crate) async fn run_stats(catalog: &Catalog) -> anyhow::Result<Value> {
    let products = catalog.list_all().await?;
    Ok(serde_json::to_value(summarize(&products))?)
}

/// Validation result per product, optionally only the failing ones.
///
/// # Errors
///
/// Returns an error if the sheet cannot be fetched.
pub(crate) async fn run_validate(catalog: &Catalog, only_invalid: bool) -> anyhow::Result<Value> {
    let products = catalog.list_all().await?;
    let items = validation_report(products, only_invalid);

    if only_invalid && items.is_empty() {
        tracing::info!("every product passed validation");
    }

    Ok(serde_json::to_value(items)?)
}
