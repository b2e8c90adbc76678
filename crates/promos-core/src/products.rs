use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A promotional product normalized from one spreadsheet row.
///
/// Built once per fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Slug derived from `name`. Not guaranteed unique across a sheet.
    pub id: String,
    pub name: String,
    /// Validity cell exactly as it appeared in the sheet, e.g.
    /// `"del 01/01/2024 al 31/01/2024"`.
    pub validity_text: String,
    /// `DD/MM/YYYY`; empty unless `validity_text` carried a full date range.
    pub validity_start: String,
    /// `DD/MM/YYYY`; empty exactly when `validity_start` is empty.
    pub validity_end: String,
    pub min_purchase: String,
    /// Image reference (usually a URL), trimmed.
    pub image: String,
    pub generated_at: DateTime<Utc>,
}

impl Product {
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Returns `true` when the sheet carried any validity text at all.
    #[must_use]
    pub fn has_validity(&self) -> bool {
        !self.validity_text.is_empty()
    }

    /// Returns `true` when a start/end date pair was extracted.
    #[must_use]
    pub fn has_validity_window(&self) -> bool {
        !self.validity_start.is_empty() && !self.validity_end.is_empty()
    }
}

/// Returns the first product whose `id` equals `id`.
///
/// Ids can collide after slugging; the earliest row wins.
#[must_use]
pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

/// Listing metadata returned alongside the full product collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingMeta {
    pub total: usize,
    pub with_validity_window: usize,
    pub without_validity_window: usize,
    pub generated_at: DateTime<Utc>,
}

impl ListingMeta {
    #[must_use]
    pub fn from_products(products: &[Product], generated_at: DateTime<Utc>) -> Self {
        let with_validity_window = products.iter().filter(|p| p.has_validity_window()).count();
        Self {
            total: products.len(),
            with_validity_window,
            without_validity_window: products.len() - with_validity_window,
            generated_at,
        }
    }

    /// Metadata for a freshly fetched listing.
    ///
    /// Uses the products' shared normalization time, or now for an empty sheet.
    #[must_use]
    pub fn for_listing(products: &[Product]) -> Self {
        let generated_at = products.first().map_or_else(Utc::now, |p| p.generated_at);
        Self::from_products(products, generated_at)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_product(name: &str, image: &str, min_purchase: &str) -> Product {
        Product {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            validity_text: String::new(),
            validity_start: String::new(),
            validity_end: String::new(),
            min_purchase: min_purchase.to_string(),
            image: image.to_string(),
            generated_at: Utc::now(),
        }
    }

    fn with_window(mut product: Product) -> Product {
        product.validity_text = "del 01/01/2024 al 31/01/2024".to_string();
        product.validity_start = "01/01/2024".to_string();
        product.validity_end = "31/01/2024".to_string();
        product
    }

    #[test]
    fn has_image_false_when_empty() {
        assert!(!make_product("Widget", "", "$100").has_image());
        assert!(make_product("Widget", "img.png", "$100").has_image());
    }

    #[test]
    fn has_validity_counts_free_text_without_window() {
        let mut product = make_product("Widget", "", "");
        product.validity_text = "texto libre".to_string();
        assert!(product.has_validity());
        assert!(!product.has_validity_window());
    }

    #[test]
    fn find_by_id_returns_matching_product() {
        let products = vec![
            make_product("Widget A", "", ""),
            make_product("Gadget B", "", ""),
        ];
        let found = find_by_id(&products, "gadget-b").expect("expected a match");
        assert_eq!(found.name, "Gadget B");
    }

    #[test]
    fn find_by_id_returns_none_for_unknown_id() {
        let products = vec![make_product("Widget A", "", "")];
        assert!(find_by_id(&products, "widget-z").is_none());
        assert!(find_by_id(&[], "widget-a").is_none());
    }

    #[test]
    fn find_by_id_first_match_wins_on_collision() {
        let first = make_product("Widget A", "first.png", "");
        let mut second = make_product("Widget A", "second.png", "");
        second.name = "Widget A!".to_string();
        let products = vec![first, second];
        let found = find_by_id(&products, "widget-a").expect("expected a match");
        assert_eq!(found.image, "first.png");
    }

    #[test]
    fn listing_meta_splits_on_validity_window() {
        let products = vec![
            with_window(make_product("Widget A", "", "")),
            make_product("Gadget B", "", ""),
            make_product("Gizmo C", "", ""),
        ];
        let now = Utc::now();
        let meta = ListingMeta::from_products(&products, now);
        assert_eq!(meta.total, 3);
        assert_eq!(meta.with_validity_window, 1);
        assert_eq!(meta.without_validity_window, 2);
        assert_eq!(meta.generated_at, now);
    }

    #[test]
    fn for_listing_takes_generated_at_from_products() {
        let product = make_product("Widget A", "", "");
        let stamped = product.generated_at;
        let meta = ListingMeta::for_listing(&[product]);
        assert_eq!(meta.generated_at, stamped);
        assert_eq!(meta.total, 1);
    }

    #[test]
    fn for_listing_empty_sheet_is_stamped_now() {
        let before = Utc::now();
        let meta = ListingMeta::for_listing(&[]);
        assert_eq!(meta.total, 0);
        assert!(meta.generated_at >= before);
    }

    #[test]
    fn product_serializes_with_snake_case_fields() {
        let product = with_window(make_product("Widget A", "img1.png", "$100"));
        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(json["validity_start"], "01/01/2024");
        assert_eq!(json["validity_end"], "31/01/2024");
        assert_eq!(json["min_purchase"], "$100");
        assert!(json["generated_at"].is_string());
    }
}
