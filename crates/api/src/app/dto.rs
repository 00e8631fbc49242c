use chrono::Utc;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use storefront_core::DomainResult;
use storefront_products::{NewProduct, ProductPatch, ProductQuery, SortOrder};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default)]
pub struct ListProductsParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ListProductsParams {
    /// Collect listing parameters from raw query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut params.category,
                "search" => &mut params.search,
                "sort" => &mut params.sort,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    pub fn into_query(self) -> ProductQuery {
        let mut query = ProductQuery::new().sort(SortOrder::from_param(self.sort.as_deref()));
        if let Some(category) = self.category {
            query = query.category(category);
        }
        if let Some(search) = self.search {
            query = query.search(search);
        }
        query
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> DomainResult<NewProduct> {
        NewProduct::try_new(self.name, self.price, self.description, self.category)
    }
}

/// Partial update body. Unknown keys are rejected; `id` is accepted and discarded.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductRequest {
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            slug: self.slug,
            price: self.price,
            description: self.description,
            category: self.category,
        }
    }
}

#[derive(Debug, Default)]
pub struct RedirectParams {
    pub target: Option<String>,
}

impl RedirectParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            target: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "target").then_some(value)),
        }
    }
}

// -------------------------
// Response envelope
// -------------------------

/// `{success, count?, data?, message?, timestamp?, error?}` wrapper used by the product API.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data: Some(data),
            message: None,
            timestamp: None,
            error: None,
        }
    }

    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl<T> Envelope<Vec<T>> {
    /// Listing: data + count + generation timestamp.
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            count: Some(count),
            timestamp: Some(Utc::now().to_rfc3339()),
            ..Self::data(items)
        }
    }
}

impl Envelope<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            count: None,
            data: None,
            message: None,
            timestamp: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_request_discards_id_and_rejects_unknown_keys() {
        let req: UpdateProductRequest =
            serde_json::from_value(json!({ "id": "999", "price": 140 })).unwrap();
        let patch = req.into_patch();
        assert_eq!(patch.price, Some(140.0));
        assert!(patch.name.is_none());

        let err = serde_json::from_value::<UpdateProductRequest>(json!({ "colour": "red" }));
        assert!(err.is_err());
    }

    #[test]
    fn list_params_map_to_query() {
        let params = ListProductsParams {
            category: Some("Electronics".to_string()),
            search: None,
            sort: Some("price".to_string()),
        };
        let query = params.into_query();
        assert_eq!(query.sort_order(), SortOrder::Price);
        assert_eq!(
            query,
            ProductQuery::new().category("electronics").sort(SortOrder::Price)
        );
    }

    #[test]
    fn repeated_list_params_keep_first_value() {
        let pairs = vec![
            ("category".to_string(), "Toys".to_string()),
            ("category".to_string(), "Electronics".to_string()),
            ("search".to_string(), "hoodie".to_string()),
            ("page".to_string(), "2".to_string()),
        ];
        let params = ListProductsParams::from_pairs(pairs);
        assert_eq!(params.category.as_deref(), Some("Toys"));
        assert_eq!(params.search.as_deref(), Some("hoodie"));
        assert!(params.sort.is_none());
    }

    #[test]
    fn envelopes_skip_absent_fields() {
        let ok = serde_json::to_value(Envelope::data(1).with_message("done")).unwrap();
        assert_eq!(ok, json!({ "success": true, "data": 1, "message": "done" }));

        let err = serde_json::to_value(Envelope::error("Product not found")).unwrap();
        assert_eq!(err, json!({ "success": false, "error": "Product not found" }));

        let list = serde_json::to_value(Envelope::list(vec![1, 2])).unwrap();
        assert_eq!(list["count"], 2);
        assert!(list["timestamp"].is_string());
    }
}
