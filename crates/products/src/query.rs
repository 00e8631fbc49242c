//! Catalog listing: filtering and ordering.

use crate::product::Product;

/// Ordering applied to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Stored (insertion) order.
    #[default]
    Insertion,
    /// Ascending by price; ties keep insertion order.
    Price,
}

impl SortOrder {
    /// Interpret a `sort` query value. Unknown values fall back to insertion order.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("price") => SortOrder::Price,
            _ => SortOrder::Insertion,
        }
    }
}

/// Filter + ordering for a product listing.
///
/// Empty filter strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    category: Option<String>,
    search: Option<String>,
    sort: SortOrder,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only products whose category equals `category`, ignoring case.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = normalize(category.into());
        self
    }

    /// Keep only products whose name contains `search`, ignoring case.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = normalize(search.into());
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category().to_lowercase() != *category {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !product.name().to_lowercase().contains(search.as_str()) {
                return false;
            }
        }
        true
    }

    /// Filter a snapshot and apply the requested ordering.
    pub fn apply<'a, I>(&self, products: I) -> Vec<Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut out: Vec<Product> = products
            .into_iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        if self.sort == SortOrder::Price {
            out.sort_by(|a, b| a.price().total_cmp(&b.price()));
        }
        out
    }
}

fn normalize(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let seed = seed_products();
        let out = ProductQuery::new().apply(&seed);
        assert_eq!(out, seed);
    }

    #[test]
    fn category_is_exact_and_case_insensitive() {
        let seed = seed_products();
        let out = ProductQuery::new().category("electronics").apply(&seed);
        assert_eq!(names(&out), vec!["Neon Gaming Headset", "Mechanical Keyboard"]);

        let partial = ProductQuery::new().category("Electro").apply(&seed);
        assert!(partial.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let seed = seed_products();
        let out = ProductQuery::new().search("head").apply(&seed);
        assert_eq!(names(&out), vec!["Neon Gaming Headset"]);

        let out = ProductQuery::new().search("KEY").apply(&seed);
        assert_eq!(names(&out), vec!["Mechanical Keyboard"]);
    }

    #[test]
    fn filters_combine_with_and() {
        let seed = seed_products();
        let out = ProductQuery::new()
            .category("Electronics")
            .search("hoodie")
            .apply(&seed);
        assert!(out.is_empty());

        let out = ProductQuery::new()
            .category("clothing")
            .search("hoodie")
            .apply(&seed);
        assert_eq!(names(&out), vec!["Developer Hoodie"]);
    }

    #[test]
    fn empty_strings_are_ignored() {
        let seed = seed_products();
        let out = ProductQuery::new().category("").search("").apply(&seed);
        assert_eq!(out.len(), seed.len());
    }

    #[test]
    fn price_sort_is_ascending_and_leaves_input_untouched() {
        let seed = seed_products();
        let out = ProductQuery::new().sort(SortOrder::Price).apply(&seed);
        let prices: Vec<f64> = out.iter().map(|p| p.price()).collect();
        assert_eq!(prices, vec![49.99, 89.0, 129.5, 199.99]);
        assert_eq!(seed[0].name(), "Neon Gaming Headset");
    }

    #[test]
    fn sort_param_parsing() {
        assert_eq!(SortOrder::from_param(Some("price")), SortOrder::Price);
        assert_eq!(SortOrder::from_param(Some("name")), SortOrder::Insertion);
        assert_eq!(SortOrder::from_param(None), SortOrder::Insertion);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: filtering is a subsequence of the input (order preserved).
            #[test]
            fn filter_preserves_relative_order(search in "[a-z]{0,3}") {
                let seed = seed_products();
                let out = ProductQuery::new().search(search).apply(&seed);
                let mut cursor = seed.iter();
                for p in &out {
                    prop_assert!(cursor.any(|s| s == p));
                }
            }
        }
    }
}
