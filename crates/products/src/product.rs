use serde::{Deserialize, Serialize};

use stocklens_core::{Entity, ProductId};

/// Fallback label for products without an assigned category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Catalog product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    /// Category label; absent categories roll up under [`UNCATEGORIZED`].
    pub category: Option<String>,
    /// Unit price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub current_stock: u64,
    /// Reorder threshold; at or below this the product counts as low stock.
    pub min_stock: u64,
}

impl Product {
    /// Category label with the fallback applied.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    /// Whether current inventory is at or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock
    }

    /// Monetary value of the stock on hand (current_stock times unit price,
    /// saturating on overflow).
    pub fn stock_value(&self) -> u64 {
        self.current_stock.saturating_mul(self.price)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product() -> Product {
        Product {
            id: ProductId::new(),
            sku: "SKU-001".to_string(),
            name: "Test Product".to_string(),
            category: Some("Beverages".to_string()),
            price: 250,
            current_stock: 10,
            min_stock: 4,
        }
    }

    #[test]
    fn stock_at_the_minimum_counts_as_low() {
        let product = Product {
            current_stock: 4,
            ..test_product()
        };
        assert!(product.is_low_stock());
    }

    #[test]
    fn stock_above_the_minimum_is_not_low() {
        assert!(!test_product().is_low_stock());
    }

    #[test]
    fn category_label_falls_back_when_absent() {
        let product = Product {
            category: None,
            ..test_product()
        };
        assert_eq!(product.category_label(), UNCATEGORIZED);
        assert_eq!(test_product().category_label(), "Beverages");
    }

    #[test]
    fn stock_value_multiplies_stock_by_price() {
        assert_eq!(test_product().stock_value(), 2500);
    }

    #[test]
    fn stock_value_saturates_instead_of_overflowing() {
        let product = Product {
            price: u64::MAX,
            current_stock: 2,
            ..test_product()
        };
        assert_eq!(product.stock_value(), u64::MAX);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the low-stock predicate is exactly `current <= min`.
            #[test]
            fn low_stock_matches_threshold_comparison(
                current in 0u64..10_000,
                min in 0u64..10_000
            ) {
                let product = Product {
                    current_stock: current,
                    min_stock: min,
                    ..test_product()
                };
                prop_assert_eq!(product.is_low_stock(), current <= min);
            }

            /// Property: stock value is exact whenever the product fits in u64.
            #[test]
            fn stock_value_is_exact_without_overflow(
                price in 0u64..1_000_000,
                stock in 0u64..1_000_000
            ) {
                let product = Product {
                    price,
                    current_stock: stock,
                    ..test_product()
                };
                prop_assert_eq!(product.stock_value(), price * stock);
            }
        }
    }
}
