//! Snapshot types produced by the reporting engine.

use serde::{Deserialize, Serialize};

use stocklens_core::{DateRange, ProductId, ValueObject};
use stocklens_products::Product;

/// Revenue aggregates over the orders inside the selected window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Sum of order totals in smallest currency unit. Exact.
    pub total_revenue: u64,
    pub total_orders: u64,
    /// Rounded to the nearest smallest currency unit; exactly 0 when the
    /// window holds no orders.
    pub average_order_value: u64,
}

/// Quantities moved into and out of stock inside the selected window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockFlowSummary {
    pub stock_in: u64,
    pub stock_out: u64,
}

/// One row of the top-products ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_id: ProductId,
    pub name: String,
    pub sold_quantity: u64,
}

/// Product count and stock value rolled up for one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRollup {
    pub category: String,
    pub count: u64,
    /// Sum of current_stock times unit price, in smallest currency unit.
    pub value: u64,
}

/// Derived metrics for one reporting window.
///
/// A pure function of (products, orders, movements, range): recomputed in
/// full on every call and never cached, so a snapshot can outlive changes to
/// the collections it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// The window the order/movement sections were filtered to.
    pub range: DateRange,
    pub revenue: RevenueSummary,
    pub stock_flow: StockFlowSummary,
    pub top_products: Vec<ProductSales>,
    /// Full low-stock set, ascending by current stock. Truncation for
    /// display is the consumer's concern.
    pub low_stock_products: Vec<Product>,
    /// Rollups in first-encounter order of the category labels.
    pub category_stats: Vec<CategoryRollup>,
}

impl ValueObject for RevenueSummary {}
impl ValueObject for StockFlowSummary {}
impl ValueObject for ProductSales {}
impl ValueObject for CategoryRollup {}
impl ValueObject for MetricsSnapshot {}
