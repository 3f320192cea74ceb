//! Stateless reporting calculations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use stocklens_core::{DateRange, ProductId};
use stocklens_inventory::{MovementKind, StockMovement};
use stocklens_products::Product;
use stocklens_sales::Order;

use crate::snapshot::{
    CategoryRollup, MetricsSnapshot, ProductSales, RevenueSummary, StockFlowSummary,
};

/// Default number of rows in the top-products ranking.
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Stateless calculator deriving a [`MetricsSnapshot`] from raw records.
///
/// Holds presentation-independent options only. Concurrent calls over shared
/// collections are safe as long as the caller does not mutate the collections
/// mid-call; the engine itself keeps no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct ReportEngine {
    top_limit: usize,
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self {
            top_limit: DEFAULT_TOP_LIMIT,
        }
    }
}

impl ReportEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a non-default top-products row limit.
    pub fn with_top_limit(top_limit: usize) -> Self {
        Self { top_limit }
    }

    /// Compute the full metrics snapshot for one window.
    ///
    /// Orders are filtered by order date and movements by movement date;
    /// the catalog sections (low stock, categories) always cover the whole
    /// product collection.
    pub fn snapshot(
        &self,
        products: &[Product],
        orders: &[Order],
        movements: &[StockMovement],
        range: DateRange,
    ) -> MetricsSnapshot {
        let orders_in_range = filter_by_range(orders, &range, |order| order.ordered_at);
        let movements_in_range =
            filter_by_range(movements, &range, |movement| movement.occurred_at);

        debug!(
            products = products.len(),
            orders = orders_in_range.len(),
            movements = movements_in_range.len(),
            "computing metrics snapshot"
        );

        MetricsSnapshot {
            range,
            revenue: revenue_summary(orders_in_range.iter().copied()),
            stock_flow: stock_flow_summary(movements_in_range.iter().copied()),
            top_products: rank_top_products(
                products,
                orders_in_range.iter().copied(),
                self.top_limit,
            ),
            low_stock_products: rank_low_stock(products),
            category_stats: aggregate_by_category(products),
        }
    }
}

/// Records whose accessed date falls inside `range`, inclusive both ends.
///
/// Stable: survivors keep their input order. Timestamps are taken as-is;
/// malformed dates are the producer's problem, not a fault here.
pub fn filter_by_range<'a, T, F>(records: &'a [T], range: &DateRange, date_of: F) -> Vec<&'a T>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    records
        .iter()
        .filter(|record| range.contains(date_of(record)))
        .collect()
}

/// Revenue totals and order count over the given orders.
///
/// Totals are exact sums of order amounts; the average rounds half up to the
/// nearest smallest currency unit and is exactly 0 when there are no orders.
pub fn revenue_summary<'a, I>(orders: I) -> RevenueSummary
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut total_revenue: u64 = 0;
    let mut total_orders: u64 = 0;
    for order in orders {
        total_revenue = total_revenue.saturating_add(order.total_amount);
        total_orders += 1;
    }

    let average_order_value = if total_orders == 0 {
        0
    } else {
        // round half up
        (total_revenue + total_orders / 2) / total_orders
    };

    RevenueSummary {
        total_revenue,
        total_orders,
        average_order_value,
    }
}

/// Movement quantities bucketed by direction.
///
/// Movements with an unrecognized kind count toward neither bucket.
pub fn stock_flow_summary<'a, I>(movements: I) -> StockFlowSummary
where
    I: IntoIterator<Item = &'a StockMovement>,
{
    let mut flow = StockFlowSummary {
        stock_in: 0,
        stock_out: 0,
    };
    for movement in movements {
        match movement.kind {
            MovementKind::In => flow.stock_in = flow.stock_in.saturating_add(movement.quantity),
            MovementKind::Out => flow.stock_out = flow.stock_out.saturating_add(movement.quantity),
            MovementKind::Unknown => {}
        }
    }
    flow
}

/// Products ranked by quantity sold across the given orders.
///
/// Descending by sold quantity; ties (including all-zero) keep the product
/// collection's original order, so equal sellers surface in catalog order.
/// The result is truncated to `limit` rows.
pub fn rank_top_products<'a, I>(products: &[Product], orders: I, limit: usize) -> Vec<ProductSales>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut sold: HashMap<ProductId, u64> = HashMap::new();
    for order in orders {
        for line in &order.lines {
            let quantity = sold.entry(line.product_id).or_insert(0);
            *quantity = quantity.saturating_add(line.quantity);
        }
    }

    let mut rows: Vec<ProductSales> = products
        .iter()
        .map(|product| ProductSales {
            product_id: product.id,
            name: product.name.clone(),
            sold_quantity: sold.get(&product.id).copied().unwrap_or(0),
        })
        .collect();
    rows.sort_by(|a, b| b.sold_quantity.cmp(&a.sold_quantity));
    rows.truncate(limit);
    rows
}

/// Products at or below their minimum stock, ascending by current stock.
///
/// Returns the full filtered set; consumers slice for display. Ties keep
/// the product collection's original order.
pub fn rank_low_stock(products: &[Product]) -> Vec<Product> {
    let mut low: Vec<Product> = products
        .iter()
        .filter(|product| product.is_low_stock())
        .cloned()
        .collect();
    low.sort_by_key(|product| product.current_stock);
    low
}

/// Product count and stock value rolled up per category label.
///
/// Rollups appear in first-encounter order of the labels; categories with no
/// products never appear. Uncategorized products roll up under the fallback
/// label.
pub fn aggregate_by_category(products: &[Product]) -> Vec<CategoryRollup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rollups: Vec<CategoryRollup> = Vec::new();

    for product in products {
        let label = product.category_label();
        let slot = *index.entry(label.to_string()).or_insert_with(|| {
            rollups.push(CategoryRollup {
                category: label.to_string(),
                count: 0,
                value: 0,
            });
            rollups.len() - 1
        });
        rollups[slot].count += 1;
        rollups[slot].value = rollups[slot].value.saturating_add(product.stock_value());
    }

    rollups
}
