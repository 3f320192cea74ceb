//! Reporting metrics engine.
//!
//! Derives a [`MetricsSnapshot`] from the in-memory product, order, and
//! stock-movement collections for a selected trailing window. Every
//! calculation is pure: no IO, no caching, no mutation of inputs, and each
//! call re-derives its result from the full input. The display layer renders
//! the snapshot; artifact serialization lives in `stocklens-export`.

pub mod engine;
pub mod snapshot;

pub use engine::{
    DEFAULT_TOP_LIMIT, ReportEngine, aggregate_by_category, filter_by_range, rank_low_stock,
    rank_top_products, revenue_summary, stock_flow_summary,
};
pub use snapshot::{CategoryRollup, MetricsSnapshot, ProductSales, RevenueSummary, StockFlowSummary};
pub use stocklens_core::DateRange;
