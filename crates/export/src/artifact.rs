use std::borrow::Cow;
use std::fmt::Write as _;

use chrono::{NaiveDate, Utc};

use stocklens_reports::MetricsSnapshot;

/// CSV artifact for one snapshot, echoing the human-readable window label
/// the view showed when the export was requested.
///
/// Emits one row per entry of the low-stock and category sets it is given;
/// any display-side truncation happens before the snapshot reaches here.
pub fn render_csv(snapshot: &MetricsSnapshot, range_label: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Stock Report,{}", csv_field(range_label));
    let _ = writeln!(out);
    let _ = writeln!(out, "Metric,Value");
    let _ = writeln!(out, "Total Revenue,{}", fmt_money(snapshot.revenue.total_revenue));
    let _ = writeln!(out, "Total Orders,{}", snapshot.revenue.total_orders);
    let _ = writeln!(
        out,
        "Average Order Value,{}",
        fmt_money(snapshot.revenue.average_order_value)
    );
    let _ = writeln!(out, "Stock In,{}", snapshot.stock_flow.stock_in);
    let _ = writeln!(out, "Stock Out,{}", snapshot.stock_flow.stock_out);

    let _ = writeln!(out);
    let _ = writeln!(out, "Top Products");
    let _ = writeln!(out, "Name,Units Sold");
    for row in &snapshot.top_products {
        let _ = writeln!(out, "{},{}", csv_field(&row.name), row.sold_quantity);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Low Stock");
    let _ = writeln!(out, "Name,Current Stock,Min Stock");
    for product in &snapshot.low_stock_products {
        let _ = writeln!(
            out,
            "{},{},{}",
            csv_field(&product.name),
            product.current_stock,
            product.min_stock
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Categories");
    let _ = writeln!(out, "Category,Products,Stock Value");
    for rollup in &snapshot.category_stats {
        let _ = writeln!(
            out,
            "{},{},{}",
            csv_field(&rollup.category),
            rollup.count,
            fmt_money(rollup.value)
        );
    }

    out
}

/// JSON artifact for one snapshot.
pub fn render_json(snapshot: &MetricsSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// Filename for a report exported on `date`.
pub fn report_filename(date: NaiveDate) -> String {
    format!("stock-report-{}.csv", date.format("%Y-%m-%d"))
}

/// Filename keyed by today's date.
pub fn report_filename_today() -> String {
    report_filename(Utc::now().date_naive())
}

/// Quote a field when it contains CSV metacharacters.
fn csv_field(raw: &str) -> Cow<'_, str> {
    if raw.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", raw.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Smallest-unit amount rendered with two decimal places.
fn fmt_money(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
