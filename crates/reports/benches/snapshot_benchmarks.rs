use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{DateTime, Duration, TimeZone, Utc};

use stocklens_core::{MovementId, OrderId, ProductId};
use stocklens_inventory::{MovementKind, StockMovement};
use stocklens_products::Product;
use stocklens_reports::{DateRange, ReportEngine, rank_top_products};
use stocklens_sales::{Order, OrderLine};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
}

/// Deterministic world: timestamps spread over 60 days, quantities and
/// prices derived from the index.
fn build_world(
    product_count: usize,
    order_count: usize,
    movement_count: usize,
) -> (Vec<Product>, Vec<Order>, Vec<StockMovement>, DateRange) {
    let products: Vec<Product> = (0..product_count)
        .map(|i| Product {
            id: ProductId::new(),
            sku: format!("SKU-{i:05}"),
            name: format!("Product {i}"),
            category: match i % 5 {
                0 => None,
                n => Some(format!("Category {n}")),
            },
            price: 100 + (i as u64 % 900),
            current_stock: i as u64 % 250,
            min_stock: 20,
        })
        .collect();

    let orders: Vec<Order> = (0..order_count)
        .map(|i| Order {
            id: OrderId::new(),
            ordered_at: base() + Duration::hours((i as i64 * 7) % (60 * 24)),
            total_amount: 500 + (i as u64 % 10_000),
            lines: (0..3)
                .map(|line| OrderLine {
                    product_id: products[(i * 3 + line) % products.len()].id,
                    quantity: 1 + (line as u64 % 4),
                })
                .collect(),
        })
        .collect();

    let movements: Vec<StockMovement> = (0..movement_count)
        .map(|i| StockMovement {
            id: MovementId::new(),
            product_id: products[i % products.len()].id,
            occurred_at: base() + Duration::hours((i as i64 * 11) % (60 * 24)),
            kind: match i % 3 {
                0 => MovementKind::In,
                1 => MovementKind::Out,
                _ => MovementKind::Unknown,
            },
            quantity: 1 + (i as u64 % 40),
        })
        .collect();

    let range = DateRange::trailing_from(base() + Duration::days(60), 30).unwrap();
    (products, orders, movements, range)
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    for &size in &[100usize, 1_000] {
        let (products, orders, movements, range) = build_world(size, size * 4, size * 2);
        let engine = ReportEngine::new();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                engine.snapshot(
                    black_box(&products),
                    black_box(&orders),
                    black_box(&movements),
                    range,
                )
            })
        });
    }
    group.finish();
}

fn bench_rank_top_products(c: &mut Criterion) {
    let (products, orders, _, _) = build_world(1_000, 4_000, 0);

    c.bench_function("rank_top_products_1k_products_4k_orders", |b| {
        b.iter(|| rank_top_products(black_box(&products), black_box(&orders), 5))
    });
}

criterion_group!(benches, bench_snapshot, bench_rank_top_products);
criterion_main!(benches);
