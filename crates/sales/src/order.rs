use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklens_core::{Entity, OrderId, ProductId};

/// Order line: product and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Completed sales order record.
///
/// `total_amount` is the authoritative order total; the lines carry the
/// per-product quantities used by the sales rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub ordered_at: DateTime<Utc>,
    /// Order total in smallest currency unit (e.g., cents).
    pub total_amount: u64,
    /// Line items in the order they were entered.
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Total quantity of one product across all lines of this order.
    pub fn quantity_of(&self, product_id: ProductId) -> u64 {
        self.lines
            .iter()
            .filter(|line| line.product_id == product_id)
            .map(|line| line.quantity)
            .sum()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
