use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklens_core::{Entity, MovementId, ProductId};

/// Direction of a stock movement.
///
/// Movement data can carry kinds beyond `in`/`out`. Those deserialize to
/// `Unknown` and are excluded from both flow buckets rather than rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MovementKind {
    In,
    Out,
    Unknown,
}

impl From<String> for MovementKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "in" => Self::In,
            "out" => Self::Out,
            _ => Self::Unknown,
        }
    }
}

/// Recorded stock movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
    pub kind: MovementKind,
    pub quantity: u64,
}

impl Entity for StockMovement {
    type Id = MovementId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
