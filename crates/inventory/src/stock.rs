//! Per-item stock state machine.
//!
//! ```text
//!            Restocked (notifies)
//! OutOfStock ───────────────────▶ InStock
//!      ▲                             │
//!      └─────────── Depleted ────────┘
//! ```
//!
//! Every other move (same state to same state) is `Unchanged`. There is no
//! terminal state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    InStock,
}

impl StockLevel {
    pub fn of(count: u64) -> Self {
        if count == 0 {
            StockLevel::OutOfStock
        } else {
            StockLevel::InStock
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Zero stock became positive stock; the only transition that notifies.
    Restocked,
    Depleted,
    Unchanged,
}

impl Transition {
    pub fn between(previous: u64, current: u64) -> Self {
        match (StockLevel::of(previous), StockLevel::of(current)) {
            (StockLevel::OutOfStock, StockLevel::InStock) => Transition::Restocked,
            (StockLevel::InStock, StockLevel::OutOfStock) => Transition::Depleted,
            _ => Transition::Unchanged,
        }
    }

    pub fn notifies(self) -> bool {
        self == Transition::Restocked
    }
}

/// Outcome of a single stock update.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub previous: u64,
    pub current: u64,
    pub transition: Transition,
    /// Number of observers notified by this update.
    pub notified: usize,
}
