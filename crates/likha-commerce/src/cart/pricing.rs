//! Cart totals breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete totals breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Per-line totals in display order.
    pub lines: Vec<LineTotal>,
    /// Sum of all line totals.
    pub total: Money,
    /// Sum of all quantities.
    pub item_count: u32,
}

impl CartTotals {
    /// Check if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Totals for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Product name snapshot.
    pub name: String,
    /// Unit price snapshot.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Unit price times quantity.
    pub line_total: Money,
}
