//! Order records and receipts.

use crate::cart::CartStore;
use crate::checkout::{PaymentDetails, ShippingAddress};
use crate::error::CommerceError;
use crate::ids::{ArtisanId, OrderId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item snapshot on an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at time of order.
    pub name: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price at time of order.
    pub unit_price: Money,
    /// Total price for this line.
    pub line_total: Money,
    /// Artisan reference.
    pub artisan_id: ArtisanId,
}

/// The record created at successful mock payment.
///
/// Held only to render, print, or export a receipt; discarded when the
/// shopper returns to the shop. Never persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Time-based order token.
    pub id: OrderId,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Shipping address as entered.
    pub shipping_address: ShippingAddress,
    /// Payment method kind ("card" or "cash"); card details are
    /// deliberately not recorded.
    pub payment_method: String,
    /// Gateway payment reference.
    pub payment_reference: String,
    /// Cart line items at the moment of payment confirmation.
    pub line_items: Vec<OrderLineItem>,
    /// Grand total charged.
    pub total: Money,
    /// Order currency.
    pub currency: Currency,
}

impl Order {
    /// Snapshot an order from the cart at payment confirmation.
    pub(crate) fn from_cart(
        store: &CartStore,
        shipping_address: ShippingAddress,
        payment: &PaymentDetails,
        payment_reference: String,
    ) -> Self {
        let totals = store.totals();
        Self {
            id: OrderId::generate(),
            created_at: current_timestamp(),
            shipping_address,
            payment_method: payment.method_name().to_string(),
            payment_reference,
            line_items: totals
                .lines
                .iter()
                .map(|line| OrderLineItem {
                    product_id: line.product_id.clone(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    line_total: line.line_total,
                    artisan_id: store
                        .get_item(&line.product_id)
                        .map(|i| i.artisan_id.clone())
                        .unwrap_or_else(|| ArtisanId::new("unknown")),
                })
                .collect(),
            total: totals.total,
            currency: store.currency(),
        }
    }

    /// Total unit count across line items.
    pub fn item_count(&self) -> u32 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }

    /// Render a printable receipt.
    pub fn receipt_text(&self) -> String {
        let mut out = String::new();
        out.push_str("LIKHA MARKETPLACE - OFFICIAL RECEIPT\n");
        out.push_str(&format!("Order {}\n", self.id));
        out.push_str("------------------------------------\n");
        for item in &self.line_items {
            out.push_str(&format!(
                "{} x {} @ {} = {}\n",
                item.quantity,
                item.name,
                item.unit_price,
                item.line_total
            ));
        }
        out.push_str("------------------------------------\n");
        out.push_str(&format!("Total: {}\n", self.total));
        out.push_str(&format!(
            "Paid by {} (ref {})\n\n",
            self.payment_method, self.payment_reference
        ));
        out.push_str("Ship to:\n");
        out.push_str(&self.shipping_address.multi_line());
        out.push('\n');
        out
    }

    /// Serialize the order record for download.
    pub fn export_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
