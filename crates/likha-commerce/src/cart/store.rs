//! Cart store and line item types.

use crate::cart::{CartTotals, LineTotal};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ArtisanId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Display cap on the per-item quantity selector.
///
/// Published for UI layers; the store itself performs no clamping.
pub const MAX_QUANTITY_PER_ITEM: u32 = 10;

/// One product entry in the cart.
///
/// `name` and `unit_price` are a snapshot of catalog data taken when
/// the item was added. They are deliberately never re-synced to the
/// catalog: the price a shopper saw at add time is the price charged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Catalog product this line refers to.
    pub product_id: ProductId,
    /// Product name at time of add.
    pub name: String,
    /// Unit price at time of add.
    pub unit_price: Money,
    /// Quantity, kept in 1..=10 by the UI layer.
    pub quantity: u32,
    /// Artisan reference, display-only.
    pub artisan_id: ArtisanId,
}

impl CartLineItem {
    /// Total for this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity as i64)
    }
}

/// The shared shopping cart: single source of truth for every view
/// that reads or mutates cart contents.
///
/// An owned instance is passed by reference to consumers rather than
/// looked up ambiently, which keeps ownership and testability explicit.
/// All mutation happens on one logical thread in response to discrete
/// user actions, so no interior mutability is needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    items: Vec<CartLineItem>,
    currency: Currency,
}

impl CartStore {
    /// Create an empty cart in Philippine pesos.
    pub fn new() -> Self {
        Self::with_currency(Currency::PHP)
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// If a line item for the same product already exists its quantity
    /// is incremented by 1; otherwise a new line is appended with
    /// quantity 1, snapshotting the product's name and price. Always
    /// succeeds; the 1-10 display cap is enforced by the UI, not here.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            existing.quantity += 1;
            tracing::debug!(
                product_id = %product.id,
                quantity = existing.quantity,
                "incremented cart line"
            );
            return;
        }

        self.items.push(CartLineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            artisan_id: product.artisan_id.clone(),
        });
        tracing::debug!(product_id = %product.id, "added cart line");
    }

    /// Remove the line item for a product.
    ///
    /// Returns false (not an error) if no such line exists.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(product_id = %product_id, "removed cart line");
        }
        removed
    }

    /// Set the quantity of an existing line item verbatim.
    ///
    /// No clamping is performed; the caller keeps the value in
    /// 1..=`MAX_QUANTITY_PER_ITEM`. Returns false if the item is absent.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
            tracing::debug!(product_id = %product_id, quantity, "updated cart quantity");
            true
        } else {
            false
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cleared cart");
    }

    /// Cart total, recomputed from the line items on every call.
    ///
    /// Never cached: the sum of `unit_price * quantity` across lines.
    pub fn total(&self) -> Money {
        Money::sum(self.items.iter().map(|i| i.line_total()), self.currency)
    }

    /// Checked form of `total`.
    ///
    /// Routes every line through checked multiplication and addition,
    /// surfacing `CommerceError::Overflow` instead of panicking. The
    /// checkout flow uses this before charging the gateway.
    pub fn try_total(&self) -> Result<Money, CommerceError> {
        self.items
            .iter()
            .try_fold(Money::zero(self.currency), |acc, i| {
                let line = i
                    .unit_price
                    .try_multiply(i.quantity as i64)
                    .ok_or(CommerceError::Overflow)?;
                acc.try_add(&line).ok_or(CommerceError::Overflow)
            })
    }

    /// Per-line totals breakdown used by order snapshots and receipts.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            lines: self
                .items
                .iter()
                .map(|i| LineTotal {
                    product_id: i.product_id.clone(),
                    name: i.name.clone(),
                    unit_price: i.unit_price,
                    quantity: i.quantity,
                    line_total: i.line_total(),
                })
                .collect(),
            total: self.total(),
            item_count: self.item_count(),
        }
    }

    /// Line items in insertion (display) order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Get the line item for a product.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Total unit count (sum of quantities), shown on the cart badge.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart's currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, centavos: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Money::new(centavos, Currency::PHP),
            image: None,
            description: None,
            category: None,
            artisan_id: ArtisanId::new("aling-maria"),
        }
    }

    #[test]
    fn test_new_cart_is_empty() {
        let store = CartStore::new();
        assert!(store.is_empty());
        assert!(store.total().is_zero());
    }

    #[test]
    fn test_add_twice_merges_into_one_line() {
        let mut store = CartStore::new();
        let tote = product("abaca-tote", "Abaca Tote Bag", 120000);

        store.add_item(&tote);
        store.add_item(&tote);

        assert_eq!(store.unique_item_count(), 1);
        let line = store.get_item(&tote.id).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(store.total(), Money::new(240000, Currency::PHP));
    }

    #[test]
    fn test_total_recomputed_for_each_quantity() {
        let mut store = CartStore::new();
        let tote = product("abaca-tote", "Abaca Tote Bag", 120000);
        let lamp = product("capiz-lamp", "Capiz Shell Lamp", 350000);
        store.add_item(&tote);
        store.add_item(&lamp);

        for q in 1..=MAX_QUANTITY_PER_ITEM {
            assert!(store.update_quantity(&tote.id, q));
            let expected = 120000 * q as i64 + 350000;
            assert_eq!(store.total().amount_centavos, expected);
        }
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let mut store = CartStore::new();
        let tote = product("abaca-tote", "Abaca Tote Bag", 120000);
        store.add_item(&tote);

        let before = store.clone();
        assert!(!store.remove_item(&ProductId::new("not-here")));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_item() {
        let mut store = CartStore::new();
        let tote = product("abaca-tote", "Abaca Tote Bag", 120000);
        store.add_item(&tote);

        assert!(store.remove_item(&tote.id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_quantity_on_missing_item() {
        let mut store = CartStore::new();
        assert!(!store.update_quantity(&ProductId::new("not-here"), 3));
    }

    #[test]
    fn test_clear_always_yields_empty_and_zero() {
        let mut store = CartStore::new();
        store.add_item(&product("abaca-tote", "Abaca Tote Bag", 120000));
        store.add_item(&product("capiz-lamp", "Capiz Shell Lamp", 350000));

        store.clear();
        assert!(store.is_empty());
        assert!(store.total().is_zero());

        // Clearing an already-empty cart is fine too.
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_price_snapshot_fixed_at_add_time() {
        let mut store = CartStore::new();
        let mut tote = product("abaca-tote", "Abaca Tote Bag", 120000);
        store.add_item(&tote);

        // A later catalog price change must not affect the cart.
        tote.price = Money::new(999900, Currency::PHP);
        assert_eq!(
            store.get_item(&tote.id).unwrap().unit_price,
            Money::new(120000, Currency::PHP)
        );
        assert_eq!(store.total(), Money::new(120000, Currency::PHP));
    }

    #[test]
    fn test_try_total_matches_total() {
        let mut store = CartStore::new();
        store.add_item(&product("abaca-tote", "Abaca Tote Bag", 120000));
        store.add_item(&product("capiz-lamp", "Capiz Shell Lamp", 350000));

        assert_eq!(store.try_total().unwrap(), store.total());
    }

    #[test]
    fn test_try_total_surfaces_overflow() {
        let mut store = CartStore::new();
        let gold = product("gold-bar", "Gold Bar", i64::MAX);
        store.add_item(&gold);
        store.add_item(&gold);

        let err = store.try_total().unwrap_err();
        assert!(matches!(err, CommerceError::Overflow));
    }

    #[test]
    fn test_badge_counts() {
        let mut store = CartStore::new();
        let tote = product("abaca-tote", "Abaca Tote Bag", 120000);
        let lamp = product("capiz-lamp", "Capiz Shell Lamp", 350000);
        store.add_item(&tote);
        store.add_item(&tote);
        store.add_item(&lamp);

        assert_eq!(store.item_count(), 3);
        assert_eq!(store.unique_item_count(), 2);
    }

    #[test]
    fn test_totals_breakdown() {
        let mut store = CartStore::new();
        let tote = product("abaca-tote", "Abaca Tote Bag", 120000);
        store.add_item(&tote);
        store.add_item(&tote);

        let totals = store.totals();
        assert_eq!(totals.lines.len(), 1);
        assert_eq!(totals.lines[0].line_total, Money::new(240000, Currency::PHP));
        assert_eq!(totals.total, Money::new(240000, Currency::PHP));
        assert_eq!(totals.item_count, 2);
    }
}
