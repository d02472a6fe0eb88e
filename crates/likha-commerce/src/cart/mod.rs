//! Shopping cart module.
//!
//! Contains the cart store, line items, and totals.

mod pricing;
mod store;

pub use pricing::{CartTotals, LineTotal};
pub use store::{CartLineItem, CartStore, MAX_QUANTITY_PER_ITEM};
