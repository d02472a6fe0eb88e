//! Cart and checkout domain logic for the Likha artisan marketplace.
//!
//! This crate provides the stateful core of the marketplace front end:
//!
//! - **Catalog**: read-only product and artisan fixture types
//! - **Cart**: the shared cart store with line items and totals
//! - **Checkout**: the staged checkout flow, payment gateway seam, orders
//!
//! # Example
//!
//! ```rust,ignore
//! use likha_commerce::prelude::*;
//!
//! let catalog = Catalog::from_json(fixture_json)?;
//! let mut store = CartStore::new();
//! store.add_item(catalog.get(&ProductId::new("abaca-tote")).unwrap());
//!
//! let mut flow = CheckoutFlow::new();
//! flow.proceed_to_address(&store)?;
//! flow.submit_address(address)?;
//! flow.select_payment(PaymentDetails::Cash)?;
//! flow.confirm(&store, &MockPaymentGateway::new()).await?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Artisan, ArtisanDirectory, Catalog, Product};

    // Cart
    pub use crate::cart::{CartLineItem, CartStore, CartTotals, LineTotal, MAX_QUANTITY_PER_ITEM};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStage, MockPaymentGateway, Order, OrderLineItem,
        PaymentConfirmation, PaymentDetails, PaymentGateway, ShippingAddress, MIN_CARD_DIGITS,
    };
}
