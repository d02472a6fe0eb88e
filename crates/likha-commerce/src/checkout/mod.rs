//! Checkout module.
//!
//! Contains the staged checkout flow, shipping address and payment
//! validation, the payment gateway seam, and order records.

mod address;
mod flow;
mod gateway;
mod order;
mod payment;

pub use address::ShippingAddress;
pub use flow::{CheckoutFlow, CheckoutStage};
pub use gateway::{MockPaymentGateway, PaymentConfirmation, PaymentGateway};
pub use order::{Order, OrderLineItem};
pub use payment::{PaymentDetails, MIN_CARD_DIGITS};
