//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
///
/// Every variant is a local, recoverable rejection; there is no fatal
/// class because the only external call (the payment gateway) is a
/// simulated one.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Shipping address has empty required fields.
    #[error("Shipping address incomplete: missing {0}")]
    IncompleteAddress(String),

    /// Email address failed the validity check.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Card payment selected without a cardholder name.
    #[error("Cardholder name is required")]
    MissingCardholderName,

    /// Card number has too few digits after stripping separators.
    #[error("Card number has {digits} digits, at least 12 required")]
    InvalidCardNumber { digits: usize },

    /// Confirm attempted before a payment method was selected.
    #[error("No payment method selected")]
    MissingPaymentMethod,

    /// Invalid checkout stage transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// The payment gateway declined the charge.
    #[error("Payment declined: {0}")]
    PaymentDeclined(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
