//! Payment method types.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Minimum digit count for a card number after stripping separators.
pub const MIN_CARD_DIGITS: usize = 12;

/// Payment details, discriminated by method.
///
/// This is a simulated gate only: no Luhn check, expiry, or CVV. Card
/// numbers never leave this type; order records store the method kind
/// and the gateway reference, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentDetails {
    /// Card payment.
    Card {
        /// Name printed on the card.
        name_on_card: String,
        /// Card number, any separator characters allowed.
        card_number: String,
    },
    /// Cash on delivery; no additional fields.
    Cash,
}

impl PaymentDetails {
    /// Validate the payment details.
    ///
    /// Cash always passes. Card requires a non-empty name and at least
    /// `MIN_CARD_DIGITS` digits once non-digit characters are stripped.
    pub fn validate(&self) -> Result<(), CommerceError> {
        match self {
            PaymentDetails::Card {
                name_on_card,
                card_number,
            } => {
                if name_on_card.trim().is_empty() {
                    return Err(CommerceError::MissingCardholderName);
                }
                let digits = card_number.chars().filter(|c| c.is_ascii_digit()).count();
                if digits < MIN_CARD_DIGITS {
                    return Err(CommerceError::InvalidCardNumber { digits });
                }
                Ok(())
            }
            PaymentDetails::Cash => Ok(()),
        }
    }

    /// Method kind as recorded on the order ("card" or "cash").
    pub fn method_name(&self) -> &'static str {
        match self {
            PaymentDetails::Card { .. } => "card",
            PaymentDetails::Cash => "cash",
        }
    }
}
