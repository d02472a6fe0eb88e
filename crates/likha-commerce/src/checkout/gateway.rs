//! Payment gateway seam.
//!
//! The "always succeeds after a delay" behavior of the original demo
//! is an implementation of this trait, not a property of the checkout
//! flow. Production code would plug a real gateway into the same seam.

use crate::checkout::PaymentDetails;
use crate::error::CommerceError;
use crate::money::Money;
use async_trait::async_trait;
use std::time::Duration;

/// Result of a successful charge.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfirmation {
    /// Gateway-issued payment reference.
    pub reference: String,
    /// Amount charged.
    pub amount: Money,
}

/// A payment processor the checkout flow charges through.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge the given amount with the given method.
    ///
    /// Resolves to a confirmation on approval or
    /// `CommerceError::PaymentDeclined` on decline.
    async fn charge(
        &self,
        amount: Money,
        method: &PaymentDetails,
    ) -> Result<PaymentConfirmation, CommerceError>;
}

/// Simulated gateway that always approves after a fixed delay.
///
/// The delay models processing time; the UI stays responsive and shows
/// a spinner while it runs. The delay is not cancellable: once a charge
/// starts it always resolves.
#[derive(Debug, Clone)]
pub struct MockPaymentGateway {
    delay: Duration,
}

impl MockPaymentGateway {
    /// Create a gateway with the default 1.5 second processing delay.
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(1500))
    }

    /// Create a gateway with a custom delay (useful in tests).
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(
        &self,
        amount: Money,
        method: &PaymentDetails,
    ) -> Result<PaymentConfirmation, CommerceError> {
        tracing::info!(
            amount = %amount,
            method = method.method_name(),
            "processing simulated payment"
        );
        tokio::time::sleep(self.delay).await;

        let reference = generate_reference();
        tracing::info!(%reference, "simulated payment approved");
        Ok(PaymentConfirmation { reference, amount })
    }
}

/// Generate a mock payment reference.
fn generate_reference() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("mock_pay_{:x}{:02x}", timestamp, counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[tokio::test]
    async fn test_mock_gateway_approves() {
        let gateway = MockPaymentGateway::with_delay(Duration::ZERO);
        let amount = Money::new(240000, Currency::PHP);

        let confirmation = gateway.charge(amount, &PaymentDetails::Cash).await.unwrap();
        assert!(confirmation.reference.starts_with("mock_pay_"));
        assert_eq!(confirmation.amount, amount);
    }

    #[tokio::test]
    async fn test_mock_gateway_references_unique() {
        let gateway = MockPaymentGateway::with_delay(Duration::ZERO);
        let amount = Money::new(100, Currency::PHP);

        let a = gateway.charge(amount, &PaymentDetails::Cash).await.unwrap();
        let b = gateway.charge(amount, &PaymentDetails::Cash).await.unwrap();
        assert_ne!(a.reference, b.reference);
    }
}
