//! Checkout flow state machine.

use crate::cart::CartStore;
use crate::checkout::{Order, PaymentDetails, PaymentGateway, ShippingAddress};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Stages in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStage {
    /// Cart review.
    Cart,
    /// Shipping address entry.
    AddressEntry,
    /// Payment method selection.
    PaymentSelection,
    /// Simulated payment in progress.
    Processing,
    /// Payment approved, order created.
    Success,
    /// Payment declined.
    Failed,
    /// Receipt shown; cart still populated.
    ReceiptView,
}

impl CheckoutStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStage::Cart => "cart",
            CheckoutStage::AddressEntry => "address_entry",
            CheckoutStage::PaymentSelection => "payment_selection",
            CheckoutStage::Processing => "processing",
            CheckoutStage::Success => "success",
            CheckoutStage::Failed => "failed",
            CheckoutStage::ReceiptView => "receipt_view",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStage::Cart => "Cart",
            CheckoutStage::AddressEntry => "Address",
            CheckoutStage::PaymentSelection => "Payment",
            CheckoutStage::Processing => "Processing",
            CheckoutStage::Success => "Success",
            CheckoutStage::Failed => "Failed",
            CheckoutStage::ReceiptView => "Receipt",
        }
    }
}

/// The checkout state machine.
///
/// Stages advance only when the gate for the transition passes; every
/// validation failure is synchronous, local, and recoverable, leaving
/// the stage where it was. The cart store is borrowed per operation
/// rather than owned, so the same store instance serves every view.
#[derive(Debug)]
pub struct CheckoutFlow {
    stage: CheckoutStage,
    address: Option<ShippingAddress>,
    payment: Option<PaymentDetails>,
    order: Option<Order>,
    created_at: i64,
    updated_at: i64,
}

impl CheckoutFlow {
    /// Create a flow at the cart-review stage.
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            stage: CheckoutStage::Cart,
            address: None,
            payment: None,
            order: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// The entered shipping address, if any.
    pub fn address(&self) -> Option<&ShippingAddress> {
        self.address.as_ref()
    }

    /// The selected payment method, if any.
    pub fn payment(&self) -> Option<&PaymentDetails> {
        self.payment.as_ref()
    }

    /// The order created by a successful confirm, if any.
    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// Unix timestamp the flow was created.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// "Proceed to Checkout": Cart to AddressEntry.
    ///
    /// Rejects an empty cart so no zero-total charge can be reached;
    /// the UI shows its empty-state view in that case.
    pub fn proceed_to_address(&mut self, store: &CartStore) -> Result<(), CommerceError> {
        if self.stage != CheckoutStage::Cart {
            return Err(self.invalid(CheckoutStage::AddressEntry));
        }
        if store.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        self.set_stage(CheckoutStage::AddressEntry);
        Ok(())
    }

    /// Submit the shipping address: AddressEntry to PaymentSelection.
    ///
    /// Gated by the address validity predicate; a failing address
    /// blocks without advancing.
    pub fn submit_address(&mut self, address: ShippingAddress) -> Result<(), CommerceError> {
        if self.stage != CheckoutStage::AddressEntry {
            return Err(self.invalid(CheckoutStage::PaymentSelection));
        }
        address.validate()?;
        self.address = Some(address);
        self.set_stage(CheckoutStage::PaymentSelection);
        Ok(())
    }

    /// Record the payment method while at PaymentSelection.
    ///
    /// Card details are gated at `confirm`, matching the original flow
    /// where "Pay Now" performs the validation.
    pub fn select_payment(&mut self, payment: PaymentDetails) -> Result<(), CommerceError> {
        if self.stage != CheckoutStage::PaymentSelection {
            return Err(self.invalid(CheckoutStage::PaymentSelection));
        }
        self.payment = Some(payment);
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// "Cancel": PaymentSelection back to Cart without touching the
    /// cart store. Entered address and method are discarded.
    pub fn cancel(&mut self) -> Result<(), CommerceError> {
        if self.stage != CheckoutStage::PaymentSelection {
            return Err(self.invalid(CheckoutStage::Cart));
        }
        self.address = None;
        self.payment = None;
        self.set_stage(CheckoutStage::Cart);
        Ok(())
    }

    /// "Pay Now": PaymentSelection through Processing to Success or
    /// Failed.
    ///
    /// Re-checks the address predicate and, for card payments, the
    /// card predicate before anything else; a failure blocks with the
    /// stage unchanged and the gateway never called. Cash skips the
    /// card predicate entirely. On approval the order record is
    /// created from the cart total at this moment; the cart itself
    /// stays populated until `finish`.
    pub async fn confirm(
        &mut self,
        store: &CartStore,
        gateway: &dyn PaymentGateway,
    ) -> Result<&Order, CommerceError> {
        if self.stage != CheckoutStage::PaymentSelection {
            return Err(self.invalid(CheckoutStage::Processing));
        }
        let address = match self.address.clone() {
            Some(a) => a,
            None => return Err(CommerceError::IncompleteAddress("shipping address".into())),
        };
        address.validate()?;
        let payment = match self.payment.clone() {
            Some(p) => p,
            None => return Err(CommerceError::MissingPaymentMethod),
        };
        payment.validate()?;
        let total = store.try_total()?;

        self.set_stage(CheckoutStage::Processing);

        match gateway.charge(total, &payment).await {
            Ok(confirmation) => {
                let order = Order::from_cart(store, address, &payment, confirmation.reference);
                tracing::info!(order_id = %order.id, total = %order.total, "order created");
                self.set_stage(CheckoutStage::Success);
                Ok(&*self.order.insert(order))
            }
            Err(e) => {
                self.set_stage(CheckoutStage::Failed);
                Err(e)
            }
        }
    }

    /// Show the receipt: Success to ReceiptView.
    pub fn view_receipt(&mut self) -> Result<&Order, CommerceError> {
        if self.stage != CheckoutStage::Success {
            return Err(self.invalid(CheckoutStage::ReceiptView));
        }
        self.set_stage(CheckoutStage::ReceiptView);
        match self.order.as_ref() {
            Some(order) => Ok(order),
            // Unreachable: Success is only set with an order in place.
            None => Err(CommerceError::InvalidTransition {
                from: CheckoutStage::Success.as_str().to_string(),
                to: CheckoutStage::ReceiptView.as_str().to_string(),
            }),
        }
    }

    /// Retry after a decline: Failed back to PaymentSelection.
    pub fn retry_payment(&mut self) -> Result<(), CommerceError> {
        if self.stage != CheckoutStage::Failed {
            return Err(self.invalid(CheckoutStage::PaymentSelection));
        }
        self.set_stage(CheckoutStage::PaymentSelection);
        Ok(())
    }

    /// "Back to Shop": ReceiptView to Cart.
    ///
    /// Clears the cart store and discards the order record.
    pub fn finish(&mut self, store: &mut CartStore) -> Result<(), CommerceError> {
        if self.stage != CheckoutStage::ReceiptView {
            return Err(self.invalid(CheckoutStage::Cart));
        }
        store.clear();
        self.order = None;
        self.address = None;
        self.payment = None;
        self.set_stage(CheckoutStage::Cart);
        Ok(())
    }

    fn set_stage(&mut self, stage: CheckoutStage) {
        tracing::debug!(from = self.stage.as_str(), to = stage.as_str(), "checkout transition");
        self.stage = stage;
        self.updated_at = current_timestamp();
    }

    fn invalid(&self, to: CheckoutStage) -> CommerceError {
        CommerceError::InvalidTransition {
            from: self.stage.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
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
