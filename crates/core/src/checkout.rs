//! Order checkout: payment selection and the order submission guard.
//!
//! Placing an order is split in two so the caller can own the delay:
//!
//! ```text
//! idle --place_order (valid)--> submitting --complete_order--> idle
//! ```
//!
//! [`OrderCheckout::place_order`] validates synchronously and flips the
//! submission guard. [`OrderCheckout::complete_order`] is called once the
//! simulated processing time has elapsed and yields the success notification.
//! There is no way to cancel an order in between.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::AddressCatalog;
use crate::cart::Cart;
use crate::types::{PaymentDetails, PaymentMethod, Price};

/// Delivery estimate shown once an order is confirmed.
pub const ESTIMATED_DELIVERY: &str = "30-45 minutes";

/// Reasons an order cannot be placed. All are recoverable by fixing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// No delivery address is selected.
    #[error("no delivery address selected")]
    MissingAddress,
    /// Paying by card with at least one card field empty.
    #[error("card payment details are incomplete")]
    IncompletePaymentDetails,
    /// An order is already being processed.
    #[error("an order is already being submitted")]
    AlreadySubmitting,
}

impl CheckoutError {
    /// The message shown to the customer for this error.
    #[must_use]
    pub fn notification(self) -> Notification {
        match self {
            Self::MissingAddress => Notification::destructive(
                "Address Required",
                "Please select a delivery address",
            ),
            Self::IncompletePaymentDetails => Notification::destructive(
                "Payment Details Required",
                "Please fill in all card details",
            ),
            Self::AlreadySubmitting => Notification::destructive(
                "Order In Progress",
                "Your order is already being processed",
            ),
        }
    }
}

/// Visual treatment hint for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStyle {
    #[default]
    Default,
    Destructive,
    Success,
}

impl NotificationStyle {
    /// Name used as a CSS modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Success => "success",
        }
    }
}

/// A transient message for the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub style: NotificationStyle,
}

impl Notification {
    /// Create a notification.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        style: NotificationStyle,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            style,
        }
    }

    /// Create an error notification.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationStyle::Destructive)
    }

    /// Confirmation for an order of `total`.
    #[must_use]
    pub fn order_placed(total: Price) -> Self {
        Self::new(
            "Order Placed Successfully!",
            format!(
                "Your order of {} has been confirmed. Estimated delivery: {ESTIMATED_DELIVERY}.",
                total.display()
            ),
            NotificationStyle::Success,
        )
    }
}

/// An order that passed validation and is waiting on processing.
///
/// Only [`OrderCheckout::place_order`] creates one, and only
/// [`OrderCheckout::complete_order`] consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending order must be completed to clear the submission guard"]
pub struct PendingOrder {
    total: Price,
    payment_method: PaymentMethod,
}

impl PendingOrder {
    /// Total charged for the order.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }

    /// Payment method the order was placed with.
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
}

/// Cart, payment selection, and submission state for one checkout.
#[derive(Debug, Clone, Default)]
pub struct OrderCheckout {
    cart: Cart,
    payment_method: PaymentMethod,
    payment_details: PaymentDetails,
    is_submitting: bool,
}

impl OrderCheckout {
    /// Start a checkout for `cart`, paying by card.
    #[must_use]
    pub fn new(cart: Cart) -> Self {
        Self {
            cart,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total of the cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub const fn select_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    #[must_use]
    pub const fn payment_details(&self) -> &PaymentDetails {
        &self.payment_details
    }

    /// Replace the card details with what is currently in the form.
    pub fn update_payment_details(&mut self, details: PaymentDetails) {
        self.payment_details = details;
    }

    /// True between a successful `place_order` and its `complete_order`.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Validate and start submitting an order.
    ///
    /// # Errors
    ///
    /// - `MissingAddress` if `addresses` has no selection
    /// - `IncompletePaymentDetails` if paying by card with an empty card field
    /// - `AlreadySubmitting` if a previous order has not completed
    ///
    /// Nothing changes when an error is returned.
    pub fn place_order(&mut self, addresses: &AddressCatalog) -> Result<PendingOrder, CheckoutError> {
        if addresses.selected().is_none() {
            return Err(CheckoutError::MissingAddress);
        }

        if self.payment_method.requires_card_details() && !self.payment_details.is_complete() {
            return Err(CheckoutError::IncompletePaymentDetails);
        }

        if self.is_submitting {
            return Err(CheckoutError::AlreadySubmitting);
        }

        self.is_submitting = true;
        Ok(PendingOrder {
            total: self.total(),
            payment_method: self.payment_method,
        })
    }

    /// Finish processing a pending order and return the confirmation.
    pub fn complete_order(&mut self, order: PendingOrder) -> Notification {
        self.is_submitting = false;
        Notification::order_placed(order.total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::address::AddressDraft;
    use crate::cart::CartItem;
    use crate::types::{CartItemId, CurrencyCode, RegionCode};

    fn cafe_cart() -> Cart {
        let item = |id, name: &str, cents, quantity| CartItem {
            id: CartItemId::new(id),
            name: name.to_string(),
            unit_price: Price::from_cents(cents, CurrencyCode::USD),
            quantity,
        };
        Cart::new(vec![
            item(1, "Midnight Espresso", 450, 2),
            item(2, "Bloom Latte", 525, 1),
            item(3, "Dark Roast Coffee", 375, 1),
        ])
    }

    fn catalog_with_selection() -> AddressCatalog {
        let mut catalog = AddressCatalog::new();
        catalog.add_address(AddressDraft {
            name: "Home".to_string(),
            street: "123 Coffee Street".to_string(),
            city: "Bean City".to_string(),
            state: RegionCode::CA,
            zip_code: "90210".to_string(),
            is_default: false,
        });
        catalog
    }

    fn card_details() -> PaymentDetails {
        PaymentDetails {
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "12/30".to_string(),
            cvv: "123".to_string(),
            card_name: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_missing_address_with_wallet() {
        let mut checkout = OrderCheckout::new(cafe_cart());
        checkout.select_payment_method(PaymentMethod::Wallet);

        let err = checkout.place_order(&AddressCatalog::new()).unwrap_err();
        assert_eq!(err, CheckoutError::MissingAddress);
        assert!(!checkout.is_submitting());
    }

    #[test]
    fn test_missing_address_checked_before_card() {
        let mut checkout = OrderCheckout::new(cafe_cart());
        let err = checkout.place_order(&AddressCatalog::new()).unwrap_err();
        assert_eq!(err, CheckoutError::MissingAddress);
    }

    #[test]
    fn test_card_with_empty_number() {
        let mut checkout = OrderCheckout::new(cafe_cart());
        checkout.update_payment_details(PaymentDetails {
            card_number: String::new(),
            ..card_details()
        });

        let err = checkout.place_order(&catalog_with_selection()).unwrap_err();
        assert_eq!(err, CheckoutError::IncompletePaymentDetails);
        assert!(!checkout.is_submitting());
    }

    #[test]
    fn test_wallet_and_cash_skip_card_details() {
        for method in [PaymentMethod::Wallet, PaymentMethod::Cash] {
            let mut checkout = OrderCheckout::new(cafe_cart());
            checkout.select_payment_method(method);
            let pending = checkout.place_order(&catalog_with_selection()).unwrap();
            assert_eq!(pending.payment_method(), method);
        }
    }

    #[test]
    fn test_place_and_complete_order() {
        let mut checkout = OrderCheckout::new(cafe_cart());
        checkout.update_payment_details(card_details());

        let pending = checkout.place_order(&catalog_with_selection()).unwrap();
        assert!(checkout.is_submitting());
        assert_eq!(pending.total().display(), "$18.00");

        let notification = checkout.complete_order(pending);
        assert!(!checkout.is_submitting());
        assert_eq!(notification.title, "Order Placed Successfully!");
        assert_eq!(
            notification.description,
            "Your order of $18.00 has been confirmed. Estimated delivery: 30-45 minutes."
        );
        assert_eq!(notification.style, NotificationStyle::Success);
    }

    #[test]
    fn test_reentrant_place_order_is_rejected() {
        let mut checkout = OrderCheckout::new(cafe_cart());
        checkout.select_payment_method(PaymentMethod::Cash);
        let catalog = catalog_with_selection();

        let pending = checkout.place_order(&catalog).unwrap();
        assert_eq!(
            checkout.place_order(&catalog),
            Err(CheckoutError::AlreadySubmitting)
        );

        let _ = checkout.complete_order(pending);
        assert!(checkout.place_order(&catalog).is_ok());
    }

    #[test]
    fn test_error_notifications() {
        let missing = CheckoutError::MissingAddress.notification();
        assert_eq!(missing.title, "Address Required");
        assert_eq!(missing.description, "Please select a delivery address");
        assert_eq!(missing.style, NotificationStyle::Destructive);

        let card = CheckoutError::IncompletePaymentDetails.notification();
        assert_eq!(card.title, "Payment Details Required");
        assert_eq!(card.description, "Please fill in all card details");
    }

    #[test]
    fn test_total_is_recomputed_from_cart() {
        let checkout = OrderCheckout::new(cafe_cart());
        assert_eq!(checkout.total(), checkout.cart().total());
        assert_eq!(checkout.total().display(), "$18.00");
    }
}
