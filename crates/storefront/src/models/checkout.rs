//! Per-visitor checkout state.

use std::sync::Arc;

use midnight_bloom_core::{
    Address, AddressCatalog, AddressFormEvent, Cart, CheckoutError, Notification, OrderCheckout,
    PendingOrder,
};
use tokio::sync::Mutex;

/// Checkout state shared between request handlers and the order task.
pub type SharedCheckout = Arc<Mutex<CheckoutSession>>;

/// Everything one visitor's checkout page needs.
#[derive(Debug)]
pub struct CheckoutSession {
    pub addresses: AddressCatalog,
    pub checkout: OrderCheckout,
    notifications: Vec<Notification>,
}

impl CheckoutSession {
    /// Start a checkout with the given saved addresses and cart.
    #[must_use]
    pub fn new(addresses: Vec<Address>, cart: Cart) -> Self {
        Self {
            addresses: AddressCatalog::with_addresses(addresses),
            checkout: OrderCheckout::new(cart),
            notifications: Vec::new(),
        }
    }

    /// Start a checkout from the mock data.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(crate::seed::addresses(), crate::seed::cart())
    }

    /// Wrap for sharing.
    #[must_use]
    pub fn shared(self) -> SharedCheckout {
        Arc::new(Mutex::new(self))
    }

    /// Queue a notification for the next render.
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Queued notifications, oldest first, left in place.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Remove and return queued notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Apply the outcome of the address form.
    ///
    /// Returns the new address if one was added.
    pub fn apply_address_form(&mut self, event: AddressFormEvent) -> Option<Address> {
        match event {
            AddressFormEvent::Submitted(draft) => Some(self.addresses.add_address(draft)),
            AddressFormEvent::Cancelled => None,
        }
    }

    /// Validate and start an order against the selected address.
    ///
    /// On failure the matching notification is queued before returning.
    ///
    /// # Errors
    ///
    /// Returns the `CheckoutError` raised by validation.
    pub fn place_order(&mut self) -> Result<PendingOrder, CheckoutError> {
        self.checkout
            .place_order(&self.addresses)
            .inspect_err(|err| self.notifications.push(err.notification()))
    }

    /// Complete a pending order and queue its confirmation.
    pub fn complete_order(&mut self, order: PendingOrder) {
        let notification = self.checkout.complete_order(order);
        self.notify(notification);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use midnight_bloom_core::{AddressDraft, AddressId, NotificationStyle, PaymentMethod, RegionCode};

    use super::*;

    fn gym() -> AddressDraft {
        AddressDraft {
            name: "Gym".to_string(),
            street: "9 Lift Lane".to_string(),
            city: "Bean City".to_string(),
            state: RegionCode::NY,
            zip_code: "10001".to_string(),
            is_default: true,
        }
    }

    #[test]
    fn test_seeded_session_has_no_selection() {
        let session = CheckoutSession::seeded();
        assert_eq!(session.addresses.len(), 2);
        assert_eq!(session.addresses.selected_id(), None);
        assert_eq!(session.checkout.payment_method(), PaymentMethod::Card);
    }

    #[test]
    fn test_submitted_form_adds_and_selects() {
        let mut session = CheckoutSession::seeded();
        let added = session
            .apply_address_form(AddressFormEvent::Submitted(gym()))
            .unwrap();

        assert_eq!(added.id, AddressId::new(3));
        assert!(!added.is_default);
        assert_eq!(session.addresses.selected_id(), Some(added.id));
    }

    #[test]
    fn test_cancelled_form_changes_nothing() {
        let mut session = CheckoutSession::seeded();
        assert!(session.apply_address_form(AddressFormEvent::Cancelled).is_none());
        assert_eq!(session.addresses.len(), 2);
    }

    #[test]
    fn test_failed_order_queues_notification() {
        let mut session = CheckoutSession::seeded();
        assert_eq!(session.place_order(), Err(CheckoutError::MissingAddress));

        assert_eq!(session.notifications().len(), 1);
        let notifications = session.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "Address Required");
        assert!(session.take_notifications().is_empty());
    }

    #[test]
    fn test_completed_order_queues_confirmation() {
        let mut session = CheckoutSession::seeded();
        session.addresses.select_address(AddressId::new(2)).unwrap();
        session.checkout.select_payment_method(PaymentMethod::Cash);

        let pending = session.place_order().unwrap();
        session.complete_order(pending);

        let notifications = session.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].style, NotificationStyle::Success);
        assert!(notifications[0].description.contains("$18.00"));
    }
}
