//! Payment method selection and card details.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit or debit card. Requires [`PaymentDetails`].
    #[default]
    Card,
    /// Digital wallet; the customer is redirected to complete payment.
    Wallet,
    /// Cash on delivery.
    Cash,
}

impl PaymentMethod {
    /// Every payment method, in display order.
    pub const ALL: [Self; 3] = [Self::Card, Self::Wallet, Self::Cash];

    /// Form value used for this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Wallet => "wallet",
            Self::Cash => "cash",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::Wallet => "Digital Wallet",
            Self::Cash => "Cash on Delivery",
        }
    }

    /// Whether card details must be filled in before placing an order.
    #[must_use]
    pub const fn requires_card_details(self) -> bool {
        matches!(self, Self::Card)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card details entered on the payment form.
///
/// Free text; only checked for presence. `Debug` is implemented manually to
/// keep card data out of logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_name: String,
}

impl PaymentDetails {
    /// True when every card field has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.card_number.is_empty()
            && !self.expiry_date.is_empty()
            && !self.cvv.is_empty()
            && !self.card_name.is_empty()
    }
}

impl fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("card_number", &"[REDACTED]")
            .field("expiry_date", &"[REDACTED]")
            .field("cvv", &"[REDACTED]")
            .field("card_name", &self.card_name)
            .finish()
    }
}
