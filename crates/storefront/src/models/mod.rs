//! Domain models for the storefront.

pub mod checkout;
pub mod session;

pub use checkout::{CheckoutSession, SharedCheckout};
pub use session::session_keys;
