//! Midnight Bloom Core - Checkout domain library.
//!
//! This crate provides the types and state used by the checkout page:
//! - [`AddressCatalog`] - known delivery addresses and the current selection
//! - [`AddressForm`] - the new-address form and its submit/cancel contract
//! - [`Cart`] - the fixed line items and their total
//! - [`OrderCheckout`] - payment selection and the order submission guard
//!
//! # Architecture
//!
//! The core crate contains only types and state transitions - no I/O, no
//! timers, no HTTP. The storefront binary owns one instance of each piece per
//! visitor and drives the simulated submission delay itself.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, region codes, and payment types
//! - [`address`] - Address records and the catalog
//! - [`address_form`] - Address form draft and validation
//! - [`cart`] - Cart line items
//! - [`checkout`] - Order placement and notifications

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod address;
pub mod address_form;
pub mod cart;
pub mod checkout;
pub mod types;

pub use address::{Address, AddressCatalog, AddressDraft, AddressError};
pub use address_form::{AddressField, AddressForm, AddressFormEvent};
pub use cart::{Cart, CartItem};
pub use checkout::{CheckoutError, Notification, NotificationStyle, OrderCheckout, PendingOrder};
pub use types::*;
