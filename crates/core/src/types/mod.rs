//! Core types for the checkout.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod payment;
pub mod price;
pub mod region;

pub use id::*;
pub use payment::{PaymentDetails, PaymentMethod};
pub use price::{CurrencyCode, Price};
pub use region::{RegionCode, RegionCodeError};
