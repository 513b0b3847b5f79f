//! Business logic services for storefront.
//!
//! # Services
//!
//! - `orders` - Simulated order processing
pub mod orders;
