//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Redirect to the checkout
//! GET  /health                    - Health check
//!
//! # Checkout
//! GET  /checkout                  - Checkout page
//! GET  /checkout/status           - Order status fragment
//! GET  /checkout/addresses/new    - Checkout page with the address form open
//! POST /checkout/addresses        - Save or cancel the address form
//! POST /checkout/addresses/select - Select a saved address
//! POST /checkout/payment          - Change payment method / card details
//! POST /checkout/order            - Place the order
//! ```

pub mod checkout;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/status", get(checkout::status))
        .route("/addresses", post(checkout::create_address))
        .route("/addresses/new", get(checkout::new_address))
        .route("/addresses/select", post(checkout::select_address))
        .route("/payment", post(checkout::update_payment))
        .route("/order", post(checkout::place_order))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/checkout") }))
        .nest("/checkout", checkout_routes())
}
