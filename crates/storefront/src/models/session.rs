//! Session-related types.
//!
//! The cookie session only carries an identifier; checkout state itself lives
//! in [`crate::state::AppState`].

/// Session keys for checkout data.
pub mod session_keys {
    /// Key for the visitor's checkout ID (a UUID).
    pub const CHECKOUT_ID: &str = "checkout_id";
}
