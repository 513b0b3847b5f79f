//! Application state shared across handlers.

use std::sync::Arc;

use moka::future::Cache;
use uuid::Uuid;

use crate::config::StorefrontConfig;
use crate::models::{CheckoutSession, SharedCheckout};
use crate::services::orders::OrderSubmitter;

/// Upper bound on concurrently tracked checkouts.
pub const MAX_CHECKOUTS: u64 = 10_000;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration, live checkouts, and the order submitter.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    checkouts: Cache<Uuid, SharedCheckout>,
    orders: OrderSubmitter,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Checkouts untouched for `config.session_ttl` are dropped. An order
    /// already being processed still completes; its confirmation is simply
    /// never shown.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let checkouts = Cache::builder()
            .max_capacity(MAX_CHECKOUTS)
            .time_to_idle(config.session_ttl)
            .build();
        let orders = OrderSubmitter::new(config.order_delay);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                checkouts,
                orders,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the order submitter.
    #[must_use]
    pub fn orders(&self) -> &OrderSubmitter {
        &self.inner.orders
    }

    /// Look up a live checkout.
    pub async fn checkout(&self, id: Uuid) -> Option<SharedCheckout> {
        self.inner.checkouts.get(&id).await
    }

    /// Start a new checkout from the mock data and return its ID.
    pub async fn start_checkout(&self) -> (Uuid, SharedCheckout) {
        let id = Uuid::new_v4();
        let checkout = CheckoutSession::seeded().shared();
        self.inner.checkouts.insert(id, checkout.clone()).await;
        tracing::debug!(checkout_id = %id, "Checkout started");
        (id, checkout)
    }
}
