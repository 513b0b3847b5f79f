//! Simulated order processing.
//!
//! No payment provider is called. A valid order holds the checkout in the
//! submitting state for a fixed delay, then queues a confirmation.

use std::time::Duration;

use midnight_bloom_core::CheckoutError;
use tokio::task::JoinHandle;
use tracing::instrument;

use crate::models::SharedCheckout;

/// Places orders and completes them after a fixed delay.
#[derive(Debug, Clone)]
pub struct OrderSubmitter {
    delay: Duration,
}

impl OrderSubmitter {
    /// Create a submitter that takes `delay` to process each order.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Validate and submit the checkout's order.
    ///
    /// Validation runs under the checkout lock before anything is scheduled.
    /// On success a task is spawned that sleeps for the delay, clears the
    /// submission guard, and queues the confirmation. The task cannot be
    /// cancelled and keeps the checkout alive until it finishes.
    ///
    /// # Errors
    ///
    /// Returns the `CheckoutError` from validation. Its notification has
    /// already been queued on the checkout.
    #[instrument(skip(self, checkout))]
    pub async fn submit(&self, checkout: SharedCheckout) -> Result<JoinHandle<()>, CheckoutError> {
        let pending = match checkout.lock().await.place_order() {
            Ok(pending) => pending,
            Err(err) => {
                tracing::info!(error = %err, "Order rejected");
                return Err(err);
            }
        };

        tracing::info!(
            total = %pending.total(),
            payment_method = %pending.payment_method(),
            "Order submitted"
        );

        let delay = self.delay;
        Ok(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let total = pending.total();
            checkout.lock().await.complete_order(pending);
            tracing::info!(total = %total, "Order confirmed");
        }))
    }
}
