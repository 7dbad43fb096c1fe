use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::constants::{events, messages};
use crate::display::PriceDisplay;
use crate::error::MarketDataResult;
use crate::market::traits::MarketDataProvider;
use crate::market::types::{AssetRef, FormattedPrice};

/// Keeps the price region of a page current.
pub struct PriceRefresher {
    asset: AssetRef,
    provider: Arc<dyn MarketDataProvider>,
    display: Arc<dyn PriceDisplay>,
    interval: Duration,
}

impl PriceRefresher {
    pub fn new(
        asset: AssetRef,
        provider: Arc<dyn MarketDataProvider>,
        display: Arc<dyn PriceDisplay>,
        interval: Duration,
    ) -> Self {
        Self { asset, provider, display, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One refresh: loading, then the formatted price or "Price unavailable".
    ///
    /// A failure replaces whatever price was shown before.
    pub async fn refresh_once(&self) -> MarketDataResult<FormattedPrice> {
        self.display.show_loading();

        match self.provider.fetch_current_price(&self.asset).await {
            Ok(price) => {
                debug!(event = events::PRICE_REFRESHED, "💲 [REFRESH] {} = {}", self.asset.display_symbol(), price);
                self.display.show_price(&price);
                Ok(price)
            }
            Err(e) => {
                warn!(event = events::PRICE_UNAVAILABLE, "⚠️ [REFRESH] {}", e);
                self.display.show_error(messages::PRICE_UNAVAILABLE);
                Err(e)
            }
        }
    }

    /// Spawns the refresh loop. The first refresh runs immediately.
    pub fn start(self: Arc<Self>) -> RefreshHandle {
        let interval = self.interval;
        let task = tokio::spawn(async move {
            info!(
                "🔄 [REFRESH] Price refresh started for {} (every {}s)",
                self.asset.display_symbol(),
                interval.as_secs()
            );

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                // Errors are already reflected in the display
                let _ = self.refresh_once().await;
            }
        });

        RefreshHandle { task }
    }
}

/// Owns the spawned refresh task; stopping or dropping it ends the loop.
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
