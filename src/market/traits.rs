use async_trait::async_trait;

use crate::error::MarketDataResult;
use crate::format::format_price;

use super::types::{AssetRef, FormattedPrice, PriceSeries, Timeframe};

/// One upstream market data API.
///
/// Chosen once per session from the asset type (see `factory::build_provider`)
/// so nothing downstream branches on crypto vs equity.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Identifier this upstream expects for `symbol`.
    fn provider_id(&self, symbol: &str) -> String;

    /// Raw spot price in USD.
    async fn fetch_spot(&self, asset: &AssetRef) -> MarketDataResult<f64>;

    async fn fetch_current_price(&self, asset: &AssetRef) -> MarketDataResult<FormattedPrice> {
        let spot = self.fetch_spot(asset).await?;
        Ok(format_price(spot))
    }

    async fn fetch_series(&self, asset: &AssetRef, timeframe: &Timeframe) -> MarketDataResult<PriceSeries>;
}
