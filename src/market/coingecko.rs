use std::collections::HashMap;
use std::fmt::Display;

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use reqwest::Client;
use tracing::debug;

use crate::constants::upstream::VS_CURRENCY;
use crate::error::{MarketDataError, MarketDataResult};

use super::{
    http::get_json,
    labels::date_label,
    symbols::to_coingecko_id,
    timeframe::crypto_range_days,
    traits::MarketDataProvider,
    types::{AssetRef, PriceSeries, Timeframe},
    wire::{MarketChartResponse, SimplePriceResponse},
};

/// CoinGecko public API adapter (crypto assets).
#[derive(Clone)]
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn market_chart_url(&self, id: &str) -> String {
        format!("{}/coins/{}/market_chart", self.base_url, urlencoding::encode(id))
    }

    async fn simple_price(&self, ids: &str) -> Result<SimplePriceResponse, String> {
        let url = format!("{}/simple/price", self.base_url);
        get_json(&self.client, &url, &[("ids", ids), ("vs_currencies", VS_CURRENCY)]).await
    }

    /// Spot prices for several ids in a single request.
    ///
    /// Ids the upstream does not know (or quotes without a usd field) are
    /// simply absent from the returned map.
    pub async fn fetch_spot_many(&self, ids: &[String]) -> MarketDataResult<HashMap<String, f64>> {
        let joined = ids.join(",");
        let resp = self
            .simple_price(&joined)
            .await
            .map_err(|e| MarketDataError::price(joined.clone(), e))?;

        Ok(resp
            .into_iter()
            .filter_map(|(id, entry)| entry.usd.filter(|p| p.is_finite()).map(|p| (id, p)))
            .collect())
    }
}

/// Normalizes a market chart payload. `None` when the payload has no `prices`.
pub fn series_from_market_chart<Tz>(resp: &MarketChartResponse, tz: &Tz) -> Option<PriceSeries>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let prices = resp.prices.as_ref()?;
    Some(
        prices
            .iter()
            .filter_map(|(millis, value)| {
                let value = value.filter(|v| v.is_finite())?;
                let label = date_label(*millis as i64, tz)?;
                Some((label, value))
            })
            .collect(),
    )
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    fn provider_id(&self, symbol: &str) -> String {
        to_coingecko_id(symbol)
    }

    async fn fetch_spot(&self, asset: &AssetRef) -> MarketDataResult<f64> {
        let id = self.provider_id(&asset.symbol);
        let resp = self
            .simple_price(&id)
            .await
            .map_err(|e| MarketDataError::price(&asset.symbol, e))?;

        resp.get(&id)
            .and_then(|entry| entry.usd)
            .filter(|p| p.is_finite())
            .ok_or_else(|| MarketDataError::price(&asset.symbol, format!("no usd quote for '{}'", id)))
    }

    async fn fetch_series(&self, asset: &AssetRef, timeframe: &Timeframe) -> MarketDataResult<PriceSeries> {
        let id = self.provider_id(&asset.symbol);
        let days = crypto_range_days(timeframe).to_string();
        debug!("📈 [COINGECKO] market_chart {} days={} ({})", id, days, timeframe);

        let url = self.market_chart_url(&id);
        let resp: MarketChartResponse = get_json(
            &self.client,
            &url,
            &[("vs_currency", VS_CURRENCY), ("days", days.as_str())],
        )
        .await
        .map_err(|e| MarketDataError::chart(&asset.symbol, e))?;

        series_from_market_chart(&resp, &Local)
            .ok_or_else(|| MarketDataError::chart(&asset.symbol, "response has no prices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn chart(json: serde_json::Value) -> MarketChartResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_series_preserves_upstream_order() {
        let resp = chart(serde_json::json!({
            "prices": [
                [1709812800000.0, 68000.5],
                [1709899200000.0, 67000.25],
                [1709985600000.0, 69000.0]
            ]
        }));
        let series = series_from_market_chart(&resp, &Utc).unwrap();
        assert_eq!(series.labels(), ["3/7/2024", "3/8/2024", "3/9/2024"]);
        assert_eq!(series.values(), [68000.5, 67000.25, 69000.0]);
    }

    #[test]
    fn test_series_missing_prices_is_none() {
        let resp = chart(serde_json::json!({"error": "coin not found"}));
        assert!(series_from_market_chart(&resp, &Utc).is_none());
    }

    #[test]
    fn test_series_empty_prices_is_empty() {
        let resp = chart(serde_json::json!({"prices": []}));
        let series = series_from_market_chart(&resp, &Utc).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_series_skips_null_points_pairwise() {
        let resp = chart(serde_json::json!({
            "prices": [[1709812800000.0, 1.0], [1709899200000.0, null], [1709985600000.0, 3.0]]
        }));
        let series = series_from_market_chart(&resp, &Utc).unwrap();
        assert_eq!(series.labels(), ["3/7/2024", "3/9/2024"]);
        assert_eq!(series.values(), [1.0, 3.0]);
    }

    #[test]
    fn test_provider_id_uses_symbol_table() {
        let provider = CoinGeckoProvider::new(Client::new(), "http://localhost/");
        assert_eq!(provider.provider_id("solana"), "solana");
        assert_eq!(provider.provider_id("cardano"), "cardano");
        assert_eq!(provider.base_url, "http://localhost");
    }

    #[test]
    fn test_market_chart_url_encodes_id() {
        let provider = CoinGeckoProvider::new(Client::new(), "http://localhost/api/v3");
        assert_eq!(provider.market_chart_url("bitcoin"), "http://localhost/api/v3/coins/bitcoin/market_chart");
        assert_eq!(
            provider.market_chart_url("btc?days=1#x/y"),
            "http://localhost/api/v3/coins/btc%3Fdays%3D1%23x%2Fy/market_chart"
        );
    }
}
