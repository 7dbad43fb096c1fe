//! Upstream response shapes.
//!
//! Fields the normalizers depend on are optional so a partial payload decodes
//! and the provider can report precisely what was missing.

use std::collections::HashMap;

use serde::Deserialize;

// ── CoinGecko ────────────────────────────────────────────────────────────

/// `/simple/price` response: provider id -> quote currencies.
pub type SimplePriceResponse = HashMap<String, SimplePriceEntry>;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SimplePriceEntry {
    #[serde(default)]
    pub usd: Option<f64>,
}

/// `/coins/{id}/market_chart` response.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MarketChartResponse {
    /// `[epoch_millis, price]` pairs, oldest first.
    #[serde(default)]
    pub prices: Option<Vec<(f64, Option<f64>)>>,
}

// ── Yahoo Finance ────────────────────────────────────────────────────────

/// `/v8/finance/chart/{ticker}` response.
#[derive(Deserialize, Debug, Clone)]
pub struct YahooChartResponse {
    pub chart: YahooChart,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct YahooChart {
    #[serde(default)]
    pub result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    pub error: Option<YahooChartError>,
}

impl YahooChart {
    pub fn first_result(self) -> Option<YahooChartResult> {
        self.result.and_then(|results| results.into_iter().next())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct YahooChartError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct YahooChartResult {
    #[serde(default)]
    pub meta: Option<YahooMeta>,
    /// Epoch seconds.
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub indicators: Option<YahooIndicators>,
}

impl YahooChartResult {
    pub fn regular_market_price(&self) -> Option<f64> {
        self.meta.as_ref().and_then(|m| m.regular_market_price)
    }

    pub fn closes(&self) -> &[Option<f64>] {
        self.indicators
            .as_ref()
            .and_then(|i| i.quote.first())
            .map(|q| q.close.as_slice())
            .unwrap_or_default()
    }

    pub fn timestamps(&self) -> &[i64] {
        self.timestamp.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct YahooMeta {
    #[serde(rename = "regularMarketPrice", default)]
    pub regular_market_price: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct YahooIndicators {
    #[serde(default)]
    pub quote: Vec<YahooQuote>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct YahooQuote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}
