use std::fmt::Display;

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use reqwest::Client;
use tracing::debug;

use crate::error::{MarketDataError, MarketDataResult};

use super::{
    http::get_json,
    labels::date_label,
    symbols::to_yahoo_ticker,
    timeframe::equity_granularity,
    traits::MarketDataProvider,
    types::{AssetRef, PriceSeries, Timeframe},
    wire::{YahooChartResponse, YahooChartResult},
};

/// Yahoo Finance chart API adapter (equities).
///
/// Spot price and history both come from the chart endpoint; the spot query
/// simply omits interval and range.
#[derive(Clone)]
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn chart_url(&self, ticker: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(ticker))
    }

    async fn chart(&self, ticker: &str, query: &[(&str, &str)]) -> Result<Option<YahooChartResult>, String> {
        let url = self.chart_url(ticker);
        let resp: YahooChartResponse = get_json(&self.client, &url, query).await?;
        if let Some(err) = &resp.chart.error {
            debug!("📉 [YAHOO] {} returned error {}: {}", ticker, err.code, err.description);
        }
        Ok(resp.chart.first_result())
    }
}

/// Normalizes one chart result into a series.
///
/// Timestamps and closes are paired by index; a null close drops its
/// timestamp too, and surplus entries on either side are ignored.
pub fn series_from_chart_result<Tz>(result: &YahooChartResult, tz: &Tz) -> PriceSeries
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    result
        .timestamps()
        .iter()
        .zip(result.closes())
        .filter_map(|(secs, close)| {
            let value = close.filter(|v| v.is_finite())?;
            let label = date_label(secs.checked_mul(1000)?, tz)?;
            Some((label, value))
        })
        .collect()
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    fn provider_id(&self, symbol: &str) -> String {
        to_yahoo_ticker(symbol)
    }

    async fn fetch_spot(&self, asset: &AssetRef) -> MarketDataResult<f64> {
        let ticker = self.provider_id(&asset.symbol);
        let result = self
            .chart(&ticker, &[])
            .await
            .map_err(|e| MarketDataError::price(&asset.symbol, e))?
            .ok_or_else(|| MarketDataError::price(&asset.symbol, "empty chart result"))?;

        result
            .regular_market_price()
            .filter(|p| p.is_finite())
            .ok_or_else(|| MarketDataError::price(&asset.symbol, "regularMarketPrice missing"))
    }

    async fn fetch_series(&self, asset: &AssetRef, timeframe: &Timeframe) -> MarketDataResult<PriceSeries> {
        let ticker = self.provider_id(&asset.symbol);
        let granularity = equity_granularity(timeframe);
        debug!(
            "📈 [YAHOO] chart {} interval={} range={} ({})",
            ticker, granularity.interval, granularity.range, timeframe
        );

        let result = self
            .chart(
                &ticker,
                &[
                    ("interval", granularity.interval.as_str()),
                    ("range", granularity.range.as_str()),
                ],
            )
            .await
            .map_err(|e| MarketDataError::chart(&asset.symbol, e))?
            .ok_or_else(|| MarketDataError::chart(&asset.symbol, "empty chart result"))?;

        Ok(series_from_chart_result(&result, &Local))
    }
}
