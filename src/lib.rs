//! price_charts - live prices and historical charts for crypto and equity symbols
//!
//! This library provides symbol resolution, price formatting, market data
//! providers for CoinGecko and Yahoo Finance, a chart session with a single
//! live chart, the price refresh loop, price boards and bot deep links.

pub mod api;
pub mod chart;
pub mod config;
pub mod constants;
pub mod deeplink;
pub mod display;
pub mod error;
pub mod format;
pub mod market;
pub mod page;
pub mod services;

// Re-export commonly used types
pub use chart::session::{ChartSession, SessionPhase, SwitchOutcome};
pub use config::AppConfig;
pub use error::{MarketDataError, SessionError};
pub use market::traits::MarketDataProvider;
pub use market::types::{AssetRef, AssetType, FormattedPrice, PriceSeries, Timeframe};

#[cfg(test)]
mod config_tests;
