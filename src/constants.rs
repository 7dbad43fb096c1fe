//! Application-wide constants and magic numbers
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make the codebase easier to tune.

use std::time::Duration;

/// Upstream API constants
pub mod upstream {
    /// CoinGecko public API root
    pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

    /// Yahoo Finance chart endpoint root (ticker is appended as a path segment)
    pub const YAHOO_CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

    /// Quote currency for every crypto query
    pub const VS_CURRENCY: &str = "usd";

    /// Yahoo rejects requests without a browser-ish user agent
    pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; price_charts/0.1)";
}

/// Refresh and transport timing
pub mod timing {
    use super::*;

    /// How often the current price is re-fetched
    pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

    /// Per-request timeout applied to the HTTP client
    pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Chart defaults
pub mod chart {
    /// Timeframe loaded when a page first opens
    pub const DEFAULT_TIMEFRAME: &str = "1d";

    /// Timeframe buttons shown on a detail page
    pub const DEFAULT_TIMEFRAME_BUTTONS: [&str; 4] = ["1h", "1d", "7d", "30d"];

    pub const LINE_COLOR: &str = "#4CAF50";
    pub const FILL_COLOR: &str = "rgba(76, 175, 80, 0.1)";
    pub const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";
    pub const LINE_TENSION: f64 = 0.4;
    pub const BORDER_WIDTH: u32 = 2;
    pub const MAX_X_TICKS: usize = 8;

    /// PNG surface dimensions
    pub const DEFAULT_WIDTH: u32 = 900;
    pub const DEFAULT_HEIGHT: u32 = 450;
}

/// User-visible degraded-state messages
pub mod messages {
    pub const PRICE_LOADING: &str = "Loading price...";
    pub const PRICE_UNAVAILABLE: &str = "Price unavailable";
    pub const CHART_LOADING: &str = "Loading chart...";
    pub const CHART_UNAVAILABLE: &str = "Chart unavailable";
    pub const NOT_AVAILABLE: &str = "N/A";
}

/// Bot deep-link defaults
pub mod bot {
    pub const DEFAULT_HOST: &str = "t.me";
    pub const DEFAULT_USERNAME: &str = "gbcn_bot";
    pub const DEFAULT_CHART_PERIOD: &str = "7d";
}

/// Default watchlists for the price boards
pub mod board {
    pub const CRYPTO_IDS: [&str; 12] = [
        "bitcoin",
        "ethereum",
        "ripple",
        "hedera-hashgraph",
        "stellar",
        "quant-network",
        "ondo",
        "xdc-network",
        "pepe",
        "shiba-inu",
        "solana",
        "dogecoin",
    ];

    pub const STOCK_TICKERS: [&str; 5] = ["AAPL", "MSFT", "NVDA", "AMZN", "GOOGL"];
}

/// Logging event names for structured logging
pub mod events {
    pub const PRICE_REFRESHED: &str = "price_refreshed";
    pub const PRICE_UNAVAILABLE: &str = "price_unavailable";
    pub const CHART_RENDERED: &str = "chart_rendered";
    pub const CHART_UNAVAILABLE: &str = "chart_unavailable";
    pub const CHART_SUPERSEDED: &str = "chart_superseded";
    pub const INIT_SKIPPED: &str = "init_skipped";
}
