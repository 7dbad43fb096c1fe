//! Custom error types for the price and chart layer
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use thiserror::Error;

/// Errors surfaced by a market data provider.
///
/// Transport failures, non-success statuses, decode failures and missing
/// fields all collapse into one of these two kinds; callers only care which
/// operation could not be served.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    #[error("Price unavailable for {symbol}: {reason}")]
    PriceUnavailable { symbol: String, reason: String },

    #[error("Chart data unavailable for {symbol}: {reason}")]
    ChartDataUnavailable { symbol: String, reason: String },
}

impl MarketDataError {
    pub fn price(symbol: impl Into<String>, reason: impl ToString) -> Self {
        MarketDataError::PriceUnavailable {
            symbol: symbol.into(),
            reason: reason.to_string(),
        }
    }

    pub fn chart(symbol: impl Into<String>, reason: impl ToString) -> Self {
        MarketDataError::ChartDataUnavailable {
            symbol: symbol.into(),
            reason: reason.to_string(),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            MarketDataError::PriceUnavailable { symbol, .. } => symbol,
            MarketDataError::ChartDataUnavailable { symbol, .. } => symbol,
        }
    }
}

pub type MarketDataResult<T> = Result<T, MarketDataError>;

/// Rendering surface errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Not enough points to draw a chart (have {count}, need {required})")]
    NotEnoughPoints { count: usize, required: usize },

    #[error("Drawing failed: {0}")]
    Draw(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Chart session errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Deep link construction errors
#[derive(Error, Debug, PartialEq)]
pub enum DeepLinkError {
    #[error("Command must not be empty")]
    EmptyCommand,

    #[error("Invalid bot address: {0}")]
    InvalidAddress(String),

    #[error("Unrecognized web app payload: {0}")]
    UnknownPayload(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
