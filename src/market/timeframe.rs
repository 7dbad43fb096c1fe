//! Timeframe translation tables.
//!
//! Every lookup is total: tokens a table does not know map to that table's
//! default. The equity interval and range tables are independent, so e.g.
//! `30d` yields the default interval together with a `1mo` range.

use std::fmt;

use serde::Serialize;

use super::types::Timeframe;

/// Days of history requested from CoinGecko.
pub fn crypto_range_days(timeframe: &Timeframe) -> u32 {
    match timeframe {
        Timeframe::OneHour => 1,
        Timeframe::OneDay => 1,
        Timeframe::SevenDays => 7,
        Timeframe::ThirtyDays => 30,
        _ => 1,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EquityInterval {
    #[serde(rename = "1m")]
    M1,
    #[serde(rename = "5m")]
    M5,
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "1d")]
    D1,
}

impl EquityInterval {
    pub fn as_str(self) -> &'static str {
        match self {
            EquityInterval::M1 => "1m",
            EquityInterval::M5 => "5m",
            EquityInterval::H1 => "1h",
            EquityInterval::D1 => "1d",
        }
    }
}

impl fmt::Display for EquityInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EquityRange {
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "7d")]
    D7,
    #[serde(rename = "1mo")]
    M1,
}

impl EquityRange {
    pub fn as_str(self) -> &'static str {
        match self {
            EquityRange::H1 => "1h",
            EquityRange::D1 => "1d",
            EquityRange::D7 => "7d",
            EquityRange::M1 => "1mo",
        }
    }
}

impl fmt::Display for EquityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for the Yahoo chart endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EquityGranularity {
    pub interval: EquityInterval,
    pub range: EquityRange,
}

pub fn equity_interval(timeframe: &Timeframe) -> EquityInterval {
    match timeframe {
        Timeframe::OneMinute => EquityInterval::M1,
        Timeframe::FiveMinutes => EquityInterval::M5,
        Timeframe::OneHour => EquityInterval::H1,
        Timeframe::OneDay => EquityInterval::D1,
        _ => EquityInterval::M5,
    }
}

pub fn equity_range(timeframe: &Timeframe) -> EquityRange {
    match timeframe {
        Timeframe::OneHour => EquityRange::H1,
        Timeframe::OneDay => EquityRange::D1,
        Timeframe::SevenDays => EquityRange::D7,
        Timeframe::ThirtyDays => EquityRange::M1,
        _ => EquityRange::D1,
    }
}

pub fn equity_granularity(timeframe: &Timeframe) -> EquityGranularity {
    EquityGranularity {
        interval: equity_interval(timeframe),
        range: equity_range(timeframe),
    }
}
