use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Crypto,
    Equity,
}

impl AssetType {
    /// Reads the asset type attribute a page carries.
    ///
    /// Only `crypto` selects the crypto provider; every other value is treated
    /// as an equity ticker.
    pub fn from_page_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("crypto") {
            AssetType::Crypto
        } else {
            AssetType::Equity
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Crypto => "crypto",
            AssetType::Equity => "equity",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a page is displaying. Fixed for the lifetime of a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    pub symbol: String,
    pub asset_type: AssetType,
}

impl AssetRef {
    pub fn new(symbol: impl Into<String>, asset_type: AssetType) -> Self {
        Self { symbol: symbol.into(), asset_type }
    }

    pub fn crypto(symbol: impl Into<String>) -> Self {
        Self::new(symbol, AssetType::Crypto)
    }

    pub fn equity(symbol: impl Into<String>) -> Self {
        Self::new(symbol, AssetType::Equity)
    }

    /// Upper-cased symbol used in chart titles and tooltips.
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }
}

/// A user-selectable chart window.
///
/// Parsing is total: tokens outside the known set are kept as `Unknown` and
/// every translation table falls back to its default for them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Timeframe {
    OneMinute,
    FiveMinutes,
    OneHour,
    OneDay,
    SevenDays,
    ThirtyDays,
    Unknown(String),
}

impl Timeframe {
    pub fn as_str(&self) -> &str {
        match self {
            Timeframe::OneMinute => "1m",
            Timeframe::FiveMinutes => "5m",
            Timeframe::OneHour => "1h",
            Timeframe::OneDay => "1d",
            Timeframe::SevenDays => "7d",
            Timeframe::ThirtyDays => "30d",
            Timeframe::Unknown(token) => token,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Timeframe::Unknown(_))
    }
}

impl From<&str> for Timeframe {
    fn from(token: &str) -> Self {
        match token.trim() {
            "1m" => Timeframe::OneMinute,
            "5m" => Timeframe::FiveMinutes,
            "1h" => Timeframe::OneHour,
            "1d" => Timeframe::OneDay,
            "7d" => Timeframe::SevenDays,
            "30d" => Timeframe::ThirtyDays,
            other => Timeframe::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Timeframe {
    fn from(token: String) -> Self {
        Timeframe::from(token.as_str())
    }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self {
        tf.as_str().to_string()
    }
}

impl FromStr for Timeframe {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Timeframe::from(s))
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical historical series: parallel label/value sequences.
///
/// Points can only be added in pairs, so `labels.len() == values.len()` holds
/// for every instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
    }

    /// Lowest and highest value, `None` for an empty series.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.labels, self.values)
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        let mut series = PriceSeries::new();
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}

/// A display-ready price string, only produced by `format::format_price`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FormattedPrice(pub(crate) String);

impl FormattedPrice {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for FormattedPrice {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
