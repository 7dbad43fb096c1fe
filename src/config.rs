use serde::Deserialize;
use std::fs;
use std::time::Duration;

use crate::constants::{board, bot, chart, timing, upstream};
use crate::error::ConfigError;
use crate::market::types::Timeframe;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CoinGeckoConfig {
    pub base_url: String,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self { base_url: upstream::COINGECKO_BASE_URL.to_string() }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct YahooConfig {
    pub base_url: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self { base_url: upstream::YAHOO_CHART_BASE_URL.to_string() }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub default_timeframe: Timeframe,
    /// Timeframe buttons offered on the page, in display order.
    pub timeframes: Vec<Timeframe>,
    /// Where the PNG surface writes rendered charts.
    pub output_dir: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_timeframe: Timeframe::from(chart::DEFAULT_TIMEFRAME),
            timeframes: chart::DEFAULT_TIMEFRAME_BUTTONS.iter().map(|t| Timeframe::from(*t)).collect(),
            output_dir: std::env::temp_dir().join("price_charts").to_string_lossy().into_owned(),
            width: chart::DEFAULT_WIDTH,
            height: chart::DEFAULT_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub host: String,
    pub username: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            host: bot::DEFAULT_HOST.to_string(),
            username: bot::DEFAULT_USERNAME.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub crypto_ids: Vec<String>,
    pub stock_tickers: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            crypto_ids: board::CRYPTO_IDS.iter().map(|s| s.to_string()).collect(),
            stock_tickers: board::STOCK_TICKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub refresh_interval_secs: u64,
    pub http_timeout_secs: u64,

    pub coingecko: CoinGeckoConfig,
    pub yahoo: YahooConfig,
    pub chart: ChartConfig,
    pub bot: BotConfig,
    pub board: BoardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            refresh_interval_secs: timing::DEFAULT_REFRESH_INTERVAL_SECS,
            http_timeout_secs: timing::DEFAULT_HTTP_TIMEOUT.as_secs(),
            coingecko: CoinGeckoConfig::default(),
            yahoo: YahooConfig::default(),
            chart: ChartConfig::default(),
            bot: BotConfig::default(),
            board: BoardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads `config.yaml` (or `$PRICE_CHARTS_CONFIG`). A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var("PRICE_CHARTS_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
        match fs::read_to_string(&config_path) {
            Ok(content) => Self::from_yaml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("ℹ️ {} not found - using built-in defaults", config_path);
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path: config_path, source }),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("coingecko.base_url", &self.coingecko.base_url), ("yahoo.base_url", &self.yahoo.base_url)] {
            url::Url::parse(value).map_err(|e| ConfigError::Invalid { field, reason: format!("'{}': {}", value, e) })?;
        }
        for (field, secs) in [("refresh_interval_secs", self.refresh_interval_secs), ("http_timeout_secs", self.http_timeout_secs)] {
            if secs == 0 {
                return Err(ConfigError::Invalid { field, reason: "must be greater than zero".to_string() });
            }
        }
        if self.bot.username.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "bot.username", reason: "must not be empty".to_string() });
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
