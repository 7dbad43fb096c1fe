//! Bot deep links and web-app payloads.
//!
//! A deep link opens a chat with the bot and passes a slash command as the
//! `start` parameter. Web-app buttons send the shorter payload form instead.

use std::fmt;
use url::Url;

use crate::constants::bot::DEFAULT_CHART_PERIOD;
use crate::error::DeepLinkError;

/// Commands the bot understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotCommand {
    Crypto,
    Stocks,
    Chart { symbol: String, period: String },
    News { symbol: String },
}

impl BotCommand {
    /// Chart with the default `7d` period.
    pub fn chart(symbol: impl Into<String>) -> Self {
        BotCommand::Chart { symbol: symbol.into(), period: DEFAULT_CHART_PERIOD.to_string() }
    }

    pub fn news(symbol: impl Into<String>) -> Self {
        BotCommand::News { symbol: symbol.into() }
    }

    /// `/crypto`, `/chart bitcoin 7d`, ...
    pub fn slash_command(&self) -> String {
        match self {
            BotCommand::Crypto => "/crypto".to_string(),
            BotCommand::Stocks => "/stocks".to_string(),
            BotCommand::Chart { symbol, period } => format!("/chart {} {}", symbol, period),
            BotCommand::News { symbol } => format!("/news {}", symbol),
        }
    }

    /// `crypto`, `chart:bitcoin 7d`, `news:AAPL`, ...
    pub fn webapp_payload(&self) -> String {
        match self {
            BotCommand::Crypto => "crypto".to_string(),
            BotCommand::Stocks => "stocks".to_string(),
            BotCommand::Chart { symbol, period } => format!("chart:{} {}", symbol, period),
            BotCommand::News { symbol } => format!("news:{}", symbol),
        }
    }

    /// Parses a web-app payload. A chart payload without a period gets the default one.
    pub fn parse_payload(payload: &str) -> Result<Self, DeepLinkError> {
        let payload = payload.trim();
        let unknown = || DeepLinkError::UnknownPayload(payload.to_string());

        match payload {
            "crypto" => return Ok(BotCommand::Crypto),
            "stocks" => return Ok(BotCommand::Stocks),
            _ => {}
        }

        if let Some(rest) = payload.strip_prefix("chart:") {
            let mut parts = rest.split_whitespace();
            let symbol = parts.next().ok_or_else(unknown)?;
            let period = parts.next().unwrap_or(DEFAULT_CHART_PERIOD);
            return Ok(BotCommand::Chart {
                symbol: symbol.to_lowercase(),
                period: period.to_lowercase(),
            });
        }

        if let Some(rest) = payload.strip_prefix("news:") {
            let symbol = rest.trim();
            if symbol.is_empty() {
                return Err(unknown());
            }
            return Ok(BotCommand::news(symbol));
        }

        Err(unknown())
    }

    pub fn deep_link(&self, host: &str, bot: &str) -> Result<Url, DeepLinkError> {
        deep_link(host, bot, &self.slash_command())
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slash_command())
    }
}

/// `https://<host>/<bot>?start=<percent-encoded command>`.
///
/// The command gets a leading `/` if it lacks one.
pub fn deep_link(host: &str, bot: &str, command: &str) -> Result<Url, DeepLinkError> {
    let command = command.trim();
    if command.is_empty() || command == "/" {
        return Err(DeepLinkError::EmptyCommand);
    }

    let host = host.trim().trim_end_matches('/');
    if host.is_empty() || host.contains('/') {
        return Err(DeepLinkError::InvalidAddress(format!("host '{}'", host)));
    }
    if bot.is_empty() || !bot.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(DeepLinkError::InvalidAddress(format!("bot username '{}'", bot)));
    }

    let command = if command.starts_with('/') { command.to_string() } else { format!("/{}", command) };
    let raw = format!("https://{}/{}?start={}", host, bot, urlencoding::encode(&command));

    Url::parse(&raw).map_err(|e| DeepLinkError::InvalidAddress(format!("{}: {}", raw, e)))
}
