//! Watchlist price boards, as posted by the bot's `/crypto` and `/stocks` commands.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::BoardConfig;
use crate::constants::messages;
use crate::error::MarketDataResult;
use crate::format::format_price;
use crate::market::coingecko::CoinGeckoProvider;
use crate::market::symbols::display_name;
use crate::market::traits::MarketDataProvider;
use crate::market::types::{AssetRef, FormattedPrice};

pub const CRYPTO_HEADER: &str = "📊 *Crypto Prices*";
pub const STOCK_HEADER: &str = "📈 *Top Stock Prices*";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoardLine {
    pub name: String,
    /// `None` when the upstream had no price for this entry.
    pub price: Option<FormattedPrice>,
}

impl fmt::Display for BoardLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.price {
            Some(price) => write!(f, "{}: {}", self.name, price),
            None => write!(f, "{}: {}", self.name, messages::NOT_AVAILABLE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceBoard {
    pub header: &'static str,
    pub lines: Vec<BoardLine>,
}

impl PriceBoard {
    /// Markdown message text: header, then one line per entry.
    pub fn render(&self) -> String {
        let mut text = String::from(self.header);
        for line in &self.lines {
            text.push('\n');
            text.push_str(&line.to_string());
        }
        text
    }

    pub fn missing(&self) -> usize {
        self.lines.iter().filter(|l| l.price.is_none()).count()
    }
}

pub struct BoardService {
    crypto: Arc<CoinGeckoProvider>,
    equity: Arc<dyn MarketDataProvider>,
    config: BoardConfig,
}

impl BoardService {
    pub fn new(crypto: Arc<CoinGeckoProvider>, equity: Arc<dyn MarketDataProvider>, config: BoardConfig) -> Self {
        Self { crypto, equity, config }
    }

    /// All configured coins from one bulk request. Fails only if that request fails.
    pub async fn crypto_board(&self) -> MarketDataResult<PriceBoard> {
        let prices = self.crypto.fetch_spot_many(&self.config.crypto_ids).await?;

        let lines = self
            .config
            .crypto_ids
            .iter()
            .map(|id| BoardLine {
                name: display_name(id),
                price: prices.get(id).copied().map(format_price),
            })
            .collect();

        let board = PriceBoard { header: CRYPTO_HEADER, lines };
        info!("📊 [BOARD] Crypto board: {} coins, {} without price", board.lines.len(), board.missing());
        Ok(board)
    }

    /// One request per ticker; a failing ticker shows N/A without failing the board.
    pub async fn stock_board(&self) -> PriceBoard {
        let mut lines = Vec::with_capacity(self.config.stock_tickers.len());

        for ticker in &self.config.stock_tickers {
            let asset = AssetRef::equity(ticker.as_str());
            let price = match self.equity.fetch_current_price(&asset).await {
                Ok(price) => Some(price),
                Err(e) => {
                    warn!("⚠️ [BOARD] {}", e);
                    None
                }
            };
            lines.push(BoardLine { name: ticker.to_uppercase(), price });
        }

        let board = PriceBoard { header: STOCK_HEADER, lines };
        info!("📈 [BOARD] Stock board: {} tickers, {} without price", board.lines.len(), board.missing());
        board
    }
}
