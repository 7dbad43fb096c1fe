use std::sync::Arc;

use reqwest::Client;

use crate::config::AppConfig;

use super::{
    coingecko::CoinGeckoProvider,
    traits::MarketDataProvider,
    types::AssetType,
    yahoo::YahooProvider,
};

pub fn build_provider(asset_type: AssetType, client: Client, config: &AppConfig) -> Arc<dyn MarketDataProvider> {
    match asset_type {
        AssetType::Crypto => Arc::new(CoinGeckoProvider::new(client, config.coingecko.base_url.clone())),
        AssetType::Equity => Arc::new(YahooProvider::new(client, config.yahoo.base_url.clone())),
    }
}
