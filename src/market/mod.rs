pub mod factory;
pub mod traits;
pub mod types;
pub mod wire;

pub mod http;
pub mod labels;
pub mod symbols;
pub mod timeframe;

pub mod coingecko;
pub mod yahoo;
