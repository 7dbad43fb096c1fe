/// Symbol resolution helpers.
///
/// Canonical symbol (used internally): whatever the page carries, e.g.
/// "bitcoin" for crypto or "aapl" for equities.
///
/// Provider mappings:
/// - CoinGecko: curated slug table, unmapped symbols pass through unchanged
/// - Yahoo:     upper-cased ticker, e.g. "AAPL"

const COINGECKO_IDS: [(&str, &str); 12] = [
    ("bitcoin", "bitcoin"),
    ("ethereum", "ethereum"),
    ("ripple", "ripple"),
    ("hedera-hashgraph", "hedera-hashgraph"),
    ("stellar", "stellar"),
    ("quant-network", "quant-network"),
    ("ondo", "ondo"),
    ("xdc-network", "xdc-network"),
    ("pepe", "pepe"),
    ("shiba-inu", "shiba-inu"),
    ("solana", "solana"),
    ("dogecoin", "dogecoin"),
];

/// Unmapped symbols are returned as-is, so callers must already hold a valid
/// CoinGecko id for anything outside the table.
pub fn to_coingecko_id(symbol: &str) -> String {
    COINGECKO_IDS
        .iter()
        .find(|(known, _)| *known == symbol)
        .map(|(_, id)| id.to_string())
        .unwrap_or_else(|| symbol.to_string())
}

pub fn to_yahoo_ticker(symbol: &str) -> String {
    symbol.to_uppercase()
}

pub fn is_curated_coin(symbol: &str) -> bool {
    COINGECKO_IDS.iter().any(|(known, _)| *known == symbol)
}

/// "hedera-hashgraph" -> "Hedera Hashgraph"
pub fn display_name(provider_id: &str) -> String {
    provider_id
        .split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
