//! Unit tests for configuration structures and parsing.

#[cfg(test)]
mod config_tests {
    use crate::config::*;
    use crate::error::ConfigError;
    use crate::market::types::Timeframe;
    use std::time::Duration;

    // ============= AppConfig Default Tests =============

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.refresh_interval(), Duration::from_secs(30));
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
        assert_eq!(config.coingecko.base_url, "https://api.coingecko.com/api/v3");
        assert_eq!(config.yahoo.base_url, "https://query1.finance.yahoo.com/v8/finance/chart");
        assert_eq!(config.bot.username, "gbcn_bot");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chart_config_default() {
        let config = ChartConfig::default();

        assert_eq!(config.default_timeframe, Timeframe::OneDay);
        assert_eq!(
            config.timeframes,
            vec![Timeframe::OneHour, Timeframe::OneDay, Timeframe::SevenDays, Timeframe::ThirtyDays]
        );
        assert_eq!((config.width, config.height), (900, 450));
    }

    #[test]
    fn test_board_config_default() {
        let config = BoardConfig::default();

        assert_eq!(config.crypto_ids.len(), 12);
        assert_eq!(config.crypto_ids[0], "bitcoin");
        assert_eq!(config.stock_tickers, vec!["AAPL", "MSFT", "NVDA", "AMZN", "GOOGL"]);
    }

    // ============= YAML Parsing Tests =============

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_yaml_str("").unwrap();
        assert_eq!(config.refresh_interval_secs, 30);

        let config = AppConfig::from_yaml_str("\u{feff}\n  \n").unwrap();
        assert_eq!(config.bot.host, "t.me");
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let yaml = r#"
refresh_interval_secs: 5
chart:
  default_timeframe: "7d"
board:
  stock_tickers: ["TSLA"]
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.refresh_interval(), Duration::from_secs(5));
        assert_eq!(config.chart.default_timeframe, Timeframe::SevenDays);
        assert_eq!(config.chart.timeframes.len(), 4);
        assert_eq!(config.board.stock_tickers, vec!["TSLA"]);
        assert_eq!(config.board.crypto_ids.len(), 12);
        assert_eq!(config.http_timeout_secs, 10);
    }

    #[test]
    fn test_bom_is_stripped() {
        let yaml = "\u{feff}bind_addr: \"127.0.0.1:9000\"\n";
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_full_document() {
        let yaml = r#"
bind_addr: "127.0.0.1:3001"
refresh_interval_secs: 60
http_timeout_secs: 3
coingecko:
  base_url: "http://localhost:4000/api/v3"
yahoo:
  base_url: "http://localhost:4000/chart"
chart:
  default_timeframe: "1h"
  timeframes: ["1m", "5m", "1h"]
  output_dir: "/tmp/charts"
  width: 640
  height: 320
bot:
  host: "telegram.me"
  username: "other_bot"
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.http_timeout(), Duration::from_secs(3));
        assert_eq!(config.coingecko.base_url, "http://localhost:4000/api/v3");
        assert_eq!(config.yahoo.base_url, "http://localhost:4000/chart");
        assert_eq!(config.chart.timeframes, vec![Timeframe::OneMinute, Timeframe::FiveMinutes, Timeframe::OneHour]);
        assert_eq!(config.chart.output_dir, "/tmp/charts");
        assert_eq!(config.bot.host, "telegram.me");
        assert_eq!(config.bot.username, "other_bot");
    }

    #[test]
    fn test_unknown_timeframe_in_config_is_kept() {
        let config = AppConfig::from_yaml_str("chart:\n  default_timeframe: \"1y\"\n").unwrap();
        assert_eq!(config.chart.default_timeframe, Timeframe::Unknown("1y".to_string()));
    }

    // ============= Validation Tests =============

    #[test]
    fn test_zero_refresh_interval_rejected() {
        let err = AppConfig::from_yaml_str("refresh_interval_secs: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "refresh_interval_secs", .. }));
    }

    #[test]
    fn test_zero_http_timeout_rejected() {
        let err = AppConfig::from_yaml_str("http_timeout_secs: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "http_timeout_secs", .. }));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let err = AppConfig::from_yaml_str("coingecko:\n  base_url: \"not a url\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "coingecko.base_url", .. }));
    }

    #[test]
    fn test_blank_bot_username_rejected() {
        let err = AppConfig::from_yaml_str("bot:\n  username: \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bot.username", .. }));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = AppConfig::from_yaml_str("refresh_interval_secs: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
