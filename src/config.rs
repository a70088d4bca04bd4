use std::path::PathBuf;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;
use tracing::warn;

use crate::engine::conversion::ConversionDefaults;
use crate::providers::icon_provider::TokenIcons;

/// Runtime settings read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub prices_file: PathBuf,
    pub balances_file: Option<PathBuf>,
    pub defaults: ConversionDefaults,
    pub icons: TokenIcons,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read settings, falling back to defaults for anything unset
    pub fn from_env() -> Self {
        let prices_file = std::env::var("PRICES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("prices.json"));

        let balances_file = std::env::var("BALANCES_FILE").ok().map(PathBuf::from);

        let source_symbol =
            std::env::var("DEFAULT_SOURCE_CURRENCY").unwrap_or_else(|_| "ETH".to_string());
        let target_symbol =
            std::env::var("DEFAULT_TARGET_CURRENCY").unwrap_or_else(|_| "BUSD".to_string());
        let amount = parse_or("DEFAULT_AMOUNT", 1.0);

        let icon_dir = std::env::var("ICON_DIR").unwrap_or_else(|_| "assets/tokens".to_string());
        let icon_extension = std::env::var("ICON_EXTENSION").unwrap_or_else(|_| "svg".to_string());

        let log_level = parse_or("LOG_LEVEL", LevelFilter::DEBUG);

        Self {
            prices_file,
            balances_file,
            defaults: ConversionDefaults::new(source_symbol, target_symbol, amount),
            icons: TokenIcons::new(icon_dir, icon_extension),
            log_level,
        }
    }
}

/// Log level alone, read silently so the subscriber can start before
/// the rest of the settings are parsed
pub fn log_level_from_env() -> LevelFilter {
    std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(LevelFilter::DEBUG)
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 8] = [
        "PRICES_FILE",
        "BALANCES_FILE",
        "DEFAULT_SOURCE_CURRENCY",
        "DEFAULT_TARGET_CURRENCY",
        "DEFAULT_AMOUNT",
        "ICON_DIR",
        "ICON_EXTENSION",
        "LOG_LEVEL",
    ];

    fn clear() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_when_unset() {
        clear();
        let config = AppConfig::from_env();

        assert_eq!(config.prices_file, PathBuf::from("prices.json"));
        assert_eq!(config.balances_file, None);
        assert_eq!(config.defaults, ConversionDefaults::default());
        assert_eq!(config.icons, TokenIcons::default());
        assert_eq!(config.log_level, LevelFilter::DEBUG);
    }

    #[test]
    #[serial]
    fn reads_overrides() {
        clear();
        std::env::set_var("PRICES_FILE", "/tmp/feed.json");
        std::env::set_var("BALANCES_FILE", "/tmp/wallet.json");
        std::env::set_var("DEFAULT_SOURCE_CURRENCY", "ATOM");
        std::env::set_var("DEFAULT_TARGET_CURRENCY", "USDC");
        std::env::set_var("DEFAULT_AMOUNT", "2.5");
        std::env::set_var("LOG_LEVEL", "warn");

        let config = AppConfig::from_env();
        clear();

        assert_eq!(config.prices_file, PathBuf::from("/tmp/feed.json"));
        assert_eq!(config.balances_file, Some(PathBuf::from("/tmp/wallet.json")));
        assert_eq!(config.defaults, ConversionDefaults::new("ATOM", "USDC", 2.5));
        assert_eq!(config.log_level, LevelFilter::WARN);
    }

    #[test]
    #[serial]
    fn invalid_numbers_fall_back() {
        clear();
        std::env::set_var("DEFAULT_AMOUNT", "one");
        std::env::set_var("LOG_LEVEL", "loud");

        let config = AppConfig::from_env();
        clear();

        assert_eq!(config.defaults.amount, 1.0);
        assert_eq!(config.log_level, LevelFilter::DEBUG);
    }

    #[test]
    #[serial]
    fn log_level_is_readable_before_logging_starts() {
        clear();
        assert_eq!(log_level_from_env(), LevelFilter::DEBUG);

        std::env::set_var("LOG_LEVEL", "error");
        assert_eq!(log_level_from_env(), LevelFilter::ERROR);

        std::env::set_var("LOG_LEVEL", "loud");
        assert_eq!(log_level_from_env(), LevelFilter::DEBUG);
        clear();
    }
}
