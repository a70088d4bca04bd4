use std::sync::Arc;

use tracing::{info, warn};

use token_quote::config::log_level_from_env;
use token_quote::{
  AppConfig, BalanceRanker, ChainPriorities, ConsoleEventHandler,
  FileBalanceProvider, FilePriceFeed, QuoteSession,
};

fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  // Initialize logging
  tracing_subscriber::fmt()
    .with_level(true)
    .with_target(false)
    .with_max_level(log_level_from_env())
    .with_file(true)
    .with_line_number(true)
    .init();

  let config = AppConfig::from_env();

  tokio::runtime::Runtime::new()?.block_on(async {
    info!("Token quote v{}", token_quote::VERSION);
    info!("Price feed: {}", config.prices_file.display());

    let handler = Arc::new(ConsoleEventHandler::new());
    let mut session = QuoteSession::new(
      config.defaults.clone(),
      BalanceRanker::new(ChainPriorities::default()),
      handler,
    );

    session.load_prices(&FilePriceFeed::new(&config.prices_file)).await?;

    let symbols: Vec<&str> = session.prices().symbols().collect();
    info!("Available currencies ({}):", symbols.len());
    for symbol in &symbols {
      info!("  {} [{}]", symbol, config.icons.icon_path(symbol));
    }

    match &config.balances_file {
      Some(path) => {
        info!("Balances: {}", path.display());
        session.load_balances(&FileBalanceProvider::new(path)).await?;
      }
      None => warn!("BALANCES_FILE not set, wallet ranking skipped"),
    }

    session.publish().await;

    Ok(())
  })
}
