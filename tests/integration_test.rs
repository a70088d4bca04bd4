use std::sync::Arc;

use token_quote::{
    parse_balances, parse_price_feed, BalanceRanker, ConsoleEventHandler, ConversionDefaults,
    ConversionState, PriceTable, QuoteSession, StaticPriceFeed,
};

const FEED: &str = r#"[
    {"currency": "BLUR", "date": "2023-08-29T07:10:40.000Z", "price": 0.20811525423728813},
    {"currency": "BNEO", "date": "2023-08-29T07:10:50.000Z", "price": 7.1282679},
    {"currency": "BUSD", "date": "2023-08-29T07:10:40.000Z", "price": 0.999183113},
    {"currency": "BUSD", "date": "2023-08-29T07:10:40.000Z", "price": 0.9998782611186441},
    {"currency": "USD", "date": "2023-08-29T07:10:40.000Z", "price": 1},
    {"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.9337373737374},
    {"currency": "USDC", "date": "2023-08-29T07:10:30.000Z", "price": 1},
    {"currency": "USDC", "date": "2023-08-29T07:10:30.000Z", "price": 0.989832}
]"#;

const BALANCES: &str = r#"[
    {"currency": "BTC", "amount": 2, "chain": "Ethereum"},
    {"currency": "ETH", "amount": 0, "chain": "Ethereum"},
    {"currency": "X", "amount": 5, "chain": "UnknownChain"}
]"#;

#[test]
fn feed_dedups_first_record_wins() {
    let table = PriceTable::build(parse_price_feed(FEED).unwrap());

    assert_eq!(table.len(), 6);
    assert_eq!(table.lookup("BUSD").unwrap().unit_price, 0.999183113);
    assert_eq!(table.lookup("USDC").unwrap().unit_price, 1.0);
    assert!(table.lookup("ATOM").is_none());
}

#[test]
fn converts_with_snapshot_prices() {
    let table = PriceTable::build(parse_price_feed(FEED).unwrap());
    let defaults = ConversionDefaults::new("ETH", "USD", 1.0);

    let state = ConversionState::initialize(&defaults, &table);
    assert_eq!(state.target_amount, Some(1645.93));

    let state = state.update_from_target(822.97);
    assert_eq!(state.source_amount, Some(0.5));
}

#[test]
fn ranks_the_documented_example() {
    let balances = parse_balances(BALANCES).unwrap();
    let ranked = BalanceRanker::default().rank(&balances);

    let keys: Vec<&str> = ranked.iter().map(|r| r.key()).collect();
    assert_eq!(keys, vec!["BTC"]);
}

#[tokio::test]
async fn session_end_to_end() {
    let feed = StaticPriceFeed::new(parse_price_feed(FEED).unwrap());
    let mut session = QuoteSession::new(
        ConversionDefaults::default(),
        BalanceRanker::default(),
        Arc::new(ConsoleEventHandler::new()),
    );

    session.load_prices(&feed).await.unwrap();
    session.set_balances(&[
        token_quote::WalletBalance::new("ETH", 1.0, "Ethereum"),
        token_quote::WalletBalance::new("NEO", 3.0, "Neo"),
    ]);

    let rows = session.wallet_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "ETH");
    assert_eq!(rows[0].formatted_usd_value(), "1645.93");
    assert_eq!(rows[1].formatted_usd_value(), "unavailable");

    session.publish().await;
}
