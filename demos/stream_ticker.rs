//! Market data streaming explorer.
//!
//! Subscribes to the ticker and order book channels for one market and logs
//! everything that arrives for thirty seconds, then disposes both
//! subscriptions.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info cargo run --example stream_ticker --features tracing
//! ```
//!
//! Pick a different market:
//! ```sh
//! FORESIGHT_TICKER=KXETH-26JUN30 RUST_LOG=info cargo run --example stream_ticker --features tracing
//! ```

use std::time::Duration;

use foresight_client_sdk::stream::{Client, OrderbookMessage, SubscribeOptions};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let ticker = std::env::var("FORESIGHT_TICKER").unwrap_or_else(|_| "KXBTC-25DEC31".to_owned());
    let client = Client::new("https://api.foresight.trade")?;

    info!(market = %ticker, "subscribing to ticker and order book");

    let ticker_subscription = client.listen_to_market_ticker(
        &ticker,
        |update| {
            info!(
                stream = "ticker",
                yes_bid = ?update.yes_bid,
                yes_ask = ?update.yes_ask,
                last = ?update.price,
                volume = ?update.volume
            );
        },
        SubscribeOptions::new()
            .on_connect(|| info!(stream = "ticker", "connected"))
            .on_disconnect(|| warn!(stream = "ticker", "disconnected"))
            .on_error(|e| warn!(stream = "ticker", error = %e)),
    );

    let book_subscription = client.listen_to_orderbook(
        &ticker,
        |message| match message {
            OrderbookMessage::OrderbookSnapshot(snapshot) => info!(
                stream = "orderbook",
                yes_levels = snapshot.yes.len(),
                no_levels = snapshot.no.len(),
                "snapshot"
            ),
            OrderbookMessage::OrderbookDelta(delta) => info!(
                stream = "orderbook",
                price = delta.price,
                delta = delta.delta,
                side = ?delta.side
            ),
            _ => {}
        },
        SubscribeOptions::new().on_error(|e| warn!(stream = "orderbook", error = %e)),
    );

    tokio::time::sleep(Duration::from_secs(30)).await;

    ticker_subscription.dispose();
    book_subscription.dispose();
    info!("disposed both subscriptions");

    Ok(())
}
