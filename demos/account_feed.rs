//! Account event feed.
//!
//! Derives the wallet address from `FORESIGHT_PRIVATE_KEY` and logs every
//! account event the venue pushes for it: order lifecycle changes, fills,
//! position and balance updates, and settlements.
//!
//! ```sh
//! FORESIGHT_PRIVATE_KEY=0x... RUST_LOG=info cargo run --example account_feed --features tracing
//! ```

use std::str::FromStr as _;
use std::time::Duration;

use alloy::signers::local::LocalSigner;
use foresight_client_sdk::PRIVATE_KEY_VAR;
use foresight_client_sdk::stream::{AccountEvent, Client, SubscribeOptions};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let private_key = std::env::var(PRIVATE_KEY_VAR)?;
    let signer = LocalSigner::from_str(&private_key)?;
    let client = Client::new("https://api.foresight.trade")?;

    info!(address = %signer.address(), "subscribing to account events");

    let subscription = client.listen_to_account_events(
        signer.address(),
        |event| match event {
            AccountEvent::OrderPlaced(order) => {
                info!(event = "order_placed", order_id = %order.order_id);
            }
            AccountEvent::OrderFilled(fill) => {
                info!(
                    event = "order_filled",
                    order_id = %fill.order_id,
                    price = ?fill.price,
                    count = ?fill.count
                );
            }
            AccountEvent::OrderCancelled(order) => {
                info!(event = "order_cancelled", order_id = %order.order_id);
            }
            AccountEvent::PositionUpdated(position) => {
                info!(
                    event = "position_updated",
                    market = %position.market_ticker,
                    position = position.position
                );
            }
            AccountEvent::BalanceUpdated(balance) => {
                info!(event = "balance_updated", available = balance.available);
            }
            AccountEvent::MarketSettled(settlement) => {
                info!(
                    event = "market_settled",
                    market = %settlement.market_ticker,
                    result = ?settlement.result
                );
            }
            other => info!(event = "other", payload = ?other),
        },
        SubscribeOptions::new()
            .on_connect(|| info!("connected"))
            .on_disconnect(|| warn!("disconnected"))
            .on_error(|e| warn!(error = %e)),
    );

    tokio::time::sleep(Duration::from_secs(60)).await;

    subscription.dispose();
    info!("disposed the subscription");

    Ok(())
}
