//! Authenticated trading walkthrough.
//!
//! Derives API credentials from the wallet in `FORESIGHT_PRIVATE_KEY`, picks
//! an active market, rests a deep out-of-the-money limit order, lists the
//! account's open orders, cancels the order again, and prints the collateral
//! balance.
//!
//! ```sh
//! FORESIGHT_PRIVATE_KEY=0x... RUST_LOG=info cargo run --example trading --features tracing
//! ```

use std::str::FromStr as _;

use alloy::signers::local::LocalSigner;
use foresight_client_sdk::markets;
use foresight_client_sdk::markets::types::{MarketStatus, MarketsRequest};
use foresight_client_sdk::trade::types::request::{CreateOrderRequest, OrdersRequest};
use foresight_client_sdk::trade::types::{Action, Side};
use foresight_client_sdk::{BASE, PRIVATE_KEY_VAR, trade};
use tracing::{info, warn};

const HOST: &str = "https://api.foresight.trade";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let private_key = std::env::var(PRIVATE_KEY_VAR)?;
    let signer = LocalSigner::from_str(&private_key)?;

    let credentials = trade::Client::derive_credentials(HOST, &signer, BASE, None).await?;
    let client = trade::Client::new(HOST, credentials)?;
    info!("derived API credentials");

    let markets_client = markets::Client::new(HOST)?;
    let request = MarketsRequest::builder()
        .status(MarketStatus::Active)
        .limit(5)
        .build();
    let page = markets_client.markets(&request, None).await?;

    let Some(market) = page.data.first() else {
        warn!("no active markets, nothing to trade");
        return Ok(());
    };
    info!(market = %market.ticker, yes_bid = ?market.yes_bid, "picked a market");

    // Rest far below the book so the order cannot fill while we look at it
    let order = client
        .create_order(
            &CreateOrderRequest::builder()
                .market_ticker(market.ticker.clone())
                .side(Side::Yes)
                .action(Action::Buy)
                .count(1)
                .price(1)
                .build(),
        )
        .await?;
    info!(order_id = %order.order_id, status = ?order.status, "order placed");

    let open = client
        .orders(
            &OrdersRequest::builder()
                .market_ticker(market.ticker.clone())
                .build(),
            None,
        )
        .await?;
    info!(open_orders = open.data.len(), "listed open orders");

    let cancelled = client.cancel_order(&order.order_id).await?;
    info!(order_id = %cancelled.order_id, status = ?cancelled.status, "order cancelled");

    let balance = client.balance().await?;
    info!(available = balance.available, "collateral balance");

    Ok(())
}
