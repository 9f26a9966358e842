//! Channel descriptors for the streaming endpoints.
//!
//! All three channels ride the same connection machinery; a [`Channel`] only
//! contributes the endpoint path, the field that discriminates its data
//! frames, and the message type those frames deserialize into.

use alloy::hex::ToHexExt as _;
use alloy::primitives::Address;
use serde::de::DeserializeOwned;

use crate::stream::types::{AccountEvent, OrderbookMessage, TickerUpdate};

/// A streaming channel: an endpoint path plus the shape of its data frames.
pub trait Channel: Send + Sync + 'static {
    /// Message type delivered for this channel's data frames.
    type Event: DeserializeOwned + Send + 'static;

    /// Field whose presence marks a frame as belonging to this channel.
    const DISCRIMINATOR: &'static str;

    /// Path appended to the streaming endpoint.
    fn path(&self) -> String;
}

/// Order, fill, position, balance and settlement events for one wallet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AccountEvents {
    /// Wallet address whose activity is streamed
    pub address: Address,
}

impl Channel for AccountEvents {
    type Event = AccountEvent;

    const DISCRIMINATOR: &'static str = "type";

    fn path(&self) -> String {
        format!("/ws/evm/{}", self.address.encode_hex_with_prefix())
    }
}

/// Top-of-book quotes and volume for one market.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketTicker {
    /// Market ticker, e.g. `KXBTC-25DEC31`
    pub ticker: String,
}

impl Channel for MarketTicker {
    type Event = TickerUpdate;

    const DISCRIMINATOR: &'static str = "market_ticker";

    fn path(&self) -> String {
        format!("/ws/kalshi/event/{}", self.ticker)
    }
}

/// Full order book snapshots and incremental deltas for one market.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Orderbook {
    /// Market ticker, e.g. `KXBTC-25DEC31`
    pub ticker: String,
}

impl Channel for Orderbook {
    type Event = OrderbookMessage;

    const DISCRIMINATOR: &'static str = "type";

    fn path(&self) -> String {
        format!("/ws/kalshi/orderbook/{}", self.ticker)
    }
}
