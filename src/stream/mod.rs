//! Streaming market and account data over persistent WebSocket connections.
//!
//! Each call to one of the `listen_to_*` methods on [`Client`] opens its own
//! connection, keeps it alive with periodic heartbeats, and transparently
//! reconnects with exponential backoff when the server drops it. Events are
//! delivered through caller-supplied callbacks; [`Subscription`] (or a
//! [`Disposer`] cloned from it) tears the connection down.
//!
//! # Example
//!
//! ```ignore
//! let client = stream::Client::new("https://api.foresight.trade")?;
//!
//! let subscription = client.listen_to_market_ticker(
//!     "KXBTC-25DEC31",
//!     |update| println!("yes bid: {:?}", update.yes_bid),
//!     stream::SubscribeOptions::new()
//!         .on_connect(|| println!("connected"))
//!         .on_error(|e| eprintln!("stream error: {e}")),
//! );
//!
//! // ... later
//! subscription.dispose();
//! ```

pub mod channel;
pub mod client;
mod connection;
pub mod config;
pub mod error;
pub mod message;
pub mod subscription;
pub mod types;

pub use channel::{AccountEvents, Channel, MarketTicker, Orderbook};
pub use client::Client;
pub use config::{Config, ReconnectPolicy};
#[expect(
    clippy::module_name_repetitions,
    reason = "StreamError includes module name for clarity when used outside this module"
)]
pub use error::StreamError;
pub use message::{Classified, ControlFrame};
pub use subscription::{ConnectionState, Disposer, SubscribeOptions, Subscription};
pub use types::{
    AccountEvent, BalanceUpdate, FillUpdate, OrderUpdate, OrderbookDelta, OrderbookMessage,
    OrderbookSnapshot, PositionUpdate, PriceLevel, SettlementUpdate, Side, TickerUpdate,
};
