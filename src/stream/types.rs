//! Message shapes delivered on the streaming channels.
//!
//! Account events arrive from the settlement gateway with camelCase fields;
//! ticker and order book frames mirror the upstream exchange feed and use
//! snake_case. Enums carrying an `Other` variant tolerate message types added
//! server-side before this SDK learns about them.

use bon::Builder;
use serde::Deserialize;
use serde_json::Value;

pub use crate::trade::types::Side;

/// Event delivered on the account channel, discriminated by the `type` field.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountEvent {
    /// An order was accepted by the matching engine
    OrderPlaced(OrderUpdate),
    /// An order was matched, fully or partially
    OrderFilled(FillUpdate),
    /// An order was cancelled, by request or by the engine
    OrderCancelled(OrderUpdate),
    /// A position changed as a result of fills or settlement
    PositionUpdated(PositionUpdate),
    /// The collateral balance changed
    BalanceUpdated(BalanceUpdate),
    /// A market the account holds a position in settled
    MarketSettled(SettlementUpdate),
    /// An event type this SDK does not know yet
    #[serde(untagged)]
    Other(Value),
}

impl AccountEvent {
    /// Check if the event affects an individual order.
    #[must_use]
    pub const fn is_order(&self) -> bool {
        matches!(
            self,
            AccountEvent::OrderPlaced(_)
                | AccountEvent::OrderFilled(_)
                | AccountEvent::OrderCancelled(_)
        )
    }
}

/// Order lifecycle notification (placed or cancelled).
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    /// Server-assigned order identifier
    pub order_id: String,
    /// Market the order rests in
    #[serde(default)]
    pub market_ticker: Option<String>,
    /// Side of the binary contract
    #[serde(default)]
    pub side: Option<Side>,
    /// Limit price in cents
    #[serde(default)]
    pub price: Option<u32>,
    /// Contract count at placement
    #[serde(default)]
    pub count: Option<i64>,
    /// Contracts still resting after this event
    #[serde(default)]
    pub remaining_count: Option<i64>,
    /// Unix timestamp in seconds
    #[serde(default)]
    pub ts: Option<i64>,
}

/// Trade execution against one of the account's orders.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct FillUpdate {
    /// Order that was matched
    pub order_id: String,
    /// Identifier of the trade itself
    #[serde(default)]
    pub trade_id: Option<String>,
    /// Market the fill occurred in
    #[serde(default)]
    pub market_ticker: Option<String>,
    /// Side of the binary contract
    #[serde(default)]
    pub side: Option<Side>,
    /// Execution price in cents
    #[serde(default)]
    pub price: Option<u32>,
    /// Contracts filled
    #[serde(default)]
    pub count: Option<i64>,
    /// Whether the account's order took liquidity
    #[serde(default)]
    pub is_taker: Option<bool>,
    /// Fee charged, in collateral units
    #[serde(default)]
    pub fee: Option<i64>,
    /// Unix timestamp in seconds
    #[serde(default)]
    pub ts: Option<i64>,
}

/// Net position change in one market.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    /// Market the position is held in
    pub market_ticker: String,
    /// Signed contract count (positive yes, negative no)
    pub position: i64,
    /// Collateral at risk, in collateral units
    #[serde(default)]
    pub exposure: Option<i64>,
    /// Realized profit and loss, in collateral units
    #[serde(default)]
    pub realized_pnl: Option<i64>,
    /// Unix timestamp in seconds
    #[serde(default)]
    pub ts: Option<i64>,
}

/// Collateral balance change.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct BalanceUpdate {
    /// Balance available for new orders, in collateral units
    pub available: i64,
    /// Total balance including locked collateral, in collateral units
    #[serde(default)]
    pub total: Option<i64>,
    /// Unix timestamp in seconds
    #[serde(default)]
    pub ts: Option<i64>,
}

/// Settlement of a market the account participated in.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct SettlementUpdate {
    /// Market that settled
    pub market_ticker: String,
    /// Winning side of the binary contract
    #[serde(default)]
    pub result: Option<Side>,
    /// Amount credited to the account, in collateral units
    #[serde(default)]
    pub payout: Option<i64>,
    /// Unix timestamp in seconds
    #[serde(default)]
    pub ts: Option<i64>,
}

/// Top-of-book update on the ticker channel.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct TickerUpdate {
    /// Market the quote belongs to
    pub market_ticker: String,
    /// Last traded price in cents
    #[serde(default)]
    pub price: Option<u32>,
    /// Best resting yes bid in cents
    #[serde(default)]
    pub yes_bid: Option<u32>,
    /// Best resting yes ask in cents
    #[serde(default)]
    pub yes_ask: Option<u32>,
    /// Contracts traded over the market's lifetime
    #[serde(default)]
    pub volume: Option<u64>,
    /// Contracts currently held open
    #[serde(default)]
    pub open_interest: Option<u64>,
    /// Unix timestamp in seconds
    #[serde(default)]
    pub ts: Option<i64>,
}

/// Frame delivered on the order book channel, discriminated by `type`.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderbookMessage {
    /// Full book state, sent once after connecting
    OrderbookSnapshot(OrderbookSnapshot),
    /// Incremental change to a single price level
    OrderbookDelta(OrderbookDelta),
    /// A frame type this SDK does not know yet
    #[serde(untagged)]
    Other(Value),
}

/// Complete order book for one market.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct OrderbookSnapshot {
    /// Market the book belongs to
    pub market_ticker: String,
    /// Resting yes levels (price ascending)
    #[serde(default)]
    pub yes: Vec<PriceLevel>,
    /// Resting no levels (price ascending)
    #[serde(default)]
    pub no: Vec<PriceLevel>,
}

/// Change to the resting quantity at one price level.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct OrderbookDelta {
    /// Market the change occurred in
    pub market_ticker: String,
    /// Price level in cents
    pub price: u32,
    /// Signed change in resting contracts
    pub delta: i64,
    /// Side of the book that changed
    pub side: Side,
}

/// Price level as sent on the wire: `[price_cents, contracts]`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct PriceLevel(pub u32, pub i64);

impl PriceLevel {
    /// Price in cents.
    #[must_use]
    pub const fn price(&self) -> u32 {
        self.0
    }

    /// Contracts resting at this price.
    #[must_use]
    pub const fn contracts(&self) -> i64 {
        self.1
    }
}
