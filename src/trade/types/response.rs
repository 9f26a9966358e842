use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::trade::types::{Action, OrderStatus, OrderType, Side};
use crate::types::{DateTime, Utc};

/// An order as the venue sees it.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Order {
    /// Server-assigned order identifier
    pub order_id: String,
    /// Market the order belongs to
    pub market_ticker: String,
    /// Side of the binary contract
    pub side: Side,
    /// Whether the order opens or reduces exposure
    pub action: Action,
    /// Execution style
    #[serde(default)]
    pub order_type: OrderType,
    /// Current lifecycle state
    pub status: OrderStatus,
    /// Limit price in cents, absent for market orders
    #[serde(default)]
    pub price: Option<u32>,
    /// Contracts requested at placement
    pub count: i64,
    /// Contracts still unmatched
    #[serde(default)]
    pub remaining_count: Option<i64>,
    /// Idempotency key echoed from the submission
    #[serde(default)]
    pub client_order_id: Option<String>,
    /// When the venue accepted the order
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    /// When the order last changed state
    #[serde(default)]
    pub updated_time: Option<DateTime<Utc>>,
}

/// A single execution against one of the account's orders.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Fill {
    /// Identifier of the trade
    pub trade_id: String,
    /// Order that was matched
    pub order_id: String,
    /// Market the fill occurred in
    pub market_ticker: String,
    /// Side of the binary contract
    pub side: Side,
    /// Whether the account was opening or reducing exposure
    #[serde(default)]
    pub action: Option<Action>,
    /// Execution price in cents
    pub price: u32,
    /// Contracts filled
    pub count: i64,
    /// Whether the account's order took liquidity
    #[serde(default)]
    pub is_taker: Option<bool>,
    /// Fee charged, in collateral units
    #[serde(default)]
    pub fee: Option<i64>,
    /// When the trade executed
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
}

/// Collateral balance of the account.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Builder)]
pub struct Balance {
    /// Balance available for new orders, in collateral units
    pub available: u64,
    /// Collateral locked behind resting orders, in collateral units
    #[serde(default)]
    pub locked: Option<u64>,
    /// Total balance, in collateral units
    #[serde(default)]
    pub total: Option<u64>,
}

/// Outcome of a batch cancellation.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct CancelAllResponse {
    /// Identifiers of the orders that were cancelled
    #[serde(default)]
    pub cancelled: Vec<String>,
}

/// Net exposure in one market.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Position {
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
    /// Fees paid in this market, in collateral units
    #[serde(default)]
    pub fees_paid: Option<i64>,
}
