#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::trade::types::{Action, OrderStatus, OrderType, Side};

/// Body of an order submission.
///
/// Limit orders must carry a `price`; market orders must not. The client
/// validates this before the request leaves the process.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, Builder)]
#[builder(on(String, into))]
pub struct CreateOrderRequest {
    /// Market to trade, e.g. `KXBTC-25DEC31`
    pub market_ticker: String,
    /// Side of the binary contract
    pub side: Side,
    /// Whether to open or reduce exposure
    pub action: Action,
    /// Contracts to trade
    pub count: i64,
    /// Limit price in cents (1 to 99)
    pub price: Option<u32>,
    /// Execution style, defaults to limit
    #[builder(default)]
    pub order_type: OrderType,
    /// Caller-chosen idempotency key, echoed back on the order
    pub client_order_id: Option<String>,
    /// Unix timestamp in seconds after which an unfilled order expires
    pub expiration_ts: Option<i64>,
}

/// Query parameters for listing orders.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Builder)]
#[builder(on(String, into))]
pub struct OrdersRequest {
    /// Restrict to one market
    pub market_ticker: Option<String>,
    /// Restrict to one lifecycle state
    pub status: Option<OrderStatus>,
    /// Page size, server-capped
    pub limit: Option<u32>,
}

/// Query parameters for listing fills.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Builder)]
#[builder(on(String, into))]
pub struct FillsRequest {
    /// Restrict to one market
    pub market_ticker: Option<String>,
    /// Restrict to fills of one order
    pub order_id: Option<String>,
    /// Page size, server-capped
    pub limit: Option<u32>,
}

/// Query parameters for listing positions.
#[non_exhaustive]
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Builder)]
#[builder(on(String, into))]
pub struct PositionsRequest {
    /// Restrict to one market
    pub market_ticker: Option<String>,
    /// Include positions in settled markets
    pub include_settled: Option<bool>,
    /// Page size, server-capped
    pub limit: Option<u32>,
}
