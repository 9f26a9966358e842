use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::formats::CommaSeparator;
use serde_with::{DisplayFromStr, StringWithSeparator, serde_as, skip_serializing_none};
use strum_macros::Display;

use crate::trade::types::Side;
use crate::types::{DateTime, Decimal, Utc};

/// Lifecycle state of a market.
#[non_exhaustive]
#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarketStatus {
    /// Listed but not yet accepting orders
    Unopened,
    /// Accepting orders
    #[serde(alias = "open")]
    Active,
    /// No longer accepting orders, awaiting settlement
    Closed,
    /// Settled and paid out
    Settled,
    /// A status this SDK does not know yet (captures the raw value)
    #[serde(untagged)]
    Unknown(String),
}

/// A binary event market.
#[non_exhaustive]
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Market {
    /// Unique market ticker, e.g. `KXBTC-25DEC31`
    pub ticker: String,
    /// Ticker of the event this market belongs to
    #[serde(default)]
    pub event_ticker: Option<String>,
    /// Market question as shown to traders
    pub title: String,
    /// Clarifying subtitle, if any
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Lifecycle state
    pub status: MarketStatus,
    /// Best resting yes bid in cents
    #[serde(default)]
    pub yes_bid: Option<u32>,
    /// Best resting yes ask in cents
    #[serde(default)]
    pub yes_ask: Option<u32>,
    /// Last traded price in cents
    #[serde(default)]
    pub last_price: Option<u32>,
    /// Contracts traded over the market's lifetime
    #[serde(default)]
    pub volume: Option<u64>,
    /// Contracts currently held open
    #[serde(default)]
    pub open_interest: Option<u64>,
    /// Lifetime traded notional in collateral, as a decimal string
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub notional_volume: Option<Decimal>,
    /// When trading opens
    #[serde(default)]
    pub open_time: Option<DateTime<Utc>>,
    /// When trading closes
    #[serde(default)]
    pub close_time: Option<DateTime<Utc>>,
    /// Winning side, present once settled
    #[serde(default)]
    pub result: Option<Side>,
}

/// Venue-wide trading availability.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Builder)]
pub struct ExchangeStatus {
    /// Whether the venue is reachable and serving data
    pub exchange_active: bool,
    /// Whether order placement is currently allowed
    pub trading_active: bool,
    /// When the flags last changed
    #[serde(default)]
    pub updated_time: Option<DateTime<Utc>>,
}

/// Query parameters for listing markets.
#[non_exhaustive]
#[skip_serializing_none]
#[serde_as]
#[derive(Clone, Debug, Default, Serialize, Builder)]
#[builder(on(String, into))]
pub struct MarketsRequest {
    /// Restrict to markets of one event
    pub event_ticker: Option<String>,
    /// Restrict to one lifecycle state
    pub status: Option<MarketStatus>,
    /// Restrict to specific tickers, sent comma-separated
    #[serde_as(as = "Option<StringWithSeparator<CommaSeparator, String>>")]
    pub tickers: Option<Vec<String>>,
    /// Page size, server-capped
    pub limit: Option<u32>,
}
