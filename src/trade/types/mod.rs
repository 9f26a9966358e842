use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub mod request;
pub mod response;

pub use request::{CreateOrderRequest, FillsRequest, OrdersRequest, PositionsRequest};
pub use response::{Balance, CancelAllResponse, Fill, Order, Position};

/// Side of a binary contract.
///
/// Every market settles each contract at either 100 cents (the side that
/// occurred) or 0 cents. Orders, fills, positions and settlement results all
/// reference the same two sides.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// The market's proposition occurs
    #[serde(alias = "YES")]
    Yes,
    /// The market's proposition does not occur
    #[serde(alias = "NO")]
    No,
}

impl Side {
    /// The opposing side of the contract.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Yes => Side::No,
            Side::No => Side::Yes,
        }
    }
}

/// Whether an order opens or reduces exposure on its side.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    /// Acquire contracts on the given side
    #[serde(alias = "BUY")]
    Buy,
    /// Dispose of contracts on the given side
    #[serde(alias = "SELL")]
    Sell,
}

/// Execution style of an order.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderType {
    /// Rests at the limit price until filled, cancelled or expired
    #[default]
    Limit,
    /// Executes immediately against the book at any price
    Market,
}

/// Lifecycle state of an order.
#[non_exhaustive]
#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    /// Accepted but not yet visible to the matching engine
    Pending,
    /// Resting on the book
    Open,
    /// Completely matched
    Filled,
    /// Removed by request or by the engine
    #[serde(alias = "canceled")]
    Cancelled,
    /// Reached its expiration before filling
    Expired,
    /// A status this SDK does not know yet (captures the raw value)
    #[serde(untagged)]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Yes).unwrap(), r#""yes""#);
        assert_eq!(serde_json::to_string(&Side::No).unwrap(), r#""no""#);
    }

    #[test]
    fn side_accepts_uppercase_alias() {
        let side: Side = serde_json::from_str(r#""YES""#).unwrap();

        assert_eq!(side, Side::Yes);
    }

    #[test]
    fn side_opposite_flips() {
        assert_eq!(Side::Yes.opposite(), Side::No);
        assert_eq!(Side::No.opposite(), Side::Yes);
    }

    #[test]
    fn order_status_accepts_us_spelling() {
        let status: OrderStatus = serde_json::from_str(r#""canceled""#).unwrap();

        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn unknown_order_status_is_captured() {
        let status: OrderStatus = serde_json::from_str(r#""halted""#).unwrap();

        assert_eq!(status, OrderStatus::Unknown("halted".to_owned()));
    }

    #[test]
    fn order_type_defaults_to_limit() {
        assert_eq!(OrderType::default(), OrderType::Limit);
    }

    #[test]
    fn display_uses_wire_casing() {
        assert_eq!(Side::Yes.to_string(), "yes");
        assert_eq!(Action::Sell.to_string(), "sell");
        assert_eq!(OrderType::Market.to_string(), "market");
        assert_eq!(OrderStatus::Open.to_string(), "open");
    }
}
