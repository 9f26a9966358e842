//! Re-exported types from external crates for convenience.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Ethereum address type and the [`address!`] macro for compile-time address literals.
/// [`ChainId`] is a type alias for `u64` representing EVM chain IDs.
/// [`Signature`] represents the secp256k1 signatures attached to vault authorizations.
/// [`U256`] carries on-chain integer amounts.
pub use alloy::primitives::{Address, ChainId, Signature, U256, address};
use bon::Builder;
/// Date and time types for timestamps in API responses and order expirations.
pub use chrono::{DateTime, Utc};
/// Arbitrary precision decimal type for prices, sizes, and amounts.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use foresight_client_sdk::types::dec;
/// let price = dec!(0.55);
/// ```
pub use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
/// UUID type used for API keys and client order identifiers.
pub use uuid::Uuid;

/// One page of a cursor-paginated listing.
///
/// The venue returns `next_cursor` until the listing is exhausted; pass it back
/// verbatim to fetch the following page. A missing cursor means this was the
/// last page.
#[non_exhaustive]
#[derive(Clone, Debug, Serialize, Deserialize, Builder, PartialEq)]
#[builder(on(String, into))]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Continuation token for the next page, absent on the final page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    /// The length of `data`.
    pub count: u64,
}
