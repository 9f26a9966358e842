//! Request, response, and signed-authorization types for the vault API.

use alloy::core::sol;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use strum_macros::Display;

use crate::types::{ChainId, DateTime, Decimal, Utc};

sol! {
    /// EIP-712 message authorizing the venue to pull collateral into the vault.
    #[non_exhaustive]
    #[serde_as]
    #[derive(Serialize, Debug, PartialEq)]
    struct DepositAuthorization {
        address account;
        #[serde_as(as = "DisplayFromStr")]
        uint256 amount;
        #[serde_as(as = "DisplayFromStr")]
        uint256 nonce;
        #[serde_as(as = "DisplayFromStr")]
        uint256 deadline;
    }

    /// EIP-712 message authorizing a collateral withdrawal back to the wallet.
    #[non_exhaustive]
    #[serde_as]
    #[derive(Serialize, Debug, PartialEq)]
    struct WithdrawAuthorization {
        address account;
        #[serde_as(as = "DisplayFromStr")]
        uint256 amount;
        #[serde_as(as = "DisplayFromStr")]
        uint256 nonce;
        #[serde_as(as = "DisplayFromStr")]
        uint256 deadline;
    }

    /// EIP-712 message authorizing minting of yes/no outcome-token sets
    /// against vault collateral.
    #[non_exhaustive]
    #[serde_as]
    #[derive(Serialize, Debug, PartialEq)]
    struct MintAuthorization {
        address account;
        string  marketTicker;
        #[serde_as(as = "DisplayFromStr")]
        uint256 count;
        #[serde_as(as = "DisplayFromStr")]
        uint256 nonce;
        #[serde_as(as = "DisplayFromStr")]
        uint256 deadline;
    }

    /// EIP-712 message authorizing burning of yes/no outcome-token sets,
    /// releasing their locked collateral.
    #[non_exhaustive]
    #[serde_as]
    #[derive(Serialize, Debug, PartialEq)]
    struct BurnAuthorization {
        address account;
        string  marketTicker;
        #[serde_as(as = "DisplayFromStr")]
        uint256 count;
        #[serde_as(as = "DisplayFromStr")]
        uint256 nonce;
        #[serde_as(as = "DisplayFromStr")]
        uint256 deadline;
    }
}

/// A signed authorization as submitted to the vault relay endpoints.
///
/// The venue verifies the signature against the EIP-712 digest of
/// `authorization` under the vault domain for `chain_id`, then relays the
/// action on-chain on the caller's behalf.
#[non_exhaustive]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedAuthorization<A> {
    /// The typed message exactly as signed
    pub authorization: A,
    /// Chain the authorization is bound to
    pub chain_id: ChainId,
    /// Wallet signature over the EIP-712 digest, 0x-prefixed
    pub signature: String,
}

/// Request to move collateral from the caller's wallet into the vault.
#[non_exhaustive]
#[derive(Clone, Debug, Builder, PartialEq)]
pub struct DepositRequest {
    /// Collateral amount in whole tokens, e.g. `dec!(250)` for 250 USDC
    pub amount: Decimal,
}

/// Request to move vault collateral back to the caller's wallet.
#[non_exhaustive]
#[derive(Clone, Debug, Builder, PartialEq)]
pub struct WithdrawRequest {
    /// Collateral amount in whole tokens
    pub amount: Decimal,
}

/// Request to mint outcome-token sets for a market.
///
/// Each set is one yes and one no contract and locks one dollar of
/// collateral until burned or settled.
#[non_exhaustive]
#[derive(Clone, Debug, Builder, PartialEq)]
#[builder(on(String, into))]
pub struct MintRequest {
    /// Market whose outcome tokens are minted
    pub market_ticker: String,
    /// Number of sets to mint
    pub count: i64,
}

/// Request to burn outcome-token sets and release their collateral.
#[non_exhaustive]
#[derive(Clone, Debug, Builder, PartialEq)]
#[builder(on(String, into))]
pub struct BurnRequest {
    /// Market whose outcome tokens are burned
    pub market_ticker: String,
    /// Number of sets to burn
    pub count: i64,
}

/// Relay state of an accepted authorization.
#[non_exhaustive]
#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReceiptStatus {
    /// Accepted by the venue, waiting to be relayed
    Pending,
    /// Relayed on-chain, waiting for confirmation
    Submitted,
    /// Confirmed on-chain
    Confirmed,
    /// Relay or on-chain execution failed
    Failed,
    /// A status this SDK does not know yet (captures the raw value)
    #[serde(untagged)]
    Unknown(String),
}

/// Acknowledgement returned by every vault relay endpoint.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Builder, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct VaultReceipt {
    /// Relay-assigned identifier for tracking the request
    pub request_id: String,
    /// Current relay state
    pub status: ReceiptStatus,
    /// Transaction hash, present once relayed on-chain
    #[serde(default)]
    pub tx_hash: Option<String>,
    /// When the venue accepted the authorization
    #[serde(default)]
    pub accepted_time: Option<DateTime<Utc>>,
}
