//! Settlement vault client and types.
//!
//! This module moves collateral and outcome tokens through the on-chain
//! settlement vault without the SDK ever sending a transaction. Each
//! operation signs an EIP-712 authorization with the caller's wallet and
//! submits it over REST; the venue relays it on-chain and reports progress
//! through a [`types::VaultReceipt`].
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/v1/vault/deposit` | POST | Pull collateral from the wallet into the vault |
//! | `/v1/vault/withdraw` | POST | Return vault collateral to the wallet |
//! | `/v1/vault/mint` | POST | Mint yes/no outcome-token sets |
//! | `/v1/vault/burn` | POST | Burn sets and release their collateral |
//!
//! # Example
//!
//! ```no_run
//! use foresight_client_sdk::BASE;
//! use foresight_client_sdk::auth::LocalSigner;
//! use foresight_client_sdk::vault::{Client, types::DepositRequest};
//! use rust_decimal_macros::dec;
//! use std::str::FromStr as _;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let signer = LocalSigner::from_str(&std::env::var("FORESIGHT_PRIVATE_KEY")?)?;
//! let client = Client::new("https://api.foresight.trade", BASE)?;
//!
//! // Fund the trading account with 250 USDC
//! let request = DepositRequest::builder().amount(dec!(250)).build();
//! let receipt = client.deposit(&signer, &request).await?;
//!
//! println!("deposit {} is {}", receipt.request_id, receipt.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
