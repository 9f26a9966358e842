//! Order management and account state.
//!
//! All endpoints in this module require access credentials. Derive them once
//! per wallet with [`Client::derive_credentials`], then construct the client
//! with [`Client::new`]. Prices are integer cents, sizes are whole contracts,
//! and money amounts are integer collateral units (see [`crate::units`]).
//!
//! # Example
//!
//! ```no_run
//! use foresight_client_sdk::auth::LocalSigner;
//! use foresight_client_sdk::trade::types::{Action, CreateOrderRequest, Side};
//! use foresight_client_sdk::trade::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let signer = LocalSigner::random();
//! let host = "https://api.foresight.trade";
//!
//! let credentials =
//!     Client::derive_credentials(host, &signer, foresight_client_sdk::BASE, None).await?;
//! let client = Client::new(host, credentials)?;
//!
//! let order = CreateOrderRequest::builder()
//!     .market_ticker("KXBTC-25DEC31")
//!     .side(Side::Yes)
//!     .action(Action::Buy)
//!     .count(10)
//!     .price(55)
//!     .build();
//!
//! let placed = client.create_order(&order).await?;
//! println!("order {} is {}", placed.order_id, placed.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
