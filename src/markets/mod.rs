//! Public market data client and types.
//!
//! This module provides read-only access to the Foresight market catalog.
//! No credentials are required; use [`crate::trade`] for authenticated
//! order flow and [`crate::stream`] for live updates.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/v1/markets` | List markets, cursor-paginated |
//! | `/v1/markets/{ticker}` | Get a market by ticker |
//! | `/v1/exchange/status` | Venue-wide trading availability |
//!
//! # Example
//!
//! ```no_run
//! use foresight_client_sdk::markets::{Client, types::MarketsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client with the default endpoint
//! let client = Client::default();
//!
//! // Build a request for open markets under one event
//! let request = MarketsRequest::builder()
//!     .event_ticker("KXPRES-2028")
//!     .limit(20)
//!     .build();
//!
//! let page = client.markets(&request, None).await?;
//!
//! for market in page.data {
//!     println!("{}: {}", market.ticker, market.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is `https://api.foresight.trade`.

pub mod client;
pub mod types;

pub use client::Client;
