#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod error;
pub mod markets;
pub(crate) mod serde_helpers;
pub mod stream;
pub mod trade;
pub mod types;
pub mod units;
pub mod vault;

use std::fmt::Write as _;

use phf::phf_map;
use reqwest::{Request, StatusCode, header::HeaderMap};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Error};
use crate::types::{Address, ChainId, address};

pub type Result<T> = std::result::Result<T, Error>;

/// [`ChainId`] for Base mainnet, where Foresight settles collateral
pub const BASE: ChainId = 8453;

/// [`ChainId`] for the Base Sepolia testnet <https://docs.base.org/chain/network-information>
pub const BASE_SEPOLIA: ChainId = 84532;

pub const PRIVATE_KEY_VAR: &str = "FORESIGHT_PRIVATE_KEY";

/// Timestamp in seconds since [`std::time::UNIX_EPOCH`]
pub(crate) type Timestamp = i64;

static VAULT_CONFIG: phf::Map<ChainId, ContractConfig> = phf_map! {
    8453_u64 => ContractConfig {
        vault: address!("0x04f8c1a9e6b27d35c9ef20b884da46709c5d8f13"),
        collateral: address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
        collateral_decimals: 6,
    },
    84532_u64 => ContractConfig {
        vault: address!("0x9e1a07bd5c3f4a6d208b7e2f331c96d4e8205c7a"),
        collateral: address!("0x036CbD53842c5426634e7929541eC2318f3dCF7e"),
        collateral_decimals: 6,
    },
};

/// Helper struct to group the relevant deployed contract addresses
#[non_exhaustive]
#[derive(Debug)]
pub struct ContractConfig {
    /// The settlement vault that custodies collateral and mints outcome tokens
    pub vault: Address,
    /// The ERC-20 collateral token (USDC on both supported networks)
    pub collateral: Address,
    /// Decimals of the collateral token
    pub collateral_decimals: u32,
}

/// Given a `chain_id`, return the relevant [`ContractConfig`]
#[must_use]
pub fn contract_config(chain_id: ChainId) -> Option<&'static ContractConfig> {
    VAULT_CONFIG.get(&chain_id)
}

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
/// Arrays are serialized as repeated keys (`key=val1&key=val2`).
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    /// Also uses an optional pagination cursor as a parameter, if provided.
    fn query_params(&self, cursor: Option<&str>) -> String {
        let mut params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if let Some(cursor) = cursor {
            if !params.is_empty() {
                params.push('&');
            }
            let _ = write!(params, "cursor={cursor}");
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, headers),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    mut request: Request,
    headers: Option<HeaderMap>,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    if let Some(h) = headers {
        *request.headers_mut() = h;
    }

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let body = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            body = %body,
            "API request failed"
        );

        return Err(ApiError::from_body(status_code, method, path, &body).into());
    }

    let json_value = response.json::<serde_json::Value>().await?;
    let response_data: Option<Response> = serde_helpers::deserialize_with_warnings(json_value)?;

    if let Some(response) = response_data {
        Ok(response)
    } else {
        #[cfg(feature = "tracing")]
        tracing::warn!(method = %method, path = %path, "API resource not found");
        Err(ApiError::from_body(
            StatusCode::NOT_FOUND,
            method,
            path,
            "Unable to find requested resource",
        )
        .into())
    }
}
