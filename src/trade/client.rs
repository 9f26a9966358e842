use alloy::primitives::ChainId;
use chrono::Utc;
use reqwest::{
    Client as ReqwestClient, Method, Request,
    header::{HeaderMap, HeaderValue},
};
use url::Url;

use super::types::OrderType;
use super::types::request::{CreateOrderRequest, FillsRequest, OrdersRequest, PositionsRequest};
use super::types::response::{Balance, CancelAllResponse, Fill, Order, Position};
use crate::auth::{self, Credentials, Signer};
use crate::error::Error;
use crate::types::Page;
use crate::units;
use crate::{Result, ToQueryParams as _};

/// Authenticated client for order management and account state.
///
/// Every request is signed with the account's access credentials; obtain them
/// once per wallet via [`Client::derive_credentials`] and persist the secret.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
    credentials: Credentials,
}

impl Client {
    /// Creates a trading client for `host` using existing credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(host: &str, credentials: Credentials) -> Result<Client> {
        Ok(Self {
            host: Url::parse(host)?,
            client: default_http_client()?,
            credentials,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Derives access credentials for the wallet behind `signer`.
    ///
    /// The venue identifies the account by recovering the wallet address from
    /// a signed typed-data attestation; the same wallet always derives the
    /// same key.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails, the request fails, or the venue
    /// rejects the attestation.
    pub async fn derive_credentials<S: Signer>(
        host: &str,
        signer: &S,
        chain_id: ChainId,
        nonce: Option<u32>,
    ) -> Result<Credentials> {
        let client = default_http_client()?;
        let host = Url::parse(host)?;
        let request = client
            .request(Method::POST, format!("{host}v1/auth/derive"))
            .build()?;
        let headers =
            auth::wallet::create_headers(signer, chain_id, Utc::now().timestamp(), nonce).await?;

        crate::request(&client, request, Some(headers)).await
    }

    /// Submits an order.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the count is not positive, a limit order
    /// lacks a price or carries one outside the 1 to 99 cent band, or a
    /// market order carries a price; and an API error if the venue rejects
    /// the order.
    pub async fn create_order(&self, order: &CreateOrderRequest) -> Result<Order> {
        if order.count <= 0 {
            return Err(Error::validation(format!(
                "Order count {} must be positive",
                order.count
            )));
        }

        match (order.order_type, order.price) {
            (OrderType::Limit, None) => {
                return Err(Error::validation("Limit orders require a price"));
            }
            (OrderType::Limit, Some(price)) => {
                // Same tradable band the price converters enforce
                units::price_from_cents(price)?;
            }
            (OrderType::Market, Some(_)) => {
                return Err(Error::validation("Market orders cannot carry a price"));
            }
            (OrderType::Market, None) => {}
        }

        let request = self
            .client
            .request(Method::POST, format!("{}v1/orders", self.host))
            .json(order)
            .build()?;
        let headers = self.create_headers(&request)?;

        crate::request(&self.client, request, Some(headers)).await
    }

    /// Retrieves a single order by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order does not exist.
    pub async fn order(&self, order_id: &str) -> Result<Order> {
        let request = self
            .client
            .request(Method::GET, format!("{}v1/orders/{order_id}", self.host))
            .build()?;
        let headers = self.create_headers(&request)?;

        crate::request(&self.client, request, Some(headers)).await
    }

    /// Retrieves a page of the account's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn orders(
        &self,
        request: &OrdersRequest,
        cursor: Option<&str>,
    ) -> Result<Page<Order>> {
        let params = request.query_params(cursor);
        let request = self
            .client
            .request(Method::GET, format!("{}v1/orders{params}", self.host))
            .build()?;
        let headers = self.create_headers(&request)?;

        crate::request(&self.client, request, Some(headers)).await
    }

    /// Cancels a resting order and returns its final state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is no longer
    /// cancellable.
    pub async fn cancel_order(&self, order_id: &str) -> Result<Order> {
        let request = self
            .client
            .request(Method::DELETE, format!("{}v1/orders/{order_id}", self.host))
            .build()?;
        let headers = self.create_headers(&request)?;

        crate::request(&self.client, request, Some(headers)).await
    }

    /// Cancels every resting order on the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn cancel_all(&self) -> Result<CancelAllResponse> {
        let request = self
            .client
            .request(Method::DELETE, format!("{}v1/orders", self.host))
            .build()?;
        let headers = self.create_headers(&request)?;

        crate::request(&self.client, request, Some(headers)).await
    }

    /// Retrieves a page of the account's fills.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fills(&self, request: &FillsRequest, cursor: Option<&str>) -> Result<Page<Fill>> {
        let params = request.query_params(cursor);
        let request = self
            .client
            .request(Method::GET, format!("{}v1/fills{params}", self.host))
            .build()?;
        let headers = self.create_headers(&request)?;

        crate::request(&self.client, request, Some(headers)).await
    }

    /// Retrieves the account's collateral balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn balance(&self) -> Result<Balance> {
        let request = self
            .client
            .request(Method::GET, format!("{}v1/balance", self.host))
            .build()?;
        let headers = self.create_headers(&request)?;

        crate::request(&self.client, request, Some(headers)).await
    }

    /// Retrieves a page of the account's positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn positions(
        &self,
        request: &PositionsRequest,
        cursor: Option<&str>,
    ) -> Result<Page<Position>> {
        let params = request.query_params(cursor);
        let request = self
            .client
            .request(Method::GET, format!("{}v1/positions{params}", self.host))
            .build()?;
        let headers = self.create_headers(&request)?;

        crate::request(&self.client, request, Some(headers)).await
    }

    fn create_headers(&self, request: &Request) -> Result<HeaderMap> {
        auth::access::create_headers(&self.credentials, request, Utc::now().timestamp())
    }
}

pub(crate) fn default_http_client() -> Result<ReqwestClient> {
    let mut headers = HeaderMap::new();

    headers.insert("User-Agent", HeaderValue::from_static("foresight-client-sdk"));
    headers.insert("Accept", HeaderValue::from_static("*/*"));
    headers.insert("Connection", HeaderValue::from_static("keep-alive"));
    headers.insert("Content-Type", HeaderValue::from_static("application/json"));

    Ok(ReqwestClient::builder().default_headers(headers).build()?)
}
