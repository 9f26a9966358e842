use std::sync::Arc;

use async_stream::try_stream;
use dashmap::DashMap;
use futures::Stream;
use reqwest::{Client as ReqwestClient, Method};
use url::Url;

use super::types::{ExchangeStatus, Market, MarketsRequest};
use crate::trade::client::default_http_client;
use crate::types::Page;
use crate::{Result, ToQueryParams as _};

/// Client for public market data.
///
/// No credentials are required; every endpoint is publicly readable. The
/// client keeps a process-local cache of markets fetched through
/// [`market_cached`](Self::market_cached), shared across clones.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
    cache: Arc<DashMap<String, Market>>,
}

impl Default for Client {
    fn default() -> Self {
        Client::new("https://api.foresight.trade")
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a market data client with a custom host URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(host: &str) -> Result<Client> {
        Ok(Self {
            host: Url::parse(host)?,
            client: default_http_client()?,
            cache: Arc::new(DashMap::new()),
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Retrieves a single market by ticker.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the market does not exist.
    pub async fn market(&self, ticker: &str) -> Result<Market> {
        let request = self
            .client
            .request(Method::GET, format!("{}v1/markets/{ticker}", self.host))
            .build()?;

        crate::request(&self.client, request, None).await
    }

    /// Retrieves a market by ticker, serving repeat lookups from a local
    /// cache.
    ///
    /// Market metadata rarely changes during a session; quotes in the cached
    /// value go stale. Use [`invalidate`](Self::invalidate) to force a
    /// refetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the market is not cached and the request fails.
    pub async fn market_cached(&self, ticker: &str) -> Result<Market> {
        if let Some(market) = self.cache.get(ticker) {
            return Ok(market.clone());
        }

        let market = self.market(ticker).await?;
        self.cache.insert(ticker.to_owned(), market.clone());

        Ok(market)
    }

    /// Drops one market from the local cache.
    pub fn invalidate(&self, ticker: &str) {
        self.cache.remove(ticker);
    }

    /// Drops every market from the local cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Retrieves a page of markets.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn markets(
        &self,
        request: &MarketsRequest,
        cursor: Option<&str>,
    ) -> Result<Page<Market>> {
        let params = request.query_params(cursor);
        let request = self
            .client
            .request(Method::GET, format!("{}v1/markets{params}", self.host))
            .build()?;

        crate::request(&self.client, request, None).await
    }

    /// Returns a stream of every market matching `request`, following
    /// pagination cursors until the venue reports no further page.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures::StreamExt as _;
    /// use foresight_client_sdk::markets::{Client, types::MarketsRequest};
    /// use tokio::pin;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let request = MarketsRequest::builder().limit(100).build();
    ///
    /// let stream = client.markets_stream(&request);
    /// pin!(stream);
    ///
    /// while let Some(market) = stream.next().await {
    ///     println!("{}", market?.ticker);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn markets_stream<'client>(
        &'client self,
        request: &'client MarketsRequest,
    ) -> impl Stream<Item = Result<Market>> + 'client {
        try_stream! {
            let mut cursor: Option<String> = None;

            loop {
                let page = self.markets(request, cursor.as_deref()).await?;

                for market in page.data {
                    yield market;
                }

                match page.next_cursor {
                    Some(next) if !next.is_empty() => cursor = Some(next),
                    _ => break,
                }
            }
        }
    }

    /// Retrieves venue-wide trading availability.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn exchange_status(&self) -> Result<ExchangeStatus> {
        let request = self
            .client
            .request(Method::GET, format!("{}v1/exchange/status", self.host))
            .build()?;

        crate::request(&self.client, request, None).await
    }
}
