use alloy::primitives::Address;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::channel::{AccountEvents, Channel, MarketTicker, Orderbook};
use super::config::Config;
use super::connection::{self, Handlers};
use super::subscription::{ConnectionState, SubscribeOptions, Subscription};
use super::types::{AccountEvent, OrderbookMessage, TickerUpdate};
use crate::Result;
use crate::error::Error;

/// Streaming client for the venue's WebSocket channels.
///
/// The client itself holds no connections; each `listen_to_*` call spawns an
/// independent supervised connection and returns the [`Subscription`] that
/// controls it. Cloning the client is cheap and clones share nothing.
#[derive(Clone, Debug)]
pub struct Client {
    endpoint: String,
    config: Config,
}

impl Client {
    /// Creates a streaming client from the venue's base URL.
    ///
    /// The URL may use an `http`/`https` scheme, which is rewritten to the
    /// matching WebSocket scheme, or a `ws`/`wss` scheme used as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or uses an
    /// unsupported scheme.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, Config::default())
    }

    /// Creates a streaming client with explicit connection behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or uses an
    /// unsupported scheme.
    pub fn with_config(base_url: &str, config: Config) -> Result<Self> {
        Ok(Self {
            endpoint: stream_endpoint(base_url)?,
            config,
        })
    }

    /// Streams order, fill, position, balance and settlement events for one
    /// wallet.
    ///
    /// Returns synchronously; the connection is established in the
    /// background. Must be called from within a Tokio runtime.
    pub fn listen_to_account_events<F>(
        &self,
        address: Address,
        on_event: F,
        options: SubscribeOptions,
    ) -> Subscription
    where
        F: FnMut(AccountEvent) + Send + 'static,
    {
        self.subscribe(AccountEvents { address }, on_event, options)
    }

    /// Streams top-of-book quotes and volume for one market.
    ///
    /// Returns synchronously; the connection is established in the
    /// background. Must be called from within a Tokio runtime.
    pub fn listen_to_market_ticker<F>(
        &self,
        ticker: impl Into<String>,
        on_ticker: F,
        options: SubscribeOptions,
    ) -> Subscription
    where
        F: FnMut(TickerUpdate) + Send + 'static,
    {
        self.subscribe(
            MarketTicker {
                ticker: ticker.into(),
            },
            on_ticker,
            options,
        )
    }

    /// Streams order book snapshots and incremental deltas for one market.
    ///
    /// Returns synchronously; the connection is established in the
    /// background. Must be called from within a Tokio runtime.
    pub fn listen_to_orderbook<F>(
        &self,
        ticker: impl Into<String>,
        on_update: F,
        options: SubscribeOptions,
    ) -> Subscription
    where
        F: FnMut(OrderbookMessage) + Send + 'static,
    {
        self.subscribe(
            Orderbook {
                ticker: ticker.into(),
            },
            on_update,
            options,
        )
    }

    /// Opens a supervised connection for any [`Channel`].
    ///
    /// The three `listen_to_*` methods delegate here; custom channels only
    /// need a path, a discriminating field, and an event type.
    pub fn subscribe<C, F>(
        &self,
        channel: C,
        on_event: F,
        options: SubscribeOptions,
    ) -> Subscription
    where
        C: Channel,
        F: FnMut(C::Event) + Send + 'static,
    {
        let endpoint = format!("{}{}", self.endpoint, channel.path());
        let SubscribeOptions {
            on_error,
            on_connect,
            on_disconnect,
            reconnect,
        } = options;
        let handlers = Handlers {
            on_event: Box::new(on_event),
            on_error,
            on_connect,
            on_disconnect,
        };

        let token = CancellationToken::new();
        let (state_tx, state_rx) = watch::channel(ConnectionState::Idle);

        tokio::spawn(connection::supervise::<C::Event>(
            endpoint,
            C::DISCRIMINATOR,
            self.config.clone(),
            reconnect,
            handlers,
            token.clone(),
            state_tx,
        ));

        Subscription::new(token, state_rx)
    }
}

/// Derives the WebSocket endpoint from the venue's base URL.
fn stream_endpoint(base_url: &str) -> Result<String> {
    let mut url = Url::parse(base_url)?;
    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => {
            return Err(Error::validation(format!(
                "Cannot derive a stream endpoint from scheme {other}"
            )));
        }
    };
    url.set_scheme(scheme)
        .map_err(|()| Error::validation(format!("Cannot rewrite scheme for {base_url}")))?;
    Ok(url.to_string().trim_end_matches('/').to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_base_becomes_wss() {
        let client = Client::new("https://api.foresight.trade").unwrap();

        assert_eq!(client.endpoint, "wss://api.foresight.trade");
    }

    #[test]
    fn http_base_becomes_ws() {
        let client = Client::new("http://localhost:8080").unwrap();

        assert_eq!(client.endpoint, "ws://localhost:8080");
    }

    #[test]
    fn ws_base_is_kept() {
        let client = Client::new("ws://127.0.0.1:9001/").unwrap();

        assert_eq!(client.endpoint, "ws://127.0.0.1:9001");
    }

    #[test]
    fn base_path_is_preserved() {
        let client = Client::new("https://gateway.foresight.trade/v2/").unwrap();

        assert_eq!(client.endpoint, "wss://gateway.foresight.trade/v2");
    }

    #[test]
    fn unsupported_scheme_is_rejected() {
        let result = Client::new("ftp://api.foresight.trade");

        assert!(result.is_err());
    }

    #[test]
    fn invalid_url_is_rejected() {
        let result = Client::new("not a url");

        assert!(result.is_err());
    }
}
