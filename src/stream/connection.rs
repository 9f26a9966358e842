//! Connection supervision: dialing, heartbeats, and reconnection.
//!
//! Each subscription is driven by exactly one [`supervise`] task. Sessions run
//! strictly one after another inside that task, so a subscription never holds
//! two connections at once and callbacks never run concurrently. The
//! cancellation token doubles as the subscription's liveness flag: it is
//! checked at every callback entry, which keeps disposal immediate even for
//! frames already sitting in the read buffer.

use std::time::{Duration, Instant};

use futures::{SinkExt as _, StreamExt as _};
use serde::de::DeserializeOwned;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, sleep};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};
use tokio_util::sync::CancellationToken;

use super::config::Config;
use super::error::StreamError;
use super::message::{self, Classified, PING_FRAME};
use super::subscription::{ConnectionState, ErrorCallback, LifecycleCallback};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Caller-supplied callbacks, fired only while the subscription is live.
pub(crate) struct Handlers<T> {
    pub(crate) on_event: Box<dyn FnMut(T) + Send + 'static>,
    pub(crate) on_error: Option<ErrorCallback>,
    pub(crate) on_connect: Option<LifecycleCallback>,
    pub(crate) on_disconnect: Option<LifecycleCallback>,
}

impl<T> Handlers<T> {
    fn event(&mut self, token: &CancellationToken, event: T) {
        if token.is_cancelled() {
            return;
        }
        (self.on_event)(event);
    }

    fn error(&mut self, token: &CancellationToken, error: StreamError) {
        if token.is_cancelled() {
            return;
        }
        if let Some(callback) = self.on_error.as_mut() {
            callback(error);
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(%error, "Stream error dropped, no on_error callback");
            #[cfg(not(feature = "tracing"))]
            let _ = &error;
        }
    }

    fn connect(&mut self, token: &CancellationToken) {
        if token.is_cancelled() {
            return;
        }
        if let Some(callback) = self.on_connect.as_mut() {
            callback();
        }
    }

    fn disconnect(&mut self, token: &CancellationToken) {
        if token.is_cancelled() {
            return;
        }
        if let Some(callback) = self.on_disconnect.as_mut() {
            callback();
        }
    }
}

/// Drives one subscription until disposal, a non-reconnecting close, or
/// exhaustion of the reconnection attempts.
pub(crate) async fn supervise<T>(
    endpoint: String,
    discriminator: &'static str,
    config: Config,
    reconnect: bool,
    mut handlers: Handlers<T>,
    token: CancellationToken,
    state_tx: watch::Sender<ConnectionState>,
) where
    T: DeserializeOwned + Send + 'static,
{
    let mut attempt = 0_u32;

    loop {
        if token.is_cancelled() {
            break;
        }

        _ = state_tx.send(ConnectionState::Connecting);

        let connected = tokio::select! {
            () = token.cancelled() => break,
            result = connect_async(&endpoint) => result,
        };

        match connected {
            Ok((ws_stream, _)) => {
                attempt = 0;
                _ = state_tx.send(ConnectionState::Open {
                    since: Instant::now(),
                });
                #[cfg(feature = "tracing")]
                tracing::debug!(%endpoint, "Stream connected");

                handlers.connect(&token);
                run_session(ws_stream, &config, discriminator, &mut handlers, &token).await;
                handlers.disconnect(&token);
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%endpoint, error = %e, "Unable to connect");

                handlers.error(&token, StreamError::Connection(e));
                handlers.disconnect(&token);
            }
        }

        if token.is_cancelled() || !reconnect {
            break;
        }

        attempt = attempt.saturating_add(1);
        if attempt > config.reconnect.max_attempts {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                max_attempts = config.reconnect.max_attempts,
                "Reconnection attempts exhausted"
            );
            break;
        }

        _ = state_tx.send(ConnectionState::Reconnecting { attempt });

        tokio::select! {
            () = token.cancelled() => break,
            () = sleep(config.reconnect.delay_for(attempt)) => {}
        }
    }

    _ = state_tx.send(ConnectionState::Closed);
}

/// Runs a single connected session until the transport closes or the
/// subscription is disposed.
async fn run_session<T>(
    ws_stream: WsStream,
    config: &Config,
    discriminator: &'static str,
    handlers: &mut Handlers<T>,
    token: &CancellationToken,
) where
    T: DeserializeOwned + Send + 'static,
{
    let (mut write, mut read) = ws_stream.split();
    let (ping_tx, mut ping_rx) = mpsc::unbounded_channel();

    // Without a heartbeat the sender is dropped right away, which disables
    // the ping branch of the select below.
    let heartbeat_interval = config.heartbeat_interval;
    let heartbeat_handle = config.heartbeat.then(|| {
        tokio::spawn(async move {
            heartbeat_loop(heartbeat_interval, ping_tx).await;
        })
    });

    loop {
        tokio::select! {
            () = token.cancelled() => break,

            message = read.next() => match message {
                Some(Ok(Message::Text(text))) => {
                    dispatch(&text, discriminator, handlers, token);
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {
                    // Transport-level ping/pong and binary frames carry no
                    // application data.
                }
                Some(Err(e)) => {
                    handlers.error(token, StreamError::Connection(e));
                    break;
                }
            },

            Some(()) = ping_rx.recv() => {
                if write.send(Message::Text(PING_FRAME.into())).await.is_err() {
                    break;
                }
            }
        }
    }

    // The heartbeat must be gone before the close is surfaced; the supervisor
    // fires on_disconnect as soon as this returns.
    if let Some(handle) = heartbeat_handle {
        handle.abort();
    }
}

/// Classifies one text frame and routes it to the matching callback.
fn dispatch<T>(
    raw: &str,
    discriminator: &'static str,
    handlers: &mut Handlers<T>,
    token: &CancellationToken,
) where
    T: DeserializeOwned,
{
    match message::classify::<T>(raw, discriminator) {
        Classified::Control(frame) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(?frame, "Absorbed keep-alive frame");
            #[cfg(not(feature = "tracing"))]
            let _ = frame;
        }
        Classified::Data(event) => handlers.event(token, event),
        Classified::ProtocolError(message) => {
            handlers.error(token, StreamError::Protocol(message));
        }
        Classified::Unrecognized => {
            #[cfg(feature = "tracing")]
            tracing::trace!(%raw, "Dropped unrecognized frame");
        }
        Classified::ParseError(e) => handlers.error(token, StreamError::Parse(e)),
    }
}

/// Requests an application-level ping once per interval.
///
/// The first ping goes out one full interval after connecting. Ticks that
/// fire while the session is tearing down are absorbed by the channel and
/// never reach the wire.
async fn heartbeat_loop(period: Duration, ping_tx: mpsc::UnboundedSender<()>) {
    let mut ticker = interval_at(tokio::time::Instant::now() + period, period);

    loop {
        ticker.tick().await;

        if ping_tx.send(()).is_err() {
            break;
        }
    }
}
