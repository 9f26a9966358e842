//! Subscription handles and per-subscription options.

use std::fmt;
use std::time::Instant;

use tokio::sync::watch;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::stream::error::StreamError;

pub(crate) type ErrorCallback = Box<dyn FnMut(StreamError) + Send + 'static>;
pub(crate) type LifecycleCallback = Box<dyn FnMut() + Send + 'static>;

/// Observable lifecycle of a subscription's underlying connection.
///
/// There is no distinct closing state: session teardown completes
/// synchronously inside the supervising task before the next state is
/// published, so the observable phase between two sessions is the backoff
/// wait, reported as [`Reconnecting`](Self::Reconnecting) with the upcoming
/// attempt number. [`Closed`](Self::Closed) is terminal however it is
/// reached: disposal, reconnection disabled, or attempts exhausted.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub enum ConnectionState {
    /// No connection has been attempted yet
    Idle,
    /// Transport handshake in progress
    Connecting,
    /// Connected and delivering events
    Open {
        /// When the connection was established
        since: Instant,
    },
    /// Waiting out the backoff delay before the numbered attempt
    Reconnecting {
        /// Reconnection attempt about to be made, counting from 1
        attempt: u32,
    },
    /// Terminal: disposed, reconnection disabled, or attempts exhausted
    Closed,
}

impl ConnectionState {
    /// Check if the connection is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, ConnectionState::Open { .. })
    }
}

/// Per-subscription callbacks and reconnection behavior.
///
/// Events that occur without a matching callback are dropped; in particular a
/// subscription created without `on_error` loses error notifications
/// silently.
///
/// # Example
///
/// ```ignore
/// let options = SubscribeOptions::new()
///     .on_connect(|| println!("live"))
///     .on_error(|e| eprintln!("{e}"))
///     .reconnect(false);
/// ```
#[must_use]
pub struct SubscribeOptions {
    pub(crate) on_error: Option<ErrorCallback>,
    pub(crate) on_connect: Option<LifecycleCallback>,
    pub(crate) on_disconnect: Option<LifecycleCallback>,
    pub(crate) reconnect: bool,
}

impl Default for SubscribeOptions {
    fn default() -> Self {
        Self {
            on_error: None,
            on_connect: None,
            on_disconnect: None,
            reconnect: true,
        }
    }
}

impl SubscribeOptions {
    /// Creates the default options: no callbacks, reconnection enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback invoked for every stream error.
    pub fn on_error(mut self, callback: impl FnMut(StreamError) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Callback invoked each time a connection opens, including reconnects.
    pub fn on_connect(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_connect = Some(Box::new(callback));
        self
    }

    /// Callback invoked each time a connection closes.
    pub fn on_disconnect(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_disconnect = Some(Box::new(callback));
        self
    }

    /// Whether to reconnect after an unexpected close. Defaults to `true`.
    pub const fn reconnect(mut self, enabled: bool) -> Self {
        self.reconnect = enabled;
        self
    }
}

impl fmt::Debug for SubscribeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscribeOptions")
            .field("on_error", &self.on_error.is_some())
            .field("on_connect", &self.on_connect.is_some())
            .field("on_disconnect", &self.on_disconnect.is_some())
            .field("reconnect", &self.reconnect)
            .finish()
    }
}

/// Handle to an active subscription.
///
/// Dropping the handle disposes the subscription; call [`detach`](Self::detach)
/// to keep it alive without holding the handle. Disposal is idempotent and
/// immediately silences every callback, including ones already scheduled.
#[derive(Debug)]
pub struct Subscription {
    token: CancellationToken,
    guard: DropGuard,
    state_rx: watch::Receiver<ConnectionState>,
}

impl Subscription {
    pub(crate) fn new(
        token: CancellationToken,
        state_rx: watch::Receiver<ConnectionState>,
    ) -> Self {
        let guard = token.clone().drop_guard();
        Self {
            token,
            guard,
            state_rx,
        }
    }

    /// Tears down the connection and permanently silences all callbacks.
    ///
    /// Safe to call more than once and from within any callback.
    pub fn dispose(&self) {
        self.token.cancel();
    }

    /// Check if the subscription has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns a cloneable disposer for this subscription.
    ///
    /// Disposers share the subscription's lifetime but do not own it:
    /// dropping one has no effect.
    #[must_use]
    pub fn disposer(&self) -> Disposer {
        Disposer {
            token: self.token.clone(),
        }
    }

    /// Current connection state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    /// Returns a receiver that observes every connection state change.
    #[must_use]
    pub fn state_receiver(&self) -> watch::Receiver<ConnectionState> {
        self.state_rx.clone()
    }

    /// Waits until the subscription reaches the terminal
    /// [`ConnectionState::Closed`] state.
    ///
    /// Resolves on disposal, on exhaustion of reconnection attempts, and when
    /// a subscription created with reconnection disabled loses its
    /// connection.
    pub async fn closed(&self) {
        let mut state_rx = self.state_rx.clone();
        loop {
            if matches!(*state_rx.borrow_and_update(), ConnectionState::Closed) {
                return;
            }
            if state_rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Consumes the handle without disposing the subscription.
    ///
    /// The connection stays alive until the returned [`Disposer`] is invoked
    /// or reconnection attempts are exhausted.
    #[must_use]
    pub fn detach(self) -> Disposer {
        let Self { token, guard, .. } = self;
        drop(guard.disarm());
        Disposer { token }
    }
}

/// Cloneable handle that can dispose a subscription.
#[derive(Debug, Clone)]
pub struct Disposer {
    token: CancellationToken,
}

impl Disposer {
    /// Tears down the subscription's connection and silences its callbacks.
    ///
    /// Safe to call more than once and from within any callback.
    pub fn dispose(&self) {
        self.token.cancel();
    }

    /// Check if the subscription has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.token.is_cancelled()
    }
}
