#![expect(
    clippy::module_name_repetitions,
    reason = "Error types include the module name to indicate their scope"
)]

use std::error::Error as StdError;
use std::fmt;

/// Streaming error variants, delivered through the `on_error` callback.
///
/// Errors never terminate a subscription by themselves: a parse failure or a
/// server-signalled error leaves the connection open, and a transport error is
/// followed by a close that the reconnection logic handles.
#[non_exhaustive]
#[derive(Debug)]
pub enum StreamError {
    /// Error connecting to or communicating with the streaming server
    Connection(tokio_tungstenite::tungstenite::Error),
    /// Payload could not be parsed into the channel's message shape
    Parse(serde_json::Error),
    /// Server explicitly signalled an error condition on the stream
    Protocol(String),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection(e) => write!(f, "Stream connection error: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse stream message: {e}"),
            Self::Protocol(message) => write!(f, "Server reported stream error: {message}"),
        }
    }
}

impl StdError for StreamError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Connection(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

// Integration with main Error type
impl From<StreamError> for crate::error::Error {
    fn from(e: StreamError) -> Self {
        crate::error::Error::with_source(crate::error::Kind::Stream, e)
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for crate::error::Error {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        crate::error::Error::with_source(crate::error::Kind::Stream, StreamError::Connection(e))
    }
}
