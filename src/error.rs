use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

use alloy::primitives::ChainId;
use hmac::digest::InvalidLength;
/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use reqwest::header;
use serde::Deserialize;
use serde_json::Value;
use serde_with::serde_as;

use crate::serde_helpers::StringFromAny;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Error related to a non-successful HTTP call
    Status,
    /// Error related to invalid input or state within foresight-client-sdk
    Validation,
    /// Error produced while signing a typed message or request
    Signing,
    /// Error surfaced by the streaming connection layer
    Stream,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    /// Returns the typed API failure payload, if this error came from the venue.
    pub fn api(&self) -> Option<&ApiError> {
        self.downcast_ref::<ApiError>()
    }

    #[must_use]
    pub fn missing_contract_config(chain_id: ChainId) -> Self {
        MissingContractConfig { chain_id }.into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Failure reported by the venue for a REST call.
///
/// Every field except `method`/`path` is optional on the wire: older endpoints
/// return a bare text body, newer ones a structured `{code, message, details}`
/// object. [`crate::Result`] surfaces whichever subset the server provided.
#[non_exhaustive]
#[derive(Debug)]
pub struct ApiError {
    /// Machine-readable error code, e.g. `"insufficient_balance"`
    pub code: Option<String>,
    /// HTTP status of the response, when the failure came from an HTTP reply
    pub status: Option<StatusCode>,
    /// HTTP method of the originating request
    pub method: Method,
    /// Path of the originating request
    pub path: String,
    /// Human-readable message
    pub message: Option<String>,
    /// Structured details the server attached to the failure
    pub details: Option<Value>,
}

/// Structured error body the venue returns alongside non-2xx statuses.
///
/// Older endpoints send numeric error codes; newer ones send machine strings.
/// Both surface as the string form.
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(alias = "msg")]
    pub(crate) message: Option<String>,
    pub(crate) details: Option<Value>,
}

impl ApiError {
    pub(crate) fn from_body(
        status: StatusCode,
        method: Method,
        path: String,
        body: &str,
    ) -> Self {
        let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
        let (code, message, details) = match parsed {
            Some(b) if b.code.is_some() || b.message.is_some() || b.details.is_some() => {
                (b.code, b.message, b.details)
            }
            _ => {
                let message = (!body.is_empty()).then(|| body.to_owned());
                (None, message, None)
            }
        };

        Self {
            code,
            status: Some(status),
            method,
            path,
            message,
            details,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} failed", self.method, self.path)?;
        if let Some(status) = self.status {
            write!(f, " with status {status}")?;
        }
        if let Some(code) = &self.code {
            write!(f, " [{code}]")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl StdError for ApiError {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct MissingContractConfig {
    pub chain_id: ChainId,
}

impl fmt::Display for MissingContractConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no vault contract config for chain id {}", self.chain_id)
    }
}

impl StdError for MissingContractConfig {}

impl From<MissingContractConfig> for Error {
    fn from(err: MissingContractConfig) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::with_source(Kind::Status, err)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<InvalidLength> for Error {
    fn from(e: InvalidLength) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<alloy::signers::Error> for Error {
    fn from(e: alloy::signers::Error) -> Self {
        Error::with_source(Kind::Signing, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}
