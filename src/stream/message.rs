//! Pure classification of inbound stream frames.
//!
//! Every text frame received on a streaming connection is sorted into exactly
//! one [`Classified`] variant. Classification inspects only the channel's
//! discriminating field; beyond that the payload shape is trusted, so a frame
//! that carries the discriminator but fails to deserialize surfaces as
//! [`Classified::ParseError`] rather than being dropped.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Field name that distinguishes keep-alive and error frames on every channel.
const TYPE_FIELD: &str = "type";

/// Application-level ping payload, sent verbatim by the heartbeat driver.
pub(crate) const PING_FRAME: &str = r#"{"type":"ping"}"#;

/// Keep-alive frame absorbed by the connection without reaching callbacks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlFrame {
    /// Server-initiated keep-alive probe
    Ping,
    /// Server reply to a client ping
    Pong,
}

/// Outcome of classifying a single inbound frame.
#[derive(Debug)]
pub enum Classified<T> {
    /// Keep-alive traffic, absorbed silently
    Control(ControlFrame),
    /// A data frame matching the channel's message shape
    Data(T),
    /// Server explicitly signalled an error condition
    ProtocolError(String),
    /// Valid JSON that does not belong to the channel, dropped silently
    Unrecognized,
    /// Frame was not valid JSON, or did not fit the channel's message shape
    ParseError(serde_json::Error),
}

/// Classifies one raw text frame for a channel keyed by `discriminator`.
///
/// The function is pure: it performs no I/O, holds no state, and the same
/// input always yields the same classification.
#[must_use]
pub fn classify<T>(raw: &str, discriminator: &str) -> Classified<T>
where
    T: DeserializeOwned,
{
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => return Classified::ParseError(e),
    };

    let Some(object) = value.as_object() else {
        return Classified::Unrecognized;
    };

    // Keep-alive and error frames use the `type` field on every channel,
    // including those whose data frames are keyed by a different field.
    match object.get(TYPE_FIELD).and_then(Value::as_str) {
        Some("ping") => return Classified::Control(ControlFrame::Ping),
        Some("pong") => return Classified::Control(ControlFrame::Pong),
        Some("error") => {
            let message = object
                .get("message")
                .or_else(|| object.get("msg"))
                .and_then(Value::as_str)
                .unwrap_or("unspecified server error")
                .to_owned();
            return Classified::ProtocolError(message);
        }
        _ => {}
    }

    if !object.contains_key(discriminator) {
        return Classified::Unrecognized;
    }

    match serde_json::from_value(value) {
        Ok(data) => Classified::Data(data),
        Err(e) => Classified::ParseError(e),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::stream::types::{AccountEvent, TickerUpdate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        #[serde(rename = "type")]
        kind: String,
    }

    #[test]
    fn ping_classifies_as_control() {
        let classified = classify::<Probe>(r#"{"type":"ping"}"#, "type");

        assert!(matches!(
            classified,
            Classified::Control(ControlFrame::Ping)
        ));
    }

    #[test]
    fn pong_classifies_as_control() {
        let classified = classify::<Probe>(r#"{"type":"pong"}"#, "type");

        assert!(matches!(
            classified,
            Classified::Control(ControlFrame::Pong)
        ));
    }

    #[test]
    fn pong_absorbed_on_channels_with_other_discriminators() {
        let classified = classify::<TickerUpdate>(r#"{"type":"pong"}"#, "market_ticker");

        assert!(matches!(
            classified,
            Classified::Control(ControlFrame::Pong)
        ));
    }

    #[test]
    fn data_frame_classifies_as_data() {
        let classified =
            classify::<AccountEvent>(r#"{"type":"order_filled","orderId":"x"}"#, "type");

        let Classified::Data(AccountEvent::OrderFilled(fill)) = classified else {
            panic!("expected a fill event");
        };
        assert_eq!(fill.order_id, "x");
    }

    #[test]
    fn malformed_json_classifies_as_parse_error() {
        let classified = classify::<Probe>("{", "type");

        assert!(matches!(classified, Classified::ParseError(_)));
    }

    #[test]
    fn non_object_classifies_as_unrecognized() {
        assert!(matches!(
            classify::<Probe>("[1,2,3]", "type"),
            Classified::Unrecognized
        ));
        assert!(matches!(
            classify::<Probe>("42", "type"),
            Classified::Unrecognized
        ));
        assert!(matches!(
            classify::<Probe>(r#""ping""#, "type"),
            Classified::Unrecognized
        ));
    }

    #[test]
    fn missing_discriminator_classifies_as_unrecognized() {
        let classified = classify::<TickerUpdate>(r#"{"yes_bid":55}"#, "market_ticker");

        assert!(matches!(classified, Classified::Unrecognized));
    }

    #[test]
    fn error_frame_classifies_as_protocol_error() {
        let classified = classify::<Probe>(r#"{"type":"error","message":"rate limited"}"#, "type");

        let Classified::ProtocolError(message) = classified else {
            panic!("expected a protocol error");
        };
        assert_eq!(message, "rate limited");
    }

    #[test]
    fn error_frame_accepts_msg_alias() {
        let classified = classify::<Probe>(r#"{"type":"error","msg":"bad channel"}"#, "type");

        let Classified::ProtocolError(message) = classified else {
            panic!("expected a protocol error");
        };
        assert_eq!(message, "bad channel");
    }

    #[test]
    fn discriminator_present_but_shape_mismatch_is_parse_error() {
        let classified = classify::<Probe>(r#"{"type":42}"#, "type");

        assert!(matches!(classified, Classified::ParseError(_)));
    }

    #[test]
    fn ping_frame_is_bit_exact() {
        assert_eq!(PING_FRAME, "{\"type\":\"ping\"}");
    }
}
