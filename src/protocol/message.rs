use serde_json::{Map, Value};

use crate::protocol::errors::{DeserializationError, ServerError};
use crate::protocol::events::Event;
use crate::protocol::responses::Response;

/// An outgoing protocol message, not yet stamped with a `seq`.
///
/// `dap-rs`'s own [`Response`] and [`Event`] types predate the base
/// `ProtocolMessage` envelope: `Event` serializes its own `"type": "event"`
/// via the `kind` field, but `Response` has neither `type` nor `seq` at all
/// (only `request_seq`, which echoes the *request's* sequence number, not
/// this message's own). The wire format requires every adapter-sent message
/// to carry a `type` and a monotonically increasing `seq`, so the codec
/// stamps both here, at the point the message actually crosses the wire,
/// rather than threading a counter through every `make_success`/`make_event`
/// call site.
#[derive(Debug, Clone)]
pub enum OutgoingMessage {
    Response(Response),
    Event(Event),
}

impl From<Response> for OutgoingMessage {
    fn from(r: Response) -> Self {
        OutgoingMessage::Response(r)
    }
}

impl From<Event> for OutgoingMessage {
    fn from(e: Event) -> Self {
        OutgoingMessage::Event(e)
    }
}

impl OutgoingMessage {
    /// Render this message as the JSON object actually written to the wire,
    /// with `seq` (and, for responses, `type`) stamped in.
    pub fn stamp(&self, seq: i64) -> Result<Value, ServerError> {
        let mut value = match self {
            OutgoingMessage::Response(r) => serde_json::to_value(r),
            OutgoingMessage::Event(e) => serde_json::to_value(e),
        }
        .map_err(DeserializationError::from)?;
        let obj = value
            .as_object_mut()
            .expect("Response and Event always serialize to a JSON object");
        stamp_object(obj, seq, self);
        Ok(value)
    }
}

fn stamp_object(obj: &mut Map<String, Value>, seq: i64, message: &OutgoingMessage) {
    obj.insert("seq".to_string(), Value::from(seq));
    if let OutgoingMessage::Response(_) = message {
        obj.insert("type".to_string(), Value::from("response"));
    }
}
