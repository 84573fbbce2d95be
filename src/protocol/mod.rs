//! Wire types and codec support for the Debug Adapter Protocol.
//!
//! These types are adapted from the `dap-rs` crate: the request/response/
//! event vocabulary and the `Content-Length`-framed message shape are
//! unchanged, but message stamping (`message`) and framing (`crate::transport`)
//! have been pulled out into their own pieces so a [`crate::session`] can own
//! sequencing instead of each call site managing it by hand.

pub mod errors;
pub mod events;
pub mod macros;
pub mod message;
pub mod requests;
pub mod responses;
pub mod reverse_requests;
pub mod types;

pub use errors::{DeserializationError, ServerError};
pub use events::{Event, EventBody};
pub use message::OutgoingMessage;
pub use requests::{Command, Request};
pub use responses::{Response, ResponseBody, ResponseMessage};
pub use reverse_requests::{ReverseCommand, ReverseRequest};
