//! `dapper`: a Debug Adapter Protocol core for a dynamic, interpreted
//! runtime.
//!
//! The crate is organized around the three components spec.md's
//! COMPONENT DESIGN names: the [`session`] engine (the request/response/
//! event state machine and sole writer of session state), the [`tracer`]
//! (selective, low-overhead per-line execution tracing on the debuggee's
//! own threads), and the [`cache`] manager (the thread/code-object/file
//! caches both of the above consult on their hot paths). [`breakpoints`]
//! is the copy-on-write table that bridges the two: the engine publishes
//! it, the tracer reads it lock-free.
//!
//! [`embed`] is the small public API an embedder (whatever owns the
//! target runtime's interpreter loop) uses to start and stop a session;
//! [`config`] and `src/bin/dapper.rs` build the standalone CLI binary on
//! top of the same pieces. [`testing`] provides an in-memory
//! [`Debuggee`](session::Debuggee) double used by this crate's own
//! integration tests and available to downstream embedders for their own.

pub mod breakpoints;
pub mod cache;
pub mod config;
pub mod embed;
pub mod error;
pub mod protocol;
pub mod session;
pub mod testing;
pub mod tracer;
pub mod transport;

pub use error::{DapperError, DapperResult};
pub use session::{Debuggee, SessionEngine};
pub use transport::TransportSpec;
