//! Session Engine (C5): the DAP state machine that owns the breakpoint
//! registry, the thread/frame/variable model, and the stepping controller,
//! and is the sole writer of every piece of state the tracer reads.
//!
//! Grounded in candy's `debug_adapter::session::Session` (request dispatch
//! loop, `State` enum) and `paused::PausedState` (the per-stop arena of
//! frame/variable handles), generalized from candy's single in-process VM
//! to an arbitrary [`Debuggee`] the embedder supplies.

pub mod arena;
pub mod debuggee;
pub mod engine;
pub mod state;

pub use debuggee::{Debuggee, EvaluationOutcome, ExceptionDetail, FrameRef, RawScope, RawVariable, ScopeKind};
pub use engine::SessionEngine;
pub use state::SessionState;
