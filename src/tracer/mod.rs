//! Selective Tracer: the hook the target runtime calls on every line, call,
//! and return, and the machinery that keeps that hook cheap when nothing
//! interesting is happening.
//!
//! Grounded in candy's `vm::tracer` module (the `Tracer` trait / event
//! split) and its `debug_adapter::tracer::DebugTracer` (per-thread call
//! stack bookkeeping), adapted from candy's cooperative single-threaded
//! fiber scheduler to an OS-thread-per-debuggee-thread model with an
//! explicit park/resume handoff instead of an in-process event queue.

pub mod condition;
pub mod dispatcher;
pub mod frame_analyzer;
pub mod stepping;
pub mod trace_manager;

pub use condition::{AlwaysFalseEvaluator, ConditionEvaluator};
pub use dispatcher::{Dispatcher, FrameSnapshot, StopReason, TraceAction, TraceEvent, Tracer};
pub use frame_analyzer::{FrameAnalyzer, FrameIdentity};
pub use stepping::{StepMode, StepState};
pub use trace_manager::{LifecycleEvent, LogIntent, StopIntent, TraceManager};
