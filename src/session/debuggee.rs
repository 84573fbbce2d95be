//! The contract between the Session Engine and whatever embeds `dapper`
//! into a target runtime.
//!
//! Spec.md treats the interpreter itself as an external collaborator: the
//! core "specifies only the contract the core relies on" (§1) and exposes a
//! small embedding API (§6, `start`/`stop`). [`Debuggee`] is that contract
//! made concrete as a Rust trait, grounded in candy's own
//! `debug_adapter::vm_state::DebugVm` / `paused::PausedState` split (a
//! thin handle the session holds onto the live interpreter, queried
//! on-demand for stack frames, scopes, and variables rather than kept
//! mirrored in the engine's own memory).
//!
//! A production embedder implements this against its interpreter's actual
//! frame/variable representation; `tests/` and the doc examples use
//! [`crate::testing::StubDebuggee`], a fully in-memory fake.

use async_trait::async_trait;

use crate::error::DapperResult;
use crate::protocol::requests::{AttachRequestArguments, LaunchRequestArguments};
use crate::protocol::types::EvaluateArgumentsContext;
use crate::tracer::FrameSnapshot;

/// One variable scope as the debuggee reports it, prior to the engine
/// allocating it a `variablesReference` (done by [`super::engine::SessionEngine`]
/// via [`super::arena::ReferenceArena`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Arguments,
    Locals,
    Globals,
}

impl ScopeKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ScopeKind::Arguments => "Arguments",
            ScopeKind::Locals => "Locals",
            ScopeKind::Globals => "Globals",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RawScope {
    pub kind: ScopeKind,
    /// Opaque handle the debuggee understands; the engine wraps it in a
    /// [`super::state::VariablesKey::Container`] before handing a
    /// `variablesReference` to the client.
    pub container_id: u64,
}

/// One name/value binding, prior to the engine resolving its own nested
/// `variablesReference` (if it has children).
#[derive(Debug, Clone)]
pub struct RawVariable {
    pub name: String,
    pub type_name: Option<String>,
    pub value: String,
    pub evaluate_name: Option<String>,
    /// `Some(container_id)` if this variable has children fetchable via
    /// [`Debuggee::variables`].
    pub children: Option<u64>,
}

/// The result of a successful `evaluate`/`setVariable` expression
/// evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    pub display: String,
    pub type_name: Option<String>,
    pub children: Option<u64>,
}

/// Detail fetchable via the `exceptionInfo` follow-up request (SPEC_FULL.md
/// §10.6) once a thread has stopped with reason `exception`.
#[derive(Debug, Clone)]
pub struct ExceptionDetail {
    pub exception_id: String,
    pub description: Option<String>,
    pub break_mode: crate::protocol::types::ExceptionBreakMode,
    pub stack_trace: Option<String>,
}

/// A frame reference as understood by `evaluate`/`scopes`: which thread,
/// and how many frames up from the innermost one.
#[derive(Debug, Clone, Copy)]
pub struct FrameRef {
    pub native_thread_id: u64,
    pub depth: u32,
}

/// The live target runtime, as the Session Engine needs to see it.
///
/// Every method other than `launch`/`attach` is synchronous and expected to
/// be cheap: it is only ever called while the debuggee is `Paused` (§3
/// invariants), so there is no concurrent mutation to guard against from
/// the engine's side. Implementations still need their own interior
/// synchronization against the tracer's hot path, which keeps running on
/// other (parked) threads' behalf.
#[async_trait]
pub trait Debuggee: Send + Sync {
    /// Starts the debuggee under `args`. Returns once the program has been
    /// loaded and its first frame is ready to be inspected; by convention
    /// the embedder leaves execution paused at entry (mirroring candy's
    /// `DebugSession::handle(Command::Launch)`, which runs to the first
    /// tracer checkpoint and parks there) so the engine can emit `stopped
    /// {reason: entry}` before the client issues `configurationDone`.
    async fn launch(&self, args: &LaunchRequestArguments) -> DapperResult<()>;

    /// Attaches to an already-running debuggee exposed at a runtime-defined
    /// endpoint carried in `args`.
    async fn attach(&self, args: &AttachRequestArguments) -> DapperResult<()>;

    /// Stack frames for `native_thread_id`, innermost first. Only valid to
    /// call while that thread is parked.
    fn stack_frames(&self, native_thread_id: u64) -> Vec<FrameSnapshot>;

    /// The scopes visible at `frame`.
    fn scopes(&self, frame: FrameRef) -> Vec<RawScope>;

    /// Children of a scope or a nested container, identified by the opaque
    /// id the debuggee itself handed out (via [`RawScope::container_id`] or
    /// [`RawVariable::children`]).
    fn variables(&self, container_id: u64) -> Vec<RawVariable>;

    /// Assigns `value` (itself an expression, evaluated in the debuggee) to
    /// the variable named `name` inside `container_id`. Fails with
    /// [`crate::error::DapperError::User`] if the slot is read-only.
    fn set_variable(
        &self,
        container_id: u64,
        name: &str,
        value: &str,
    ) -> DapperResult<EvaluationOutcome>;

    /// Evaluates `expression`, optionally in the context of a stopped
    /// frame. `context` lets the implementation apply spec.md §4.5/§9's
    /// side-effect-free policy for `hover`/`watch` (SPEC_FULL.md's Open
    /// Question resolution: restrict to attribute/index access rather than
    /// arbitrary calls). `cancelled` is the cooperative flag spec.md §5's
    /// soft-cancellation model describes: a long-running implementation
    /// should poll it and bail out early if a `cancel` request arrives for
    /// this evaluation.
    fn evaluate(
        &self,
        frame: Option<FrameRef>,
        expression: &str,
        context: EvaluateArgumentsContext,
        cancelled: &std::sync::atomic::AtomicBool,
    ) -> DapperResult<EvaluationOutcome>;

    /// Detail on the most recent exception observed on `native_thread_id`,
    /// if that thread is currently stopped with reason `exception`.
    fn exception_detail(&self, native_thread_id: u64) -> Option<ExceptionDetail>;

    /// Tears the debuggee down. `kill` mirrors `disconnect`'s
    /// `terminateDebuggee` argument: best-effort when `false`.
    fn terminate(&self, kill: bool);
}
