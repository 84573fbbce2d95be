//! A fully in-memory [`Debuggee`] double.
//!
//! `tests/` (this crate's own scenario tests) and downstream embedders'
//! doc-tests drive the [`SessionEngine`](crate::session::SessionEngine)
//! against [`StubDebuggee`] instead of a real interpreter, the way
//! `third_party/dap-rs`'s own test module drives `FileLineReader` against a
//! canned line rather than a live socket (`line_reader.rs`'s
//! `test_file_reader`): state lives behind a `parking_lot::Mutex` so the
//! synchronous [`Debuggee`] methods match the trait's contract exactly,
//! with no async machinery pretending to be a real runtime.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::error::{DapperError, DapperResult};
use crate::protocol::requests::{AttachRequestArguments, LaunchRequestArguments};
use crate::protocol::types::{EvaluateArgumentsContext, ExceptionBreakMode};
use crate::session::debuggee::{Debuggee, EvaluationOutcome, ExceptionDetail, FrameRef, RawScope, RawVariable, ScopeKind};
use crate::tracer::FrameSnapshot;

/// One frame of a scripted call stack, innermost-first within a thread.
#[derive(Debug, Clone)]
pub struct StubFrame {
    pub file_path: String,
    pub function_name: String,
    pub line: u32,
}

/// One name/value slot a scope or container reports, optionally nested.
#[derive(Debug, Clone)]
pub struct StubVariable {
    pub name: String,
    pub value: String,
    pub type_name: Option<String>,
    pub children: Option<u64>,
}

#[derive(Default)]
struct StubState {
    frames: FxHashMap<u64, Vec<StubFrame>>,
    scopes: FxHashMap<(u64, u32), Vec<RawScope>>,
    containers: FxHashMap<u64, Vec<StubVariable>>,
    exceptions: FxHashMap<u64, ExceptionDetail>,
    launch_calls: Vec<LaunchRequestArguments>,
    attach_calls: Vec<AttachRequestArguments>,
    terminated: Option<bool>,
}

/// An in-memory program double: fixed call stacks, scopes, and variables,
/// configured up front by a test and never mutated by the debuggee's own
/// "execution" (there is none — [`StubDebuggee`] has no stepping of its
/// own; tests drive progress by feeding `StopIntent`s through a
/// [`crate::tracer::TraceManager`] directly).
#[derive(Default)]
pub struct StubDebuggee {
    state: Mutex<StubState>,
}

impl StubDebuggee {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the scripted stack for `native_thread_id`, already assigned
    /// depths (`0` = innermost).
    pub fn set_frames(&self, native_thread_id: u64, frames: Vec<StubFrame>) {
        self.state.lock().frames.insert(native_thread_id, frames);
    }

    /// Installs the scopes visible at `(native_thread_id, depth)`.
    pub fn set_scopes(&self, native_thread_id: u64, depth: u32, scopes: Vec<RawScope>) {
        self.state
            .lock()
            .scopes
            .insert((native_thread_id, depth), scopes);
    }

    /// Installs the children of opaque container `container_id` (a scope's
    /// own `container_id`, or another variable's `children`).
    pub fn set_container(&self, container_id: u64, variables: Vec<StubVariable>) {
        self.state.lock().containers.insert(container_id, variables);
    }

    pub fn set_exception(&self, native_thread_id: u64, detail: ExceptionDetail) {
        self.state.lock().exceptions.insert(native_thread_id, detail);
    }

    pub fn launch_calls(&self) -> Vec<LaunchRequestArguments> {
        self.state.lock().launch_calls.clone()
    }

    pub fn attach_calls(&self) -> Vec<AttachRequestArguments> {
        self.state.lock().attach_calls.clone()
    }

    pub fn was_terminated_with_kill(&self) -> Option<bool> {
        self.state.lock().terminated
    }

    fn stub_frame_snapshot(native_thread_id: u64, depth: u32, frame: &StubFrame) -> FrameSnapshot {
        FrameSnapshot {
            native_thread_id,
            code_object_id: Default::default(),
            file_path: frame.file_path.clone(),
            function_name: frame.function_name.clone(),
            line: frame.line,
            depth,
        }
    }
}

#[async_trait]
impl Debuggee for StubDebuggee {
    async fn launch(&self, args: &LaunchRequestArguments) -> DapperResult<()> {
        self.state.lock().launch_calls.push(args.clone());
        Ok(())
    }

    async fn attach(&self, args: &AttachRequestArguments) -> DapperResult<()> {
        self.state.lock().attach_calls.push(args.clone());
        Ok(())
    }

    fn stack_frames(&self, native_thread_id: u64) -> Vec<FrameSnapshot> {
        let state = self.state.lock();
        state
            .frames
            .get(&native_thread_id)
            .map(|frames| {
                frames
                    .iter()
                    .enumerate()
                    .map(|(depth, frame)| Self::stub_frame_snapshot(native_thread_id, depth as u32, frame))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn scopes(&self, frame: FrameRef) -> Vec<RawScope> {
        self.state
            .lock()
            .scopes
            .get(&(frame.native_thread_id, frame.depth))
            .cloned()
            .unwrap_or_default()
    }

    fn variables(&self, container_id: u64) -> Vec<RawVariable> {
        self.state
            .lock()
            .containers
            .get(&container_id)
            .map(|vars| {
                vars.iter()
                    .map(|v| RawVariable {
                        name: v.name.clone(),
                        type_name: v.type_name.clone(),
                        value: v.value.clone(),
                        evaluate_name: Some(v.name.clone()),
                        children: v.children,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn set_variable(
        &self,
        container_id: u64,
        name: &str,
        value: &str,
    ) -> DapperResult<EvaluationOutcome> {
        let mut state = self.state.lock();
        let vars = state
            .containers
            .get_mut(&container_id)
            .ok_or_else(|| DapperError::user(format!("unknown container {container_id}")))?;
        let slot = vars
            .iter_mut()
            .find(|v| v.name == name)
            .ok_or_else(|| DapperError::user(format!("no variable named {name}")))?;
        slot.value = value.to_string();
        Ok(EvaluationOutcome {
            display: slot.value.clone(),
            type_name: slot.type_name.clone(),
            children: slot.children,
        })
    }

    fn evaluate(
        &self,
        _frame: Option<FrameRef>,
        expression: &str,
        _context: EvaluateArgumentsContext,
        cancelled: &AtomicBool,
    ) -> DapperResult<EvaluationOutcome> {
        if cancelled.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(DapperError::user("evaluation cancelled"));
        }
        // No real expression language: echoes the expression back as its
        // own result, which is all the scenario tests need to confirm the
        // evaluate round-trip (frame resolution, variablesReference
        // allocation) works.
        Ok(EvaluationOutcome {
            display: expression.to_string(),
            type_name: None,
            children: None,
        })
    }

    fn exception_detail(&self, native_thread_id: u64) -> Option<ExceptionDetail> {
        self.state.lock().exceptions.get(&native_thread_id).cloned()
    }

    fn terminate(&self, kill: bool) {
        self.state.lock().terminated = Some(kill);
    }
}

/// Convenience constructor tests reach for when they just need *an*
/// exception without caring about the detail.
pub fn generic_exception(exception_id: impl Into<String>) -> ExceptionDetail {
    ExceptionDetail {
        exception_id: exception_id.into(),
        description: None,
        break_mode: ExceptionBreakMode::Always,
        stack_trace: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn launch_records_arguments() {
        let debuggee = StubDebuggee::new();
        let args = LaunchRequestArguments {
            no_debug: None,
            restart_data: None,
            program: Some("main.rt".to_string()),
            args: None,
            cwd: None,
            env: None,
        };
        debuggee.launch(&args).await.unwrap();
        assert_eq!(debuggee.launch_calls().len(), 1);
    }

    #[test]
    fn stack_frames_reflects_installed_script() {
        let debuggee = StubDebuggee::new();
        debuggee.set_frames(
            1,
            vec![StubFrame {
                file_path: "main.rt".to_string(),
                function_name: "main".to_string(),
                line: 10,
            }],
        );
        let frames = debuggee.stack_frames(1);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].depth, 0);
        assert_eq!(frames[0].line, 10);
    }

    #[test]
    fn set_variable_updates_the_container() {
        let debuggee = StubDebuggee::new();
        debuggee.set_container(
            7,
            vec![StubVariable {
                name: "x".to_string(),
                value: "1".to_string(),
                type_name: Some("Int".to_string()),
                children: None,
            }],
        );
        let outcome = debuggee.set_variable(7, "x", "2").unwrap();
        assert_eq!(outcome.display, "2");
        assert_eq!(debuggee.variables(7)[0].value, "2");
    }

    #[test]
    fn evaluate_rejects_when_cancelled() {
        let debuggee = StubDebuggee::new();
        let cancelled = AtomicBool::new(true);
        let result = debuggee.evaluate(None, "1 + 1", EvaluateArgumentsContext::Repl, &cancelled);
        assert!(result.is_err());
    }
}
