use std::sync::Arc;

use crate::breakpoints::BreakpointRegistry;
use crate::cache::{CacheManager, CodeObjectId};

use super::condition::ConditionEvaluator;
use super::frame_analyzer::{FrameAnalyzer, FrameIdentity};
use super::trace_manager::{LogIntent, StopIntent, TraceManager};

/// One stack frame, as the runtime's hook reports it at a call, line, or
/// return event.
#[derive(Debug, Clone, Default)]
pub struct FrameSnapshot {
    pub native_thread_id: u64,
    pub code_object_id: CodeObjectId,
    pub file_path: String,
    pub function_name: String,
    pub line: u32,
    pub depth: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Step,
    Breakpoint,
    FunctionBreakpoint,
    Exception,
    Pause,
    Entry,
}

/// The events a target-runtime hook reports through [`Tracer`], mirroring
/// candy's `VmEvent`/`FiberEvent` split between whole-program and
/// per-fiber events, collapsed here to the subset a source-level debugger
/// needs: call, line, return, and exception.
#[derive(Debug, Clone)]
pub enum TraceEvent {
    Call(FrameSnapshot),
    Line(FrameSnapshot),
    Return { frame: FrameSnapshot, value_repr: Option<String> },
    Exception { frame: FrameSnapshot, message: String, type_name: String },
    ThreadStarted { native_thread_id: u64, name: String },
    ThreadExited { native_thread_id: u64 },
}

/// What the runtime should do after a trace event: keep running, or stop
/// and wait for the engine to decide what happens next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceAction {
    Continue,
    Stop,
}

/// Implemented by whatever embeds `dapper` into a target runtime's
/// interpreter loop. Call sites are synchronous and on the debuggee's own
/// thread — `add` must not block except via [`TraceManager::park_and_notify`],
/// which the dispatcher calls internally when it decides to stop.
pub trait Tracer: Send + Sync {
    fn add(&self, event: TraceEvent) -> TraceAction;
}

/// The default [`Tracer`] implementation: consults the cache and
/// breakpoint registry to classify each frame, evaluates stepping and
/// breakpoint stop conditions, and parks the calling thread when a stop is
/// warranted.
pub struct Dispatcher {
    cache: Arc<CacheManager>,
    breakpoints: Arc<BreakpointRegistry>,
    trace_manager: Arc<TraceManager>,
    condition_evaluator: Arc<dyn ConditionEvaluator>,
}

impl Dispatcher {
    pub fn new(
        cache: Arc<CacheManager>,
        breakpoints: Arc<BreakpointRegistry>,
        trace_manager: Arc<TraceManager>,
        condition_evaluator: Arc<dyn ConditionEvaluator>,
    ) -> Self {
        Self {
            cache,
            breakpoints,
            trace_manager,
            condition_evaluator,
        }
    }

    fn evaluate_line(&self, frame: &FrameSnapshot) -> Option<StopReason> {
        if self.trace_manager.take_pause_request(frame.native_thread_id) {
            return Some(StopReason::Pause);
        }

        // Tie-break (§4.4): a breakpoint on this line takes precedence over
        // a pending step stop only when its condition evaluates true; the
        // breakpoint walk (condition, hit-count, log point) must run before
        // the step is allowed to claim the stop.
        if let Some(reason) = self.evaluate_breakpoint_at_line(frame) {
            return Some(reason);
        }

        let step = self.trace_manager.step_state(frame.native_thread_id);
        if step.is_active() && step.should_stop_at_line(frame.depth) {
            return Some(StopReason::Step);
        }

        None
    }

    fn evaluate_breakpoint_at_line(&self, frame: &FrameSnapshot) -> Option<StopReason> {
        let snapshot = self.breakpoints.load();
        let candidates = snapshot
            .by_code_object
            .get(&frame.code_object_id)
            .map(Vec::as_slice)
            .unwrap_or_else(|| snapshot.lines_for_file(&frame.file_path));

        let hit = candidates.iter().find(|bp| bp.line as u32 == frame.line)?;

        if let Some(condition) = &hit.condition {
            match self.condition_evaluator.evaluate_bool(frame, condition) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(message) => {
                    // Failure model (§4.4): a raising condition counts as
                    // false, reported once to the console rather than
                    // stopping or crashing the tracer.
                    self.trace_manager.emit_log(LogIntent {
                        native_thread_id: frame.native_thread_id,
                        message: format!("breakpoint condition error: {message}"),
                    });
                    return None;
                }
            }
        }

        if let Some(hit_condition) = &hit.hit_condition {
            let threshold: u64 = hit_condition.trim().parse().unwrap_or(0);
            let count = self.trace_manager.record_hit(hit.id);
            if count < threshold {
                return None;
            }
        }

        if let Some(log_message) = &hit.log_message {
            // A log point: render the message and keep running. The
            // template ({expr}) interpolation itself is an evaluator
            // concern (§4.5), so the tracer hands the raw template through
            // and the engine resolves it against the paused frame.
            self.trace_manager.emit_log(LogIntent {
                native_thread_id: frame.native_thread_id,
                message: log_message.clone(),
            });
            return None;
        }

        Some(StopReason::Breakpoint)
    }

    fn evaluate_call(&self, frame: &FrameSnapshot) -> Option<StopReason> {
        let snapshot = self.breakpoints.load();
        if snapshot
            .function_breakpoints
            .iter()
            .any(|fb| fb.name == frame.function_name)
        {
            return Some(StopReason::FunctionBreakpoint);
        }
        None
    }

    fn evaluate_return(&self, frame: &FrameSnapshot) -> Option<StopReason> {
        let step = self.trace_manager.step_state(frame.native_thread_id);
        if step.is_active() && step.should_stop_at_return(frame.depth) {
            return Some(StopReason::Step);
        }
        None
    }

    fn identity_of(frame: &FrameSnapshot) -> FrameIdentity {
        FrameIdentity {
            code_object_id: frame.code_object_id,
            file_path: frame.file_path.clone(),
            first_line: frame.line,
        }
    }

    fn stepping_active(&self, native_thread_id: u64) -> bool {
        self.trace_manager.step_state(native_thread_id).is_active()
            || self.trace_manager.pause_pending(native_thread_id)
    }
}

impl Tracer for Dispatcher {
    fn add(&self, event: TraceEvent) -> TraceAction {
        let (frame, reason, stop) = match &event {
            TraceEvent::Call(frame) => {
                let interest = FrameAnalyzer::classify(
                    &self.cache,
                    &self.breakpoints.load(),
                    &Self::identity_of(frame),
                    self.stepping_active(frame.native_thread_id),
                );
                if matches!(interest, crate::cache::Interest::Skip) {
                    return TraceAction::Continue;
                }
                let reason = self.evaluate_call(frame);
                (frame.clone(), reason, reason.is_some())
            }
            TraceEvent::Line(frame) => {
                let interest = FrameAnalyzer::classify(
                    &self.cache,
                    &self.breakpoints.load(),
                    &Self::identity_of(frame),
                    self.stepping_active(frame.native_thread_id),
                );
                if matches!(interest, crate::cache::Interest::Skip) {
                    return TraceAction::Continue;
                }
                let reason = self.evaluate_line(frame);
                (frame.clone(), reason, reason.is_some())
            }
            TraceEvent::Return { frame, .. } => {
                let reason = self.evaluate_return(frame);
                (frame.clone(), reason, reason.is_some())
            }
            TraceEvent::Exception { frame, .. } => {
                (frame.clone(), Some(StopReason::Exception), true)
            }
            TraceEvent::ThreadStarted { .. } | TraceEvent::ThreadExited { .. } => {
                return TraceAction::Continue;
            }
        };

        if !stop {
            return TraceAction::Continue;
        }

        self.trace_manager.clear_step_state(frame.native_thread_id);
        self.trace_manager.park_and_notify(StopIntent {
            native_thread_id: frame.native_thread_id,
            reason: reason.unwrap_or(StopReason::Pause),
            frame,
        });
        TraceAction::Stop
    }
}
