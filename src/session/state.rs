use std::collections::HashMap;

use crate::protocol::requests::{InitializeArguments, LaunchRequestArguments};
use crate::tracer::FrameSnapshot;

/// One stopped stack frame, as composed for `stackTrace`/`scopes`/
/// `variables` responses. Index 0 of a thread's call stack is always its
/// innermost (currently executing) frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrameKey {
    pub native_thread_id: u64,
    pub depth: u32,
}

/// What `variablesReference` resolves to: either a frame's argument/local
/// scope or a nested container (the fields/elements of some previously
/// returned variable).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariablesKey {
    Locals { native_thread_id: u64, depth: u32 },
    Container { object_id: u64 },
}

/// State accumulated while the debuggee is stopped: the thread that
/// actually stopped (the one the client's next `stackTrace`/`scopes`/
/// `variables`/`evaluate` calls are implicitly about unless they name
/// another thread).
///
/// The frame/variable reference arenas themselves are NOT part of this
/// struct — they live on [`super::engine::SessionEngine`] directly and
/// outlive any single `PausedState`, since their whole purpose (staleness
/// detection via generation bump on Resume, §3 invariant) would be
/// defeated if a fresh arena were handed out every stop cycle.
#[derive(Default)]
pub struct PausedState {
    pub stopped_thread: u64,
    /// Cached frame snapshots for every thread that was paused when the
    /// stop happened, so stack traces for non-stopped-but-paused threads
    /// (cooperative pause: the whole process stops together) can still be
    /// served without round-tripping the runtime again.
    pub frame_snapshots: HashMap<u64, Vec<FrameSnapshot>>,
}

impl PausedState {
    pub fn new(stopped_thread: u64, frame_snapshots: HashMap<u64, Vec<FrameSnapshot>>) -> Self {
        Self {
            stopped_thread,
            frame_snapshots,
        }
    }
}

/// Top-level session lifecycle, mirroring candy's `debug_adapter::session::State`
/// (`Initial` / `Initialized` / `Launched`) but splitting the running
/// debuggee into its own variant so paused-only data (frame/variable
/// arenas) doesn't have to live behind `Option`s while running.
pub enum SessionState {
    /// No `initialize` request has been handled yet.
    Uninitialized,
    /// `initialize` has completed; waiting for `launch`/`attach`.
    Initialized(InitializeArguments),
    /// The debuggee exists and is currently running free.
    Running {
        initialize_arguments: InitializeArguments,
        launch_arguments: LaunchRequestArguments,
    },
    /// The debuggee exists and is stopped at a breakpoint, step, pause, or
    /// exception.
    Paused {
        initialize_arguments: InitializeArguments,
        launch_arguments: LaunchRequestArguments,
        paused: PausedState,
    },
    /// `disconnect`/`terminate` has completed, or the debuggee process has
    /// exited. Terminal: no further requests are serviced.
    Terminated,
}

impl SessionState {
    pub fn require_initialized(&self) -> Result<&InitializeArguments, &'static str> {
        match self {
            SessionState::Initialized(args)
            | SessionState::Running {
                initialize_arguments: args,
                ..
            }
            | SessionState::Paused {
                initialize_arguments: args,
                ..
            } => Ok(args),
            SessionState::Uninitialized => Err("session has not been initialized yet"),
            SessionState::Terminated => Err("session has already terminated"),
        }
    }

    pub fn require_paused(&self) -> Result<&PausedState, &'static str> {
        match self {
            SessionState::Paused { paused, .. } => Ok(paused),
            SessionState::Running { .. } => Err("debuggee is running, not paused"),
            _ => Err("no debuggee is attached"),
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, SessionState::Terminated)
    }

    /// Transition from `Running` to `Paused`, composing a fresh
    /// [`PausedState`]. No-op (returns an error) unless currently running.
    pub fn transition_to_paused(
        &mut self,
        stopped_thread: u64,
        frame_snapshots: HashMap<u64, Vec<FrameSnapshot>>,
    ) -> Result<(), &'static str> {
        let (initialize_arguments, launch_arguments) = match std::mem::replace(
            self,
            SessionState::Terminated,
        ) {
            SessionState::Running {
                initialize_arguments,
                launch_arguments,
            } => (initialize_arguments, launch_arguments),
            other => {
                *self = other;
                return Err("can only pause a running debuggee");
            }
        };
        *self = SessionState::Paused {
            initialize_arguments,
            launch_arguments,
            paused: PausedState::new(stopped_thread, frame_snapshots),
        };
        Ok(())
    }

    /// Transition from `Paused` back to `Running`, discarding the paused
    /// frame/variable arenas.
    pub fn transition_to_running(&mut self) -> Result<(), &'static str> {
        let (initialize_arguments, launch_arguments) = match std::mem::replace(
            self,
            SessionState::Terminated,
        ) {
            SessionState::Paused {
                initialize_arguments,
                launch_arguments,
                ..
            } => (initialize_arguments, launch_arguments),
            other => {
                *self = other;
                return Err("can only resume a paused debuggee");
            }
        };
        *self = SessionState::Running {
            initialize_arguments,
            launch_arguments,
        };
        Ok(())
    }
}
