use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::{Condvar, Mutex};
use tokio::sync::mpsc;

use super::dispatcher::{FrameSnapshot, StopReason};
use super::stepping::StepState;

/// The message a paused thread's tracer callback hands to the session
/// engine: "I've stopped, here's why and what the stack looked like at the
/// moment I stopped."
#[derive(Debug, Clone)]
pub struct StopIntent {
    pub native_thread_id: u64,
    pub reason: StopReason,
    pub frame: FrameSnapshot,
}

/// A one-thread park/resume rendezvous.
///
/// The tracer callback runs synchronously on the debuggee's native thread
/// (it cannot itself be `async`, since it's invoked from inside the target
/// runtime's interpreter loop). To hand control to the async session
/// engine and block until told to continue, it parks here with a plain
/// condition variable rather than anything `tokio`-flavored, since the
/// parking thread is never part of the Tokio runtime.
#[derive(Default)]
struct Parker {
    resume: Mutex<bool>,
    cond: Condvar,
}

impl Parker {
    fn park(&self) {
        let mut resume = self.resume.lock();
        while !*resume {
            self.cond.wait(&mut resume);
        }
        *resume = false;
    }

    fn resume(&self) {
        let mut resume = self.resume.lock();
        *resume = true;
        self.cond.notify_one();
    }
}

/// A log point hit: rendered message plus the thread it fired on, sent to
/// the engine for translation into an `output` event. Log points never
/// stop execution, so this is fire-and-forget from the tracer's side.
#[derive(Debug, Clone)]
pub struct LogIntent {
    pub native_thread_id: u64,
    pub message: String,
}

/// Debuggee lifecycle facts that don't fit the park/resume `StopIntent`
/// protocol (nothing is parked waiting on these): a new OS thread starting,
/// one exiting, or the whole program completing. The embedder reports these
/// through [`TraceManager::report_thread_started`]/
/// [`TraceManager::report_thread_exited`]/[`TraceManager::report_exited`];
/// the engine turns them into `thread`/`exited`/`terminated` events.
#[derive(Debug, Clone)]
pub enum LifecycleEvent {
    ThreadStarted { native_thread_id: u64, name: String },
    ThreadExited { native_thread_id: u64 },
    Exited { exit_code: usize },
}

/// Coordinates per-thread stepping state and the park/signal handoff
/// between the tracer's synchronous callback and the async session engine
/// (§5's concurrency model).
pub struct TraceManager {
    steps: DashMap<u64, StepState>,
    parkers: DashMap<u64, Arc<Parker>>,
    stop_tx: mpsc::Sender<StopIntent>,
    log_tx: mpsc::Sender<LogIntent>,
    lifecycle_tx: mpsc::Sender<LifecycleEvent>,
    hit_counts: DashMap<usize, u64>,
    pause_requests: DashMap<u64, ()>,
}

impl TraceManager {
    /// `stop_tx` is the engine's inbox for [`StopIntent`]s; the engine is
    /// expected to `recv` it on its own task and, once it has composed a
    /// `stopped` event and applied any user-visible state changes, call
    /// [`TraceManager::resume`] for the thread that stopped. `log_tx` is the
    /// engine's inbox for log point hits, which never park the thread.
    /// `lifecycle_tx` is the engine's inbox for [`LifecycleEvent`]s.
    pub fn new(
        stop_tx: mpsc::Sender<StopIntent>,
        log_tx: mpsc::Sender<LogIntent>,
        lifecycle_tx: mpsc::Sender<LifecycleEvent>,
    ) -> Self {
        Self {
            steps: DashMap::new(),
            parkers: DashMap::new(),
            stop_tx,
            log_tx,
            lifecycle_tx,
            hit_counts: DashMap::new(),
            pause_requests: DashMap::new(),
        }
    }

    /// Reports that a new OS thread has started running debuggee code.
    /// Called by the embedder from wherever it observes thread creation
    /// (not necessarily the new thread itself).
    pub fn report_thread_started(&self, native_thread_id: u64, name: impl Into<String>) {
        let _ = self.lifecycle_tx.try_send(LifecycleEvent::ThreadStarted {
            native_thread_id,
            name: name.into(),
        });
    }

    /// Reports that `native_thread_id` has exited.
    pub fn report_thread_exited(&self, native_thread_id: u64) {
        let _ = self
            .lifecycle_tx
            .try_send(LifecycleEvent::ThreadExited { native_thread_id });
    }

    /// Reports that the debuggee process/program has run to completion.
    pub fn report_exited(&self, exit_code: usize) {
        let _ = self.lifecycle_tx.try_send(LifecycleEvent::Exited { exit_code });
    }

    /// Records that `native_thread_id` should stop at its next line event
    /// regardless of breakpoints or stepping (`pause`, §4.5). Best-effort:
    /// a thread blocked in a native call only observes this once it
    /// returns to a line event, per spec.md §4.5.
    pub fn request_pause(&self, native_thread_id: u64) {
        self.pause_requests.insert(native_thread_id, ());
    }

    /// Consumes a pending pause request for `native_thread_id`, if any.
    pub fn take_pause_request(&self, native_thread_id: u64) -> bool {
        self.pause_requests.remove(&native_thread_id).is_some()
    }

    /// Whether a pause is pending for `native_thread_id`, without consuming
    /// it. Used to force line tracing on an otherwise uninteresting frame
    /// so the pending pause actually gets a line event to fire on.
    pub fn pause_pending(&self, native_thread_id: u64) -> bool {
        self.pause_requests.contains_key(&native_thread_id)
    }

    /// Increments and returns the live hit count for breakpoint `id`.
    pub fn record_hit(&self, id: usize) -> u64 {
        let mut count = self.hit_counts.entry(id).or_insert(0);
        *count += 1;
        *count
    }

    /// Sends a rendered log point message to the engine without parking
    /// the calling thread.
    pub fn emit_log(&self, intent: LogIntent) {
        let _ = self.log_tx.try_send(intent);
    }

    pub fn step_state(&self, native_thread_id: u64) -> StepState {
        self.steps
            .get(&native_thread_id)
            .map(|e| *e.value())
            .unwrap_or_default()
    }

    pub fn set_step_state(&self, native_thread_id: u64, state: StepState) {
        self.steps.insert(native_thread_id, state);
    }

    pub fn clear_step_state(&self, native_thread_id: u64) {
        self.steps.remove(&native_thread_id);
    }

    /// Called from the debuggee's native thread. Notifies the engine that
    /// this thread has stopped, then blocks the calling thread until
    /// [`TraceManager::resume`] is called for the same thread id.
    ///
    /// Uses `blocking_send` because the caller is not running on a Tokio
    /// worker thread and must not be `.await`ed into one.
    pub fn park_and_notify(&self, intent: StopIntent) {
        let native_thread_id = intent.native_thread_id;
        let parker = self
            .parkers
            .entry(native_thread_id)
            .or_insert_with(|| Arc::new(Parker::default()))
            .clone();

        if self.stop_tx.blocking_send(intent).is_err() {
            // Engine is gone (session tearing down); don't block forever.
            return;
        }
        parker.park();
    }

    /// Called from the session engine once it has finished composing a
    /// snapshot and is ready to let `native_thread_id` continue.
    pub fn resume(&self, native_thread_id: u64) {
        if let Some(parker) = self.parkers.get(&native_thread_id) {
            parker.resume();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::dispatcher::StopReason;

    #[tokio::test]
    async fn park_and_notify_unblocks_on_resume() {
        let (tx, mut rx) = mpsc::channel(4);
        let (log_tx, _log_rx) = mpsc::channel(4);
        let (lifecycle_tx, _lifecycle_rx) = mpsc::channel(4);
        let manager = Arc::new(TraceManager::new(tx, log_tx, lifecycle_tx));

        let worker_manager = manager.clone();
        let handle = std::thread::spawn(move || {
            worker_manager.park_and_notify(StopIntent {
                native_thread_id: 1,
                reason: StopReason::Step,
                frame: FrameSnapshot::default(),
            });
        });

        let intent = rx.recv().await.expect("should receive stop intent");
        assert_eq!(intent.native_thread_id, 1);
        manager.resume(1);
        handle.join().expect("worker thread should not panic");
    }
}
