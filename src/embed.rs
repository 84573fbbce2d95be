//! The embedding API (spec.md §6 "Attach endpoint"): `start`/`stop`, the
//! only two functions whatever owns the target runtime's interpreter loop
//! needs to bring a DAP session up and tear it down.
//!
//! Grounded in the corpus's "dedicated thread, dedicated single-threaded
//! runtime" idiom for an embedded async subsystem — `DataDog-libdatadog`'s
//! crashtracker receiver entry points build a
//! `tokio::runtime::Builder::new_current_thread()` runtime and
//! `block_on` it from a thread of their own rather than requiring the host
//! process to already be running Tokio (`crashtracker/src/receiver/entry_points.rs`).
//! `dapper` needs the same property: a debuggee embedding it may have no
//! async runtime of its own at all.

use std::sync::Arc;
use std::thread::JoinHandle;

use tokio::sync::{mpsc, oneshot};
use tracing::{error, info};

use crate::breakpoints::BreakpointRegistry;
use crate::cache::{CacheManager, ClassificationRules};
use crate::error::{DapperError, DapperResult};
use crate::session::{Debuggee, SessionEngine};
use crate::tracer::{AlwaysFalseEvaluator, ConditionEvaluator, Dispatcher, TraceManager};
use crate::transport::{self, TransportSpec};

/// Everything the embedder needs once a session is running: a [`Dispatcher`]
/// to wire into the interpreter's own trace hook (it implements
/// [`crate::tracer::Tracer`]), and the handle to [`stop`] the session later.
pub struct SessionHandle {
    tracer: Arc<Dispatcher>,
    trace_manager: Arc<TraceManager>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<DapperResult<()>>>,
}

impl SessionHandle {
    /// The [`Tracer`](crate::tracer::Tracer) the embedder's interpreter loop
    /// should call on every trace event.
    pub fn tracer(&self) -> Arc<Dispatcher> {
        self.tracer.clone()
    }

    /// The handle the interpreter's OS-thread-lifecycle hooks use to report
    /// new/exited native threads, and program completion, outside of the
    /// park/resume protocol proper (see
    /// [`TraceManager::report_thread_started`]/
    /// [`TraceManager::report_thread_exited`]/[`TraceManager::report_exited`]).
    pub fn trace_manager(&self) -> Arc<TraceManager> {
        self.trace_manager.clone()
    }
}

/// Starts a session: accepts (or opens) the transport described by `spec`,
/// then runs the [`SessionEngine`] to completion on a dedicated thread with
/// its own single-threaded Tokio runtime. Returns as soon as the dedicated
/// thread has been spawned — it does not wait for a client to connect.
pub fn start<D: Debuggee + 'static>(
    spec: TransportSpec,
    debuggee: Arc<D>,
    classification_rules: ClassificationRules,
) -> SessionHandle {
    start_with_evaluator(spec, debuggee, classification_rules, Arc::new(AlwaysFalseEvaluator))
}

/// As [`start`], but with an explicit [`ConditionEvaluator`] for conditional
/// breakpoints (spec.md §4.4) — an embedder whose runtime can evaluate
/// boolean expressions synchronously on the debuggee's own thread should
/// supply one; otherwise every conditional breakpoint behaves as if its
/// condition were always false.
pub fn start_with_evaluator<D: Debuggee + 'static>(
    spec: TransportSpec,
    debuggee: Arc<D>,
    classification_rules: ClassificationRules,
    condition_evaluator: Arc<dyn ConditionEvaluator>,
) -> SessionHandle {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let (stop_tx, stop_rx) = mpsc::channel(32);
    let (log_tx, log_rx) = mpsc::channel(32);
    let (lifecycle_tx, lifecycle_rx) = mpsc::channel(32);

    let cache = Arc::new(CacheManager::new(classification_rules));
    let breakpoints = Arc::new(BreakpointRegistry::new());
    let trace_manager = Arc::new(TraceManager::new(stop_tx, log_tx, lifecycle_tx));
    let tracer = Arc::new(Dispatcher::new(
        cache.clone(),
        breakpoints.clone(),
        trace_manager.clone(),
        condition_evaluator,
    ));

    let thread_cache = cache;
    let thread_breakpoints = breakpoints;
    let thread_trace_manager = trace_manager.clone();

    let thread = std::thread::Builder::new()
        .name("dapper-session".to_string())
        .spawn(move || -> DapperResult<()> {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|err| DapperError::adapter(err.to_string()))?;
            runtime.block_on(run_session(
                spec,
                debuggee,
                thread_cache,
                thread_breakpoints,
                thread_trace_manager,
                stop_rx,
                log_rx,
                lifecycle_rx,
                shutdown_rx,
            ))
        })
        .expect("failed to spawn dapper-session thread");

    SessionHandle {
        tracer,
        trace_manager,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    }
}

async fn run_session<D: Debuggee + 'static>(
    spec: TransportSpec,
    debuggee: Arc<D>,
    cache: Arc<CacheManager>,
    breakpoints: Arc<BreakpointRegistry>,
    trace_manager: Arc<TraceManager>,
    stop_rx: mpsc::Receiver<crate::tracer::StopIntent>,
    log_rx: mpsc::Receiver<crate::tracer::LogIntent>,
    lifecycle_rx: mpsc::Receiver<crate::tracer::LifecycleEvent>,
    shutdown_rx: oneshot::Receiver<()>,
) -> DapperResult<()> {
    let connection = transport::accept(&spec).await.map_err(DapperError::from)?;
    info!("debug adapter client connected");

    let engine = SessionEngine::new(
        connection.requests,
        connection.outgoing.clone(),
        stop_rx,
        log_rx,
        lifecycle_rx,
        debuggee,
        cache,
        breakpoints,
        trace_manager,
    );

    let result = tokio::select! {
        result = engine.run() => result,
        _ = shutdown_rx => {
            info!("session stop requested");
            Ok(())
        }
    };
    connection.shutdown();

    if let Err(err) = &result {
        if err.is_fatal() {
            error!(%err, "session ended with a fatal error");
        }
    }
    result
}

/// Stops a session started with [`start`] or [`start_with_evaluator`] and
/// blocks until its dedicated thread has exited.
pub fn stop(mut handle: SessionHandle) {
    if let Some(shutdown) = handle.shutdown.take() {
        let _ = shutdown.send(());
    }
    if let Some(thread) = handle.thread.take() {
        match thread.join() {
            Ok(Ok(())) => {}
            Ok(Err(err)) => error!(%err, "session thread ended with an error"),
            Err(_) => error!("session thread panicked"),
        }
    }
}
