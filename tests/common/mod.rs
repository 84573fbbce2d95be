//! Shared scenario-test harness: wires a [`SessionEngine`] up against a
//! [`StubDebuggee`] and a real [`TraceManager`]/[`Dispatcher`] pair, the way
//! `embed::start` wires them for a live embedder, but with the request and
//! outgoing-message channels held directly by the test instead of being fed
//! by a real [`Transport`](dapper::transport).

use std::sync::Arc;

use dapper::breakpoints::BreakpointRegistry;
use dapper::cache::{CacheManager, ClassificationRules};
use dapper::protocol::events::EventBody;
use dapper::protocol::message::OutgoingMessage;
use dapper::protocol::requests::Request;
use dapper::protocol::responses::Response;
use dapper::protocol::ServerError;
use dapper::session::SessionEngine;
use dapper::testing::StubDebuggee;
use dapper::tracer::{AlwaysFalseEvaluator, ConditionEvaluator, Dispatcher, TraceManager};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Everything a scenario test needs: the channels a real transport would
/// otherwise own, the debuggee double, and the tracer pieces a simulated
/// debuggee thread drives directly.
pub struct Harness {
    pub debuggee: Arc<StubDebuggee>,
    pub dispatcher: Arc<Dispatcher>,
    pub trace_manager: Arc<TraceManager>,
    pub breakpoints: Arc<BreakpointRegistry>,
    pub cache: Arc<CacheManager>,
    requests_tx: mpsc::Sender<Result<Request, ServerError>>,
    outgoing_rx: mpsc::Receiver<OutgoingMessage>,
    engine_task: JoinHandle<()>,
    next_seq: usize,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_evaluator(Arc::new(AlwaysFalseEvaluator))
    }

    pub fn with_evaluator(evaluator: Arc<dyn ConditionEvaluator>) -> Self {
        let (requests_tx, requests_rx) = mpsc::channel(32);
        let (outgoing_tx, outgoing_rx) = mpsc::channel(32);
        let (stop_tx, stop_rx) = mpsc::channel(32);
        let (log_tx, log_rx) = mpsc::channel(32);
        let (lifecycle_tx, lifecycle_rx) = mpsc::channel(32);

        let cache = Arc::new(CacheManager::new(ClassificationRules::default()));
        let breakpoints = Arc::new(BreakpointRegistry::new());
        let trace_manager = Arc::new(TraceManager::new(stop_tx, log_tx, lifecycle_tx));
        let dispatcher = Arc::new(Dispatcher::new(
            cache.clone(),
            breakpoints.clone(),
            trace_manager.clone(),
            evaluator,
        ));
        let debuggee = Arc::new(StubDebuggee::new());

        let engine = SessionEngine::new(
            requests_rx,
            outgoing_tx,
            stop_rx,
            log_rx,
            lifecycle_rx,
            debuggee.clone(),
            cache.clone(),
            breakpoints.clone(),
            trace_manager.clone(),
        );
        let engine_task = tokio::spawn(async move {
            let _ = engine.run().await;
        });

        Self {
            debuggee,
            dispatcher,
            trace_manager,
            breakpoints,
            cache,
            requests_tx,
            outgoing_rx,
            engine_task,
            next_seq: 1,
        }
    }

    /// Sends one request built from `command`/`arguments`, returning the
    /// `seq` it was stamped with (useful for `cancel`).
    pub async fn send(&mut self, value: serde_json::Value) -> usize {
        let seq = self.next_seq;
        self.next_seq += 1;
        let mut object = value.as_object().cloned().unwrap_or_default();
        object.insert("seq".to_string(), serde_json::Value::from(seq));
        let request: Request =
            serde_json::from_value(serde_json::Value::Object(object)).expect("well-formed request");
        self.requests_tx
            .send(Ok(request))
            .await
            .expect("engine task is still running");
        seq
    }

    async fn recv_raw(&mut self) -> OutgoingMessage {
        self.outgoing_rx
            .recv()
            .await
            .expect("engine ended before sending the expected message")
    }

    pub async fn expect_response(&mut self) -> Response {
        match self.recv_raw().await {
            OutgoingMessage::Response(response) => response,
            OutgoingMessage::Event(event) => panic!("expected a response, got event {event:?}"),
        }
    }

    pub async fn expect_event(&mut self) -> EventBody {
        match self.recv_raw().await {
            OutgoingMessage::Event(event) => event.body.expect("event carries a body"),
            OutgoingMessage::Response(response) => {
                panic!("expected an event, got response {response:?}")
            }
        }
    }

    /// Drives `initialize` -> `launch` -> (optional `setBreakpoints` calls)
    /// -> `configurationDone`, leaving the session `Running`. Returns once
    /// the `configurationDone` ack has been received.
    pub async fn boot(&mut self) {
        self.send(serde_json::json!({
            "command": "initialize",
            "arguments": { "adapterID": "dapper-tests" },
        }))
        .await;
        let response = self.expect_response().await;
        assert!(response.success, "initialize should succeed");
        let event = self.expect_event().await;
        assert!(matches!(event, EventBody::Initialized));

        self.send(serde_json::json!({
            "command": "launch",
            "arguments": { "program": "prog.candy" },
        }))
        .await;
        let response = self.expect_response().await;
        assert!(response.success, "launch should succeed");
    }

    pub async fn configuration_done(&mut self) {
        self.send(serde_json::json!({ "command": "configurationDone" }))
            .await;
        let response = self.expect_response().await;
        assert!(response.success, "configurationDone should succeed");
    }

    pub async fn shutdown(mut self) {
        drop(self.requests_tx);
        let _ = self.engine_task.await;
    }
}

/// Wraps a blocking [`Dispatcher::add`] call in a background OS thread,
/// mirroring how a real debuggee thread would invoke the tracer hook: the
/// call may park the calling thread (via [`TraceManager::park_and_notify`])
/// until the test resumes it through a `continue`/`next`/... request.
pub fn fire_trace_event(
    dispatcher: Arc<Dispatcher>,
    event: dapper::tracer::TraceEvent,
) -> std::thread::JoinHandle<dapper::tracer::TraceAction> {
    std::thread::spawn(move || {
        use dapper::tracer::Tracer;
        dispatcher.add(event)
    })
}

pub fn frame(
    native_thread_id: u64,
    file_path: &str,
    function_name: &str,
    line: u32,
    depth: u32,
) -> dapper::tracer::FrameSnapshot {
    dapper::tracer::FrameSnapshot {
        native_thread_id,
        code_object_id: 0,
        file_path: file_path.to_string(),
        function_name: function_name.to_string(),
        line,
        depth,
    }
}

pub fn variables_reference_of(scope: &dapper::protocol::types::Scope) -> usize {
    scope.variables_reference.get()
}
