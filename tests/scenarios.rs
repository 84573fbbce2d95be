//! End-to-end scenarios against a [`Harness`]-wired [`SessionEngine`],
//! exercising spec.md §8's Testable Properties with a real
//! [`TraceManager`]/[`Dispatcher`] pair driven from background OS threads,
//! the way a real debuggee's trace hook would.

mod common;

use std::sync::Arc;

use common::{fire_trace_event, frame, variables_reference_of, Harness};
use dapper::protocol::events::EventBody;
use dapper::protocol::responses::ResponseBody;
use dapper::protocol::types::StoppedEventReason;
use dapper::session::debuggee::{RawScope, ScopeKind};
use dapper::testing::{StubFrame, StubVariable};
use dapper::tracer::{ConditionEvaluator, FrameSnapshot, TraceAction, TraceEvent};

/// Scenario A: a breakpoint stop, a `stackTrace` that reflects it, a
/// `continue` that unblocks the parked thread, and program completion
/// reported through `exited`/`terminated`.
#[tokio::test]
async fn basic_breakpoint_stop_then_continue_to_exit() {
    let mut harness = Harness::new();
    harness.boot().await;

    harness
        .send(serde_json::json!({
            "command": "setBreakpoints",
            "arguments": {
                "source": { "path": "prog.candy" },
                "breakpoints": [{ "line": 5 }],
            },
        }))
        .await;
    let response = harness.expect_response().await;
    assert!(response.success);
    let breakpoint_id = match response.body {
        Some(ResponseBody::SetBreakpoints(body)) => {
            assert_eq!(body.breakpoints.len(), 1);
            assert!(body.breakpoints[0].verified);
            body.breakpoints[0].id.expect("breakpoint carries an id")
        }
        other => panic!("expected a setBreakpoints response, got {other:?}"),
    };

    harness.configuration_done().await;

    harness.debuggee.set_frames(
        1,
        vec![StubFrame {
            file_path: "prog.candy".to_string(),
            function_name: "main".to_string(),
            line: 5,
        }],
    );

    let dispatcher = harness.dispatcher.clone();
    let parked = fire_trace_event(dispatcher, TraceEvent::Line(frame(1, "prog.candy", "main", 5, 0)));

    let event = harness.expect_event().await;
    match event {
        EventBody::Stopped(body) => {
            assert!(matches!(body.reason, StoppedEventReason::Breakpoint));
            assert_eq!(body.thread_id, Some(1));
            assert_eq!(body.hit_breakpoint_ids, Some(vec![breakpoint_id]));
        }
        other => panic!("expected a stopped event, got {other:?}"),
    }

    harness
        .send(serde_json::json!({ "command": "stackTrace", "arguments": { "threadId": 1 } }))
        .await;
    let response = harness.expect_response().await;
    assert!(response.success);
    match response.body {
        Some(ResponseBody::StackTrace(body)) => {
            assert_eq!(body.stack_frames.len(), 1);
            assert_eq!(body.stack_frames[0].line, 5);
            assert_eq!(body.stack_frames[0].name, "main");
        }
        other => panic!("expected a stackTrace response, got {other:?}"),
    }

    harness
        .send(serde_json::json!({ "command": "continue", "arguments": { "threadId": 1 } }))
        .await;
    let response = harness.expect_response().await;
    assert!(response.success);

    assert_eq!(parked.join().expect("tracer thread should not panic"), TraceAction::Stop);

    harness.trace_manager.report_exited(0);
    let event = harness.expect_event().await;
    match event {
        EventBody::Exited(body) => assert_eq!(body.exit_code, 0),
        other => panic!("expected an exited event, got {other:?}"),
    }
    let event = harness.expect_event().await;
    assert!(matches!(event, EventBody::Terminated(None)));

    harness.shutdown().await;
}

struct ScriptedEvaluator;

impl ConditionEvaluator for ScriptedEvaluator {
    fn evaluate_bool(&self, _frame: &FrameSnapshot, expression: &str) -> Result<bool, String> {
        match expression {
            "i == 3" => Ok(true),
            "i / 0" => Err("division by zero".to_string()),
            other => panic!("unexpected condition {other}"),
        }
    }
}

/// Scenario B: a conditional breakpoint whose condition is true stops the
/// thread; one whose condition raises is treated as false and reported
/// through an `output` event instead of stopping.
#[tokio::test]
async fn conditional_breakpoint_stops_only_when_true() {
    let mut harness = Harness::with_evaluator(Arc::new(ScriptedEvaluator));
    harness.boot().await;

    harness
        .send(serde_json::json!({
            "command": "setBreakpoints",
            "arguments": {
                "source": { "path": "prog.candy" },
                "breakpoints": [
                    { "line": 10, "condition": "i / 0" },
                ],
            },
        }))
        .await;
    assert!(harness.expect_response().await.success);
    harness.configuration_done().await;

    harness.debuggee.set_frames(
        1,
        vec![StubFrame {
            file_path: "prog.candy".to_string(),
            function_name: "main".to_string(),
            line: 10,
        }],
    );

    let dispatcher = harness.dispatcher.clone();
    let erroring =
        fire_trace_event(dispatcher.clone(), TraceEvent::Line(frame(1, "prog.candy", "main", 10, 0)));
    assert_eq!(
        erroring.join().expect("tracer thread should not panic"),
        TraceAction::Continue,
        "a raising condition must not stop the thread"
    );

    let event = harness.expect_event().await;
    match event {
        EventBody::Output(body) => assert!(body.output.contains("division by zero")),
        other => panic!("expected an output event reporting the condition error, got {other:?}"),
    }

    harness
        .send(serde_json::json!({
            "command": "setBreakpoints",
            "arguments": {
                "source": { "path": "prog.candy" },
                "breakpoints": [
                    { "line": 10, "condition": "i == 3" },
                ],
            },
        }))
        .await;
    assert!(harness.expect_response().await.success);

    let stopping = fire_trace_event(dispatcher, TraceEvent::Line(frame(1, "prog.candy", "main", 10, 0)));
    let event = harness.expect_event().await;
    match event {
        EventBody::Stopped(body) => assert!(matches!(body.reason, StoppedEventReason::Breakpoint)),
        other => panic!("expected a stopped event, got {other:?}"),
    }

    harness
        .send(serde_json::json!({ "command": "continue", "arguments": { "threadId": 1 } }))
        .await;
    assert!(harness.expect_response().await.success);
    assert_eq!(stopping.join().expect("tracer thread should not panic"), TraceAction::Stop);

    harness.shutdown().await;
}

/// Scenario C: `next` (step over) ignores line events from a deeper call
/// and stops once execution returns to the same depth it started from.
#[tokio::test]
async fn step_over_ignores_nested_calls() {
    let mut harness = Harness::new();
    harness.boot().await;

    harness
        .send(serde_json::json!({
            "command": "setBreakpoints",
            "arguments": {
                "source": { "path": "prog.candy" },
                "breakpoints": [{ "line": 2 }],
            },
        }))
        .await;
    assert!(harness.expect_response().await.success);
    harness.configuration_done().await;

    harness.debuggee.set_frames(
        1,
        vec![StubFrame {
            file_path: "prog.candy".to_string(),
            function_name: "main".to_string(),
            line: 2,
        }],
    );
    let dispatcher = harness.dispatcher.clone();
    let parked = fire_trace_event(dispatcher.clone(), TraceEvent::Line(frame(1, "prog.candy", "main", 2, 0)));
    assert!(matches!(harness.expect_event().await, EventBody::Stopped(_)));

    harness
        .send(serde_json::json!({ "command": "next", "arguments": { "threadId": 1 } }))
        .await;
    assert!(harness.expect_response().await.success);
    assert_eq!(parked.join().expect("tracer thread should not panic"), TraceAction::Stop);

    // A line inside a call the step started in: must not stop.
    let nested = fire_trace_event(
        dispatcher.clone(),
        TraceEvent::Line(frame(1, "prog.candy", "helper", 1, 1)),
    );
    assert_eq!(
        nested.join().expect("tracer thread should not panic"),
        TraceAction::Continue,
        "stepping over must not stop inside a deeper call"
    );

    // Back at the origin depth, on the next line: must stop.
    harness.debuggee.set_frames(
        1,
        vec![StubFrame {
            file_path: "prog.candy".to_string(),
            function_name: "main".to_string(),
            line: 3,
        }],
    );
    let landed = fire_trace_event(dispatcher, TraceEvent::Line(frame(1, "prog.candy", "main", 3, 0)));
    match harness.expect_event().await {
        EventBody::Stopped(body) => assert!(matches!(body.reason, StoppedEventReason::Step)),
        other => panic!("expected a step-stopped event, got {other:?}"),
    }

    harness
        .send(serde_json::json!({ "command": "stackTrace", "arguments": { "threadId": 1 } }))
        .await;
    match harness.expect_response().await.body {
        Some(ResponseBody::StackTrace(body)) => {
            assert_eq!(body.stack_frames.len(), 1);
            assert_eq!(body.stack_frames[0].line, 3);
        }
        other => panic!("expected a stackTrace response, got {other:?}"),
    }

    harness
        .send(serde_json::json!({ "command": "continue", "arguments": { "threadId": 1 } }))
        .await;
    assert!(harness.expect_response().await.success);
    assert_eq!(landed.join().expect("tracer thread should not panic"), TraceAction::Stop);

    harness.shutdown().await;
}

/// Scenario D: `scopes` -> `variables` -> `setVariable` -> `variables`
/// round-trips a value change through the debuggee double.
#[tokio::test]
async fn set_variable_round_trips_through_scopes_and_variables() {
    let mut harness = Harness::new();
    harness.boot().await;
    harness
        .send(serde_json::json!({
            "command": "setBreakpoints",
            "arguments": {
                "source": { "path": "prog.candy" },
                "breakpoints": [{ "line": 5 }],
            },
        }))
        .await;
    assert!(harness.expect_response().await.success);
    harness.configuration_done().await;

    harness.debuggee.set_frames(
        1,
        vec![StubFrame {
            file_path: "prog.candy".to_string(),
            function_name: "main".to_string(),
            line: 5,
        }],
    );
    harness.debuggee.set_scopes(
        1,
        0,
        vec![RawScope {
            kind: ScopeKind::Locals,
            container_id: 42,
        }],
    );
    harness.debuggee.set_container(
        42,
        vec![StubVariable {
            name: "x".to_string(),
            value: "10".to_string(),
            type_name: Some("Int".to_string()),
            children: None,
        }],
    );

    let dispatcher = harness.dispatcher.clone();
    let parked = fire_trace_event(dispatcher, TraceEvent::Line(frame(1, "prog.candy", "main", 5, 0)));
    assert!(matches!(harness.expect_event().await, EventBody::Stopped(_)));

    harness
        .send(serde_json::json!({ "command": "stackTrace", "arguments": { "threadId": 1 } }))
        .await;
    let frame_id = match harness.expect_response().await.body {
        Some(ResponseBody::StackTrace(body)) => body.stack_frames[0].id,
        other => panic!("expected a stackTrace response, got {other:?}"),
    };

    harness
        .send(serde_json::json!({ "command": "scopes", "arguments": { "frameId": frame_id } }))
        .await;
    let variables_reference = match harness.expect_response().await.body {
        Some(ResponseBody::Scopes(body)) => {
            assert_eq!(body.scopes.len(), 1);
            assert_eq!(body.scopes[0].name, "Locals");
            variables_reference_of(&body.scopes[0])
        }
        other => panic!("expected a scopes response, got {other:?}"),
    };

    harness
        .send(serde_json::json!({
            "command": "variables",
            "arguments": { "variablesReference": variables_reference },
        }))
        .await;
    match harness.expect_response().await.body {
        Some(ResponseBody::Variables(body)) => {
            assert_eq!(body.variables.len(), 1);
            assert_eq!(body.variables[0].name, "x");
            assert_eq!(body.variables[0].value, "10");
        }
        other => panic!("expected a variables response, got {other:?}"),
    }

    harness
        .send(serde_json::json!({
            "command": "setVariable",
            "arguments": { "variablesReference": variables_reference, "name": "x", "value": "42" },
        }))
        .await;
    match harness.expect_response().await.body {
        Some(ResponseBody::SetVariable(body)) => assert_eq!(body.value, "42"),
        other => panic!("expected a setVariable response, got {other:?}"),
    }

    harness
        .send(serde_json::json!({
            "command": "variables",
            "arguments": { "variablesReference": variables_reference },
        }))
        .await;
    match harness.expect_response().await.body {
        Some(ResponseBody::Variables(body)) => assert_eq!(body.variables[0].value, "42"),
        other => panic!("expected a variables response, got {other:?}"),
    }

    harness
        .send(serde_json::json!({ "command": "continue", "arguments": { "threadId": 1 } }))
        .await;
    assert!(harness.expect_response().await.success);
    assert_eq!(parked.join().expect("tracer thread should not panic"), TraceAction::Stop);

    harness.shutdown().await;
}

/// Scenario E: a `variablesReference` handed out while paused expires the
/// moment the thread resumes (the generation-stamped arena is bumped by
/// `continue`), so a late `variables` call reports "reference expired"
/// rather than serving stale data.
#[tokio::test]
async fn variables_reference_expires_after_resume() {
    let mut harness = Harness::new();
    harness.boot().await;
    harness
        .send(serde_json::json!({
            "command": "setBreakpoints",
            "arguments": { "source": { "path": "prog.candy" }, "breakpoints": [{ "line": 5 }] },
        }))
        .await;
    assert!(harness.expect_response().await.success);
    harness.configuration_done().await;

    harness.debuggee.set_frames(
        1,
        vec![StubFrame {
            file_path: "prog.candy".to_string(),
            function_name: "main".to_string(),
            line: 5,
        }],
    );
    harness
        .debuggee
        .set_scopes(1, 0, vec![RawScope { kind: ScopeKind::Locals, container_id: 1 }]);
    harness.debuggee.set_container(1, vec![]);

    let dispatcher = harness.dispatcher.clone();
    let parked = fire_trace_event(dispatcher, TraceEvent::Line(frame(1, "prog.candy", "main", 5, 0)));
    assert!(matches!(harness.expect_event().await, EventBody::Stopped(_)));

    harness
        .send(serde_json::json!({ "command": "stackTrace", "arguments": { "threadId": 1 } }))
        .await;
    let frame_id = match harness.expect_response().await.body {
        Some(ResponseBody::StackTrace(body)) => body.stack_frames[0].id,
        other => panic!("expected a stackTrace response, got {other:?}"),
    };
    harness
        .send(serde_json::json!({ "command": "scopes", "arguments": { "frameId": frame_id } }))
        .await;
    let stale_reference = match harness.expect_response().await.body {
        Some(ResponseBody::Scopes(body)) => variables_reference_of(&body.scopes[0]),
        other => panic!("expected a scopes response, got {other:?}"),
    };

    harness
        .send(serde_json::json!({ "command": "continue", "arguments": { "threadId": 1 } }))
        .await;
    assert!(harness.expect_response().await.success);
    assert_eq!(parked.join().expect("tracer thread should not panic"), TraceAction::Stop);

    harness
        .send(serde_json::json!({
            "command": "variables",
            "arguments": { "variablesReference": stale_reference },
        }))
        .await;
    let response = harness.expect_response().await;
    assert!(!response.success);
    match response.message {
        Some(dapper::protocol::responses::ResponseMessage::Error(message)) => {
            assert_eq!(message, "reference expired");
        }
        other => panic!("expected an error message, got {other:?}"),
    }

    harness.shutdown().await;
}

/// Scenario F: `pause` forces a stop on the next line event even when no
/// breakpoint or step is active.
#[tokio::test]
async fn pause_forces_a_stop_with_no_breakpoints() {
    let mut harness = Harness::new();
    harness.boot().await;
    harness.configuration_done().await;

    // `pause` addresses a thread by its DAP id, which is only assigned once
    // the engine has seen the native thread at least once; register it via
    // the lifecycle channel the way a real embedder would on thread start.
    harness.trace_manager.report_thread_started(1, "main");
    assert!(matches!(harness.expect_event().await, EventBody::Thread(_)));

    harness.debuggee.set_frames(
        1,
        vec![StubFrame {
            file_path: "prog.candy".to_string(),
            function_name: "main".to_string(),
            line: 1,
        }],
    );

    harness
        .send(serde_json::json!({ "command": "pause", "arguments": { "threadId": 1 } }))
        .await;
    assert!(harness.expect_response().await.success);

    let dispatcher = harness.dispatcher.clone();
    let parked = fire_trace_event(dispatcher, TraceEvent::Line(frame(1, "prog.candy", "main", 1, 0)));
    match harness.expect_event().await {
        EventBody::Stopped(body) => assert!(matches!(body.reason, StoppedEventReason::Pause)),
        other => panic!("expected a paused-stopped event, got {other:?}"),
    }

    harness
        .send(serde_json::json!({ "command": "continue", "arguments": { "threadId": 1 } }))
        .await;
    assert!(harness.expect_response().await.success);
    assert_eq!(parked.join().expect("tracer thread should not panic"), TraceAction::Stop);

    harness.shutdown().await;
}

/// Property: replacing a file's breakpoints is idempotent and immediate —
/// the old line no longer stops execution once a second `setBreakpoints`
/// call for the same source has been acknowledged.
#[tokio::test]
async fn replacing_breakpoints_for_a_source_drops_the_old_ones() {
    let mut harness = Harness::new();
    harness.boot().await;

    harness
        .send(serde_json::json!({
            "command": "setBreakpoints",
            "arguments": { "source": { "path": "prog.candy" }, "breakpoints": [{ "line": 2 }] },
        }))
        .await;
    assert!(harness.expect_response().await.success);
    harness
        .send(serde_json::json!({
            "command": "setBreakpoints",
            "arguments": { "source": { "path": "prog.candy" }, "breakpoints": [{ "line": 7 }] },
        }))
        .await;
    assert!(harness.expect_response().await.success);
    harness.configuration_done().await;

    let dispatcher = harness.dispatcher.clone();
    use dapper::tracer::Tracer;
    let old_line = dispatcher.add(TraceEvent::Line(frame(1, "prog.candy", "main", 2, 0)));
    assert_eq!(old_line, TraceAction::Continue, "the replaced breakpoint must no longer fire");

    harness.debuggee.set_frames(
        1,
        vec![StubFrame {
            file_path: "prog.candy".to_string(),
            function_name: "main".to_string(),
            line: 7,
        }],
    );
    let parked = fire_trace_event(dispatcher, TraceEvent::Line(frame(1, "prog.candy", "main", 7, 0)));
    match harness.expect_event().await {
        EventBody::Stopped(body) => assert!(matches!(body.reason, StoppedEventReason::Breakpoint)),
        other => panic!("expected a stopped event, got {other:?}"),
    }

    harness
        .send(serde_json::json!({ "command": "continue", "arguments": { "threadId": 1 } }))
        .await;
    assert!(harness.expect_response().await.success);
    assert_eq!(parked.join().expect("tracer thread should not panic"), TraceAction::Stop);

    harness.shutdown().await;
}

/// Tie-break (spec.md §4.4): a breakpoint whose condition evaluates true
/// takes precedence over an in-progress step's own stop, on the same line
/// event — the stop is reported as `breakpoint` (with the hit id attached),
/// not `step`.
#[tokio::test]
async fn conditional_breakpoint_wins_tie_break_over_an_active_step() {
    let mut harness = Harness::with_evaluator(Arc::new(ScriptedEvaluator));
    harness.boot().await;

    harness
        .send(serde_json::json!({
            "command": "setBreakpoints",
            "arguments": {
                "source": { "path": "prog.candy" },
                "breakpoints": [{ "line": 3, "condition": "i == 3" }],
            },
        }))
        .await;
    let response = harness.expect_response().await;
    assert!(response.success);
    let breakpoint_id = match response.body {
        Some(ResponseBody::SetBreakpoints(body)) => body.breakpoints[0].id.expect("has an id"),
        other => panic!("expected a setBreakpoints response, got {other:?}"),
    };
    harness.configuration_done().await;

    harness.debuggee.set_frames(
        1,
        vec![StubFrame {
            file_path: "prog.candy".to_string(),
            function_name: "main".to_string(),
            line: 2,
        }],
    );
    let dispatcher = harness.dispatcher.clone();
    let parked = fire_trace_event(dispatcher.clone(), TraceEvent::Line(frame(1, "prog.candy", "main", 2, 0)));
    assert!(matches!(harness.expect_event().await, EventBody::Stopped(_)));

    // Start a step-over from line 2; its own target is "any line at this
    // depth", which line 3 (carrying the true-condition breakpoint) also
    // satisfies. The breakpoint must claim the stop.
    harness
        .send(serde_json::json!({ "command": "next", "arguments": { "threadId": 1 } }))
        .await;
    assert!(harness.expect_response().await.success);
    assert_eq!(parked.join().expect("tracer thread should not panic"), TraceAction::Stop);

    harness.debuggee.set_frames(
        1,
        vec![StubFrame {
            file_path: "prog.candy".to_string(),
            function_name: "main".to_string(),
            line: 3,
        }],
    );
    let landed = fire_trace_event(dispatcher, TraceEvent::Line(frame(1, "prog.candy", "main", 3, 0)));
    match harness.expect_event().await {
        EventBody::Stopped(body) => {
            assert!(
                matches!(body.reason, StoppedEventReason::Breakpoint),
                "a true-condition breakpoint must win the tie-break over the step, got {:?}",
                body.reason
            );
            assert_eq!(body.hit_breakpoint_ids, Some(vec![breakpoint_id]));
        }
        other => panic!("expected a stopped event, got {other:?}"),
    }

    harness
        .send(serde_json::json!({ "command": "continue", "arguments": { "threadId": 1 } }))
        .await;
    assert!(harness.expect_response().await.success);
    assert_eq!(landed.join().expect("tracer thread should not panic"), TraceAction::Stop);

    harness.shutdown().await;
}

/// Property: with no breakpoints, no stepping, and no pause pending, the
/// dispatcher's hot path never produces a [`StopIntent`](dapper::tracer::StopIntent)
/// — confirming the "skip" classification short-circuits before anything
/// would park the calling thread.
#[tokio::test]
async fn uninteresting_frames_never_park_the_thread() {
    let harness = Harness::new();

    use dapper::tracer::Tracer;
    let action = harness
        .dispatcher
        .add(TraceEvent::Line(frame(1, "prog.candy", "main", 100, 0)));
    assert_eq!(action, TraceAction::Continue);

    harness.shutdown().await;
}
