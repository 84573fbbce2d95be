//! The Session Engine: the single-threaded DAP request/response/event state
//! machine. Owns the breakpoint registry, the cache manager, the trace
//! manager, and the session's lifecycle ([`SessionState`]), and is the only
//! writer any of them ever see.
//!
//! Grounded in candy's `debug_adapter::session::Session::run` (one task
//! `select!`ing over the client's request stream and the VM's event stream,
//! dispatching each request to a handler method that mutates `self` and
//! returns a response), generalized from candy's in-process VM to an
//! arbitrary [`Debuggee`] and from a single event stream to the two the
//! tracer produces ([`StopIntent`] and [`LogIntent`]).

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::breakpoints::{BreakpointRegistry, BreakpointSnapshot, FunctionBreakpointEntry, SourceLineBreakpoint};
use crate::cache::CacheManager;
use crate::error::{DapperError, DapperResult};
use crate::protocol::events::{
    EventBody, OutputEventBody, StoppedEventBody, TerminatedEventBody, ThreadEventBody,
};
use crate::protocol::message::OutgoingMessage;
use crate::protocol::requests::{
    CancelArguments, Command, ContinueArguments, EvaluateArguments, ExceptionInfoArguments,
    LaunchRequestArguments, NextArguments, PauseArguments, Request, RestartArguments,
    ScopesArguments, SetBreakpointsArguments, SetExceptionBreakpointsArguments,
    SetFunctionBreakpointsArguments, SetVariableArguments, StackTraceArguments, StepInArguments,
    StepOutArguments, TerminateArguments, VariablesArguments,
};
use crate::protocol::responses::{
    BreakpointLocationsResponse, ContinueResponse, EvaluateResponse, ExceptionInfoResponse,
    LoadedSourcesResponse, ModulesResponse, Response, ResponseBody, ScopesResponse,
    SetBreakpointsResponse, SetFunctionBreakpointsResponse, SetVariableResponse,
    StackTraceResponse, ThreadsResponse, VariablesResponse,
};
use crate::protocol::types::{
    Breakpoint, BreakpointLocation, Capabilities, ExceptionBreakpointsFilter, PresentationHint,
    Scope, Source, StackFrame, StoppedEventReason, Thread, ThreadEventReason, Variable,
};
use crate::protocol::ServerError;
use crate::tracer::{FrameSnapshot, LifecycleEvent, LogIntent, StopIntent, StopReason, TraceManager};

use super::arena::ReferenceArena;
use super::debuggee::{Debuggee, FrameRef};
use super::state::{StackFrameKey, VariablesKey};
use super::SessionState;

/// The Session Engine: drives one DAP client connection end to end.
pub struct SessionEngine<D: Debuggee + 'static> {
    requests: mpsc::Receiver<Result<Request, ServerError>>,
    outgoing: mpsc::Sender<OutgoingMessage>,
    stop_rx: mpsc::Receiver<StopIntent>,
    log_rx: mpsc::Receiver<LogIntent>,
    lifecycle_rx: mpsc::Receiver<LifecycleEvent>,

    debuggee: Arc<D>,
    cache: Arc<CacheManager>,
    breakpoints: Arc<BreakpointRegistry>,
    trace_manager: Arc<TraceManager>,

    state: SessionState,
    launched_via_launch: bool,

    frame_arena: ReferenceArena<StackFrameKey>,
    var_arena: ReferenceArena<VariablesKey>,

    // DAP's `setBreakpoints` replaces the breakpoints for one source at a
    // time, but the registry needs the whole picture republished on every
    // call, so the engine keeps its own canonical per-file map and rebuilds
    // the snapshot from it (plus the function/exception tables) on every
    // write.
    source_breakpoints: FxHashMap<String, Vec<SourceLineBreakpoint>>,
    function_breakpoints: Vec<FunctionBreakpointEntry>,
    exception_filters: Vec<String>,
    next_breakpoint_id: usize,

    // Cooperative cancellation flags for in-flight `evaluate` calls, keyed
    // by the evaluate request's own `seq` so a matching `cancel` can find
    // it.
    cancellations: FxHashMap<i64, Arc<AtomicBool>>,
}

impl<D: Debuggee + 'static> SessionEngine<D> {
    pub fn new(
        requests: mpsc::Receiver<Result<Request, ServerError>>,
        outgoing: mpsc::Sender<OutgoingMessage>,
        stop_rx: mpsc::Receiver<StopIntent>,
        log_rx: mpsc::Receiver<LogIntent>,
        lifecycle_rx: mpsc::Receiver<LifecycleEvent>,
        debuggee: Arc<D>,
        cache: Arc<CacheManager>,
        breakpoints: Arc<BreakpointRegistry>,
        trace_manager: Arc<TraceManager>,
    ) -> Self {
        Self {
            requests,
            outgoing,
            stop_rx,
            log_rx,
            lifecycle_rx,
            debuggee,
            cache,
            breakpoints,
            trace_manager,
            state: SessionState::Uninitialized,
            launched_via_launch: true,
            frame_arena: ReferenceArena::new(),
            var_arena: ReferenceArena::new(),
            source_breakpoints: FxHashMap::default(),
            function_breakpoints: Vec::new(),
            exception_filters: Vec::new(),
            next_breakpoint_id: 1,
            cancellations: FxHashMap::default(),
        }
    }

    /// Runs the session to completion: services requests and tracer-driven
    /// events until the client disconnects or the session terminates.
    pub async fn run(mut self) -> DapperResult<()> {
        loop {
            tokio::select! {
                biased;

                intent = self.stop_rx.recv() => {
                    match intent {
                        Some(intent) => self.handle_stop_intent(intent).await,
                        None => {
                            // Trace manager dropped, meaning the debuggee is gone.
                            break;
                        }
                    }
                }

                intent = self.log_rx.recv() => {
                    if let Some(intent) = intent {
                        self.handle_log_intent(intent).await;
                    }
                }

                event = self.lifecycle_rx.recv() => {
                    if let Some(event) = event {
                        self.handle_lifecycle_event(event).await;
                    }
                }

                request = self.requests.recv() => {
                    match request {
                        Some(Ok(request)) => {
                            self.dispatch(request).await;
                        }
                        Some(Err(err)) => {
                            warn!(%err, "dropping malformed request");
                        }
                        None => {
                            info!("transport closed, ending session");
                            self.state = SessionState::Terminated;
                        }
                    }
                }
            }

            if self.state.is_terminated() {
                break;
            }
        }
        Ok(())
    }

    async fn handle_lifecycle_event(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::ThreadStarted { native_thread_id, name } => {
                self.handle_thread_started(native_thread_id, name).await;
            }
            LifecycleEvent::ThreadExited { native_thread_id } => {
                self.handle_thread_exited(native_thread_id).await;
            }
            LifecycleEvent::Exited { exit_code } => {
                self.handle_exited(exit_code).await;
            }
        }
    }

    async fn respond(&self, response: Response) {
        if let Err(err) = self.outgoing.send(response.into()).await {
            warn!(%err, "failed to send response, client likely disconnected");
        }
    }

    async fn emit(&self, body: EventBody) {
        let event = crate::protocol::events::Event::make_event(body);
        if let Err(err) = self.outgoing.send(event.into()).await {
            warn!(%err, "failed to send event, client likely disconnected");
        }
    }

    fn error_response(&self, request: &Request, err: DapperError) -> Response {
        Response::make_error(request, &err.to_string())
    }

    fn native_thread(&self, dap_thread_id: usize) -> DapperResult<u64> {
        self.cache
            .threads
            .resolve_native(dap_thread_id as i64)
            .ok_or_else(|| DapperError::user(format!("unknown thread id {dap_thread_id}")))
    }

    async fn dispatch(&mut self, request: Request) {
        let is_initialize = matches!(request.command, Command::Initialize(_));
        let is_terminate = matches!(request.command, Command::Terminate(_));

        let response = self.handle_command(&request).await;
        let succeeded = response.success;
        self.respond(response).await;

        if succeeded && is_initialize {
            self.emit(EventBody::Initialized).await;
        }
        if succeeded && is_terminate {
            self.emit(EventBody::Terminated(None)).await;
        }
    }

    async fn handle_command(&mut self, request: &Request) -> Response {
        match request.command.clone() {
            Command::Initialize(args) => self.handle_initialize(request, &args),
            Command::Launch(args) => self.handle_launch(request, &args).await,
            Command::Attach(args) => self.handle_attach(request, &args).await,
            Command::ConfigurationDone => self.handle_configuration_done(request),
            Command::SetBreakpoints(args) => self.handle_set_breakpoints(request, &args),
            Command::SetFunctionBreakpoints(args) => {
                self.handle_set_function_breakpoints(request, &args)
            }
            Command::SetExceptionBreakpoints(args) => {
                self.handle_set_exception_breakpoints(request, &args)
            }
            Command::BreakpointLocations(args) => self.handle_breakpoint_locations(request, &args),
            Command::Threads => self.handle_threads(request),
            Command::StackTrace(args) => self.handle_stack_trace(request, &args),
            Command::Scopes(args) => self.handle_scopes(request, &args),
            Command::Variables(args) => self.handle_variables(request, &args),
            Command::SetVariable(args) => self.handle_set_variable(request, &args),
            Command::Evaluate(args) => self.handle_evaluate(request, &args),
            Command::Continue(args) => self.handle_continue(request, &args),
            Command::Next(args) => self.handle_next(request, &args),
            Command::StepIn(args) => self.handle_step_in(request, &args),
            Command::StepOut(args) => self.handle_step_out(request, &args),
            Command::Pause(args) => self.handle_pause(request, &args),
            Command::Cancel(args) => self.handle_cancel(request, &args),
            Command::ExceptionInfo(args) => self.handle_exception_info(request, &args),
            Command::Restart(args) => self.handle_restart(request, &args).await,
            Command::Disconnect(args) => self.handle_disconnect(request, &args),
            Command::Terminate(args) => self.handle_terminate(request, &args),
            Command::Modules(_args) => self.handle_modules(request),
            Command::LoadedSources => self.handle_loaded_sources(request),
            other => {
                debug!(command = ?other, "request out of scope, rejecting");
                Response::make_error(request, "unsupported request")
            }
        }
    }

    // -- lifecycle -----------------------------------------------------

    fn handle_initialize(
        &mut self,
        request: &Request,
        args: &crate::protocol::requests::InitializeArguments,
    ) -> Response {
        if !matches!(self.state, SessionState::Uninitialized) {
            return Response::make_error(request, "session already initialized");
        }

        let capabilities = Capabilities {
            supports_configuration_done_request: Some(true),
            supports_function_breakpoints: Some(true),
            supports_conditional_breakpoints: Some(true),
            supports_hit_conditional_breakpoints: Some(true),
            supports_evaluate_for_hovers: Some(true),
            supports_step_back: Some(false),
            exception_breakpoint_filters: Some(vec![
                ExceptionBreakpointsFilter {
                    filter: "raised".to_string(),
                    label: "Raised Exceptions".to_string(),
                    description: Some("Breaks whenever an exception is thrown.".to_string()),
                    default: Some(false),
                    supports_condition: Some(false),
                    condition_description: None,
                },
                ExceptionBreakpointsFilter {
                    filter: "uncaught".to_string(),
                    label: "Uncaught Exceptions".to_string(),
                    description: Some("Breaks only on exceptions that propagate past every frame.".to_string()),
                    default: Some(true),
                    supports_condition: Some(false),
                    condition_description: None,
                },
            ]),
            supports_set_variable: Some(true),
            supports_cancel_request: Some(true),
            supports_breakpoint_locations_request: Some(true),
            supports_terminate_request: Some(true),
            supports_delayed_stack_trace_loading: Some(true),
            supports_exception_options: Some(true),
            supports_exception_info_request: Some(true),
            supports_log_points: Some(true),
            supports_terminate_threads_request: Some(true),
            supports_restart_request: Some(true),
            support_terminate_debuggee: Some(true),
            ..Default::default()
        };

        self.state = SessionState::Initialized(args.clone());
        Response::make_success(request, ResponseBody::Initialize(Some(capabilities)))
    }

    async fn handle_launch(&mut self, request: &Request, args: &LaunchRequestArguments) -> Response {
        let initialize_arguments = match self.state.require_initialized() {
            Ok(init) => init.clone(),
            Err(msg) => return Response::make_error(request, msg),
        };

        if let Err(err) = self.debuggee.launch(args).await {
            return Response::make_error(request, &err.to_string());
        }

        self.launched_via_launch = true;
        self.state = SessionState::Running {
            initialize_arguments,
            launch_arguments: args.clone(),
        };

        match Response::make_ack(request) {
            Ok(response) => response,
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    async fn handle_attach(
        &mut self,
        request: &Request,
        args: &crate::protocol::requests::AttachRequestArguments,
    ) -> Response {
        let initialize_arguments = match self.state.require_initialized() {
            Ok(init) => init.clone(),
            Err(msg) => return Response::make_error(request, msg),
        };

        if let Err(err) = self.debuggee.attach(args).await {
            return Response::make_error(request, &err.to_string());
        }

        self.launched_via_launch = false;
        self.state = SessionState::Running {
            initialize_arguments,
            launch_arguments: empty_launch_arguments(),
        };

        match Response::make_ack(request) {
            Ok(response) => response,
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    fn handle_configuration_done(&mut self, request: &Request) -> Response {
        match Response::make_ack(request) {
            Ok(response) => response,
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    async fn handle_restart(&mut self, request: &Request, args: &RestartArguments) -> Response {
        self.debuggee.terminate(true);

        let initialize_arguments = match self.state.require_initialized() {
            Ok(init) => init.clone(),
            Err(msg) => return Response::make_error(request, msg),
        };

        let launch_arguments = match args {
            RestartArguments::LaunchArguments(launch_args) => {
                if let Err(err) = self.debuggee.launch(launch_args).await {
                    return Response::make_error(request, &err.to_string());
                }
                self.launched_via_launch = true;
                launch_args.clone()
            }
            RestartArguments::AttachArguments(attach_args) => {
                if let Err(err) = self.debuggee.attach(attach_args).await {
                    return Response::make_error(request, &err.to_string());
                }
                self.launched_via_launch = false;
                empty_launch_arguments()
            }
        };

        self.state = SessionState::Running {
            initialize_arguments,
            launch_arguments,
        };
        self.frame_arena.bump_generation();
        self.var_arena.bump_generation();

        match Response::make_ack(request) {
            Ok(response) => response,
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    fn handle_disconnect(
        &mut self,
        request: &Request,
        args: &crate::protocol::requests::DisconnectArguments,
    ) -> Response {
        let kill = args.terminate_debuggee.unwrap_or(self.launched_via_launch);
        if !matches!(self.state, SessionState::Uninitialized | SessionState::Initialized(_)) {
            self.debuggee.terminate(kill);
        }
        self.state = SessionState::Terminated;
        match Response::make_ack(request) {
            Ok(response) => response,
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    fn handle_terminate(&mut self, request: &Request, _args: &TerminateArguments) -> Response {
        if !matches!(self.state, SessionState::Uninitialized | SessionState::Initialized(_)) {
            self.debuggee.terminate(false);
        }
        self.state = SessionState::Terminated;
        match Response::make_ack(request) {
            Ok(response) => response,
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    // -- breakpoints -----------------------------------------------------

    fn publish_breakpoints(&mut self) {
        let mut by_file = FxHashMap::default();
        for (path, lines) in &self.source_breakpoints {
            by_file.insert(path.clone(), lines.clone());
        }

        let snapshot = BreakpointSnapshot {
            by_file,
            by_code_object: FxHashMap::default(),
            function_breakpoints: self.function_breakpoints.clone(),
            exception_filters: self.exception_filters.clone(),
        };
        self.breakpoints.publish(snapshot);
        self.cache.invalidate_breakpoint_dependent_state();
    }

    fn handle_set_breakpoints(
        &mut self,
        request: &Request,
        args: &SetBreakpointsArguments,
    ) -> Response {
        let path = match &args.source.path {
            Some(path) => path.clone(),
            None => return Response::make_error(request, "setBreakpoints requires source.path"),
        };

        let mut lines = Vec::new();
        let mut breakpoints = Vec::new();
        for source_bp in args.breakpoints.iter().flatten() {
            let id = self.next_breakpoint_id;
            self.next_breakpoint_id += 1;
            lines.push(SourceLineBreakpoint {
                id,
                line: source_bp.line,
                condition: source_bp.condition.clone(),
                hit_condition: source_bp.hit_condition.clone(),
                log_message: source_bp.log_message.clone(),
                hit_count: 0,
            });
            breakpoints.push(Breakpoint {
                id: Some(id),
                // No line-table lookup is available from `Debuggee`, so every
                // requested breakpoint is reported verified at the requested
                // line: a deliberate simplification (see DESIGN.md).
                verified: true,
                message: None,
                source: Some(args.source.clone()),
                line: Some(source_bp.line),
                column: source_bp.column,
                end_line: None,
                end_column: None,
                instruction_reference: None,
                offset: None,
            });
        }

        self.source_breakpoints.insert(path, lines);
        self.publish_breakpoints();

        Response::make_success(
            request,
            ResponseBody::SetBreakpoints(SetBreakpointsResponse { breakpoints }),
        )
    }

    fn handle_set_function_breakpoints(
        &mut self,
        request: &Request,
        args: &SetFunctionBreakpointsArguments,
    ) -> Response {
        let mut entries = Vec::new();
        let mut breakpoints = Vec::new();
        for fb in &args.breakpoints {
            let id = self.next_breakpoint_id;
            self.next_breakpoint_id += 1;
            entries.push(FunctionBreakpointEntry {
                id,
                name: fb.name.clone(),
                condition: fb.condition.clone(),
                hit_condition: fb.hit_condition.clone(),
                hit_count: 0,
            });
            breakpoints.push(Breakpoint {
                id: Some(id),
                verified: true,
                message: None,
                source: None,
                line: None,
                column: None,
                end_line: None,
                end_column: None,
                instruction_reference: None,
                offset: None,
            });
        }

        self.function_breakpoints = entries;
        self.publish_breakpoints();

        Response::make_success(
            request,
            ResponseBody::SetFunctionBreakpoints(SetFunctionBreakpointsResponse { breakpoints }),
        )
    }

    fn handle_set_exception_breakpoints(
        &mut self,
        request: &Request,
        args: &SetExceptionBreakpointsArguments,
    ) -> Response {
        self.exception_filters = args.filters.clone();
        self.publish_breakpoints();
        Response::make_success(request, ResponseBody::SetExceptionBreakpoints(None))
    }

    fn handle_breakpoint_locations(
        &self,
        request: &Request,
        args: &crate::protocol::requests::BreakpointLocationsArguments,
    ) -> Response {
        // No line-table is available to resolve a range of plausible
        // locations, so the requested line is echoed back as the sole
        // candidate (see DESIGN.md).
        Response::make_success(
            request,
            ResponseBody::BreakpointLocations(BreakpointLocationsResponse {
                breakpoints: vec![BreakpointLocation {
                    line: args.line,
                    column: args.column,
                    end_line: args.end_line,
                    end_column: args.end_column,
                }],
            }),
        )
    }

    // `modules`/`loadedSources` have no counterpart in a dynamic,
    // single-module debuggee; stubbed to empty rather than omitted so a
    // client that probes them gets a well-formed response instead of
    // "unsupported request" (see DESIGN.md).
    fn handle_modules(&self, request: &Request) -> Response {
        Response::make_success(
            request,
            ResponseBody::Modules(ModulesResponse {
                modules: Vec::new(),
                total_modules: Some(0),
            }),
        )
    }

    fn handle_loaded_sources(&self, request: &Request) -> Response {
        Response::make_success(
            request,
            ResponseBody::LoadedSources(LoadedSourcesResponse { sources: Vec::new() }),
        )
    }

    // -- threads / stack / scopes / variables ----------------------------

    fn handle_threads(&self, request: &Request) -> Response {
        let threads = self
            .cache
            .threads
            .snapshot()
            .into_iter()
            .map(|info| Thread {
                id: info.dap_thread_id as usize,
                name: info.name,
            })
            .collect();
        Response::make_success(request, ResponseBody::Threads(ThreadsResponse { threads }))
    }

    fn handle_stack_trace(&mut self, request: &Request, args: &StackTraceArguments) -> Response {
        let native = match self.native_thread(args.thread_id) {
            Ok(native) => native,
            Err(err) => return self.error_response(request, err),
        };

        let frames: Vec<FrameSnapshot> = match self.state.require_paused() {
            Ok(paused) => paused
                .frame_snapshots
                .get(&native)
                .cloned()
                .unwrap_or_default(),
            Err(msg) => return Response::make_error(request, msg),
        };

        let start = args.start_frame.unwrap_or(0);
        let levels = args.levels.filter(|&l| l > 0).unwrap_or(frames.len());
        let total_frames = frames.len() as i64;

        let stack_frames = frames
            .into_iter()
            .skip(start)
            .take(levels)
            .map(|snapshot| {
                let id = self.frame_arena.intern(StackFrameKey {
                    native_thread_id: native,
                    depth: snapshot.depth,
                });
                StackFrame {
                    id: id as usize,
                    name: snapshot.function_name,
                    source: Some(Source {
                        name: None,
                        path: Some(snapshot.file_path),
                        source_reference: None,
                        presentation_hint: PresentationHint::Normal,
                        origin: None,
                        sources: None,
                        adapter_data: None,
                        checksums: None,
                    }),
                    line: snapshot.line as usize,
                    column: 0,
                    end_line: None,
                    end_column: None,
                    can_restart: Some(false),
                    instruction_pointer_reference: None,
                    module_id: None,
                    presentation_hint: None,
                }
            })
            .collect();

        Response::make_success(
            request,
            ResponseBody::StackTrace(StackTraceResponse {
                stack_frames,
                total_frames: Some(total_frames),
            }),
        )
    }

    fn handle_scopes(&mut self, request: &Request, args: &ScopesArguments) -> Response {
        let key = match self.frame_arena.resolve(args.frame_id as i64) {
            Some(key) => key.clone(),
            None => return Response::make_error(request, "reference expired"),
        };

        let raw_scopes = self.debuggee.scopes(FrameRef {
            native_thread_id: key.native_thread_id,
            depth: key.depth,
        });

        let scopes = raw_scopes
            .into_iter()
            .map(|raw| {
                let id = self.var_arena.intern(VariablesKey::Container {
                    object_id: raw.container_id,
                });
                Scope {
                    name: raw.kind.display_name().to_string(),
                    presentation_hint: None,
                    variables_reference: NonZeroUsize::new(id as usize)
                        .expect("interned ids are always positive"),
                    named_variables: None,
                    indexed_variables: None,
                    expensive: false,
                    source: None,
                    line: None,
                    column: None,
                    end_line: None,
                    end_column: None,
                }
            })
            .collect();

        Response::make_success(request, ResponseBody::Scopes(ScopesResponse { scopes }))
    }

    fn handle_variables(&mut self, request: &Request, args: &VariablesArguments) -> Response {
        let container_id = match self.var_arena.resolve(args.variables_reference as i64) {
            Some(VariablesKey::Container { object_id }) => *object_id,
            Some(VariablesKey::Locals { .. }) => {
                return Response::make_error(request, "unsupported variables reference")
            }
            None => return Response::make_error(request, "reference expired"),
        };

        let raw_variables = self.debuggee.variables(container_id);
        let start = args.start.unwrap_or(0);
        let count = args.count.filter(|&c| c > 0).unwrap_or(raw_variables.len());

        let variables = raw_variables
            .into_iter()
            .skip(start)
            .take(count)
            .map(|raw| {
                let variables_reference = raw
                    .children
                    .map(|object_id| self.var_arena.intern(VariablesKey::Container { object_id }) as usize)
                    .unwrap_or(0);
                Variable {
                    name: raw.name,
                    value: raw.value,
                    type_field: raw.type_name,
                    presentation_hint: None,
                    evaluate_name: raw.evaluate_name,
                    variables_reference,
                    named_variables: None,
                    indexed_variables: None,
                    memory_reference: None,
                }
            })
            .collect();

        Response::make_success(request, ResponseBody::Variables(VariablesResponse { variables }))
    }

    fn handle_set_variable(&mut self, request: &Request, args: &SetVariableArguments) -> Response {
        let container_id = match self.var_arena.resolve(args.variables_reference as i64) {
            Some(VariablesKey::Container { object_id }) => *object_id,
            Some(VariablesKey::Locals { .. }) => {
                return Response::make_error(request, "unsupported variables reference")
            }
            None => return Response::make_error(request, "reference expired"),
        };

        match self.debuggee.set_variable(container_id, &args.name, &args.value) {
            Ok(outcome) => {
                let variables_reference = outcome
                    .children
                    .map(|object_id| self.var_arena.intern(VariablesKey::Container { object_id }));
                Response::make_success(
                    request,
                    ResponseBody::SetVariable(SetVariableResponse {
                        value: outcome.display,
                        type_field: outcome.type_name,
                        variables_reference,
                        named_variables: None,
                        indexed_variables: None,
                    }),
                )
            }
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    fn handle_evaluate(&mut self, request: &Request, args: &EvaluateArguments) -> Response {
        let frame = match args.frame_id {
            Some(frame_id) => match self.frame_arena.resolve(frame_id as i64) {
                Some(key) => Some(FrameRef {
                    native_thread_id: key.native_thread_id,
                    depth: key.depth,
                }),
                None => return Response::make_error(request, "reference expired"),
            },
            None => None,
        };

        let context = args
            .context
            .clone()
            .unwrap_or(crate::protocol::types::EvaluateArgumentsContext::Repl);

        let cancelled = Arc::new(AtomicBool::new(false));
        let key = request.seq.get() as i64;
        self.cancellations.insert(key, cancelled.clone());
        let outcome = self.debuggee.evaluate(frame, &args.expression, context, &cancelled);
        self.cancellations.remove(&key);

        match outcome {
            Ok(outcome) => {
                let variables_reference = outcome
                    .children
                    .map(|object_id| self.var_arena.intern(VariablesKey::Container { object_id }))
                    .unwrap_or(0);
                Response::make_success(
                    request,
                    ResponseBody::Evaluate(EvaluateResponse {
                        result: outcome.display,
                        type_field: outcome.type_name,
                        presentation_hint: None,
                        variables_reference,
                        named_variables: None,
                        indexed_variables: None,
                        memory_reference: None,
                    }),
                )
            }
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    fn handle_cancel(&mut self, request: &Request, args: &CancelArguments) -> Response {
        if let Some(request_id) = args.request_id {
            if let Some(flag) = self.cancellations.get(&(request_id as i64)) {
                flag.store(true, Ordering::SeqCst);
            }
        }
        Response {
            request_seq: request.seq.get() as i64,
            success: true,
            message: None,
            body: Some(ResponseBody::Empty),
        }
    }

    fn handle_exception_info(&mut self, request: &Request, args: &ExceptionInfoArguments) -> Response {
        let native = match self.native_thread(args.thread_id) {
            Ok(native) => native,
            Err(err) => return self.error_response(request, err),
        };

        match self.debuggee.exception_detail(native) {
            Some(detail) => Response::make_success(
                request,
                ResponseBody::ExceptionInfo(ExceptionInfoResponse {
                    exception_id: detail.exception_id,
                    description: detail.description,
                    break_mode: detail.break_mode,
                    details: detail.stack_trace.map(|stack_trace| {
                        crate::protocol::types::ExceptionDetails {
                            message: None,
                            type_name: None,
                            full_type_name: None,
                            evaluate_name: None,
                            stack_trace: Some(stack_trace),
                            inner_exception: None,
                        }
                    }),
                }),
            ),
            None => Response::make_error(request, "no exception information available for this thread"),
        }
    }

    // -- execution control ------------------------------------------------

    fn handle_continue(&mut self, request: &Request, args: &ContinueArguments) -> Response {
        let native = match self.native_thread(args.thread_id) {
            Ok(native) => native,
            Err(err) => return self.error_response(request, err),
        };

        if let Err(msg) = self.state.transition_to_running() {
            return Response::make_error(request, msg);
        }
        self.frame_arena.bump_generation();
        self.var_arena.bump_generation();
        self.trace_manager.clear_step_state(native);
        self.trace_manager.resume(native);

        Response::make_success(
            request,
            ResponseBody::Continue(ContinueResponse {
                all_threads_continued: Some(true),
            }),
        )
    }

    fn innermost_depth(&self, native: u64) -> u32 {
        self.state
            .require_paused()
            .ok()
            .and_then(|paused| paused.frame_snapshots.get(&native))
            .and_then(|frames| frames.first())
            .map(|frame| frame.depth)
            .unwrap_or(0)
    }

    fn start_step(&mut self, native: u64, mode: crate::tracer::StepMode) {
        let origin_depth = self.innermost_depth(native);
        self.trace_manager
            .set_step_state(native, crate::tracer::StepState::start(mode, origin_depth));

        if let Err(msg) = self.state.transition_to_running() {
            warn!(msg, "stepping request in an inconsistent state");
        }
        self.frame_arena.bump_generation();
        self.var_arena.bump_generation();
        self.trace_manager.resume(native);
    }

    fn handle_next(&mut self, request: &Request, args: &NextArguments) -> Response {
        let native = match self.native_thread(args.thread_id) {
            Ok(native) => native,
            Err(err) => return self.error_response(request, err),
        };
        self.start_step(native, crate::tracer::StepMode::Over);
        match Response::make_ack(request) {
            Ok(response) => response,
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    fn handle_step_in(&mut self, request: &Request, args: &StepInArguments) -> Response {
        let native = match self.native_thread(args.thread_id) {
            Ok(native) => native,
            Err(err) => return self.error_response(request, err),
        };
        self.start_step(native, crate::tracer::StepMode::Into);
        match Response::make_ack(request) {
            Ok(response) => response,
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    fn handle_step_out(&mut self, request: &Request, args: &StepOutArguments) -> Response {
        let native = match self.native_thread(args.thread_id) {
            Ok(native) => native,
            Err(err) => return self.error_response(request, err),
        };
        self.start_step(native, crate::tracer::StepMode::Out);
        match Response::make_ack(request) {
            Ok(response) => response,
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    fn handle_pause(&mut self, request: &Request, args: &PauseArguments) -> Response {
        let native = match self.native_thread(args.thread_id) {
            Ok(native) => native,
            Err(err) => return self.error_response(request, err),
        };
        self.trace_manager.request_pause(native);
        match Response::make_ack(request) {
            Ok(response) => response,
            Err(err) => Response::make_error(request, &err.to_string()),
        }
    }

    // -- tracer-driven events ---------------------------------------------

    async fn handle_stop_intent(&mut self, intent: StopIntent) {
        let mut frame_snapshots: HashMap<u64, Vec<FrameSnapshot>> = HashMap::new();
        for thread in self.cache.threads.snapshot() {
            frame_snapshots.insert(
                thread.native_thread_id,
                self.debuggee.stack_frames(thread.native_thread_id),
            );
        }
        frame_snapshots
            .entry(intent.native_thread_id)
            .or_insert_with(|| vec![intent.frame.clone()]);

        if let Err(msg) = self
            .state
            .transition_to_paused(intent.native_thread_id, frame_snapshots)
        {
            warn!(msg, "received a stop intent while not running");
            return;
        }
        self.frame_arena.bump_generation();
        self.var_arena.bump_generation();

        let thread_info = self
            .cache
            .threads
            .get_or_insert(intent.native_thread_id, || {
                format!("thread-{}", intent.native_thread_id)
            });

        let reason = match intent.reason {
            StopReason::Step => StoppedEventReason::Step,
            StopReason::Breakpoint => StoppedEventReason::Breakpoint,
            StopReason::FunctionBreakpoint => StoppedEventReason::Function,
            StopReason::Exception => StoppedEventReason::Exception,
            StopReason::Pause => StoppedEventReason::Pause,
            StopReason::Entry => StoppedEventReason::Entry,
        };

        let hit_breakpoint_ids = if matches!(intent.reason, StopReason::Breakpoint) {
            let snapshot = self.breakpoints.load();
            let ids: Vec<usize> = snapshot
                .lines_for_file(&intent.frame.file_path)
                .iter()
                .filter(|bp| bp.line as u32 == intent.frame.line)
                .map(|bp| bp.id)
                .collect();
            (!ids.is_empty()).then_some(ids)
        } else {
            None
        };

        debug!(thread = intent.native_thread_id, ?reason, "debuggee stopped");

        self.emit(EventBody::Stopped(StoppedEventBody {
            reason,
            description: None,
            thread_id: Some(thread_info.dap_thread_id as usize),
            preserve_focus_hint: None,
            text: None,
            all_threads_stopped: Some(true),
            hit_breakpoint_ids,
        }))
        .await;
    }

    async fn handle_log_intent(&mut self, intent: LogIntent) {
        self.emit(EventBody::Output(OutputEventBody {
            category: Some(crate::protocol::types::OutputEventCategory::Console),
            output: format!("{}\n", intent.message),
            group: None,
            variables_reference: None,
            source: None,
            line: None,
            column: None,
            data: None,
        }))
        .await;
    }

    /// Registers a native thread and emits a `thread` start event, driven by
    /// a [`LifecycleEvent::ThreadStarted`] the embedder reports through
    /// [`TraceManager::report_thread_started`]. Kept distinct from
    /// `stopped` handling since unlike a stop, thread lifecycle isn't driven
    /// through [`StopIntent`]/[`LogIntent`] — a running thread never parks
    /// just to be announced.
    async fn handle_thread_started(&mut self, native_thread_id: u64, name: String) {
        let info = self
            .cache
            .threads
            .get_or_insert(native_thread_id, || name);
        self.emit(EventBody::Thread(ThreadEventBody {
            reason: ThreadEventReason::Started,
            thread_id: info.dap_thread_id as usize,
        }))
        .await;
    }

    async fn handle_thread_exited(&mut self, native_thread_id: u64) {
        if let Some(info) = self.cache.threads.get(native_thread_id) {
            self.cache.threads.remove(native_thread_id);
            self.emit(EventBody::Thread(ThreadEventBody {
                reason: ThreadEventReason::Exited,
                thread_id: info.dap_thread_id as usize,
            }))
            .await;
        }
    }

    /// Driven by a [`LifecycleEvent::Exited`] the embedder reports through
    /// [`TraceManager::report_exited`] once the debuggee program has run to
    /// completion on its own (as opposed to being torn down via
    /// `disconnect`/`terminate`).
    async fn handle_exited(&mut self, exit_code: usize) {
        self.state = SessionState::Terminated;
        self.emit(EventBody::Exited(crate::protocol::events::ExitedEventBody { exit_code }))
            .await;
        self.emit(EventBody::Terminated(Some(TerminatedEventBody { restart: None })))
            .await;
    }
}

fn empty_launch_arguments() -> LaunchRequestArguments {
    LaunchRequestArguments {
        no_debug: None,
        restart_data: None,
        program: None,
        args: None,
        cwd: None,
        env: None,
    }
}
