//! The standalone `dapper` adapter process (spec.md §6's "CLI surface").
//!
//! `dapper` the library is deliberately debuggee-agnostic (spec.md
//! explicitly keeps "the embedding of the tracer into the target runtime"
//! out of the core's scope); this binary has no real interpreter to attach
//! to. It wires the CLI surface to [`dapper::embed::start`] against
//! [`dapper::testing::StubDebuggee`] — a real, fully-functioning DAP
//! session an editor can connect to and exercise end to end, just with a
//! scripted rather than live call stack. A production embedder links
//! `dapper` as a library and calls [`dapper::embed::start`] with its own
//! [`dapper::Debuggee`] instead of building this binary.
//!
//! Grounded in `candy`'s CLI entry point (`compiler/cli/src/main.rs`):
//! parse options first, initialize the `tracing` subscriber before doing
//! anything else, map failures onto documented process exit codes.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dapper::cache::ClassificationRules;
use dapper::config::{Config, ConfigError};
use dapper::testing::StubDebuggee;

/// Exit codes per spec.md §6.
const EXIT_OK: u8 = 0;
const EXIT_INVALID_ARGS: u8 = 2;
const EXIT_INTERNAL_ERROR: u8 = 4;

fn main() -> ExitCode {
    let config = match Config::from_args() {
        Ok(config) => config,
        Err(ConfigError::InvalidLogLevel(level)) => {
            eprintln!("invalid --log-level {level:?}");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    init_logging(&config.log_level);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            return ExitCode::from(EXIT_INTERNAL_ERROR);
        }
    };

    let debuggee = Arc::new(StubDebuggee::new());
    let handle = dapper::embed::start(config.transport, debuggee, ClassificationRules::default());

    // `embed::start` hands back control as soon as its dedicated thread is
    // spawned (transport binding happens there, asynchronously); a
    // standalone process instead wants to block until interrupted, so the
    // binary's own runtime just waits on ctrl-c.
    let interrupted = runtime.block_on(tokio::signal::ctrl_c());

    dapper::embed::stop(handle);

    match interrupted {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(err) => {
            eprintln!("failed to listen for ctrl-c: {err}");
            ExitCode::from(EXIT_INTERNAL_ERROR)
        }
    }
}

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
