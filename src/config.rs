//! CLI configuration surface (spec.md §6), built with `clap` derive the way
//! the corpus's own CLI binaries (`candy`'s `CandyOptions`) parse
//! subcommand/flag surfaces, layered so a flag always wins over its
//! matching env var.
//!
//! Building a [`Config`] never touches the runtime: no sockets are bound,
//! no files are opened, nothing is logged. That keeps it pure and
//! unit-testable, as SPEC_FULL.md §10.3 requires.

use clap::Parser;

use crate::transport::TransportSpec;

/// `DAPPER_LOG_LEVEL` / `DAPPER_PORT`, spec.md §6's optional env vars.
const ENV_LOG_LEVEL: &str = "DAPPER_LOG_LEVEL";
const ENV_PORT: &str = "DAPPER_PORT";

#[derive(Parser, Debug, Clone)]
#[command(name = "dapper", about = "A Debug Adapter Protocol server for a dynamic, interpreted runtime.")]
pub struct Cli {
    /// TCP listen port. Defaults to an ephemeral port (0) if neither this
    /// nor `DAPPER_PORT` is set.
    #[arg(long, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Bind host for the TCP transport.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Use a local socket (Unix domain socket / Windows named pipe) at
    /// `path` instead of TCP.
    #[arg(long, conflicts_with_all = ["port", "stdio"])]
    pub pipe: Option<String>,

    /// Use the adapter process's own stdin/stdout as the transport.
    #[arg(long, conflicts_with_all = ["port", "pipe"])]
    pub stdio: bool,

    /// `trace|debug|info|warn|error`.
    #[arg(long, env = ENV_LOG_LEVEL, default_value = "info")]
    pub log_level: String,
}

/// The adapter's fully resolved configuration: which transport to bind, and
/// at what log level.
#[derive(Debug, Clone)]
pub struct Config {
    pub transport: TransportSpec,
    pub log_level: String,
}

/// Raised when the CLI flags themselves don't make sense together, mapped
/// to exit code 2 (spec.md §6) by the binary.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log level {0:?}, expected one of trace|debug|info|warn|error")]
    InvalidLogLevel(String),
}

impl Config {
    /// Parses `argv` (as `std::env::args_os()` would hand it to `main`) into
    /// a resolved [`Config`], applying CLI > env > default precedence via
    /// `clap`'s own `env` attribute.
    pub fn from_args() -> Result<Self, ConfigError> {
        Self::from_cli(Cli::parse())
    }

    fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if !matches!(
            cli.log_level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(ConfigError::InvalidLogLevel(cli.log_level));
        }

        let transport = if cli.stdio {
            TransportSpec::Stdio
        } else if let Some(path) = cli.pipe {
            TransportSpec::Pipe { path }
        } else {
            TransportSpec::Listen {
                host: cli.host,
                port: cli.port.unwrap_or(0),
            }
        };

        Ok(Config {
            transport,
            log_level: cli.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Config {
        let cli = Cli::parse_from(std::iter::once("dapper").chain(args.iter().copied()));
        Config::from_cli(cli).expect("valid config")
    }

    #[test]
    fn defaults_to_ephemeral_tcp_on_localhost() {
        let config = parse(&[]);
        match config.transport {
            TransportSpec::Listen { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 0);
            }
            other => panic!("expected Listen, got {other:?}"),
        }
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn stdio_flag_selects_stdio_transport() {
        let config = parse(&["--stdio"]);
        assert!(matches!(config.transport, TransportSpec::Stdio));
    }

    #[test]
    fn pipe_flag_selects_pipe_transport() {
        let config = parse(&["--pipe", "/tmp/dapper.sock"]);
        match config.transport {
            TransportSpec::Pipe { path } => assert_eq!(path, "/tmp/dapper.sock"),
            other => panic!("expected Pipe, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_log_level() {
        let cli = Cli::parse_from(["dapper", "--log-level", "verbose"]);
        assert!(matches!(
            Config::from_cli(cli),
            Err(ConfigError::InvalidLogLevel(level)) if level == "verbose"
        ));
    }

    #[test]
    fn port_flag_overrides_env_precedence_is_handled_by_clap() {
        // `clap`'s own `env` attribute guarantees CLI > env; this just
        // confirms an explicit flag is honored end to end.
        let config = parse(&["--port", "5858"]);
        match config.transport {
            TransportSpec::Listen { port, .. } => assert_eq!(port, 5858),
            other => panic!("expected Listen, got {other:?}"),
        }
    }
}
