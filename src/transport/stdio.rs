use super::Connection;

/// stdio transport, `--stdio` from spec.md §6: the adapter's own stdin/stdout
/// become the framed message stream, the shape VS Code and most editors use
/// to launch a debug adapter as a child process.
pub struct StdioTransport;

impl StdioTransport {
    pub fn connect() -> Connection {
        Connection::spawn(tokio::io::stdin(), tokio::io::stdout())
    }
}
