use super::Connection;
use crate::protocol::ServerError;

/// Named-pipe transport, `--pipe <path>` from spec.md §6.
///
/// Modeled as a Unix domain socket, the portable stand-in for Windows named
/// pipes that every example in the pack favors for local-IPC transports
/// (the corpus targets Unix-first tooling); a Windows build would swap this
/// module for `tokio::net::windows::named_pipe` behind the same `accept`
/// signature.
#[cfg(unix)]
pub struct PipeTransport;

#[cfg(unix)]
impl PipeTransport {
    pub async fn accept(path: &str) -> Result<Connection, ServerError> {
        // A stale socket file from a previous, uncleanly terminated run
        // would otherwise make bind fail with "address in use".
        let _ = std::fs::remove_file(path);
        let listener =
            tokio::net::UnixListener::bind(path).map_err(ServerError::IoError)?;
        let (stream, _addr) = listener.accept().await.map_err(ServerError::IoError)?;
        let (read_half, write_half) = stream.into_split();
        Ok(Connection::spawn(read_half, write_half))
    }
}

#[cfg(not(unix))]
pub struct PipeTransport;

#[cfg(not(unix))]
impl PipeTransport {
    pub async fn accept(_path: &str) -> Result<Connection, ServerError> {
        Err(ServerError::ProtocolError {
            reason: "named pipe transport is only available on Unix in this build".to_string(),
        })
    }
}
