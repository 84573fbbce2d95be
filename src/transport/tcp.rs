use tokio::net::TcpListener;

use super::Connection;
use crate::protocol::ServerError;

/// TCP listen transport: `--port` (and optional `--host`, default
/// `127.0.0.1`) from spec.md §6. Accepts exactly one connection and then
/// stops listening; a second client must start a new adapter process.
pub struct TcpTransport;

impl TcpTransport {
    pub async fn accept(host: &str, port: u16) -> Result<Connection, ServerError> {
        let listener = TcpListener::bind((host, port))
            .await
            .map_err(ServerError::IoError)?;
        let (stream, _peer) = listener.accept().await.map_err(ServerError::IoError)?;
        stream.set_nodelay(true).map_err(ServerError::IoError)?;
        let (read_half, write_half) = stream.into_split();
        Ok(Connection::spawn(read_half, write_half))
    }
}
