use tokio::io::{AsyncBufReadExt, AsyncWriteExt};

use crate::protocol::errors::{DeserializationError, ServerError};
use crate::protocol::message::OutgoingMessage;
use crate::protocol::requests::Request;

/// Reads one `Content-Length`-framed message off `reader` and deserializes
/// it as an incoming [`Request`].
///
/// Adapted from `dap-rs`'s `Server::accept_request` header/separator/content
/// state machine, generalized from its single-purpose `LineReader` trait to
/// any `tokio::io::AsyncBufRead`, so the same decoder serves TCP sockets,
/// Unix domain sockets, and stdin alike.
pub async fn read_message<R>(reader: &mut R) -> Result<Request, ServerError>
where
    R: AsyncBufReadExt + Unpin,
{
    let content_length = loop {
        let mut header = String::new();
        let n = reader.read_line(&mut header).await?;
        if n == 0 {
            return Err(ServerError::IoError(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "transport closed while reading header",
            )));
        }
        let trimmed = header.trim_end();
        if trimmed.is_empty() {
            // blank line separating headers from content
            continue;
        }
        let mut parts = trimmed.splitn(2, ':');
        match (parts.next(), parts.next()) {
            (Some("Content-Length"), Some(value)) => {
                break value.trim().parse::<usize>().map_err(|_| ServerError::HeaderParseError {
                    line: header.clone(),
                })?;
            }
            _ => {
                return Err(ServerError::HeaderParseError { line: header });
            }
        }
    };

    // one more blank line separates the last header from the body
    let mut sep = String::new();
    reader.read_line(&mut sep).await?;
    if sep != "\r\n" && sep != "\n" {
        return Err(ServerError::ProtocolError {
            reason: "expected blank line before message body".to_string(),
        });
    }

    let mut body = vec![0u8; content_length];
    tokio::io::AsyncReadExt::read_exact(reader, &mut body).await?;
    serde_json::from_slice(&body)
        .map_err(|e| ServerError::ParseError(DeserializationError::SerdeError(e)))
}

/// Serializes `message` with `seq` stamped in and writes it, framed with a
/// `Content-Length` header, to `writer`.
///
/// Mirrors `dap-rs`'s `StdoutWriter::write`, but writes through an arbitrary
/// `AsyncWrite` (the transport's outbound half) instead of unconditionally
/// printing to stdout, and stamps `seq`/`type` via [`OutgoingMessage::stamp`]
/// rather than relying on the caller to have set them.
pub async fn write_message<W>(
    writer: &mut W,
    message: &OutgoingMessage,
    seq: i64,
) -> Result<(), ServerError>
where
    W: AsyncWriteExt + Unpin,
{
    let value = message.stamp(seq)?;
    let payload = serde_json::to_vec(&value)
        .map_err(|e| ServerError::ParseError(DeserializationError::SerdeError(e)))?;
    let header = format!("Content-Length: {}\r\n\r\n", payload.len());
    writer.write_all(header.as_bytes()).await?;
    writer.write_all(&payload).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tokio::io::BufReader;

    #[tokio::test]
    async fn reads_a_framed_request() {
        let raw = b"Content-Length: 73\r\n\r\n{\"seq\":1,\"type\":\"request\",\"command\":\"pause\",\"arguments\":{\"threadId\":1}}";
        let mut reader = BufReader::new(Cursor::new(&raw[..]));
        let request = read_message(&mut reader).await.expect("should parse");
        assert_eq!(request.seq.get(), 1);
    }

    #[tokio::test]
    async fn rejects_truncated_header() {
        let raw = b"Content-Length: abc\r\n\r\n{}";
        let mut reader = BufReader::new(Cursor::new(&raw[..]));
        let err = read_message(&mut reader).await.unwrap_err();
        assert!(matches!(err, ServerError::HeaderParseError { .. }));
    }
}
