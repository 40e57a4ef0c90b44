//! Socket connection to the background runtime
//!
//! A reader task routes reply frames to pending requests and drops
//! everything else; a writer task drains outbound frames. `request`
//! awaits a correlated reply; `send` is fire-and-forget and a failed
//! send is only visible in the log.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;
use tokio::sync::mpsc;

use crate::common::prelude::*;

use super::message::{RawMessage, Request};
use super::transport::{next_request_id, ReplyRouter};

/// Handle to the runtime connection
#[derive(Clone)]
pub struct RuntimeClient {
    write_tx: mpsc::UnboundedSender<String>,
    router: Arc<ReplyRouter>,
}

impl std::fmt::Debug for RuntimeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeClient")
            .field("write_tx", &"<channel>")
            .field("router", &"<router>")
            .finish()
    }
}

impl RuntimeClient {
    /// Connect to the runtime control socket
    pub async fn connect(socket: &Path) -> Result<Self> {
        let stream = UnixStream::connect(socket)
            .await
            .map_err(|e| Error::connect(socket, e.to_string()))?;
        info!("Connected to runtime at {}", socket.display());
        Ok(Self::from_stream(stream))
    }

    /// Wrap an already-open stream (tests use an in-memory duplex)
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: AsyncRead + AsyncWrite + Send + 'static,
    {
        let (read_half, write_half) = tokio::io::split(stream);
        let (write_tx, write_rx) = mpsc::unbounded_channel::<String>();
        let router = Arc::new(ReplyRouter::new());

        tokio::spawn(write_loop(write_half, write_rx));
        tokio::spawn(read_loop(read_half, Arc::clone(&router)));

        Self { write_tx, router }
    }

    /// Send a request and await its reply.
    ///
    /// No timeout and no retry. A connection that dies while the request
    /// is pending resolves it with an error.
    pub async fn request(&self, request: Request) -> Result<Value> {
        let (id, reply_rx) = self.router.register().await;
        let frame = request.build(id);
        debug!("request #{}: {}", id, request.wire_type());

        self.write_tx
            .send(frame)
            .map_err(|_| Error::ChannelClosed)?;

        let reply = reply_rx.await.map_err(|_| Error::ChannelClosed)?;
        if reply.success {
            Ok(reply.result.unwrap_or(Value::Null))
        } else {
            Err(Error::runtime(
                reply.error.unwrap_or_else(|| "unknown runtime error".into()),
            ))
        }
    }

    /// Fire-and-forget send.
    ///
    /// Synchronous enqueue; a closed connection is logged and the message
    /// is silently lost, which is the documented contract for edits.
    pub fn send(&self, request: Request) {
        let id = next_request_id();
        let frame = request.build(id);
        debug!("send #{}: {}", id, request.wire_type());

        if self.write_tx.send(frame).is_err() {
            warn!(
                "runtime connection closed; dropped {} message",
                request.wire_type()
            );
        }
    }

    /// The reply router (exposed for connection tests)
    pub fn router(&self) -> &Arc<ReplyRouter> {
        &self.router
    }
}

async fn write_loop<W>(mut writer: W, mut write_rx: mpsc::UnboundedReceiver<String>)
where
    W: AsyncWrite + Unpin,
{
    while let Some(frame) = write_rx.recv().await {
        if let Err(e) = writer.write_all(frame.as_bytes()).await {
            warn!("write to runtime failed: {}", e);
            break;
        }
        if let Err(e) = writer.write_all(b"\n").await {
            warn!("write to runtime failed: {}", e);
            break;
        }
        if let Err(e) = writer.flush().await {
            warn!("flush to runtime failed: {}", e);
            break;
        }
    }
}

async fn read_loop<R>(reader: R, router: Arc<ReplyRouter>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match RawMessage::parse(line) {
                    Some(RawMessage::Reply { id, result, error }) => {
                        if !router.resolve(id, result, error).await {
                            debug!("unsolicited reply #{}", id);
                        }
                    }
                    Some(RawMessage::Event { event, .. }) => {
                        debug!("dropping runtime event: {}", event);
                    }
                    None => {
                        debug!("unparseable frame from runtime: {}", line);
                    }
                }
            }
            Ok(None) => {
                info!("runtime connection closed");
                break;
            }
            Err(e) => {
                warn!("read from runtime failed: {}", e);
                break;
            }
        }
    }
    router.fail_all("runtime connection closed").await;
}
