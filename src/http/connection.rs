use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::ServeConfig;
use crate::http::handler;
use crate::http::writer::ResponseWriter;

/// Largest message taken in a single read.
pub const BUFSIZE: usize = 8192;

/// One accepted client, owned by exactly one task.
pub struct Connection<S> {
    stream: S,
    peer: SocketAddr,
    cfg: Arc<ServeConfig>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    /// Blocked until the client sends something or the idle timeout fires.
    Waiting,
    /// A decoded message is ready to be answered.
    Reading(String),
    /// Response bytes are going out.
    Responding(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, cfg: Arc<ServeConfig>) -> Self {
        Self {
            stream,
            peer,
            cfg,
            buffer: BytesMut::with_capacity(BUFSIZE),
            state: ConnectionState::Waiting,
        }
    }

    /// Answers requests one at a time until the client goes quiet for longer
    /// than the idle timeout, closes its side, or a transport error occurs.
    ///
    /// Idle timeouts and peer closes end with `Ok`. Read/write failures and
    /// unreadable error pages end with `Err`; nothing more is sent either way.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Waiting => self.wait_for_message().await?,

                ConnectionState::Reading(message) => {
                    let response = handler::respond(&self.cfg, &message).await?;
                    debug!(status = response.status.as_u16(), "Response ready");
                    ConnectionState::Responding(ResponseWriter::new(&response))
                }

                ConnectionState::Responding(mut writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .with_context(|| format!("failed to send response to {}", self.peer))?;
                    ConnectionState::Waiting
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    async fn wait_for_message(&mut self) -> anyhow::Result<ConnectionState> {
        self.buffer.clear();
        self.buffer.reserve(BUFSIZE);

        let read = timeout(self.cfg.idle_timeout, self.stream.read_buf(&mut self.buffer)).await;

        match read {
            Err(_) => {
                info!("Timeout - closing connection");
                let _ = self.stream.shutdown().await;
                Ok(ConnectionState::Closed)
            }
            Ok(Err(e)) => {
                Err(e).with_context(|| format!("failed to read from {}", self.peer))
            }
            Ok(Ok(0)) => {
                debug!("Client closed connection");
                Ok(ConnectionState::Closed)
            }
            Ok(Ok(_)) => match std::str::from_utf8(&self.buffer) {
                Ok(text) => Ok(ConnectionState::Reading(text.to_string())),
                Err(_) => {
                    debug!("Undecodable request, closing connection");
                    Ok(ConnectionState::Closed)
                }
            },
        }
    }
}
