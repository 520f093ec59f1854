//! TCP transport drivers: a server (role `server`, listens and accepts one
//! connection per session) and a client (role `client`, dials out).
//!
//! Grounded on the teacher's `TcpClient`/`TcpServer` connection-timeout and
//! `TCP_NODELAY` handling, stripped of Henry's per-device connection
//! registry: under this gateway's concurrency model (§5) a transport is
//! exclusive to exactly one session, so there is no multi-device routing
//! layer to carry over.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use crate::error::TransportError;
use crate::transport::Transport;

/// One TCP connection, already established, implementing [`Transport`].
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,
    peer_addr: SocketAddr,
}

impl TcpTransport {
    fn new(stream: TcpStream) -> Result<Self, TransportError> {
        if let Err(e) = stream.set_nodelay(true) {
            warn!("failed to set TCP_NODELAY: {e} — latency may be impacted");
        }
        let peer_addr = stream.peer_addr()?;
        Ok(Self { stream, peer_addr })
    }

    #[must_use]
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Dial out to `addr` (role `client`), failing if the connection isn't
    /// established within `timeout`.
    pub async fn connect(addr: SocketAddr, timeout: Duration) -> Result<Self, TransportError> {
        info!(%addr, "connecting to analyzer");
        let stream = match tokio::time::timeout(timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => return Err(TransportError::Io(e)),
            Err(_) => {
                return Err(TransportError::ConnectTimeout {
                    addr,
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
        };
        Self::new(stream)
    }
}

impl Transport for TcpTransport {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let n = self.stream.read(buf).await?;
        Ok(n)
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.stream.write_all(bytes).await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.stream.shutdown().await?;
        Ok(())
    }
}

/// Listens for inbound connections (role `server`): one connection accepted
/// at a time, each handed off as its own session's [`TcpTransport`].
#[derive(Debug)]
pub struct TcpListenerTransport {
    listener: TcpListener,
}

impl TcpListenerTransport {
    pub async fn bind(addr: SocketAddr) -> Result<Self, TransportError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|_| TransportError::BindFailed(addr))?;
        info!(%addr, "listening for analyzer connections");
        Ok(Self { listener })
    }

    /// Block until the next analyzer connects.
    pub async fn accept(&self) -> Result<TcpTransport, TransportError> {
        let (stream, addr) = self.listener.accept().await?;
        debug!(%addr, "accepted analyzer connection");
        TcpTransport::new(stream)
    }
}
