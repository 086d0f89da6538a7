//! Printer adapters for sending rendered labels
//!
//! Label printers accept raw data on TCP port 9100; the payload format
//! (ZPL, ESC/POS raster, PDF) is whatever the renderer produced.

use crate::error::{LabelError, LabelResult};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};

/// Trait for label printer adapters
#[allow(async_fn_in_trait)]
pub trait LabelPrinter {
    /// Send rendered label data to the printer
    async fn print(&self, data: &[u8]) -> LabelResult<()>;

    /// Check if the printer is reachable
    async fn is_online(&self) -> bool;
}

/// Network label printer (raw TCP)
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    timeout: Duration,
}

impl NetworkPrinter {
    pub const DEFAULT_PORT: u16 = 9100;

    pub fn new(host: &str, port: u16) -> LabelResult<Self> {
        Self::from_addr(&format!("{}:{}", host, port))
    }

    /// Create from a socket address string (e.g., "192.168.1.50:9100")
    pub fn from_addr(addr: &str) -> LabelResult<Self> {
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| LabelError::InvalidConfig(format!("Invalid address: {}", addr)))?;

        Ok(Self {
            addr,
            timeout: Duration::from_secs(5),
        })
    }

    /// Set connection timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl LabelPrinter for NetworkPrinter {
    #[instrument(skip(data), fields(addr = %self.addr, data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> LabelResult<()> {
        let mut stream = tokio::time::timeout(self.timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| LabelError::Timeout(format!("Connection timeout: {}", self.addr)))?
            .map_err(|e| LabelError::Connection(format!("{}: {}", self.addr, e)))?;

        stream.write_all(data).await?;
        stream.flush().await?;

        info!("Label sent");
        Ok(())
    }

    #[instrument(fields(addr = %self.addr))]
    async fn is_online(&self) -> bool {
        match tokio::time::timeout(Duration::from_millis(500), TcpStream::connect(self.addr)).await
        {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                warn!(error = %e, "Printer offline");
                false
            }
            Err(_) => {
                warn!("Printer check timeout");
                false
            }
        }
    }
}
