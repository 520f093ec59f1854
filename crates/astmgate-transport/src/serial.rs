//! Serial port transport driver (`mode: serial`).
//!
//! Most analyzers still speak ASTM over RS-232. `SerialTransport` configures
//! a [`tokio_serial::SerialStream`] from the configuration surface (§6):
//! `serial_device`, `baud`, `parity`, `data_bits`, `stop_bits`.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_serial::{DataBits, Parity, SerialPortBuilderExt, SerialStream, StopBits};
use tracing::info;

use crate::error::TransportError;
use crate::transport::Transport;

/// Serial line configuration (§6 configuration surface).
#[derive(Debug, Clone)]
pub struct SerialConfig {
    pub device: String,
    pub baud: u32,
    pub parity: Parity,
    pub data_bits: DataBits,
    pub stop_bits: StopBits,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            device: "/dev/ttyUSB0".to_string(),
            baud: 9600,
            parity: Parity::None,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::One,
        }
    }
}

#[derive(Debug)]
pub struct SerialTransport {
    port: SerialStream,
}

impl SerialTransport {
    pub fn open(config: &SerialConfig) -> Result<Self, TransportError> {
        info!(device = %config.device, baud = config.baud, "opening serial port");
        let port = tokio_serial::new(&config.device, config.baud)
            .parity(config.parity)
            .data_bits(config.data_bits)
            .stop_bits(config.stop_bits)
            .timeout(Duration::from_millis(100))
            .open_native_async()?;
        Ok(Self { port })
    }
}

impl Transport for SerialTransport {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let n = self.port.read(buf).await?;
        Ok(n)
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.port.write_all(bytes).await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        // Serial ports have no explicit shutdown handshake; dropping closes
        // the file descriptor.
        Ok(())
    }
}
