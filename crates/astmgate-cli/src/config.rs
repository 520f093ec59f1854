//! The configuration surface (§6): transport selection, connection
//! settings, and the machine identity under which readings are tagged.
//!
//! Loaded from a TOML file and then overridden field-by-field by whatever
//! the command line supplies, following the teacher's layered
//! config-then-CLI-override convention.

use std::path::Path;

use serde::Deserialize;
use tokio_serial::{DataBits, Parity, StopBits};

use crate::cli::Args;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Serial,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Server,
    Client,
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_serial_device() -> String {
    "/dev/ttyUSB0".to_string()
}

fn default_baud() -> u32 {
    9600
}

fn default_parity() -> String {
    "N".to_string()
}

fn default_data_bits() -> u8 {
    8
}

fn default_stop_bits() -> u8 {
    1
}

fn default_machine_name() -> String {
    "ASTMGATE".to_string()
}

fn default_database_path() -> String {
    "astmgate.db".to_string()
}

/// Everything in §6's configuration surface, as loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub mode: Mode,
    pub role: Role,
    #[serde(default)]
    pub network_ack: bool,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_serial_device")]
    pub serial_device: String,
    #[serde(default = "default_baud")]
    pub baud: u32,
    #[serde(default = "default_parity")]
    pub parity: String,
    #[serde(default = "default_data_bits")]
    pub data_bits: u8,
    #[serde(default = "default_stop_bits")]
    pub stop_bits: u8,
    #[serde(default = "default_machine_name")]
    pub machine_name: String,
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Network,
            role: Role::Server,
            network_ack: false,
            address: default_address(),
            port: default_port(),
            serial_device: default_serial_device(),
            baud: default_baud(),
            parity: default_parity(),
            data_bits: default_data_bits(),
            stop_bits: default_stop_bits(),
            machine_name: default_machine_name(),
            database_path: default_database_path(),
        }
    }
}

impl GatewayConfig {
    /// Load from `path`, falling back to defaults for anything the file
    /// leaves out.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
        let config: GatewayConfig = toml::from_str(&text)
            .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Apply the command line's overrides on top of the loaded (or default)
    /// config. CLI flags win whenever present.
    pub fn apply_overrides(mut self, args: &Args) -> Self {
        if let Some(mode) = args.mode {
            self.mode = mode;
        }
        if let Some(role) = args.role {
            self.role = role;
        }
        if args.network_ack {
            self.network_ack = true;
        }
        if let Some(address) = &args.address {
            self.address = address.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(serial_device) = &args.serial_device {
            self.serial_device = serial_device.clone();
        }
        if let Some(baud) = args.baud {
            self.baud = baud;
        }
        if let Some(machine_name) = &args.machine_name {
            self.machine_name = machine_name.clone();
        }
        if let Some(database_path) = &args.database_path {
            self.database_path = database_path.clone();
        }
        self
    }

    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.address, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid address {}:{}: {e}", self.address, self.port))
    }

    pub fn serial_parity(&self) -> Parity {
        match self.parity.to_ascii_uppercase().as_str() {
            "E" => Parity::Even,
            "O" => Parity::Odd,
            _ => Parity::None,
        }
    }

    pub fn serial_data_bits(&self) -> DataBits {
        match self.data_bits {
            5 => DataBits::Five,
            6 => DataBits::Six,
            7 => DataBits::Seven,
            _ => DataBits::Eight,
        }
    }

    pub fn serial_stop_bits(&self) -> StopBits {
        match self.stop_bits {
            2 => StopBits::Two,
            _ => StopBits::One,
        }
    }
}
