//! Command-line overrides for the gateway's configuration surface (§6).
//! Every flag is optional: anything left unset falls through to the config
//! file, and anything the config file leaves out falls through to
//! [`crate::config::GatewayConfig::default`].

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Mode, Role};

#[derive(Debug, Parser)]
#[command(name = "astmgate", about = "ASTM E1394/LIS2-A2 gateway between an analyzer and a LIS")]
pub struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Transport: a serial line or a TCP network connection.
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Network role: accept a connection (server) or dial out (client).
    /// Ignored in serial mode.
    #[arg(long, value_enum)]
    pub role: Option<Role>,

    /// Use the standalone STX/ETX dialect instead of bare frame delimiters.
    #[arg(long)]
    pub network_ack: bool,

    /// Bind or dial address, for network mode.
    #[arg(long)]
    pub address: Option<String>,

    /// Bind or dial port, for network mode.
    #[arg(long)]
    pub port: Option<u16>,

    /// Serial device path, for serial mode.
    #[arg(long)]
    pub serial_device: Option<String>,

    /// Serial baud rate, for serial mode.
    #[arg(long)]
    pub baud: Option<u32>,

    /// Identifier used in outbound headers and persisted `machine_id` values.
    #[arg(long)]
    pub machine_name: Option<String>,

    /// Path to the SQLite database file.
    #[arg(long)]
    pub database_path: Option<String>,

    /// Increase log verbosity. Repeatable: `-v` for debug, `-vv` for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
