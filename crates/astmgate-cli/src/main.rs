mod cli;
mod config;

use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use astmgate_session::{SessionConfig, SessionController};
use astmgate_storage::{Database, DatabaseConfig, SqlitePersistence};
use astmgate_transport::{SerialConfig, SerialTransport, TcpListenerTransport, TcpTransport};

use cli::Args;
use config::{GatewayConfig, Mode, Role};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => GatewayConfig::load(path)?,
        None => GatewayConfig::default(),
    };
    let config = config.apply_overrides(&args);

    let db = Database::new(DatabaseConfig::new(config.database_path.clone())).await?;
    let persistence = SqlitePersistence::new(db.pool().clone());

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested");
            shutdown.cancel();
        }
    });

    let session_config = SessionConfig {
        machine_name: config.machine_name.clone(),
        network_ack: config.network_ack,
    };

    match config.mode {
        Mode::Serial => run_serial(&config, session_config, persistence, cancel).await,
        Mode::Network => match config.role {
            Role::Server => run_network_server(&config, session_config, persistence, cancel).await,
            Role::Client => run_network_client(&config, session_config, persistence, cancel).await,
        },
    }
}

async fn run_serial(
    config: &GatewayConfig,
    session_config: SessionConfig,
    persistence: SqlitePersistence,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let serial_config = SerialConfig {
        device: config.serial_device.clone(),
        baud: config.baud,
        parity: config.serial_parity(),
        data_bits: config.serial_data_bits(),
        stop_bits: config.serial_stop_bits(),
    };
    let transport = SerialTransport::open(&serial_config)?;
    let mut controller = SessionController::new(transport, persistence, session_config, cancel);
    controller.run().await?;
    Ok(())
}

async fn run_network_client(
    config: &GatewayConfig,
    session_config: SessionConfig,
    persistence: SqlitePersistence,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let transport = TcpTransport::connect(addr, CONNECT_TIMEOUT).await?;
    let mut controller = SessionController::new(transport, persistence, session_config, cancel);
    controller.run().await?;
    Ok(())
}

/// Accepts one analyzer connection at a time; each gets its own session
/// running to completion before the next is accepted. A single gateway
/// process serves one analyzer per configured port (§5's concurrency model
/// is a single session at a time, not a connection pool).
async fn run_network_server(
    config: &GatewayConfig,
    session_config: SessionConfig,
    persistence: SqlitePersistence,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListenerTransport::bind(addr).await?;

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                info!("listener shutting down");
                return Ok(());
            }
            accepted = listener.accept() => {
                let transport = match accepted {
                    Ok(transport) => transport,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection, retrying");
                        continue;
                    }
                };

                let session_cancel = cancel.child_token();
                let session_config = session_config.clone();
                let persistence = persistence.clone();
                tokio::spawn(async move {
                    let mut controller = SessionController::new(transport, persistence, session_config, session_cancel);
                    if let Err(e) = controller.run().await {
                        error!(error = %e, "session ended with an error");
                    }
                });
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
