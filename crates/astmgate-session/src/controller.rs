//! Session controller (C5) — owns the transport, the `Idle/Receiving/Sending`
//! flag, and multiplexes tokens from the byte framer (C1) to the receive
//! (C2) and send (C4) state machines.
//!
//! Runtime realization (per the concurrency model): a single task drives a
//! receive loop that feeds the [`StreamParser`] from the transport, racing a
//! state-dependent timeout and a [`CancellationToken`] with `tokio::select!`.
//! The send path is invoked synchronously from within this same loop
//! whenever C4 has bytes to push — there is no separate writer task.

use std::time::Duration;

use chrono::Local;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use astmgate_core::constants::{ACK, EOT, NAK, RECEIVE_NO_PROGRESS_TIMEOUT_MS, SEND_ACK_TIMEOUT_MS};
use astmgate_core::SessionState;
use astmgate_protocol::{ControlToken, MessageBuilder, ParsedRecord, StreamEvent, StreamParser, parse_message};
use astmgate_storage::Persistence;
use astmgate_transport::Transport;

use crate::error::SessionResult;
use crate::receive::{ReceiveAction, ReceiveMachine};
use crate::send::{SendMachine, SendStep};

/// Everything C5 needs from the deployment's configuration surface.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Identifier used in outbound headers and as the `machine_id` on
    /// persisted readings.
    pub machine_name: String,
    /// Enables the standalone-`STX`/`ETX` dialect (§4.4).
    pub network_ack: bool,
}

/// Drives one session to completion (until the transport closes or
/// cancellation fires).
pub struct SessionController<T, P> {
    transport: T,
    persistence: P,
    config: SessionConfig,
    parser: StreamParser,
    state: SessionState,
    receive: ReceiveMachine,
    send: SendMachine,
    cancel: CancellationToken,
}

impl<T, P> SessionController<T, P>
where
    T: Transport,
    P: Persistence,
{
    #[must_use]
    pub fn new(transport: T, persistence: P, config: SessionConfig, cancel: CancellationToken) -> Self {
        let send = SendMachine::new(config.network_ack);
        Self {
            transport,
            persistence,
            config,
            parser: StreamParser::new(),
            state: SessionState::Idle,
            receive: ReceiveMachine::new(),
            send,
            cancel,
        }
    }

    /// Current transfer direction. Exposed for diagnostics/tests.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the session loop until the transport closes or cancellation
    /// fires. Cancellation is idempotent: a second call after the loop has
    /// already returned is simply a no-op for the caller.
    pub async fn run(&mut self) -> SessionResult<()> {
        let mut buf = [0u8; 4096];

        loop {
            let timeout = self.current_timeout();

            tokio::select! {
                biased;

                () = self.cancel.cancelled() => {
                    debug!("cancellation received, forcing session to idle");
                    self.force_idle();
                    let _ = self.transport.close().await;
                    return Ok(());
                }

                () = sleep_or_pending(timeout) => {
                    self.on_timeout().await?;
                }

                read = self.transport.read(&mut buf) => {
                    match read {
                        Ok(0) => {
                            debug!("transport closed by peer");
                            let _ = self.transport.close().await;
                            return Ok(());
                        }
                        Ok(n) => {
                            self.parser.feed(&buf[..n]);
                            self.drain_events().await?;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
            }
        }
    }

    fn current_timeout(&self) -> Option<Duration> {
        match self.state {
            SessionState::Receiving => Some(Duration::from_millis(RECEIVE_NO_PROGRESS_TIMEOUT_MS)),
            SessionState::Sending => Some(Duration::from_millis(SEND_ACK_TIMEOUT_MS)),
            SessionState::Idle => None,
        }
    }

    fn force_idle(&mut self) {
        self.state = SessionState::Idle;
        self.receive = ReceiveMachine::new();
        self.send = SendMachine::new(self.config.network_ack);
        self.parser = StreamParser::new();
    }

    async fn on_timeout(&mut self) -> SessionResult<()> {
        match self.state {
            SessionState::Receiving => {
                warn!("no-progress timeout while receiving, aborting to idle");
                self.state = SessionState::Idle;
                self.receive = ReceiveMachine::new();
                Ok(())
            }
            SessionState::Sending => {
                warn!("ack timeout while sending, aborting");
                match self.send.on_timeout() {
                    SendStep::Aborted(bytes) => {
                        self.state = SessionState::Idle;
                        self.write(&bytes).await
                    }
                    _ => unreachable!("on_timeout always aborts"),
                }
            }
            SessionState::Idle => Ok(()),
        }
    }

    async fn drain_events(&mut self) -> SessionResult<()> {
        while let Some(event) = self.parser.next_event() {
            match event {
                StreamEvent::Token(token) => self.handle_token(token).await?,
                StreamEvent::Error(e) => {
                    debug!(error = %e, "frame error, replying NAK");
                    self.write(&[NAK]).await?;
                }
            }
        }
        Ok(())
    }

    async fn handle_token(&mut self, token: ControlToken) -> SessionResult<()> {
        match token {
            ControlToken::Enq => self.handle_enq().await,
            ControlToken::DataFrame(bytes) => self.handle_data_frame(&bytes).await,
            ControlToken::Eot => self.handle_eot().await,
            tok @ (ControlToken::Stx | ControlToken::Etx) => self.handle_standalone(tok).await,
            tok @ (ControlToken::Ack | ControlToken::Nak) => self.handle_send_token(tok).await,
        }
    }

    async fn handle_enq(&mut self) -> SessionResult<()> {
        match self.state {
            SessionState::Idle if self.send.is_idle() => {
                self.state = SessionState::Receiving;
                self.receive = ReceiveMachine::new();
                self.write(&[ACK]).await
            }
            _ => {
                // Already Receiving, or busy Sending (S4): refuse.
                self.write(&[NAK]).await
            }
        }
    }

    async fn handle_data_frame(&mut self, raw: &[u8]) -> SessionResult<()> {
        if self.state != SessionState::Receiving {
            return self.write(&[NAK]).await;
        }
        match self.receive.on_data_frame(raw) {
            ReceiveAction::Ack => self.write(&[ACK]).await,
            ReceiveAction::Nak => self.write(&[NAK]).await,
            ReceiveAction::AbortEot => {
                error!("three consecutive checksum failures, aborting to idle");
                self.state = SessionState::Idle;
                self.write(&[EOT]).await
            }
        }
    }

    async fn handle_standalone(&mut self, _token: ControlToken) -> SessionResult<()> {
        if self.state != SessionState::Receiving {
            return Ok(());
        }
        if let Some(ReceiveAction::Ack) = ReceiveMachine::on_standalone_control(self.config.network_ack) {
            self.write(&[ACK]).await
        } else {
            Ok(())
        }
    }

    async fn handle_eot(&mut self) -> SessionResult<()> {
        match self.state {
            SessionState::Receiving => {
                let (_, body) = self.receive.on_eot();
                self.state = SessionState::Idle;
                self.write(&[ACK]).await?;
                if let Some(body) = body {
                    self.deliver_message(&body).await?;
                }
                Ok(())
            }
            SessionState::Sending => self.handle_send_token(ControlToken::Eot).await,
            SessionState::Idle => self.write(&[ACK]).await,
        }
    }

    async fn handle_send_token(&mut self, token: ControlToken) -> SessionResult<()> {
        if self.state != SessionState::Sending {
            return Ok(());
        }
        match self.send.on_token(&token)? {
            SendStep::Write(bytes) => self.write(&bytes).await,
            SendStep::Finished(bytes) => {
                debug!("outbound message sent and acked");
                self.state = SessionState::Idle;
                self.write(&bytes).await
            }
            SendStep::Aborted(bytes) => {
                warn!("outbound message aborted");
                self.state = SessionState::Idle;
                self.write(&bytes).await
            }
        }
    }

    /// Dispatch a completed message body to the record parser (C3) and act
    /// on what it finds: persist readings, and if a query was seen, turn
    /// around with the pending orders once the receive side is closed.
    async fn deliver_message(&mut self, body: &str) -> SessionResult<()> {
        let records = parse_message(&self.config.machine_name, body);

        let mut readings = Vec::new();
        let mut query_lab_number = None;
        for record in records {
            match record {
                ParsedRecord::Reading(reading) => readings.push(reading),
                ParsedRecord::Query(query) => query_lab_number = Some(query.lab_number),
                ParsedRecord::Header | ParsedRecord::Patient | ParsedRecord::Order | ParsedRecord::Terminator => {}
            }
        }

        if !readings.is_empty() {
            self.persistence.insert_readings(readings).await?;
        }

        if let Some(lab_number) = query_lab_number {
            self.start_orders_reply(&lab_number).await?;
        }

        Ok(())
    }

    /// Fetch the pending orders and render the reply. Per the persistence
    /// error policy, a lookup failure here is best-effort: log and skip the
    /// reply rather than tear down the session over a transient DB error. A
    /// field-validation failure while rendering the message is treated the
    /// same way, since it too reflects bad data rather than a protocol
    /// fault the analyzer can do anything about.
    async fn start_orders_reply(&mut self, lab_number: &str) -> SessionResult<()> {
        let orders = match self.persistence.fetch_orders(lab_number).await {
            Ok(orders) => orders,
            Err(e) => {
                error!(error = %e, lab_number = %lab_number, "failed to fetch pending orders, skipping query reply");
                return Ok(());
            }
        };

        let records = match MessageBuilder::new(self.config.machine_name.clone())
            .orders(orders)
            .build(lab_number, Local::now())
        {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, lab_number = %lab_number, "failed to render outbound orders message, skipping query reply");
                return Ok(());
            }
        };

        self.state = SessionState::Sending;
        self.send = SendMachine::new(self.config.network_ack);
        let enq = self.send.start(records);
        self.write(&enq).await
    }

    async fn write(&mut self, bytes: &[u8]) -> SessionResult<()> {
        self.transport.write_all(bytes).await?;
        Ok(())
    }
}

async fn sleep_or_pending(duration: Option<Duration>) {
    match duration {
        Some(d) => tokio::time::sleep(d).await,
        None => std::future::pending::<()>().await,
    }
}
