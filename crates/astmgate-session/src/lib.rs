//! Session layer: the receive state machine (C2), the send state machine
//! (C4), and the session controller (C5) that owns the transport and
//! multiplexes between them.

pub mod controller;
pub mod error;
pub mod receive;
pub mod send;

pub use controller::{SessionConfig, SessionController};
pub use error::{SessionError, SessionResult};
pub use receive::{ReceiveAction, ReceiveMachine};
pub use send::{SendMachine, SendStep};
