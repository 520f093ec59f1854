pub mod builder;
pub mod codec;
pub mod field;
pub mod frame;
pub mod message;
pub mod stream_parser;
pub mod token;
pub mod validation;

pub use builder::MessageBuilder;
pub use codec::GatewayCodec;
pub use field::RecordField;
pub use frame::Frame;
pub use message::{ParsedRecord, parse_message};
pub use stream_parser::{DrainEvents, StreamEvent, StreamParser};
pub use token::ControlToken;
pub use validation::{validate_field, validate_field_lengths};
