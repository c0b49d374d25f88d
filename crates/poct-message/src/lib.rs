//! # poct-message
//!
//! Message envelope, control-id sequencing and conformance checks for
//! POCT1-A.
//!
//! A [`Message<B>`](Message) binds one [`Header`](poct_types::Header) to one
//! body from `poct-types`. The body type fixes the message type, so there is
//! no way to read a body the message was not built with. [`AnyMessage`] is
//! the sum over every message type for consumers of a mixed stream.
//!
//! Outbound control ids come from a [`ControlIdSequence`] owned by the
//! caller. Inbound messages keep the sender's id.
//!
//! ## Features
//!
//! - `parallel` (default): checks batches of messages in parallel with rayon.
//! - `serde` (default): serialization of messages via serde.
//!
//! ## Usage
//!
//! ```rust
//! use poct_message::{check_message, AnyMessage, ConformanceConfig, ControlIdSequence, Message};
//! use poct_types::{Header, Terminate, TerminateReason};
//!
//! let sequence = ControlIdSequence::new();
//!
//! let mut terminate = Message::new(Terminate::new(TerminateReason::Normal));
//! terminate.set_header(&Header::default(), &sequence);
//!
//! let message = AnyMessage::from(terminate);
//! assert!(check_message(&message, &ConformanceConfig::default()).is_empty());
//! ```

#![warn(missing_docs)]

mod any;
mod conformance;
mod message;
mod sequence;
mod types;

// Re-export poct-types for convenience
pub use poct_types;

pub use any::AnyMessage;
pub use conformance::{check_batch, check_header, check_message, MessageReport};
pub use message::{
    AckMessage, DeviceEventMessage, DeviceStatusMessage, DirectiveMessage, EndOfTopicMessage,
    EscapeMessage, HelloMessage, Message, MessageBody, NonPatientObservationsMessage,
    OperatorListMessage, PatientListMessage, PatientObservationsMessage, RequestMessage,
    TerminateMessage,
};
pub use sequence::ControlIdSequence;
pub use types::{ConformanceConfig, ConformanceError, ConformanceResult};
