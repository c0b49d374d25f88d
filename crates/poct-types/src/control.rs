//! Conversation control bodies: request, escape, end of topic, terminate and
//! directive.

use chrono::{DateTime, Utc};

use crate::{
    CodedValue, DirectiveCommand, EndOfTopicCode, EscapeCode, RequestType, TerminateReason,
};

/// A request for a topic (`REQ`).
///
/// # Examples
///
/// ```
/// use poct_types::{Request, RequestType};
///
/// let request = Request::new(RequestType::Observations);
/// assert_eq!(request.type_cd.code, "ROBS");
/// assert!(Request::is_valid_code("RDEV"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Request {
    /// The requested topic (`ROBS`, `RDEV`).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_cd: CodedValue,
}

impl Request {
    /// Creates a request for a standard topic.
    pub fn new(request_type: RequestType) -> Self {
        Self {
            type_cd: request_type.into(),
        }
    }

    /// Returns true if `req_code` is a standard request code.
    pub fn is_valid_code(req_code: &str) -> bool {
        RequestType::is_valid(req_code)
    }

    /// Returns the typed request, if recognised.
    pub fn request_type(&self) -> Option<RequestType> {
        RequestType::from_code(&self.type_cd.code)
    }
}

/// Refusal or abandonment of a topic (`ESC`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Escape {
    /// Control id of the message being escaped.
    pub esc_control_id: String,
    /// Reason (`OTH`, `TOP`, `CNC`).
    pub detail: CodedValue,
    /// Free text note.
    pub note: Option<String>,
}

impl Escape {
    /// Creates an escape for the message with the given control id.
    pub fn new(esc_control_id: impl Into<String>, code: EscapeCode) -> Self {
        Self {
            esc_control_id: esc_control_id.into(),
            detail: code.into(),
            note: None,
        }
    }

    /// Returns true if `esc_code` is a standard escape code.
    pub fn is_valid_code(esc_code: &str) -> bool {
        EscapeCode::is_valid(esc_code)
    }

    /// Returns the typed escape reason, if recognised.
    pub fn code(&self) -> Option<EscapeCode> {
        EscapeCode::from_code(&self.detail.code)
    }
}

/// Close of a topic (`EOT`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EndOfTopic {
    /// Topic being closed (`EVS`, `OBS`, `OPL`, `PTL`).
    pub topic: CodedValue,
    /// Timestamp of the last update carried by the topic.
    pub update: Option<DateTime<Utc>>,
    /// Control id of the message that opened the topic.
    pub eot_control: Option<String>,
}

impl EndOfTopic {
    /// Creates an end-of-topic for a standard topic.
    pub fn new(topic: EndOfTopicCode) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    /// Returns true if `topic_code` is a standard end-of-topic code.
    pub fn is_valid_code(topic_code: &str) -> bool {
        EndOfTopicCode::is_valid(topic_code)
    }

    /// Returns the typed topic, if recognised.
    pub fn code(&self) -> Option<EndOfTopicCode> {
        EndOfTopicCode::from_code(&self.topic.code)
    }
}

/// End of a conversation (`TRM`).
///
/// # Examples
///
/// ```
/// use poct_types::{Terminate, TerminateReason};
///
/// let terminate = Terminate::new(TerminateReason::Normal);
/// assert_eq!(terminate.reason.code, "NRM");
/// assert!(!Terminate::is_valid_reason("BYE"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Terminate {
    /// Why the conversation ended (`NRM`, `ABN`, `USR`, `UNK`).
    pub reason: CodedValue,
    /// Free text note.
    pub note: Option<String>,
}

impl Terminate {
    /// Creates a terminate with a standard reason.
    pub fn new(reason: TerminateReason) -> Self {
        Self {
            reason: reason.into(),
            note: None,
        }
    }

    /// Returns true if `trm_reason` is a standard terminate reason.
    pub fn is_valid_reason(trm_reason: &str) -> bool {
        TerminateReason::is_valid(trm_reason)
    }

    /// Returns the typed reason, if recognised.
    pub fn terminate_reason(&self) -> Option<TerminateReason> {
        TerminateReason::from_code(&self.reason.code)
    }
}

/// A command sent from the data manager to the device (`DTV`).
///
/// The command defaults to [`DirectiveCommand::Unknown`], the fallback the
/// standard mandates when a command cannot be decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Directive {
    /// The command to execute.
    pub command: DirectiveCommand,
}

impl Directive {
    /// Creates a directive for the given command.
    pub fn new(command: DirectiveCommand) -> Self {
        Self { command }
    }

    /// Returns true if `command` is a standard directive code.
    pub fn is_valid_command(command: &str) -> bool {
        DirectiveCommand::is_valid(command)
    }

    /// Returns true if the command was not recognised.
    pub fn is_unknown(&self) -> bool {
        self.command == DirectiveCommand::Unknown
    }
}
