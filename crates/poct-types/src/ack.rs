//! Acknowledgement (`ACK`) body.

use crate::{AckType, CodedValue};

/// Numeric acknowledgement error codes (`ACK.error_detail`).
///
/// # Examples
///
/// ```
/// use poct_types::AckCode;
///
/// assert_eq!(AckCode::from_code(101), Some(AckCode::FieldMissing));
/// assert_eq!(AckCode::VersionIdNotSupported.code(), 201);
/// assert_eq!(AckCode::from_code(999), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AckCode {
    /// Success.
    Success,
    /// The message objects were not in the proper order, or required objects
    /// are missing.
    SequenceError,
    /// A required field is missing from a segment.
    FieldMissing,
    /// A message element is not of the type expected.
    DataTypeError,
    /// A code field was compared against its table and no match was found.
    ValueNotFound,
    /// The field contained data of the wrong field value.
    FieldNotSupported,
    /// The message version identifier (`HDR.version_id`) is not supported.
    VersionIdNotSupported,
    /// Catch-all for internal errors not covered by other codes.
    AppInternalError,
}

impl AckCode {
    /// Every acknowledgement code, in dictionary order.
    pub const ALL: [AckCode; 8] = [
        Self::Success,
        Self::SequenceError,
        Self::FieldMissing,
        Self::DataTypeError,
        Self::ValueNotFound,
        Self::FieldNotSupported,
        Self::VersionIdNotSupported,
        Self::AppInternalError,
    ];

    /// Creates an AckCode from its numeric value.
    ///
    /// Returns `None` if the value is not a known code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            100 => Some(Self::SequenceError),
            101 => Some(Self::FieldMissing),
            102 => Some(Self::DataTypeError),
            103 => Some(Self::ValueNotFound),
            200 => Some(Self::FieldNotSupported),
            201 => Some(Self::VersionIdNotSupported),
            202 => Some(Self::AppInternalError),
            _ => None,
        }
    }

    /// Returns the numeric value for this code.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::SequenceError => 100,
            Self::FieldMissing => 101,
            Self::DataTypeError => 102,
            Self::ValueNotFound => 103,
            Self::FieldNotSupported => 200,
            Self::VersionIdNotSupported => 201,
            Self::AppInternalError => 202,
        }
    }
}

impl From<AckCode> for CodedValue {
    fn from(code: AckCode) -> Self {
        CodedValue::new(code.code().to_string())
    }
}

/// Acknowledgement of a received message.
///
/// # Examples
///
/// ```
/// use poct_types::{Ack, CodedValue};
///
/// let ack = Ack {
///     ack_control_id: "42".to_string(),
///     type_cd: Some(CodedValue::new("AA")),
///     ..Ack::default()
/// };
///
/// assert!(Ack::is_valid_type("AA"));
/// assert!(!Ack::is_valid_code(999));
/// assert!(ack.is_accept());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Ack {
    /// Control id of the message being acknowledged.
    pub ack_control_id: String,
    /// Accept or error (`AA`/`AE`).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_cd: Option<CodedValue>,
    /// Free text note.
    pub note_txt: Option<String>,
    /// Error code, numeric, when the type is `AE`.
    pub error_detail: Option<CodedValue>,
}

impl Ack {
    /// Creates an application-accept acknowledgement.
    pub fn accept(ack_control_id: impl Into<String>) -> Self {
        Self {
            ack_control_id: ack_control_id.into(),
            type_cd: Some(AckType::ApplicationAccept.into()),
            ..Self::default()
        }
    }

    /// Creates an application-error acknowledgement with its error code.
    pub fn error(ack_control_id: impl Into<String>, code: AckCode) -> Self {
        Self {
            ack_control_id: ack_control_id.into(),
            type_cd: Some(AckType::ApplicationError.into()),
            error_detail: Some(code.into()),
            ..Self::default()
        }
    }

    /// Returns true if `ack_type` is a standard acknowledgement type.
    pub fn is_valid_type(ack_type: &str) -> bool {
        AckType::is_valid(ack_type)
    }

    /// Returns true if `ack_code` is a standard acknowledgement error code.
    pub fn is_valid_code(ack_code: i32) -> bool {
        AckCode::from_code(ack_code).is_some()
    }

    /// Returns the typed acknowledgement type, if set and recognised.
    pub fn ack_type(&self) -> Option<AckType> {
        self.type_cd
            .as_ref()
            .and_then(|cv| AckType::from_code(&cv.code))
    }

    /// Returns the typed error code, if set and recognised.
    pub fn error_code(&self) -> Option<AckCode> {
        self.error_detail
            .as_ref()
            .and_then(|cv| cv.code.trim().parse().ok())
            .and_then(AckCode::from_code)
    }

    /// Returns true if this acknowledgement accepts the message.
    pub fn is_accept(&self) -> bool {
        self.ack_type() == Some(AckType::ApplicationAccept)
    }
}
