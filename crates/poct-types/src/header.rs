//! Message header (`HDR`) and message type codes.

use chrono::{DateTime, Utc};

use crate::code_set::code_set;
use crate::{well_known, CodedValue};

code_set! {
    /// Message type carried in `HDR.message_type`.
    pub enum MessageType {
        /// Request.
        Request => "REQ.R01",
        /// Acknowledgement.
        Ack => "ACK.R01",
        /// Hello.
        Hello => "HEL.R01",
        /// Patient observations.
        PatientObservations => "OBS.R01",
        /// Non-patient observations (QC, calibration, proficiency).
        NonPatientObservations => "OBS.R02",
        /// Device events.
        DeviceEvents => "EVS.R01",
        /// Device status.
        DeviceStatus => "DST.R01",
        /// Basic directive.
        BasicDirective => "DTV.R01",
        /// Complex directive.
        ComplexDirective => "DTV.R02",
        /// Vendor-specific directive.
        VendorDirective => "DTV.VENDOR",
        /// Operator list, complete.
        OperatorList => "OPL.R01",
        /// Operator list, incremental.
        OperatorListIncremental => "OPL.R02",
        /// Patient list, complete.
        PatientList => "PTL.R01",
        /// Patient list, incremental.
        PatientListIncremental => "PTL.R02",
        /// End of topic.
        EndOfTopic => "EOT.R01",
        /// Escape.
        Escape => "ESC.R01",
        /// Terminate.
        Terminate => "END.R01",
    }
}

impl MessageType {
    /// Classifies a wire message type, mapping every vendor directive
    /// (`DTV.<vendor>`) onto [`MessageType::VendorDirective`].
    ///
    /// # Examples
    ///
    /// ```
    /// use poct_types::MessageType;
    ///
    /// assert_eq!(MessageType::classify("OBS.R02"), Some(MessageType::NonPatientObservations));
    /// assert_eq!(MessageType::classify("DTV.ACME_SELFTEST"), Some(MessageType::VendorDirective));
    /// assert_eq!(MessageType::classify("XYZ.R01"), None);
    /// ```
    pub fn classify(code: &str) -> Option<Self> {
        Self::from_code(code).or_else(|| {
            code.strip_prefix(well_known::VENDOR_DIRECTIVE_PREFIX)
                .filter(|vendor| !vendor.is_empty())
                .map(|_| Self::VendorDirective)
        })
    }

    /// Returns true for the two observation message types.
    pub fn is_observations(self) -> bool {
        matches!(self, Self::PatientObservations | Self::NonPatientObservations)
    }

    /// Returns the topic-closing code that ends a conversation about this
    /// message type, if the type belongs to a topic.
    pub fn end_of_topic(self) -> Option<crate::EndOfTopicCode> {
        use crate::EndOfTopicCode;
        match self {
            Self::PatientObservations | Self::NonPatientObservations => {
                Some(EndOfTopicCode::Observations)
            }
            Self::DeviceEvents => Some(EndOfTopicCode::DeviceEvents),
            Self::OperatorList | Self::OperatorListIncremental => {
                Some(EndOfTopicCode::OperatorList)
            }
            Self::PatientList | Self::PatientListIncremental => Some(EndOfTopicCode::PatientList),
            _ => None,
        }
    }
}

/// Identity, sequencing and versioning shared by every message (`HDR`).
///
/// # Examples
///
/// ```
/// use poct_types::Header;
///
/// let header = Header::default();
/// assert_eq!(header.version_id, "POCT1");
/// assert!(header.control_id.is_empty());
/// assert!(header.message_type.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Header {
    /// Identifies the message within a conversation.
    pub control_id: String,
    /// Protocol version, always `POCT1`.
    pub version_id: String,
    /// When the message was created.
    pub creation_dttm: DateTime<Utc>,
    /// The message type as sent on the wire.
    pub message_type: Option<CodedValue>,
    /// Encoding characters used by the sender.
    pub encoding_chars: Option<String>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            control_id: String::new(),
            version_id: well_known::POCT1_VERSION_ID.to_string(),
            creation_dttm: Utc::now(),
            message_type: None,
            encoding_chars: None,
        }
    }
}

impl Header {
    /// Creates a header stamped with the given creation time.
    pub fn new(creation_dttm: DateTime<Utc>) -> Self {
        Self {
            creation_dttm,
            ..Self::default()
        }
    }

    /// Sets the wire message type.
    pub fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = Some(message_type.into());
        self
    }

    /// Returns the typed message type, if the header carries a known one.
    pub fn parsed_message_type(&self) -> Option<MessageType> {
        self.message_type
            .as_ref()
            .and_then(|cv| MessageType::classify(&cv.code))
    }

    /// Returns true if the version is the one this model speaks.
    pub fn is_supported_version(&self) -> bool {
        self.version_id == well_known::POCT1_VERSION_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_type_codes() {
        assert_eq!(MessageType::Hello.code(), "HEL.R01");
        assert_eq!(MessageType::from_code("END.R01"), Some(MessageType::Terminate));
        assert_eq!(MessageType::from_code("DTV.ACME"), None);
        assert_eq!(MessageType::classify("DTV."), None);
    }

    #[test]
    fn test_end_of_topic_mapping() {
        use crate::EndOfTopicCode;
        assert_eq!(
            MessageType::OperatorListIncremental.end_of_topic(),
            Some(EndOfTopicCode::OperatorList)
        );
        assert_eq!(MessageType::Ack.end_of_topic(), None);
    }

    #[test]
    fn test_header_message_type_round_trip() {
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let header = Header::new(when).with_message_type(MessageType::DeviceStatus);
        assert_eq!(header.creation_dttm, when);
        assert_eq!(header.parsed_message_type(), Some(MessageType::DeviceStatus));
        assert!(header.is_supported_version());
    }

    #[test]
    fn test_unsupported_version() {
        let header = Header {
            version_id: "POCT2".to_string(),
            ..Header::default()
        };
        assert!(!header.is_supported_version());
    }
}
