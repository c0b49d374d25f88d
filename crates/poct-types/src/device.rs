//! Device identity, capabilities, status and events.

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::{CodedValue, ConnectionProfileType, DeviceCondition, Severity, Topic};

/// Transport endpoint a device announces for reaching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConnectionProfile {
    /// Address of the device or its docking station.
    pub ip: String,
    /// Listening port.
    pub port: u16,
    /// Response timeout.
    pub timeout: Duration,
}

/// What a device supports (`DCP`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceStaticCapabilities {
    /// Acknowledgement profile (`CS`, `SA`, `AA`).
    pub connection_profile: Option<CodedValue>,
    /// Topics the device supports.
    pub topics_supported: Option<BTreeSet<CodedValue>>,
    /// Directives the device accepts.
    pub directives_supported: Option<BTreeSet<CodedValue>>,
    /// Largest message the device can receive, in bytes.
    pub max_message_size: Option<i32>,
}

impl DeviceStaticCapabilities {
    /// Returns true if the device announced the given topic.
    pub fn supports_topic(&self, topic: Topic) -> bool {
        self.topics_supported
            .as_ref()
            .is_some_and(|topics| topics.iter().any(|cv| cv.code == topic.code()))
    }

    /// Returns the typed connection profile, if set and recognised.
    pub fn profile_type(&self) -> Option<ConnectionProfileType> {
        self.connection_profile
            .as_ref()
            .and_then(|cv| ConnectionProfileType::from_code(&cv.code))
    }
}

/// Device identity, announced in a hello message (`DEV`).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use poct_types::{CodedValue, Device, Topic};
///
/// let mut device = Device::new("GLU-0042");
/// device.vendor_id = Some("ACME".to_string());
/// device.static_capabilities.topics_supported =
///     Some(BTreeSet::from([CodedValue::from(Topic::Observations)]));
///
/// assert!(device.static_capabilities.supports_topic(Topic::Observations));
/// assert!(!device.static_capabilities.supports_topic(Topic::PatientList));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Device {
    /// Unique device identifier.
    pub device_id: String,
    /// Vendor identifier.
    pub vendor_id: Option<String>,
    /// Model identifier.
    pub model_id: Option<String>,
    /// Serial number.
    pub serial_id: Option<String>,
    /// Manufacturer name.
    pub manufacturer_name: Option<String>,
    /// Hardware version.
    pub hw_version: Option<String>,
    /// Software version.
    pub sw_version: Option<String>,
    /// User-assigned device name.
    pub device_name: Option<String>,
    /// Vendor medical device identifier.
    pub vmd_id: Option<String>,
    /// Vendor medical device name.
    pub vmd_name: Option<String>,
    /// What the device supports.
    pub static_capabilities: DeviceStaticCapabilities,
    /// How to reach the device.
    pub connection_profile: ConnectionProfile,
}

impl Device {
    /// Creates a device with only its identifier.
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            ..Self::default()
        }
    }
}

/// Status snapshot sent by a device (`DST`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceStatus {
    /// Observations waiting to be sent.
    pub new_observations: i32,
    /// Events waiting to be sent.
    pub new_events: Option<i32>,
    /// Operating condition.
    pub condition: Option<CodedValue>,
    /// When the status was taken.
    pub status_timestamp: DateTime<Utc>,
    /// Last observations update.
    pub observations_update: Option<DateTime<Utc>>,
    /// Last events update.
    pub events_update: Option<DateTime<Utc>>,
    /// Last operator list update.
    pub operators_update: Option<DateTime<Utc>>,
    /// Last patient list update.
    pub patients_update: Option<DateTime<Utc>>,
}

impl DeviceStatus {
    /// Returns true if `condition` is a standard device condition.
    pub fn is_valid_condition(condition: &str) -> bool {
        DeviceCondition::is_valid(condition)
    }

    /// Returns the typed condition, or `Unknown` when absent or unrecognised.
    pub fn device_condition(&self) -> DeviceCondition {
        self.condition
            .as_ref()
            .map(|cv| DeviceCondition::from_code_or_unknown(&cv.code))
            .unwrap_or_default()
    }

    /// Returns true if the device has observations or events waiting.
    pub fn has_pending_data(&self) -> bool {
        self.new_observations > 0 || self.new_events.unwrap_or(0) > 0
    }
}

/// Something notable that happened on a device (`EVT`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceEvent {
    /// Free text description.
    pub description: String,
    /// When the event happened.
    pub event_dttm: DateTime<Utc>,
    /// Critical, note or warning.
    pub severity: Severity,
}
