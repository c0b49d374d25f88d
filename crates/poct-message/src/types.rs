//! Conformance error and configuration types.

use poct_types::AckCode;
use thiserror::Error;

/// A way in which a message departs from the data dictionary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConformanceError {
    /// A required field is empty or absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Path of the missing field, such as `HDR.control_id`.
        field: String,
    },

    /// A coded field carries a code outside its standard list.
    #[error("Invalid code '{code}' in {field}")]
    InvalidCode {
        /// Path of the field.
        field: String,
        /// The code that was found.
        code: String,
    },

    /// The header names a protocol version other than POCT1.
    #[error("Unsupported version: {version}")]
    UnsupportedVersion {
        /// The version that was found.
        version: String,
    },
}

impl ConformanceError {
    /// Returns the acknowledgement error code a data manager sends back for
    /// this violation.
    pub fn ack_code(&self) -> AckCode {
        match self {
            Self::MissingField { .. } => AckCode::FieldMissing,
            Self::InvalidCode { .. } => AckCode::ValueNotFound,
            Self::UnsupportedVersion { .. } => AckCode::VersionIdNotSupported,
        }
    }

    /// Returns the path of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } | Self::InvalidCode { field, .. } => field,
            Self::UnsupportedVersion { .. } => "HDR.version_id",
        }
    }
}

/// Result type for conformance checks.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Configuration for conformance checking.
#[derive(Debug, Clone)]
pub struct ConformanceConfig {
    /// Accept codes outside the standard list on fields the standard lets
    /// vendors extend (observation method, specimen source and type).
    pub allow_vendor_codes: bool,
    /// Report an empty `HDR.control_id`.
    pub require_control_id: bool,
    /// Report a `HDR.version_id` other than POCT1.
    pub check_version: bool,
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            allow_vendor_codes: true,
            require_control_id: true,
            check_version: true,
        }
    }
}

impl ConformanceConfig {
    /// A configuration that rejects vendor codes as well.
    pub fn strict() -> Self {
        Self {
            allow_vendor_codes: false,
            ..Self::default()
        }
    }
}
