//! Well-known POCT1-A constants.
//!
//! # Examples
//!
//! ```
//! use poct_types::{well_known, Header};
//!
//! assert_eq!(Header::default().version_id, well_known::POCT1_VERSION_ID);
//! ```

// =============================================================================
// Protocol
// =============================================================================

/// Protocol version carried in every header (`HDR.version_id`).
pub const POCT1_VERSION_ID: &str = "POCT1";

/// Prefix shared by the vendor-specific directive message types.
pub const VENDOR_DIRECTIVE_PREFIX: &str = "DTV.";

// =============================================================================
// Code systems
// =============================================================================

/// Code system identifier for coded values that carry a null flavor.
pub const NULL_FLAVOR_CODE_SET: &str = "NullFlavor";

/// LOINC, the usual code system for observation identifiers.
pub const LOINC_CODE_SET: &str = "LN";

/// Unified Code for Units of Measure.
pub const UCUM_CODE_SET: &str = "UCUM";
