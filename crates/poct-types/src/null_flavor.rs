//! Null flavors.
//!
//! A null flavor says *why* a field carries no concrete value. It is distinct
//! from the field being absent: absence is modelled with `Option::None`, while
//! a flavored field carries a degenerate [`CodedValue`](crate::CodedValue)
//! built with [`CodedValue::null`](crate::CodedValue::null).

use crate::well_known;

/// Reason a value is missing.
///
/// # Examples
///
/// ```
/// use poct_types::NullFlavor;
///
/// assert_eq!(NullFlavor::from_code("NASK"), Some(NullFlavor::NotAsked));
/// assert_eq!(NullFlavor::Unknown.code(), "UNK");
/// assert_eq!(NullFlavor::from_code("NOT_NULL"), Some(NullFlavor::NotNull));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NullFlavor {
    /// No information.
    #[cfg_attr(feature = "serde", serde(rename = "NI"))]
    NoInformation,
    /// Not applicable.
    #[cfg_attr(feature = "serde", serde(rename = "NA"))]
    NotApplicable,
    /// Unknown.
    #[cfg_attr(feature = "serde", serde(rename = "UNK"))]
    Unknown,
    /// Not asked.
    #[cfg_attr(feature = "serde", serde(rename = "NASK"))]
    NotAsked,
    /// Asked but unknown.
    #[cfg_attr(feature = "serde", serde(rename = "ASKU"))]
    AskedUnknown,
    /// Not available.
    #[cfg_attr(feature = "serde", serde(rename = "NAV"))]
    NotAvailable,
    /// Other.
    #[cfg_attr(feature = "serde", serde(rename = "OTH"))]
    Other,
    /// Positive infinity.
    #[cfg_attr(feature = "serde", serde(rename = "PINF"))]
    PositiveInfinity,
    /// Negative infinity.
    #[cfg_attr(feature = "serde", serde(rename = "NINF"))]
    NegativeInfinity,
    /// The value is present; there is no null flavor.
    #[cfg_attr(feature = "serde", serde(rename = "NOT_NULL"))]
    NotNull,
}

impl NullFlavor {
    /// Every flavor, in data dictionary order.
    pub const ALL: [NullFlavor; 10] = [
        Self::NoInformation,
        Self::NotApplicable,
        Self::Unknown,
        Self::NotAsked,
        Self::AskedUnknown,
        Self::NotAvailable,
        Self::Other,
        Self::PositiveInfinity,
        Self::NegativeInfinity,
        Self::NotNull,
    ];

    /// Creates a NullFlavor from its wire code.
    ///
    /// Returns `None` for unrecognised codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NI" => Some(Self::NoInformation),
            "NA" => Some(Self::NotApplicable),
            "UNK" => Some(Self::Unknown),
            "NASK" => Some(Self::NotAsked),
            "ASKU" => Some(Self::AskedUnknown),
            "NAV" => Some(Self::NotAvailable),
            "OTH" => Some(Self::Other),
            "PINF" => Some(Self::PositiveInfinity),
            "NINF" => Some(Self::NegativeInfinity),
            "NOT_NULL" => Some(Self::NotNull),
            _ => None,
        }
    }

    /// Returns the wire code.
    pub fn code(self) -> &'static str {
        match self {
            Self::NoInformation => "NI",
            Self::NotApplicable => "NA",
            Self::Unknown => "UNK",
            Self::NotAsked => "NASK",
            Self::AskedUnknown => "ASKU",
            Self::NotAvailable => "NAV",
            Self::Other => "OTH",
            Self::PositiveInfinity => "PINF",
            Self::NegativeInfinity => "NINF",
            Self::NotNull => "NOT_NULL",
        }
    }

    /// Returns true for the two infinities, which stand in for unbounded
    /// interval ends rather than missing data.
    pub fn is_infinity(self) -> bool {
        matches!(self, Self::PositiveInfinity | Self::NegativeInfinity)
    }

    /// Returns the code system identifier used when a flavor is carried as a
    /// coded value.
    pub fn code_set_id() -> &'static str {
        well_known::NULL_FLAVOR_CODE_SET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_flavor_conversion() {
        for flavor in NullFlavor::ALL {
            assert_eq!(NullFlavor::from_code(flavor.code()), Some(flavor));
        }
        assert_eq!(NullFlavor::from_code("unk"), None);
        assert_eq!(NullFlavor::from_code(""), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_wire_code() {
        for flavor in NullFlavor::ALL {
            let json = serde_json::to_string(&flavor).unwrap();
            assert_eq!(json, format!("\"{}\"", flavor.code()));
        }
    }

    #[test]
    fn test_infinities() {
        assert!(NullFlavor::PositiveInfinity.is_infinity());
        assert!(NullFlavor::NegativeInfinity.is_infinity());
        assert!(!NullFlavor::Unknown.is_infinity());
    }
}
