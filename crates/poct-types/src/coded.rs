//! Coded values (`CV`) and extensible coded values (`CE`).

use std::cmp::Ordering;
use std::fmt;

use crate::NullFlavor;

/// A value drawn from a controlled vocabulary (`CV`).
///
/// Equality is structural over every field. Ordering compares `code` first so
/// that coded values sort by code in ordered sets such as the topic list of a
/// device's static capabilities; the remaining fields only break ties.
///
/// # Examples
///
/// ```
/// use poct_types::CodedValue;
///
/// let glucose = CodedValue::new("GLU").with_display_name("Glucose");
/// let sodium = CodedValue::new("NA");
///
/// assert!(glucose < sodium);
/// assert_ne!(glucose, CodedValue::new("GLU"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodedValue {
    /// The code itself.
    pub code: String,
    /// Human-readable text for the code.
    pub display_name: Option<String>,
    /// Identifier of the code system the code comes from.
    pub code_set_id: Option<String>,
    /// Name of the code system.
    pub code_set_name: Option<String>,
    /// Version of the code system.
    pub code_set_version: Option<String>,
}

/// Short alias matching the data dictionary name.
pub type Cv = CodedValue;

impl CodedValue {
    /// Creates a coded value carrying only a code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Creates the degenerate coded value that carries a null flavor.
    pub fn null(flavor: NullFlavor) -> Self {
        Self {
            code: flavor.code().to_string(),
            code_set_id: Some(NullFlavor::code_set_id().to_string()),
            ..Self::default()
        }
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the code system identifier.
    pub fn with_code_set(mut self, code_set_id: impl Into<String>) -> Self {
        self.code_set_id = Some(code_set_id.into());
        self
    }

    /// Returns the null flavor this value stands for, if it is one.
    pub fn null_flavor(&self) -> Option<NullFlavor> {
        if self.code_set_id.as_deref() != Some(NullFlavor::code_set_id()) {
            return None;
        }
        NullFlavor::from_code(&self.code)
    }

    /// Returns true if this value carries a null flavor instead of a code.
    pub fn is_null(&self) -> bool {
        self.null_flavor().is_some()
    }

    /// Returns true if the code is empty.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl PartialOrd for CodedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CodedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code
            .cmp(&other.code)
            .then_with(|| self.display_name.cmp(&other.display_name))
            .then_with(|| self.code_set_id.cmp(&other.code_set_id))
            .then_with(|| self.code_set_name.cmp(&other.code_set_name))
            .then_with(|| self.code_set_version.cmp(&other.code_set_version))
    }
}

impl fmt::Display for CodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{} ({})", self.code, name),
            None => f.write_str(&self.code),
        }
    }
}

impl From<&str> for CodedValue {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CodedValue {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

/// A coded value with alternate codings from other systems (`CE`).
///
/// The primary coding lives in `value`; `transliterations` holds the same
/// concept expressed in other code systems, in the order they were received.
///
/// # Examples
///
/// ```
/// use poct_types::{CodedElement, CodedValue};
///
/// let mut analyte = CodedElement::new("GLU");
/// analyte.transliterations.push(CodedValue::new("2345-7").with_code_set("LN"));
///
/// assert_eq!(analyte.code(), "GLU");
/// assert!(!analyte.has_redundant_transliteration());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodedElement {
    /// The primary coding.
    pub value: CodedValue,
    /// Alternate codings for the same concept.
    pub transliterations: Vec<CodedValue>,
}

/// Short alias matching the data dictionary name.
pub type Ce = CodedElement;

impl CodedElement {
    /// Creates an element with a bare primary code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            value: CodedValue::new(code),
            transliterations: Vec::new(),
        }
    }

    /// Returns the primary code.
    pub fn code(&self) -> &str {
        &self.value.code
    }

    /// Returns true if a transliteration repeats the primary code.
    ///
    /// Redundant transliterations are accepted as data; this lets a caller
    /// detect them.
    pub fn has_redundant_transliteration(&self) -> bool {
        self.transliterations
            .iter()
            .any(|alt| alt.code == self.value.code)
    }

    /// Returns every coding, primary first.
    pub fn codings(&self) -> impl Iterator<Item = &CodedValue> {
        std::iter::once(&self.value).chain(self.transliterations.iter())
    }
}

impl From<CodedValue> for CodedElement {
    fn from(value: CodedValue) -> Self {
        Self {
            value,
            transliterations: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_ordering_by_code() {
        let a = CodedValue::new("A").with_display_name("zzz");
        let b = CodedValue::new("B");
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn test_equality_is_structural() {
        let plain = CodedValue::new("OBS");
        let named = CodedValue::new("OBS").with_display_name("Observations");
        assert_ne!(plain, named);
        assert_eq!(plain, CodedValue::from("OBS"));
    }

    #[test]
    fn test_ordered_set_keeps_distinct_values() {
        let mut set = BTreeSet::new();
        set.insert(CodedValue::new("PT_LST"));
        set.insert(CodedValue::new("OBS"));
        set.insert(CodedValue::new("D_EV"));
        let codes: Vec<_> = set.iter().map(|cv| cv.code.as_str()).collect();
        assert_eq!(codes, vec!["D_EV", "OBS", "PT_LST"]);
    }

    #[test]
    fn test_null_flavor_round_trip() {
        let cv = CodedValue::null(NullFlavor::AskedUnknown);
        assert_eq!(cv.code, "ASKU");
        assert!(cv.is_null());
        assert_eq!(cv.null_flavor(), Some(NullFlavor::AskedUnknown));

        // Same code outside the null-flavor system is an ordinary value.
        assert_eq!(CodedValue::new("UNK").null_flavor(), None);
    }

    #[test]
    fn test_every_null_flavor_survives() {
        for flavor in NullFlavor::ALL {
            let cv = CodedValue::null(flavor);
            assert!(!cv.is_empty(), "{:?}", flavor);
            assert!(cv.is_null(), "{:?}", flavor);
            assert_eq!(cv.null_flavor(), Some(flavor));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CodedValue::new("AA").to_string(), "AA");
        assert_eq!(
            CodedValue::new("AA").with_display_name("Accept").to_string(),
            "AA (Accept)"
        );
    }

    #[test]
    fn test_coded_element_redundancy() {
        let mut ce = CodedElement::new("GLU");
        assert!(!ce.has_redundant_transliteration());
        ce.transliterations.push(CodedValue::new("GLU"));
        assert!(ce.has_redundant_transliteration());
        assert_eq!(ce.codings().count(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_absent_and_null_flavor_serialize_differently() {
        let absent: Option<CodedValue> = None;
        let flavored = Some(CodedValue::null(NullFlavor::NotAsked));
        let absent_json = serde_json::to_string(&absent).unwrap();
        let flavored_json = serde_json::to_string(&flavored).unwrap();
        assert_eq!(absent_json, "null");
        assert_ne!(absent_json, flavored_json);

        let parsed: Option<CodedValue> = serde_json::from_str(&flavored_json).unwrap();
        assert_eq!(parsed.unwrap().null_flavor(), Some(NullFlavor::NotAsked));
    }
}
