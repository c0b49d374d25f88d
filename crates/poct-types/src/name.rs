//! Person names (`PN`).

use std::fmt;

/// An individual's name (`PN`).
///
/// `value` is the formatted-for-display name and is authoritative; the
/// components are decompositions for consumers that need structure.
///
/// # Examples
///
/// ```
/// use poct_types::PersonName;
///
/// let name = PersonName {
///     given: Some("Ada".to_string()),
///     family: Some("Lovelace".to_string()),
///     ..PersonName::new("Ada Lovelace")
/// };
///
/// assert_eq!(name.to_string(), "Ada Lovelace");
/// assert_eq!(name.sort_key(), "Lovelace, Ada");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonName {
    /// Formatted-for-display version of the name.
    pub value: String,
    /// Given name.
    pub given: Option<String>,
    /// Middle name.
    pub middle: Option<String>,
    /// Family name.
    pub family: Option<String>,
    /// Prefix such as a title.
    pub prefix: Option<String>,
    /// Suffix such as a generational qualifier.
    #[cfg_attr(feature = "serde", serde(rename = "sufix"))]
    pub suffix: Option<String>,
    /// Delimiter the sender used between components.
    pub delimiter: Option<String>,
}

/// Short alias matching the data dictionary name.
pub type Pn = PersonName;

impl PersonName {
    /// Creates a name from its display form.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Returns true if any structured component is set.
    pub fn has_components(&self) -> bool {
        self.given.is_some()
            || self.middle.is_some()
            || self.family.is_some()
            || self.prefix.is_some()
            || self.suffix.is_some()
    }

    /// Returns "Family, Given" when both are present, else the display value.
    pub fn sort_key(&self) -> String {
        match (&self.family, &self.given) {
            (Some(family), Some(given)) => format!("{}, {}", family, given),
            (Some(family), None) => family.clone(),
            _ => self.value.clone(),
        }
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
