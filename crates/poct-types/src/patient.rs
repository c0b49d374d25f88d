//! Patients (`PT`) and orders (`ORD`).

use chrono::{Datelike, NaiveDate};

use crate::{CodedElement, CodedValue, Gender, PersonName, PhysicalQuantity};

/// Patient demographics.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use poct_types::{CodedValue, Patient};
///
/// let patient = Patient {
///     birth_date: NaiveDate::from_ymd_opt(1980, 5, 17),
///     gender: Some(CodedValue::new("F")),
///     ..Patient::new("MRN-001")
/// };
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 16).unwrap();
/// assert_eq!(patient.age_on(today), Some(43));
/// assert!(Patient::is_valid_gender("F"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Patient {
    /// Patient identifier, usually the medical record number.
    pub patient_id: String,
    /// Where the patient is, such as a ward or bed.
    pub location: Option<String>,
    /// Patient name.
    pub name: Option<PersonName>,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Administrative gender.
    pub gender: Option<CodedValue>,
    /// Body weight.
    pub weight: Option<PhysicalQuantity<String>>,
    /// Body height.
    pub height: Option<PhysicalQuantity<String>>,
}

impl Patient {
    /// Creates a patient with only an identifier.
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            ..Self::default()
        }
    }

    /// Returns true if `gender` is a standard gender code.
    pub fn is_valid_gender(gender: &str) -> bool {
        Gender::is_valid(gender)
    }

    /// Returns the typed gender, if set and recognised.
    pub fn gender_code(&self) -> Option<Gender> {
        self.gender.as_ref().and_then(|cv| Gender::from_code(&cv.code))
    }

    /// Returns the age in whole years on `date`.
    ///
    /// Returns `None` if the birth date is unknown or after `date`.
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        let birth = self.birth_date?;
        if birth > date {
            return None;
        }
        let mut years = date.year() - birth.year();
        if (date.month(), date.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}

/// The order a test was performed for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Order {
    /// The ordered test.
    pub universal_service_id: CodedElement,
    /// Who ordered it.
    pub ordering_provider_id: Option<String>,
    /// Order number in the placing system.
    pub order_id: Option<CodedValue>,
}
