//! Reagents (`RGT`) and control/calibration material (`CTC`).

use chrono::NaiveDate;

use crate::CodedValue;

/// A reagent lot used by a test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Reagent {
    /// Reagent name.
    pub name: String,
    /// Lot number.
    pub lot_number: CodedValue,
    /// Last day the lot may be used.
    pub expiration_date: NaiveDate,
}

impl Reagent {
    /// Returns true if the lot had expired by `date`.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        date > self.expiration_date
    }
}

/// Control or calibration material used by a non-patient service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControlCalibration {
    /// Material name.
    pub name: String,
    /// Lot number.
    pub lot_number: Option<CodedValue>,
    /// Last day the lot may be used.
    pub expiration_date: Option<NaiveDate>,
    /// Control level, such as low, normal or high.
    pub level: Option<CodedValue>,
    /// Repetition count for calibration verification runs.
    pub cal_ver_repetition: Option<i32>,
}

impl ControlCalibration {
    /// Creates control material with only its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns true if an expiration date is known and had passed by `date`.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|expiry| date > expiry)
    }
}
