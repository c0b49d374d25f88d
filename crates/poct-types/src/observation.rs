//! Observation results (`OBS`) and notes (`NTE`).

use crate::{
    CodedElement, CodedValue, Interpretation, Interval, NoteType, ObservationMethod,
    ObservationStatus, PhysicalQuantity, QualitativeValue,
};

/// Free text attached to a service or an observation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Note {
    /// Kind of note. Defaults to an operator comment.
    pub type_cd: NoteType,
    /// The note itself.
    pub text: String,
    /// Coded form of the note, if the device has one.
    pub code: Option<String>,
}

impl Note {
    /// Creates an operator comment.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Creates an abnormal-flag note.
    pub fn abnormal_flag(text: impl Into<String>) -> Self {
        Self {
            type_cd: NoteType::AbnormalFlag,
            ..Self::new(text)
        }
    }
}

/// A single test result.
///
/// A result carries either a numeric `value` or a `qualitative_value`. The
/// method defaults to an empty code; decoders fill it from the wire.
///
/// # Examples
///
/// ```
/// use poct_types::{CodedElement, CodedValue, Interval, Observation, PhysicalQuantity};
///
/// let glucose = Observation {
///     observation_id: CodedElement::new("2345-7"),
///     value: Some(PhysicalQuantity::new("5.4".to_string(), "mmol/L")),
///     method: CodedValue::new("M"),
///     normal_lo_hi_limit: Some(Interval::closed("3.9".into(), "6.1".into()).with_unit("mmol/L")),
///     ..Observation::default()
/// };
///
/// assert!(glucose.has_result());
/// assert!(Observation::is_valid_method("M"));
/// assert!(!Observation::is_valid_interpretation("LOW"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Observation {
    /// What was measured, usually a LOINC code.
    pub observation_id: CodedElement,
    /// Numeric result with its unit.
    pub value: Option<PhysicalQuantity<String>>,
    /// Qualitative result.
    pub qualitative_value: Option<CodedValue>,
    /// How the value was obtained. Vendors may extend this list.
    pub method: CodedValue,
    /// Result status.
    pub status: Option<CodedValue>,
    /// Abnormal flag.
    pub interpretation: Option<CodedValue>,
    /// Normal range.
    pub normal_lo_hi_limit: Option<Interval>,
    /// Critical range.
    pub critical_lo_hi_limit: Option<Interval>,
    /// Notes on this observation.
    pub notes: Vec<Note>,
}

impl Observation {
    /// Returns true if `method` is a standard method code.
    pub fn is_valid_method(method: &str) -> bool {
        ObservationMethod::is_valid(method)
    }

    /// Returns true if `value` is a standard qualitative value.
    pub fn is_qualitative_value(value: &str) -> bool {
        QualitativeValue::is_valid(value)
    }

    /// Returns true if `status` is a standard result status.
    pub fn is_valid_status(status: &str) -> bool {
        ObservationStatus::is_valid(status)
    }

    /// Returns true if `inter` is a standard interpretation code.
    pub fn is_valid_interpretation(inter: &str) -> bool {
        Interpretation::is_valid(inter)
    }

    /// Returns true if a numeric or qualitative result is present.
    pub fn has_result(&self) -> bool {
        self.value.as_ref().is_some_and(|pq| pq.value.is_some())
            || self.qualitative_value.is_some()
    }

    /// Returns the typed interpretation, if set and recognised.
    pub fn interpretation_code(&self) -> Option<Interpretation> {
        self.interpretation
            .as_ref()
            .and_then(|cv| Interpretation::from_code(&cv.code))
    }

    /// Returns true if the numeric value lies outside the critical range.
    ///
    /// Returns false when either the value or the range is missing, or the
    /// value is not a number.
    pub fn is_critical(&self) -> bool {
        let value = self
            .value
            .as_ref()
            .and_then(|pq| pq.value.as_deref())
            .and_then(|v| v.trim().parse::<f64>().ok());
        match (value, &self.critical_lo_hi_limit) {
            (Some(value), Some(range)) => range.contains_number(value) == Some(false),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeSet;

    #[test]
    fn test_note_defaults() {
        let note = Note::default();
        assert_eq!(note.type_cd, NoteType::OperatorComment);
        assert!(note.text.is_empty());
        assert!(note.code.is_none());
        assert_eq!(Note::abnormal_flag("haemolysed").type_cd, NoteType::AbnormalFlag);
    }

    #[test]
    fn test_every_listed_code_is_valid() {
        for method in ObservationMethod::ALL {
            assert!(Observation::is_valid_method(method.code()));
        }
        for value in QualitativeValue::ALL {
            assert!(Observation::is_qualitative_value(value.code()));
        }
        for status in ["A", "D", "U", "X"] {
            assert!(Observation::is_valid_status(status));
        }
        for inter in Interpretation::ALL {
            assert!(Observation::is_valid_interpretation(inter.code()));
        }
    }

    #[test]
    fn test_bogus_codes_are_invalid() {
        assert!(!Observation::is_valid_method("ZZZ_BOGUS"));
        assert!(!Observation::is_qualitative_value("ZZZ_BOGUS"));
        assert!(!Observation::is_valid_status("ZZZ_BOGUS"));
        assert!(!Observation::is_valid_interpretation("ZZZ_BOGUS"));
        assert!(!Observation::is_valid_status("N"));
    }

    #[test]
    fn test_has_result() {
        let mut obs = Observation::default();
        assert!(!obs.has_result());

        obs.value = Some(PhysicalQuantity::unit_only("mmol/L"));
        assert!(!obs.has_result());

        obs.qualitative_value = Some(QualitativeValue::Normal.into());
        assert!(obs.has_result());
    }

    #[test]
    fn test_is_critical() {
        let mut obs = Observation {
            value: Some(PhysicalQuantity::new("1.9".to_string(), "mmol/L")),
            critical_lo_hi_limit: Some(Interval::closed("2.2".to_string(), "25.0".to_string())),
            ..Observation::default()
        };
        assert!(obs.is_critical());

        obs.value = Some(PhysicalQuantity::new("7.0".to_string(), "mmol/L"));
        assert!(!obs.is_critical());

        obs.value = Some(PhysicalQuantity::new("HI".to_string(), "mmol/L"));
        assert!(!obs.is_critical());
    }

    #[test]
    fn test_interpretation_code() {
        let obs = Observation {
            interpretation: Some(CodedValue::new("HH")),
            ..Observation::default()
        };
        assert_eq!(obs.interpretation_code(), Some(Interpretation::AboveHighPanic));
    }
}
