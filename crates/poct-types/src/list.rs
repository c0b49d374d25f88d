//! Operator and patient list topics.

use crate::{AccessControl, CodedValue, MessageType, Operator, OperatorAction, Patient};

/// Whether a list replaces the device's copy or updates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ListMode {
    /// The list is the complete set; the device discards what it had.
    #[default]
    Complete,
    /// The list carries inserts and deletes against the device's copy.
    Incremental,
}

/// One operator in an operator list, with the access granted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OperatorRecord {
    /// The operator.
    pub operator: Operator,
    /// What the operator may do.
    pub access_control: Option<AccessControl>,
}

/// Operator list body (`OPL`).
///
/// # Examples
///
/// ```
/// use poct_types::{ListMode, MessageType, Operator, OperatorList, OperatorRecord};
///
/// let list = OperatorList {
///     mode: ListMode::Incremental,
///     operators: vec![OperatorRecord {
///         operator: Operator::new("op-1"),
///         access_control: None,
///     }],
/// };
///
/// assert_eq!(list.message_type(), MessageType::OperatorListIncremental);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OperatorList {
    /// Complete or incremental.
    pub mode: ListMode,
    /// The operators.
    pub operators: Vec<OperatorRecord>,
}

impl OperatorList {
    /// Returns `OPL.R01` for a complete list and `OPL.R02` for an
    /// incremental one.
    pub fn message_type(&self) -> MessageType {
        match self.mode {
            ListMode::Complete => MessageType::OperatorList,
            ListMode::Incremental => MessageType::OperatorListIncremental,
        }
    }
}

/// One patient in a patient list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatientRecord {
    /// The patient.
    pub patient: Patient,
    /// Insert or delete; only meaningful in incremental lists.
    pub action: Option<CodedValue>,
}

impl PatientRecord {
    /// Returns the typed action, if set and recognised.
    pub fn action_code(&self) -> Option<OperatorAction> {
        self.action
            .as_ref()
            .and_then(|cv| OperatorAction::from_code(&cv.code))
    }
}

/// Patient list body (`PTL`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatientList {
    /// Complete or incremental.
    pub mode: ListMode,
    /// The patients.
    pub patients: Vec<PatientRecord>,
}

impl PatientList {
    /// Returns `PTL.R01` for a complete list and `PTL.R02` for an
    /// incremental one.
    pub fn message_type(&self) -> MessageType {
        match self.mode {
            ListMode::Complete => MessageType::PatientList,
            ListMode::Incremental => MessageType::PatientListIncremental,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_complete() {
        assert_eq!(ListMode::default(), ListMode::Complete);
        assert_eq!(OperatorList::default().message_type(), MessageType::OperatorList);
        assert_eq!(PatientList::default().message_type(), MessageType::PatientList);
    }

    #[test]
    fn test_incremental_patient_list() {
        let list = PatientList {
            mode: ListMode::Incremental,
            patients: vec![PatientRecord {
                patient: Patient::new("MRN-9"),
                action: Some(OperatorAction::Insert.into()),
            }],
        };
        assert_eq!(list.message_type(), MessageType::PatientListIncremental);
        assert_eq!(list.patients[0].action_code(), Some(OperatorAction::Insert));
    }
}
