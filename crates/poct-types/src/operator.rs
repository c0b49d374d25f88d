//! Operators (`OPR`) and their access rights (`ACC`).

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{AccessMethod, CodedValue, OperatorAction, PermissionLevel, PersonName};

/// The operator who performed a test, or an entry in an operator list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Operator {
    /// Unique identifier of the operator on the device.
    pub operator_id: CodedValue,
    /// Insert or delete; only meaningful in incremental operator lists.
    pub action: Option<CodedValue>,
    /// Operator name.
    pub name: Option<PersonName>,
}

impl Operator {
    /// Creates an operator with only an identifier.
    pub fn new(operator_id: impl Into<String>) -> Self {
        Self {
            operator_id: CodedValue::new(operator_id),
            ..Self::default()
        }
    }

    /// Returns true if `action` is a standard list action code.
    pub fn is_valid_action(action: &str) -> bool {
        OperatorAction::is_valid(action)
    }

    /// Returns the typed action, if set and recognised.
    pub fn action_code(&self) -> Option<OperatorAction> {
        self.action
            .as_ref()
            .and_then(|cv| OperatorAction::from_code(&cv.code))
    }
}

/// What an operator is allowed to do on a device.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use poct_types::{AccessControl, PermissionLevel};
///
/// let access = AccessControl {
///     permission_lvl: Some(PermissionLevel::User),
///     expiration_date: NaiveDate::from_ymd_opt(2025, 12, 31),
///     ..AccessControl::default()
/// };
///
/// assert!(access.is_active_on(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
/// assert!(!access.is_active_on(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AccessControl {
    /// Methods the operator may run.
    pub method: BTreeSet<AccessMethod>,
    /// Device password.
    pub password: Option<String>,
    /// First day the access is valid.
    pub active_date: Option<NaiveDate>,
    /// Last day the access is valid.
    pub expiration_date: Option<NaiveDate>,
    /// Permission level.
    pub permission_lvl: Option<PermissionLevel>,
}

impl AccessControl {
    /// Returns true if `date` falls within the active and expiration dates.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.active_date.map_or(true, |start| date >= start)
            && self.expiration_date.map_or(true, |end| date <= end)
    }

    /// Returns true if the operator may run every method.
    pub fn allows_all_methods(&self) -> bool {
        self.method.contains(&AccessMethod::All)
    }
}
