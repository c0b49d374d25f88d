//! Services (`SVC`): one performed test with its observations.
//!
//! A service is either patient work (role `OBS`, carrying patient, order and
//! specimen) or non-patient work (QC, calibration, proficiency, carrying the
//! control material). The two contexts are separate types, so a service can
//! never hold both.

use chrono::{DateTime, Utc};

use crate::{
    CodedElement, CodedValue, ControlCalibration, Note, Observation, Operator, Order, Patient,
    Reagent, ServiceReason, ServiceRole, ServiceStatus, Specimen,
};

/// Fields shared by patient and non-patient services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServiceDetails {
    /// Unique identifier of the service on the device.
    pub observation_uid: CodedElement,
    /// Purpose of the service.
    pub role: CodedValue,
    /// The results.
    pub observations: Vec<Observation>,
    /// When the test was run.
    pub observation_dttm: DateTime<Utc>,
    /// Normal or overridden.
    pub status: Option<CodedValue>,
    /// New, resent or edited.
    pub reason: Option<CodedValue>,
    /// Position within a multi-service run.
    pub sequence: Option<i32>,
    /// Who ran the test.
    pub operator: Option<Operator>,
    /// Reagents used.
    pub reagents: Vec<Reagent>,
    /// Notes on the service.
    pub notes: Vec<Note>,
}

impl ServiceDetails {
    /// Creates details for a service with the given identity, role and time.
    pub fn new(
        observation_uid: impl Into<String>,
        role: ServiceRole,
        observation_dttm: DateTime<Utc>,
    ) -> Self {
        Self {
            observation_uid: CodedElement::new(observation_uid),
            role: role.into(),
            observation_dttm,
            ..Self::default()
        }
    }

    /// Returns the typed role, if recognised.
    pub fn role_code(&self) -> Option<ServiceRole> {
        ServiceRole::from_code(&self.role.code)
    }
}

/// A patient test (`OBS.R01`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatientService {
    /// Fields shared with non-patient services.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub details: ServiceDetails,
    /// The patient tested.
    pub patient: Option<Patient>,
    /// The order the test fulfils.
    pub order: Option<Order>,
    /// The specimen tested.
    pub specimen: Option<Specimen>,
}

impl PatientService {
    /// Creates a patient service from its shared details.
    pub fn new(details: ServiceDetails) -> Self {
        Self {
            details,
            ..Self::default()
        }
    }
}

/// A QC, calibration or proficiency test (`OBS.R02`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NonPatientService {
    /// Fields shared with patient services.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub details: ServiceDetails,
    /// The control or calibration material.
    pub control: Option<ControlCalibration>,
}

impl NonPatientService {
    /// Creates a non-patient service from its shared details.
    pub fn new(details: ServiceDetails) -> Self {
        Self {
            details,
            control: None,
        }
    }
}

/// Either kind of service.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use poct_types::{Patient, PatientService, Service, ServiceDetails, ServiceRole};
///
/// let mut svc = PatientService::new(ServiceDetails::new("svc-1", ServiceRole::Observation, Utc::now()));
/// svc.patient = Some(Patient::new("MRN-001"));
/// let service = Service::from(svc);
///
/// assert!(Service::is_valid_role("OBS"));
/// assert!(service.role_matches_context());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Service {
    /// Patient test.
    Patient(Box<PatientService>),
    /// QC, calibration or proficiency test.
    NonPatient(Box<NonPatientService>),
}

impl Service {
    /// Returns true if `role` is a standard service role.
    pub fn is_valid_role(role: &str) -> bool {
        ServiceRole::is_valid(role)
    }

    /// Returns true if `status` is a standard service status.
    ///
    /// The `INI` extension code is not part of the base standard and is
    /// rejected here.
    pub fn is_valid_status(status: &str) -> bool {
        ServiceStatus::from_code(status).is_some_and(ServiceStatus::is_standard)
    }

    /// Returns true if `reason` is a standard service reason.
    pub fn is_valid_reason(reason: &str) -> bool {
        ServiceReason::is_valid(reason)
    }

    /// Returns the shared fields.
    pub fn details(&self) -> &ServiceDetails {
        match self {
            Self::Patient(svc) => &svc.details,
            Self::NonPatient(svc) => &svc.details,
        }
    }

    /// Returns the shared fields for editing.
    pub fn details_mut(&mut self) -> &mut ServiceDetails {
        match self {
            Self::Patient(svc) => &mut svc.details,
            Self::NonPatient(svc) => &mut svc.details,
        }
    }

    /// Returns true for a patient service.
    pub fn is_patient(&self) -> bool {
        matches!(self, Self::Patient(_))
    }

    /// Returns true if the role code agrees with the context: `OBS` for
    /// patient services and any other standard role for non-patient ones.
    /// `UNK` is accepted for either.
    pub fn role_matches_context(&self) -> bool {
        match self.details().role_code() {
            Some(ServiceRole::Unknown) => true,
            Some(role) => role.is_patient_role() == self.is_patient(),
            None => false,
        }
    }
}

impl From<PatientService> for Service {
    fn from(svc: PatientService) -> Self {
        Self::Patient(Box::new(svc))
    }
}

impl From<NonPatientService> for Service {
    fn from(svc: NonPatientService) -> Self {
        Self::NonPatient(Box::new(svc))
    }
}
