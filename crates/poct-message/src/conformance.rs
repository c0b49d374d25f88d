//! Opt-in conformance checks.
//!
//! The model accepts any code as data. These checks apply the data
//! dictionary's code lists and required fields for decoders that want to
//! reject or acknowledge-with-error, and build the `ACK` a data manager sends
//! back.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use poct_types::{
    Ack, AckCode, AckType, CodedElement, CodedValue, ConnectionProfileType, Device,
    DeviceCondition, DeviceEvent, DeviceStatus, Directive, DirectiveCommand, EndOfTopic,
    EndOfTopicCode, Escape, EscapeCode, Gender, Header, Interpretation, ListMode, MessageType,
    NonPatientService, ObservationMethod, ObservationStatus, Operator, OperatorAction,
    OperatorList, PatientList, PatientService, QualitativeValue, Request, RequestType, Service,
    ServiceDetails, ServiceReason, ServiceRole, Specimen, SpecimenSource, SpecimenType, Terminate,
    TerminateReason, Topic,
};

use crate::{AnyMessage, ConformanceConfig, ConformanceError, ConformanceResult};

/// Checks the header's identity and version.
///
/// # Examples
///
/// ```
/// use poct_message::{check_header, ConformanceConfig, ConformanceError};
/// use poct_types::Header;
///
/// let config = ConformanceConfig::default();
/// let header = Header { control_id: "7".to_string(), ..Header::default() };
/// assert!(check_header(&header, &config).is_ok());
///
/// let unnumbered = Header::default();
/// assert!(matches!(
///     check_header(&unnumbered, &config),
///     Err(ConformanceError::MissingField { .. })
/// ));
/// ```
pub fn check_header(header: &Header, config: &ConformanceConfig) -> ConformanceResult<()> {
    if config.require_control_id && header.control_id.trim().is_empty() {
        return Err(ConformanceError::MissingField {
            field: "HDR.control_id".to_string(),
        });
    }
    if config.check_version && !header.is_supported_version() {
        return Err(ConformanceError::UnsupportedVersion {
            version: header.version_id.clone(),
        });
    }
    Ok(())
}

/// Checks a message and returns every violation found, header first.
pub fn check_message(message: &AnyMessage, config: &ConformanceConfig) -> Vec<ConformanceError> {
    let mut checker = Checker::new(config);
    if let Err(err) = check_header(message.header(), config) {
        checker.errors.push(err);
    }

    match message {
        AnyMessage::Ack(m) => checker.ack(m.ack()),
        AnyMessage::DeviceStatus(m) => checker.device_status(m.device_status()),
        AnyMessage::DeviceEvent(m) => checker.device_event(m.device_event()),
        AnyMessage::Escape(m) => checker.escape(m.escape()),
        AnyMessage::EndOfTopic(m) => checker.end_of_topic(m.end_of_topic()),
        AnyMessage::Hello(m) => checker.device(m.device()),
        AnyMessage::PatientObservations(m) => checker.patient_service(m.service()),
        AnyMessage::NonPatientObservations(m) => checker.non_patient_service(m.service()),
        AnyMessage::Request(m) => checker.request(m.request()),
        AnyMessage::Terminate(m) => checker.terminate(m.terminate()),
        AnyMessage::Directive(m) => checker.directive(m.directive()),
        AnyMessage::OperatorList(m) => checker.operator_list(m.operator_list()),
        AnyMessage::PatientList(m) => checker.patient_list(m.patient_list()),
    }

    for err in &checker.errors {
        tracing::debug!(
            control_id = %message.control_id(),
            message_type = %message.message_type(),
            field = err.field(),
            "conformance violation: {}",
            err
        );
    }
    checker.errors
}

/// Checks every message in `messages`, in parallel when the `parallel`
/// feature is enabled. Reports come back in input order.
pub fn check_batch(messages: &[AnyMessage], config: &ConformanceConfig) -> Vec<MessageReport> {
    #[cfg(feature = "parallel")]
    let reports: Vec<MessageReport> = messages
        .par_iter()
        .map(|message| MessageReport::new(message, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let reports: Vec<MessageReport> = messages
        .iter()
        .map(|message| MessageReport::new(message, config))
        .collect();

    let failing = reports.iter().filter(|r| !r.is_conformant()).count();
    tracing::debug!(messages = reports.len(), failing, "checked message batch");
    reports
}

/// The outcome of checking one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReport {
    /// Control id of the checked message.
    pub control_id: String,
    /// Type of the checked message.
    pub message_type: MessageType,
    /// Violations, header first.
    pub errors: Vec<ConformanceError>,
}

impl MessageReport {
    /// Checks `message` and records the result.
    pub fn new(message: &AnyMessage, config: &ConformanceConfig) -> Self {
        Self {
            control_id: message.control_id().to_string(),
            message_type: message.message_type(),
            errors: check_message(message, config),
        }
    }

    /// Returns true if no violation was found.
    pub fn is_conformant(&self) -> bool {
        self.errors.is_empty()
    }

    /// Builds the acknowledgement for the checked message: accept when
    /// conformant, otherwise an error carrying the first violation's code.
    ///
    /// # Examples
    ///
    /// ```
    /// use poct_message::{AnyMessage, ConformanceConfig, Message, MessageReport};
    /// use poct_types::{AckCode, Header, Terminate};
    ///
    /// let mut trm = Message::new(Terminate::default());
    /// trm.set_header_with_control_id(&Header::default(), "31");
    ///
    /// let report = MessageReport::new(&AnyMessage::from(trm), &ConformanceConfig::default());
    /// let ack = report.to_ack();
    /// assert_eq!(ack.ack_control_id, "31");
    /// assert_eq!(ack.error_code(), Some(AckCode::FieldMissing));
    /// ```
    pub fn to_ack(&self) -> Ack {
        match self.errors.first() {
            None => Ack::accept(self.control_id.clone()),
            Some(err) => Ack {
                note_txt: Some(err.to_string()),
                ..Ack::error(self.control_id.clone(), err.ack_code())
            },
        }
    }
}

/// Accumulates violations while walking a body.
struct Checker<'a> {
    config: &'a ConformanceConfig,
    errors: Vec<ConformanceError>,
}

impl<'a> Checker<'a> {
    fn new(config: &'a ConformanceConfig) -> Self {
        Self {
            config,
            errors: Vec::new(),
        }
    }

    fn missing(&mut self, field: impl Into<String>) {
        self.errors.push(ConformanceError::MissingField {
            field: field.into(),
        });
    }

    fn invalid(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.errors.push(ConformanceError::InvalidCode {
            field: field.into(),
            code: code.into(),
        });
    }

    fn text(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.missing(field);
        }
    }

    /// A required coded field. Null-flavored values are accepted.
    fn required(&mut self, field: &str, cv: &CodedValue, is_valid: fn(&str) -> bool) {
        if cv.is_null() {
            return;
        }
        if cv.code.is_empty() {
            self.missing(field);
        } else if !is_valid(&cv.code) {
            self.invalid(field, cv.code.clone());
        }
    }

    fn optional(&mut self, field: &str, cv: Option<&CodedValue>, is_valid: fn(&str) -> bool) {
        if let Some(cv) = cv {
            self.required(field, cv, is_valid);
        }
    }

    /// A coded field whose list vendors may extend.
    fn extensible(&mut self, field: &str, cv: Option<&CodedValue>, is_valid: fn(&str) -> bool) {
        if self.config.allow_vendor_codes {
            if let Some(cv) = cv {
                if cv.code.is_empty() && !cv.is_null() {
                    self.missing(field);
                }
            }
        } else {
            self.optional(field, cv, is_valid);
        }
    }

    /// A field that must carry some code, from any code system.
    fn identifier(&mut self, field: &str, ce: &CodedElement) {
        if ce.code().trim().is_empty() && !ce.value.is_null() {
            self.missing(field);
        }
    }

    fn ack(&mut self, ack: &Ack) {
        self.text("ACK.ack_control_id", &ack.ack_control_id);
        match &ack.type_cd {
            None => self.missing("ACK.type"),
            Some(cv) => self.required("ACK.type", cv, AckType::is_valid),
        }
        match (&ack.error_detail, ack.ack_type()) {
            (Some(cv), _) => {
                let known = cv.code.trim().parse::<i32>().ok().and_then(AckCode::from_code);
                if known.is_none() {
                    self.invalid("ACK.error_detail", cv.code.clone());
                }
            }
            (None, Some(AckType::ApplicationError)) => self.missing("ACK.error_detail"),
            (None, _) => {}
        }
    }

    fn device_status(&mut self, status: &DeviceStatus) {
        self.optional("DST.condition", status.condition.as_ref(), DeviceCondition::is_valid);
    }

    fn device_event(&mut self, event: &DeviceEvent) {
        self.text("EVT.description", &event.description);
    }

    fn escape(&mut self, escape: &Escape) {
        self.text("ESC.esc_control_id", &escape.esc_control_id);
        self.required("ESC.detail", &escape.detail, EscapeCode::is_valid);
    }

    fn end_of_topic(&mut self, eot: &EndOfTopic) {
        self.required("EOT.topic", &eot.topic, EndOfTopicCode::is_valid);
    }

    fn device(&mut self, device: &Device) {
        self.text("DEV.device_id", &device.device_id);
        let caps = &device.static_capabilities;
        self.optional(
            "DCP.connection_profile",
            caps.connection_profile.as_ref(),
            ConnectionProfileType::is_valid,
        );
        for topic in caps.topics_supported.iter().flatten() {
            self.required("DCP.topics_supported", topic, Topic::is_valid);
        }
        for directive in caps.directives_supported.iter().flatten() {
            if !directive.code.starts_with(poct_types::well_known::VENDOR_DIRECTIVE_PREFIX) {
                self.required("DCP.directives_supported", directive, DirectiveCommand::is_valid);
            }
        }
    }

    fn patient_service(&mut self, svc: &PatientService) {
        self.service_details(&svc.details, true);
        if let Some(patient) = &svc.patient {
            self.text("PT.patient_id", &patient.patient_id);
            self.optional("PT.gender", patient.gender.as_ref(), Gender::is_valid);
        }
        if let Some(order) = &svc.order {
            self.identifier("ORD.universal_service_id", &order.universal_service_id);
        }
        if let Some(specimen) = &svc.specimen {
            self.specimen(specimen);
        }
    }

    fn non_patient_service(&mut self, svc: &NonPatientService) {
        self.service_details(&svc.details, false);
        if let Some(control) = &svc.control {
            self.text("CTC.name", &control.name);
        }
    }

    fn service_details(&mut self, details: &ServiceDetails, patient: bool) {
        self.identifier("SVC.observation_uid", &details.observation_uid);
        self.required("SVC.role", &details.role, ServiceRole::is_valid);
        match details.role_code() {
            Some(ServiceRole::Unknown) | None => {}
            Some(role) if role.is_patient_role() != patient => {
                self.invalid("SVC.role", details.role.code.clone())
            }
            Some(_) => {}
        }
        self.optional("SVC.status", details.status.as_ref(), Service::is_valid_status);
        self.optional("SVC.reason", details.reason.as_ref(), ServiceReason::is_valid);
        if let Some(operator) = &details.operator {
            self.operator("OPR", operator);
        }

        for (i, obs) in details.observations.iter().enumerate() {
            let field = |name: &str| format!("OBS[{}].{}", i, name);
            self.identifier(&field("observation_id"), &obs.observation_id);
            self.extensible(&field("method"), Some(&obs.method), ObservationMethod::is_valid);
            self.optional(
                &field("qualitative_value"),
                obs.qualitative_value.as_ref(),
                QualitativeValue::is_valid,
            );
            self.optional(&field("status"), obs.status.as_ref(), ObservationStatus::is_valid);
            self.optional(
                &field("interpretation"),
                obs.interpretation.as_ref(),
                Interpretation::is_valid,
            );
        }

        for (i, reagent) in details.reagents.iter().enumerate() {
            self.text(&format!("RGT[{}].name", i), &reagent.name);
        }
    }

    fn specimen(&mut self, specimen: &Specimen) {
        self.extensible(
            "SPC.source",
            specimen.source.as_ref().map(|ce| &ce.value),
            SpecimenSource::is_valid,
        );
        self.extensible(
            "SPC.type",
            specimen.type_cd.as_ref().map(|ce| &ce.value),
            SpecimenType::is_valid,
        );
    }

    fn operator(&mut self, prefix: &str, operator: &Operator) {
        if operator.operator_id.code.trim().is_empty() && !operator.operator_id.is_null() {
            self.missing(format!("{}.operator_id", prefix));
        }
        self.optional(
            &format!("{}.action", prefix),
            operator.action.as_ref(),
            OperatorAction::is_valid,
        );
    }

    fn request(&mut self, request: &Request) {
        self.required("REQ.type", &request.type_cd, RequestType::is_valid);
    }

    fn terminate(&mut self, terminate: &Terminate) {
        self.required("TRM.reason", &terminate.reason, TerminateReason::is_valid);
    }

    fn directive(&mut self, directive: &Directive) {
        if directive.is_unknown() {
            self.invalid("DTV.command", DirectiveCommand::Unknown.code());
        }
    }

    fn operator_list(&mut self, list: &OperatorList) {
        for (i, record) in list.operators.iter().enumerate() {
            let prefix = format!("OPL[{}]", i);
            self.operator(&prefix, &record.operator);
            if list.mode == ListMode::Incremental && record.operator.action.is_none() {
                self.missing(format!("{}.action", prefix));
            }
        }
    }

    fn patient_list(&mut self, list: &PatientList) {
        for (i, record) in list.patients.iter().enumerate() {
            let prefix = format!("PTL[{}]", i);
            self.text(&format!("{}.patient_id", prefix), &record.patient.patient_id);
            self.optional(
                &format!("{}.gender", prefix),
                record.patient.gender.as_ref(),
                Gender::is_valid,
            );
            match &record.action {
                Some(cv) => self.required(&format!("{}.action", prefix), cv, OperatorAction::is_valid),
                None if list.mode == ListMode::Incremental => {
                    self.missing(format!("{}.action", prefix))
                }
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;
    use poct_types::{NullFlavor, Patient, PatientRecord};

    fn numbered<B: crate::MessageBody>(body: B) -> Message<B> {
        let mut message = Message::new(body);
        message.set_header_with_control_id(&Header::default(), "1");
        message
    }

    #[test]
    fn test_check_header_version() {
        let header = Header {
            control_id: "5".to_string(),
            version_id: "POCT2".to_string(),
            ..Header::default()
        };
        let err = check_header(&header, &ConformanceConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ConformanceError::UnsupportedVersion {
                version: "POCT2".to_string()
            }
        );

        let relaxed = ConformanceConfig {
            check_version: false,
            ..ConformanceConfig::default()
        };
        assert!(check_header(&header, &relaxed).is_ok());
    }

    #[test]
    fn test_conformant_terminate() {
        let message = AnyMessage::from(numbered(Terminate::new(TerminateReason::Normal)));
        assert!(check_message(&message, &ConformanceConfig::default()).is_empty());
    }

    #[test]
    fn test_invalid_and_missing_codes() {
        let mut terminate = Terminate::default();
        let errors = check_message(
            &AnyMessage::from(numbered(terminate.clone())),
            &ConformanceConfig::default(),
        );
        assert_eq!(
            errors,
            vec![ConformanceError::MissingField {
                field: "TRM.reason".to_string()
            }]
        );

        terminate.reason = CodedValue::new("BYE");
        let errors = check_message(
            &AnyMessage::from(numbered(terminate)),
            &ConformanceConfig::default(),
        );
        assert_eq!(errors[0].ack_code(), AckCode::ValueNotFound);
    }

    #[test]
    fn test_null_flavor_is_accepted() {
        let terminate = Terminate {
            reason: CodedValue::null(NullFlavor::Unknown),
            note: None,
        };
        let message = AnyMessage::from(numbered(terminate));
        assert!(check_message(&message, &ConformanceConfig::default()).is_empty());
    }

    #[test]
    fn test_not_null_flavor_is_accepted() {
        let terminate = Terminate {
            reason: CodedValue::null(NullFlavor::NotNull),
            note: None,
        };
        let message = AnyMessage::from(numbered(terminate));
        assert!(check_message(&message, &ConformanceConfig::default()).is_empty());
    }

    #[test]
    fn test_inbound_version_is_checked() {
        let header = Header {
            control_id: "5".to_string(),
            version_id: "POCT2".to_string(),
            ..Header::default()
        };
        let message = AnyMessage::from(Message::from_parts(
            header,
            Terminate::new(TerminateReason::Normal),
        ));
        let errors = check_message(&message, &ConformanceConfig::default());
        assert_eq!(
            errors,
            vec![ConformanceError::UnsupportedVersion {
                version: "POCT2".to_string()
            }]
        );
        assert_eq!(
            MessageReport::new(&message, &ConformanceConfig::default())
                .to_ack()
                .error_code(),
            Some(AckCode::VersionIdNotSupported)
        );
    }

    #[test]
    fn test_error_ack_requires_detail() {
        let ack = Ack {
            ack_control_id: "8".to_string(),
            type_cd: Some(AckType::ApplicationError.into()),
            ..Ack::default()
        };
        let errors = check_message(&AnyMessage::from(numbered(ack)), &ConformanceConfig::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "ACK.error_detail");
    }

    #[test]
    fn test_vendor_specimen_codes() {
        let mut svc = PatientService::new(ServiceDetails {
            observation_uid: CodedElement::new("svc-1"),
            role: ServiceRole::Observation.into(),
            ..ServiceDetails::default()
        });
        svc.specimen = Some(Specimen {
            source: Some(CodedElement::new("XSITE")),
            ..Specimen::default()
        });
        let message = AnyMessage::from(numbered(svc));

        assert!(check_message(&message, &ConformanceConfig::default()).is_empty());
        let errors = check_message(&message, &ConformanceConfig::strict());
        assert_eq!(
            errors,
            vec![ConformanceError::InvalidCode {
                field: "SPC.source".to_string(),
                code: "XSITE".to_string()
            }]
        );
    }

    #[test]
    fn test_role_context_mismatch_reported() {
        let svc = NonPatientService::new(ServiceDetails {
            observation_uid: CodedElement::new("qc-1"),
            role: ServiceRole::Observation.into(),
            ..ServiceDetails::default()
        });
        let errors = check_message(&AnyMessage::from(numbered(svc)), &ConformanceConfig::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "SVC.role");
    }

    #[test]
    fn test_unknown_directive_reported() {
        let errors = check_message(
            &AnyMessage::from(numbered(Directive::default())),
            &ConformanceConfig::default(),
        );
        assert_eq!(
            errors,
            vec![ConformanceError::InvalidCode {
                field: "DTV.command".to_string(),
                code: "UNKNOWN".to_string()
            }]
        );
    }

    #[test]
    fn test_incremental_list_requires_action() {
        let list = PatientList {
            mode: ListMode::Incremental,
            patients: vec![PatientRecord {
                patient: Patient::new("MRN-3"),
                action: None,
            }],
        };
        let errors = check_message(&AnyMessage::from(numbered(list)), &ConformanceConfig::default());
        assert_eq!(errors[0].field(), "PTL[0].action");
    }

    #[test]
    fn test_batch_preserves_order() {
        let messages = vec![
            AnyMessage::from(numbered(Terminate::new(TerminateReason::User))),
            AnyMessage::from(Message::new(Terminate::default())),
        ];
        let reports = check_batch(&messages, &ConformanceConfig::default());
        assert_eq!(reports.len(), 2);
        assert!(reports[0].is_conformant());
        assert!(!reports[1].is_conformant());
        assert!(reports[0].to_ack().is_accept());
        assert_eq!(reports[1].to_ack().ack_type(), Some(AckType::ApplicationError));
    }
}
