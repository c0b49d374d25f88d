//! Loading messages and writing the tab-separated report.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use poct_message::{AnyMessage, MessageReport};
use poct_types::ListMode;
use serde::Serialize;

use crate::{InspectError, InspectResult};

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Control id of the message.
    pub control_id: String,
    /// Wire message type, such as `OBS.R01`.
    pub message_type: String,
    /// Short description of the body.
    pub summary: String,
    /// Number of violations found.
    pub violations: usize,
    /// The first violation, or empty.
    pub first_violation: String,
}

impl ReportRow {
    /// Builds the row for a checked message.
    pub fn new(message: &AnyMessage, report: &MessageReport) -> Self {
        Self {
            control_id: report.control_id.clone(),
            message_type: report.message_type.code().to_string(),
            summary: summarize(message),
            violations: report.errors.len(),
            first_violation: report
                .errors
                .first()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

/// Reads a JSON array of messages from `path`.
pub fn load_messages_from_path<P: AsRef<Path>>(path: P) -> InspectResult<Vec<AnyMessage>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(InspectError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let file = File::open(path)?;
    load_messages(BufReader::new(file))
}

/// Reads a JSON array of messages.
pub fn load_messages<R: Read>(reader: R) -> InspectResult<Vec<AnyMessage>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes one tab-separated row per message, with a header line.
pub fn write_report<W: Write>(writer: W, rows: &[ReportRow]) -> InspectResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Describes a message body in a few words.
pub fn summarize(message: &AnyMessage) -> String {
    match message {
        AnyMessage::Ack(m) => {
            let ack = m.ack();
            let kind = ack.type_cd.as_ref().map_or("?", |cv| cv.code.as_str());
            match &ack.error_detail {
                Some(detail) => format!("{} {} for {}", kind, detail.code, ack.ack_control_id),
                None => format!("{} for {}", kind, ack.ack_control_id),
            }
        }
        AnyMessage::DeviceStatus(m) => {
            let status = m.device_status();
            format!(
                "{}, {} new observations",
                status.device_condition(),
                status.new_observations
            )
        }
        AnyMessage::DeviceEvent(m) => {
            let event = m.device_event();
            format!("[{}] {}", event.severity, event.description)
        }
        AnyMessage::Escape(m) => {
            let escape = m.escape();
            format!("{} for {}", escape.detail.code, escape.esc_control_id)
        }
        AnyMessage::EndOfTopic(m) => format!("end of {}", m.end_of_topic().topic.code),
        AnyMessage::Hello(m) => {
            let device = m.device();
            match &device.vendor_id {
                Some(vendor) => format!("device {} ({})", device.device_id, vendor),
                None => format!("device {}", device.device_id),
            }
        }
        AnyMessage::PatientObservations(m) => {
            let svc = m.service();
            let mut summary = format!(
                "service {}, {} observations",
                svc.details.observation_uid.code(),
                svc.details.observations.len()
            );
            if let Some(patient) = &svc.patient {
                summary.push_str(&format!(", patient {}", patient.patient_id));
            }
            summary
        }
        AnyMessage::NonPatientObservations(m) => {
            let svc = m.service();
            let mut summary = format!(
                "service {} {}, {} observations",
                svc.details.observation_uid.code(),
                svc.details.role.code,
                svc.details.observations.len()
            );
            if let Some(control) = &svc.control {
                summary.push_str(&format!(", control {}", control.name));
            }
            summary
        }
        AnyMessage::Request(m) => m.request().type_cd.code.clone(),
        AnyMessage::Terminate(m) => m.terminate().reason.code.clone(),
        AnyMessage::Directive(m) => m.directive().command.to_string(),
        AnyMessage::OperatorList(m) => {
            let list = m.operator_list();
            format!("{} operators ({})", list.operators.len(), mode_name(list.mode))
        }
        AnyMessage::PatientList(m) => {
            let list = m.patient_list();
            format!("{} patients ({})", list.patients.len(), mode_name(list.mode))
        }
    }
}

fn mode_name(mode: ListMode) -> &'static str {
    match mode {
        ListMode::Complete => "complete",
        ListMode::Incremental => "incremental",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poct_message::{check_batch, ConformanceConfig, Message};
    use poct_types::{
        Device, DirectiveCommand, Directive, Header, OperatorList, Terminate, TerminateReason,
    };

    fn numbered<B: poct_message::MessageBody>(body: B, id: &str) -> Message<B> {
        let mut message = Message::new(body);
        message.set_header_with_control_id(&Header::default(), id);
        message
    }

    #[test]
    fn test_summaries() {
        let mut device = Device::new("GLU-0042");
        device.vendor_id = Some("ACME".to_string());
        let hello = AnyMessage::from(Message::new(device));
        assert_eq!(summarize(&hello), "device GLU-0042 (ACME)");

        let lock = AnyMessage::from(Message::new(Directive::new(DirectiveCommand::Lock)));
        assert_eq!(summarize(&lock), "LOCK");

        let opl = AnyMessage::from(Message::new(OperatorList::default()));
        assert_eq!(summarize(&opl), "0 operators (complete)");
    }

    #[test]
    fn test_write_report() {
        let messages = vec![
            AnyMessage::from(numbered(Terminate::new(TerminateReason::Normal), "1")),
            AnyMessage::from(numbered(Terminate::default(), "2")),
        ];
        let reports = check_batch(&messages, &ConformanceConfig::default());
        let rows: Vec<ReportRow> = messages
            .iter()
            .zip(&reports)
            .map(|(message, report)| ReportRow::new(message, report))
            .collect();

        let mut out = Vec::new();
        write_report(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "control_id\tmessage_type\tsummary\tviolations\tfirst_violation"
        );
        assert_eq!(lines[1], "1\tEND.R01\tNRM\t0\t");
        assert_eq!(
            lines[2],
            "2\tEND.R01\t\t1\tMissing required field: TRM.reason"
        );
    }

    #[test]
    fn test_load_messages() {
        let messages = vec![AnyMessage::from(numbered(Terminate::default(), "5"))];
        let json = serde_json::to_string(&messages).unwrap();
        let loaded = load_messages(json.as_bytes()).unwrap();
        assert_eq!(loaded, messages);
    }

    #[test]
    fn test_load_rejects_non_array() {
        let err = load_messages("{}".as_bytes()).unwrap_err();
        assert!(matches!(err, InspectError::Json(_)));
    }

    #[test]
    fn test_demo_messages() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/messages.json");
        let messages = load_messages_from_path(path).unwrap();
        assert_eq!(messages.len(), 5);

        let reports = check_batch(&messages, &ConformanceConfig::default());
        let failing: Vec<Option<&str>> = reports
            .iter()
            .map(|r| r.errors.first().map(|e| e.field()))
            .collect();
        assert_eq!(
            failing,
            [
                None,
                None,
                None,
                Some("OBS[0].interpretation"),
                Some("HDR.control_id"),
            ]
        );
        assert_eq!(
            summarize(&messages[2]),
            "service svc-20240301-0001, 1 observations, patient MRN-001"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_messages_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, InspectError::FileNotFound { .. }));
    }
}
