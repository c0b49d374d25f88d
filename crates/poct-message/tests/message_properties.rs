//! Header sequencing, body round-trips and predicate behaviour across the
//! whole message catalog.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use poct_message::{AnyMessage, ControlIdSequence, Message};
use poct_types::{
    Ack, AckType, CodeSet, CodedValue, Device, DeviceStatus, Directive, DirectiveCommand,
    EndOfTopic, EndOfTopicCode, Escape, EscapeCode, Gender, Header, Interpretation, ListMode,
    MessageType, NonPatientService, Observation, ObservationMethod, Operator, OperatorAction,
    OperatorList, OperatorRecord, Patient, PatientService, Request, RequestType, Service,
    ServiceDetails, ServiceRole, Specimen, SpecimenSource, SpecimenType, Terminate,
    TerminateReason,
};

fn header() -> Header {
    Header::new(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap())
}

#[test]
fn test_auto_numbered_ids_are_consecutive() {
    let sequence = ControlIdSequence::new();
    let input = header();

    let mut first = Message::new(Device::new("GLU-0042"));
    let mut second = Message::new(Device::new("GLU-0042"));
    first.set_header(&input, &sequence);
    second.set_header(&input, &sequence);

    let a: u64 = first.header().control_id.parse().unwrap();
    let b: u64 = second.header().control_id.parse().unwrap();
    assert_ne!(a, b);
    assert_eq!(b, a + 1);
}

#[test]
fn test_ids_strictly_increase_in_call_order() {
    let sequence = ControlIdSequence::starting_at(41);
    let mut last = 0;
    for _ in 0..50 {
        let mut message = Message::new(Request::new(RequestType::Observations));
        message.set_header(&header(), &sequence);
        let id: u64 = message.header().control_id.parse().unwrap();
        assert!(id > last);
        last = id;
    }
    assert_eq!(last, 90);
}

#[test]
fn test_explicit_control_id_is_kept_verbatim() {
    let input = Header {
        version_id: "POCT1-B".to_string(),
        ..header()
    };
    for id in ["0", "42", "A-17", "  spaced  ", ""] {
        let mut message = Message::new(Ack::default());
        message.set_header_with_control_id(&input, id);
        assert_eq!(message.header().control_id, id);
        assert_eq!(message.header().version_id, "POCT1");
        assert_eq!(message.header().creation_dttm, input.creation_dttm);
    }
}

#[test]
fn test_concurrent_numbering_never_repeats() {
    let sequence = ControlIdSequence::new();
    let ids: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..250)
                        .map(|_| {
                            let mut message = Message::new(Terminate::default());
                            message.set_header(&Header::default(), &sequence);
                            message.into_parts().0.control_id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(ids.len(), 2000);
    assert_eq!(unique.len(), 2000);
    assert_eq!(sequence.peek(), 2001);
}

#[test]
fn test_body_round_trip_through_message() {
    let mut details = ServiceDetails::new("svc-7", ServiceRole::Observation, header().creation_dttm);
    details.observations.push(Observation {
        method: CodedValue::new("M"),
        ..Observation::default()
    });
    details.operator = Some(Operator::new("op-3"));
    let mut svc = PatientService::new(details);
    svc.patient = Some(Patient::new("MRN-001"));

    let mut message = Message::new(PatientService::default());
    message.set_service(svc.clone());
    assert_eq!(message.service(), &svc);

    let status = DeviceStatus {
        new_observations: 3,
        condition: Some(CodedValue::new("READY")),
        ..DeviceStatus::default()
    };
    let mut dst = Message::new(DeviceStatus::default());
    dst.set_device_status(status.clone());
    assert_eq!(dst.device_status(), &status);

    let list = OperatorList {
        mode: ListMode::Complete,
        operators: vec![OperatorRecord {
            operator: Operator::new("op-1"),
            access_control: None,
        }],
    };
    let mut opl = Message::new(OperatorList::default());
    opl.set_operator_list(list.clone());
    assert_eq!(opl.operator_list(), &list);
}

#[test]
fn test_hello_scenario() {
    let sequence = ControlIdSequence::new();
    let input = header();

    let mut one = Message::new(Device::new("GLU-0042"));
    one.set_header(&input, &sequence);
    let mut two = Message::new(Device::new("GLU-0042"));
    two.set_header(&input, &sequence);

    assert_eq!(one.message_type(), MessageType::Hello);
    assert_eq!(one.header().control_id, "1");
    assert_eq!(two.header().control_id, "2");
}

#[test]
fn test_ack_scenario() {
    let ack = Ack {
        ack_control_id: "42".to_string(),
        type_cd: Some(CodedValue::new("AA")),
        ..Ack::default()
    };
    let message = Message::new(ack);
    assert_eq!(message.ack().type_cd.as_ref().unwrap().code, "AA");
    assert_eq!(message.ack().ack_control_id, "42");
    assert!(Ack::is_valid_type("AA"));
    assert!(!Ack::is_valid_code(999));
}

#[test]
fn test_patient_service_scenario() {
    let mut svc = PatientService::new(ServiceDetails {
        role: CodedValue::new("OBS"),
        ..ServiceDetails::default()
    });
    svc.patient = Some(Patient::new("MRN-001"));
    let message = Message::new(svc);

    assert!(Service::is_valid_role("OBS"));
    assert!(message.service().patient.is_some());
    assert_eq!(message.message_type(), MessageType::PatientObservations);
}

#[test]
fn test_predicates_accept_every_listed_code() {
    fn all_valid<T: CodeSet>(predicate: fn(&str) -> bool) {
        for member in T::ALL {
            assert!(predicate(member.code()), "{} rejected", member.code());
        }
        assert!(!predicate("ZZZ_BOGUS"));
    }

    all_valid::<EscapeCode>(Escape::is_valid_code);
    all_valid::<EndOfTopicCode>(EndOfTopic::is_valid_code);
    all_valid::<RequestType>(Request::is_valid_code);
    all_valid::<DirectiveCommand>(Directive::is_valid_command);
    all_valid::<SpecimenSource>(Specimen::is_valid_source);
    all_valid::<SpecimenType>(Specimen::is_valid_type);
    all_valid::<ServiceRole>(Service::is_valid_role);
}

#[test]
fn test_predicates_are_stable_and_agree_with_code_sets() {
    fn stable<T: CodeSet>(predicate: fn(&str) -> bool) {
        let bogus = ["ZZZ_BOGUS", "", " ", "obs", "UNKNOWN"];
        let inputs = T::ALL.iter().map(|m| m.code()).chain(bogus);
        for code in inputs {
            let first = predicate(code);
            assert_eq!(first, predicate(code), "{:?} changed between calls", code);
            assert_eq!(first, T::is_valid(code), "{:?} disagrees with its list", code);
        }
    }

    stable::<EscapeCode>(Escape::is_valid_code);
    stable::<EndOfTopicCode>(EndOfTopic::is_valid_code);
    stable::<RequestType>(Request::is_valid_code);
    stable::<DirectiveCommand>(Directive::is_valid_command);
    stable::<SpecimenSource>(Specimen::is_valid_source);
    stable::<SpecimenType>(Specimen::is_valid_type);
    stable::<ServiceRole>(Service::is_valid_role);
    stable::<Gender>(Patient::is_valid_gender);
    stable::<OperatorAction>(Operator::is_valid_action);
    stable::<ObservationMethod>(Observation::is_valid_method);
    stable::<Interpretation>(Observation::is_valid_interpretation);
    stable::<TerminateReason>(Terminate::is_valid_reason);
    stable::<AckType>(Ack::is_valid_type);
}

#[test]
fn test_coded_value_order_follows_code() {
    let a = CodedValue::new("ABC").with_display_name("zzz");
    let b = CodedValue::new("ABD").with_code_set("AAA");
    assert!(a < b);
    assert!(CodedValue::new("") < CodedValue::new("A"));

    let mut sorted = vec![
        CodedValue::new("OBS"),
        CodedValue::new("D_EV"),
        CodedValue::new("DTV"),
    ];
    sorted.sort();
    let codes: Vec<_> = sorted.iter().map(|cv| cv.code.as_str()).collect();
    assert_eq!(codes, ["DTV", "D_EV", "OBS"]);
}

#[test]
fn test_any_message_covers_every_variant() {
    let messages = vec![
        AnyMessage::from(Message::new(Ack::default())),
        AnyMessage::from(Message::new(DeviceStatus::default())),
        AnyMessage::from(Message::new(poct_types::DeviceEvent::default())),
        AnyMessage::from(Message::new(Escape::default())),
        AnyMessage::from(Message::new(EndOfTopic::default())),
        AnyMessage::from(Message::new(Device::default())),
        AnyMessage::from(Message::new(PatientService::default())),
        AnyMessage::from(Message::new(NonPatientService::default())),
        AnyMessage::from(Message::new(Request::default())),
        AnyMessage::from(Message::new(Terminate::default())),
        AnyMessage::from(Message::new(Directive::default())),
        AnyMessage::from(Message::new(OperatorList::default())),
        AnyMessage::from(Message::new(poct_types::PatientList::default())),
    ];
    let types: HashSet<_> = messages.iter().map(AnyMessage::message_type).collect();
    assert_eq!(types.len(), messages.len());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_roundtrip_any_message() {
    let mut device = Device::new("GLU-0042");
    device.sw_version = Some("4.2.1".to_string());
    let mut hello = Message::new(device);
    hello.set_header_with_control_id(&header(), "17");
    hello.stamp_message_type();

    let mut svc = NonPatientService::new(ServiceDetails::new(
        "qc-1",
        ServiceRole::LiquidQc,
        header().creation_dttm,
    ));
    svc.control = Some(poct_types::ControlCalibration::new("Level 1"));
    let mut qc = Message::new(svc);
    qc.set_header_with_control_id(&header(), "18");

    let messages = vec![AnyMessage::from(hello), AnyMessage::from(qc)];
    let json = serde_json::to_string(&messages).unwrap();
    let parsed: Vec<AnyMessage> = serde_json::from_str(&json).unwrap();
    assert_eq!(messages, parsed);
    assert_eq!(parsed[0].header().message_type, Some(CodedValue::new("HEL.R01")));
}
