//! # poct-types
//!
//! Type definitions for the POCT1-A point-of-care device messaging standard.
//!
//! This crate provides the in-memory vocabulary exchanged between a bedside
//! or lab instrument and its data manager: primitive clinical data types
//! (coded values, physical quantities, intervals, person names), the message
//! header, and one body struct per topic (device, observations, operator and
//! patient lists, directives and so on).
//!
//! Coded fields stay open [`CodedValue`]s so vendor extensions survive
//! untouched. Each field with a standard code list has an `is_valid_*`
//! predicate and a typed enum for consumers that want one.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature to depend on `chrono` only.
//!
//! ## Usage
//!
//! ```rust
//! use poct_types::{Ack, CodedValue, Gender, NullFlavor, Patient};
//!
//! // A patient whose gender was asked but not known
//! let patient = Patient {
//!     gender: Some(CodedValue::null(NullFlavor::AskedUnknown)),
//!     ..Patient::new("MRN-001")
//! };
//! assert!(patient.gender.as_ref().unwrap().is_null());
//!
//! // Code list membership
//! assert!(Patient::is_valid_gender(Gender::Female.code()));
//! assert!(Ack::is_valid_type("AA"));
//! assert!(!Ack::is_valid_code(999));
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! poct-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod code_set;

mod ack;
mod coded;
mod control;
mod device;
mod enums;
mod header;
mod list;
mod name;
mod null_flavor;
mod observation;
mod operator;
mod patient;
mod quantity;
mod reagent;
mod service;
mod specimen;
pub mod well_known;

// Re-export all public types at crate root
pub use ack::{Ack, AckCode};
pub use code_set::CodeSet;
pub use coded::{Ce, CodedElement, CodedValue, Cv};
pub use control::{Directive, EndOfTopic, Escape, Request, Terminate};
pub use device::{ConnectionProfile, Device, DeviceEvent, DeviceStaticCapabilities, DeviceStatus};
pub use enums::{
    AccessMethod, AckType, ConnectionProfileType, DeviceCondition, DirectiveCommand,
    EndOfTopicCode, EscapeCode, Gender, Interpretation, NoteType, ObservationMethod,
    ObservationStatus, OperatorAction, PermissionLevel, QualitativeValue, RequestType,
    ServiceReason, ServiceRole, ServiceStatus, Severity, TerminateReason, Topic,
};
pub use header::{Header, MessageType};
pub use list::{ListMode, OperatorList, OperatorRecord, PatientList, PatientRecord};
pub use name::{PersonName, Pn};
pub use null_flavor::NullFlavor;
pub use observation::{Note, Observation};
pub use operator::{AccessControl, Operator};
pub use patient::{Order, Patient};
pub use quantity::{Interval, Ivl, PhysicalQuantity, Pq};
pub use reagent::{ControlCalibration, Reagent};
pub use service::{NonPatientService, PatientService, Service, ServiceDetails};
pub use specimen::{Specimen, SpecimenSource, SpecimenType};
