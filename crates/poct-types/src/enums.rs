//! POCT1-A enumerated code lists.
//!
//! Each list is a closed enum with `from_code`/`code`/`is_valid`. The message
//! structs keep their coded fields open; these enums are the typed view.

use crate::code_set::code_set;

code_set! {
    /// Acknowledgement type (`ACK.type_cd`).
    pub enum AckType {
        /// Application Accept. The receiver assumes responsibility for the
        /// message contents.
        ApplicationAccept => "AA",
        /// Application Error. See the error detail for more information.
        ApplicationError => "AE",
    }
}

code_set! {
    /// Reason a topic was escaped (`ESC.detail`).
    pub enum EscapeCode {
        /// Other reason.
        Other => "OTH",
        /// Unsupported topic.
        UnsupportedTopic => "TOP",
        /// Cannot complete topic at this time.
        CannotComplete => "CNC",
    }
}

code_set! {
    /// Topic being closed by an end-of-topic message (`EOT.topic_cd`).
    pub enum EndOfTopicCode {
        /// End of the device events topic.
        DeviceEvents => "EVS",
        /// End of the observations topic.
        Observations => "OBS",
        /// End of the operator list topic.
        OperatorList => "OPL",
        /// End of the patient list topic.
        PatientList => "PTL",
    }
}

code_set! {
    /// List maintenance action carried by operator entries.
    pub enum OperatorAction {
        /// Insert the entry into the associated list.
        Insert => "I",
        /// Delete the entry from the associated list.
        Delete => "D",
    }
}

code_set! {
    /// Administrative gender (`PT.gender_cd`).
    pub enum Gender {
        /// Female.
        Female => "F",
        /// Male.
        Male => "M",
        /// Other.
        Other => "O",
        /// Unknown.
        Unknown => "U",
        /// Ambiguous.
        Ambiguous => "A",
        /// Not applicable.
        NotApplicable => "N",
    }
}

code_set! {
    /// How an observation value was obtained (`OBS.method_cd`).
    ///
    /// Vendors may extend this list.
    pub enum ObservationMethod {
        /// Calculated.
        Calculated => "C",
        /// Default.
        Default => "D",
        /// Estimated.
        Estimated => "E",
        /// Externally input to the device.
        Input => "I",
        /// Measured.
        Measured => "M",
        /// Origin of the value is unknown.
        Unknown => "U",
    }
}

code_set! {
    /// Qualitative result value (`OBS.qualitative_value`).
    pub enum QualitativeValue {
        /// Low.
        Low => "L",
        /// High.
        High => "H",
        /// Very low.
        VeryLow => "LL",
        /// Very high.
        VeryHigh => "HH",
        /// Normal.
        Normal => "N",
        /// Abnormal.
        Abnormal => "A",
        /// Very abnormal, analogous to panic limits for numeric units.
        VeryAbnormal => "AA",
        /// Significant change up.
        ChangeUp => "U",
        /// Significant change down.
        ChangeDown => "D",
        /// Better, when direction is not relevant.
        Better => "B",
        /// Worse, when direction is not relevant.
        Worse => "W",
    }
}

code_set! {
    /// Result status (`OBS.status_cd`).
    pub enum ObservationStatus {
        /// Accepted.
        Accepted => "A",
        /// Discarded.
        Discarded => "D",
        /// Unknown.
        Unknown => "U",
        /// Rejected.
        Rejected => "X",
    }
}

code_set! {
    /// Abnormal flag for a result (`OBS.interpretation_cd`).
    pub enum Interpretation {
        /// Below low normal.
        BelowLowNormal => "L",
        /// Above high normal.
        AboveHighNormal => "H",
        /// Below lower panic limit.
        BelowLowPanic => "LL",
        /// Above upper panic limit.
        AboveHighPanic => "HH",
        /// Below the absolute low end of the instrument scale.
        BelowScale => "LESS",
        /// Above the absolute high end of the instrument scale.
        AboveScale => "GREATER",
        /// Normal, for non-numeric results.
        Normal => "N",
        /// Abnormal, for non-numeric results.
        Abnormal => "A",
        /// Very abnormal, for non-numeric results.
        VeryAbnormal => "AA",
        /// No range defined, or normal ranges don't apply.
        NoRange => "null",
        /// Significant change up.
        ChangeUp => "U",
        /// Significant change down.
        ChangeDown => "D",
        /// Better, when direction is not relevant.
        Better => "B",
        /// Worse, when direction is not relevant.
        Worse => "W",
    }
}

code_set! {
    /// Purpose of a service (`SVC.role_cd`).
    pub enum ServiceRole {
        /// Patient observation.
        Observation => "OBS",
        /// Liquid QC.
        LiquidQc => "LQC",
        /// Electronic QC.
        ElectronicQc => "EQC",
        /// Calibration verification.
        CalibrationVerification => "CVR",
        /// Calibration.
        Calibration => "CAL",
        /// Proficiency testing.
        Proficiency => "PRF",
        /// Unknown.
        Unknown => "UNK",
    }
}

impl ServiceRole {
    /// Returns true if this role describes a patient test rather than
    /// QC, calibration or proficiency work.
    pub fn is_patient_role(self) -> bool {
        self == Self::Observation
    }
}

code_set! {
    /// Service status (`SVC.status_cd`).
    pub enum ServiceStatus {
        /// Normal.
        Normal => "NRM",
        /// Override.
        Override => "OVR",
        /// Unknown.
        Unknown => "UNK",
        /// IHE extension: initiate POC testing.
        Initiate => "INI",
    }
}

impl ServiceStatus {
    /// Returns true for the codes of the base standard. `INI` is an IHE
    /// extension.
    pub fn is_standard(self) -> bool {
        self != Self::Initiate
    }
}

code_set! {
    /// Why a service is being sent (`SVC.reason_cd`).
    pub enum ServiceReason {
        /// New.
        New => "NEW",
        /// Resend.
        Resend => "RES",
        /// Edited.
        Edited => "EDT",
    }
}

code_set! {
    /// Requested topic (`REQ.request_cd`).
    pub enum RequestType {
        /// Request observations.
        Observations => "ROBS",
        /// Request device events.
        DeviceEvents => "RDEV",
    }
}

code_set! {
    /// Why a conversation ended (`TRM.reason_cd`).
    pub enum TerminateReason {
        /// Normal.
        Normal => "NRM",
        /// Abnormal.
        Abnormal => "ABN",
        /// User initiated.
        User => "USR",
        /// Unknown.
        Unknown => "UNK",
    }
}

code_set! {
    /// Standard directive commands (`DTV.command_cd`).
    pub enum DirectiveCommand {
        /// Set device time.
        SetTime => "SET_TIME",
        /// Lockout.
        Lock => "LOCK",
        /// Release lockout.
        Unlock => "UNLOCK",
        /// Set standby.
        GotoStandby => "GOTO_STANDBY",
        /// Set ready.
        GotoReady => "GOTO_READY",
        /// Start continuous.
        StartContinuous => "START_CONTINUOUS",
    }
    unknown Unknown => "UNKNOWN";
}

code_set! {
    /// Severity of a device event (`EVT.severity_cd`).
    pub enum Severity {
        /// Critical.
        Critical => "C",
        /// Note.
        Note => "N",
        /// Warning.
        Warning => "W",
    }
    default Note;
}

code_set! {
    /// Operating condition of a device (`DST.condition_cd`).
    pub enum DeviceCondition {
        /// Running a test or otherwise occupied.
        Busy => "BUSY",
        /// Locked so that it cannot be used to run tests.
        Locked => "LOCKED",
        /// One or more analytic tests have been disabled.
        PartialLocked => "PARTIAL_LOCKED",
        /// Ready to process tests.
        Ready => "READY",
        /// Idle; can run a new test once awakened.
        Standby => "STANDBY",
    }
    unknown Unknown => "UNKNOWN";
}

code_set! {
    /// Kind of note attached to a service or observation (`NTE.type_cd`).
    pub enum NoteType {
        /// Operator comment.
        OperatorComment => "OPERATOR_COMMENT",
        /// Abnormal flag.
        AbnormalFlag => "ABNORMAL_FLAG",
    }
    default OperatorComment;
}

code_set! {
    /// Topics a device can announce in its static capabilities.
    pub enum Topic {
        /// Observations.
        Observations => "OBS",
        /// Device events.
        DeviceEvents => "D_EV",
        /// Directives.
        Directives => "DTV",
        /// Operator list.
        OperatorList => "OP_LST",
        /// Incremental operator list.
        OperatorListIncremental => "OP_LST_I",
        /// Patient list.
        PatientList => "PT_LST",
        /// Incremental patient list.
        PatientListIncremental => "PT_LST_I",
    }
}

code_set! {
    /// Acknowledgement profile of a connection.
    pub enum ConnectionProfileType {
        /// Continuous synchronous.
        ContinuousSynchronous => "CS",
        /// Synchronous acknowledgement.
        SynchronousAck => "SA",
        /// Asynchronous acknowledgement.
        AsynchronousAck => "AA",
    }
}

code_set! {
    /// Operator permission level (`ACC.permission_lvl`).
    pub enum PermissionLevel {
        /// Full access to the system.
        Supervisor => "SUPERVISOR",
        /// Everything except adding users and changing access levels.
        KeyOperator => "KEY_OPERATOR",
        /// Same as `User`, and may also accept failed QC.
        TrustedUser => "TRUSTED_USER",
        /// Can operate the system to produce test results.
        User => "USER",
        /// Special service diagnostics and configuration modes.
        Service => "SERVICE",
        /// Can operate the system but not report results.
        Training => "TRAINING",
    }
    unknown Undefined => "UNDEFINED";
}

code_set! {
    /// Methods an operator is granted access to.
    pub enum AccessMethod {
        /// All methods.
        All => "ALL",
    }
}
