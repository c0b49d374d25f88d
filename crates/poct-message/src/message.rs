//! The message envelope: one header bound to one body.

use poct_types::{
    well_known, Ack, Device, DeviceEvent, DeviceStatus, Directive, EndOfTopic, Escape, Header,
    MessageType, NonPatientService, OperatorList, PatientList, PatientService, Request, Terminate,
};

use crate::ControlIdSequence;

/// A body that can travel in a [`Message`].
///
/// The message type is a property of the body: most bodies always report
/// the same type, while list bodies report the complete or incremental type
/// from their mode.
pub trait MessageBody {
    /// Returns the message type this body is sent as.
    fn message_type(&self) -> MessageType;
}

macro_rules! fixed_message_type {
    ($($body:ty => $tag:ident),+ $(,)?) => {
        $(
            impl MessageBody for $body {
                fn message_type(&self) -> MessageType {
                    MessageType::$tag
                }
            }
        )+
    };
}

fixed_message_type! {
    Ack => Ack,
    DeviceStatus => DeviceStatus,
    DeviceEvent => DeviceEvents,
    Escape => Escape,
    EndOfTopic => EndOfTopic,
    Device => Hello,
    PatientService => PatientObservations,
    NonPatientService => NonPatientObservations,
    Request => Request,
    Terminate => Terminate,
    Directive => BasicDirective,
}

impl MessageBody for OperatorList {
    fn message_type(&self) -> MessageType {
        OperatorList::message_type(self)
    }
}

impl MessageBody for PatientList {
    fn message_type(&self) -> MessageType {
        PatientList::message_type(self)
    }
}

/// A header bound to exactly one body.
///
/// The body type is fixed for the life of the message; only its contents can
/// be replaced. A message cannot be cloned: two copies would carry the same
/// control id and a receiver could not tell them from a resend. Move it
/// instead.
///
/// # Examples
///
/// ```
/// use poct_message::{ControlIdSequence, HelloMessage, Message};
/// use poct_types::{Device, Header, MessageType};
///
/// let sequence = ControlIdSequence::new();
/// let mut hello = Message::new(Device::new("GLU-0042"));
/// hello.set_header(&Header::default(), &sequence);
///
/// assert_eq!(hello.message_type(), MessageType::Hello);
/// assert_eq!(hello.header().control_id, "1");
/// assert_eq!(hello.device().device_id, "GLU-0042");
/// ```
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message<B> {
    header: Header,
    body: B,
}

impl<B: MessageBody> Message<B> {
    /// Creates a message with a default header.
    pub fn new(body: B) -> Self {
        Self {
            header: Header::default(),
            body,
        }
    }

    /// Creates a message around a header received from the wire.
    ///
    /// The header is kept as sent, including the sender's control id and
    /// version, so that [`check_header`](crate::check_header) can judge it.
    pub fn from_parts(header: Header, body: B) -> Self {
        Self { header, body }
    }

    /// Copies `header` and gives it the next control id from `sequence`.
    ///
    /// Use this for outbound messages. The version is always POCT1.
    pub fn set_header(&mut self, header: &Header, sequence: &ControlIdSequence) {
        let control_id = sequence.next_id();
        tracing::trace!(
            control_id = %control_id,
            message_type = %self.message_type(),
            "assigned control id"
        );
        self.set_header_with_control_id(header, control_id);
    }

    /// Copies `header` with the caller's control id, bypassing the sequence.
    ///
    /// Use this when rebuilding an inbound message, whose id must match the
    /// sender's. The version is always POCT1.
    pub fn set_header_with_control_id(&mut self, header: &Header, control_id: impl Into<String>) {
        self.header = Header {
            control_id: control_id.into(),
            version_id: well_known::POCT1_VERSION_ID.to_string(),
            ..header.clone()
        };
    }

    /// Sets `HDR.message_type` from the body's message type.
    pub fn stamp_message_type(&mut self) {
        self.header.message_type = Some(self.message_type().into());
    }

    /// Returns the header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the message type of the body.
    pub fn message_type(&self) -> MessageType {
        self.body.message_type()
    }

    /// Returns the body.
    pub fn body(&self) -> &B {
        &self.body
    }

    /// Returns the body for editing.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Replaces the body.
    pub fn set_body(&mut self, body: B) {
        self.body = body;
    }

    /// Splits the message into its header and body.
    pub fn into_parts(self) -> (Header, B) {
        (self.header, self.body)
    }
}

macro_rules! body_accessors {
    ($($alias:ident: $body:ty => $get:ident, $set:ident;)+) => {
        $(
            #[doc = concat!("A message carrying a [`", stringify!($body), "`] body.")]
            pub type $alias = Message<$body>;

            impl Message<$body> {
                #[doc = concat!("Returns the [`", stringify!($body), "`] body.")]
                pub fn $get(&self) -> &$body {
                    self.body()
                }

                #[doc = concat!("Replaces the [`", stringify!($body), "`] body.")]
                pub fn $set(&mut self, body: $body) {
                    self.set_body(body);
                }
            }
        )+
    };
}

body_accessors! {
    AckMessage: Ack => ack, set_ack;
    DeviceStatusMessage: DeviceStatus => device_status, set_device_status;
    DeviceEventMessage: DeviceEvent => device_event, set_device_event;
    EscapeMessage: Escape => escape, set_escape;
    EndOfTopicMessage: EndOfTopic => end_of_topic, set_end_of_topic;
    HelloMessage: Device => device, set_device;
    PatientObservationsMessage: PatientService => service, set_service;
    NonPatientObservationsMessage: NonPatientService => service, set_service;
    RequestMessage: Request => request, set_request;
    TerminateMessage: Terminate => terminate, set_terminate;
    DirectiveMessage: Directive => directive, set_directive;
    OperatorListMessage: OperatorList => operator_list, set_operator_list;
    PatientListMessage: PatientList => patient_list, set_patient_list;
}
