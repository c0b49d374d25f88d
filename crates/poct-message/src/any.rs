//! A message of any type.

use poct_types::{
    Ack, Device, DeviceEvent, DeviceStatus, Directive, EndOfTopic, Escape, Header, MessageType,
    NonPatientService, OperatorList, PatientList, PatientService, Request, Service, Terminate,
};

use crate::Message;

/// Any message, for consumers that handle a mixed stream.
///
/// Matching on the variant gives the typed message, so reading the wrong
/// body cannot happen. Each variant holds its message boxed.
///
/// # Examples
///
/// ```
/// use poct_message::{AnyMessage, Message};
/// use poct_types::{Escape, EscapeCode, MessageType};
///
/// let message = AnyMessage::from(Message::new(Escape::new("12", EscapeCode::UnsupportedTopic)));
/// assert_eq!(message.message_type(), MessageType::Escape);
///
/// if let AnyMessage::Escape(escape) = &message {
///     assert_eq!(escape.escape().esc_control_id, "12");
/// }
/// ```
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum AnyMessage {
    /// Acknowledgement.
    Ack(Box<Message<Ack>>),
    /// Device status.
    DeviceStatus(Box<Message<DeviceStatus>>),
    /// Device event.
    DeviceEvent(Box<Message<DeviceEvent>>),
    /// Escape.
    Escape(Box<Message<Escape>>),
    /// End of topic.
    EndOfTopic(Box<Message<EndOfTopic>>),
    /// Hello, carrying the device identity.
    Hello(Box<Message<Device>>),
    /// Patient observations.
    PatientObservations(Box<Message<PatientService>>),
    /// Non-patient observations.
    NonPatientObservations(Box<Message<NonPatientService>>),
    /// Request.
    Request(Box<Message<Request>>),
    /// Terminate.
    Terminate(Box<Message<Terminate>>),
    /// Directive.
    Directive(Box<Message<Directive>>),
    /// Operator list.
    OperatorList(Box<Message<OperatorList>>),
    /// Patient list.
    PatientList(Box<Message<PatientList>>),
}

macro_rules! for_each_variant {
    ($self:expr, $message:ident => $body:expr) => {
        match $self {
            AnyMessage::Ack($message) => $body,
            AnyMessage::DeviceStatus($message) => $body,
            AnyMessage::DeviceEvent($message) => $body,
            AnyMessage::Escape($message) => $body,
            AnyMessage::EndOfTopic($message) => $body,
            AnyMessage::Hello($message) => $body,
            AnyMessage::PatientObservations($message) => $body,
            AnyMessage::NonPatientObservations($message) => $body,
            AnyMessage::Request($message) => $body,
            AnyMessage::Terminate($message) => $body,
            AnyMessage::Directive($message) => $body,
            AnyMessage::OperatorList($message) => $body,
            AnyMessage::PatientList($message) => $body,
        }
    };
}

impl AnyMessage {
    /// Returns the header.
    pub fn header(&self) -> &Header {
        for_each_variant!(self, message => message.header())
    }

    /// Returns the control id from the header.
    pub fn control_id(&self) -> &str {
        &self.header().control_id
    }

    /// Returns the message type of the body.
    pub fn message_type(&self) -> MessageType {
        for_each_variant!(self, message => message.message_type())
    }

    /// Returns the service carried by an observations message, cloned into
    /// the [`Service`] sum type.
    pub fn service(&self) -> Option<Service> {
        match self {
            Self::PatientObservations(message) => Some(Service::from(message.body().clone())),
            Self::NonPatientObservations(message) => {
                Some(Service::from(message.body().clone()))
            }
            _ => None,
        }
    }
}

macro_rules! any_from {
    ($($body:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<Message<$body>> for AnyMessage {
                fn from(message: Message<$body>) -> Self {
                    Self::$variant(Box::new(message))
                }
            }
        )+
    };
}

any_from! {
    Ack => Ack,
    DeviceStatus => DeviceStatus,
    DeviceEvent => DeviceEvent,
    Escape => Escape,
    EndOfTopic => EndOfTopic,
    Device => Hello,
    PatientService => PatientObservations,
    NonPatientService => NonPatientObservations,
    Request => Request,
    Terminate => Terminate,
    Directive => Directive,
    OperatorList => OperatorList,
    PatientList => PatientList,
}

#[cfg(test)]
mod tests {
    use super::*;
    use poct_types::{ListMode, RequestType};

    #[test]
    fn test_from_typed_message() {
        let message = AnyMessage::from(Message::new(Request::new(RequestType::Observations)));
        assert!(matches!(message, AnyMessage::Request(_)));
        assert_eq!(message.message_type(), MessageType::Request);
    }

    #[test]
    fn test_header_access() {
        let mut typed = Message::new(Terminate::default());
        typed.set_header_with_control_id(&Header::default(), "99");
        let message = AnyMessage::from(typed);
        assert_eq!(message.control_id(), "99");
        assert_eq!(message.header().version_id, "POCT1");
    }

    #[test]
    fn test_service_view() {
        let message = AnyMessage::from(Message::new(NonPatientService::default()));
        assert!(matches!(message.service(), Some(Service::NonPatient(_))));

        let list = AnyMessage::from(Message::new(PatientList {
            mode: ListMode::Incremental,
            patients: Vec::new(),
        }));
        assert!(list.service().is_none());
        assert_eq!(list.message_type(), MessageType::PatientListIncremental);
    }
}
