//! Outbound request bodies posted to `/messages`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::interactive::Interactive;
use crate::message::{Location, MessageContext, Reaction, TextMessage};

/// Value of `messaging_product` on every request.
pub const MESSAGING_PRODUCT: &str = "whatsapp";

/// Value of `recipient_type` on every message send.
pub const RECIPIENT_TYPE_INDIVIDUAL: &str = "individual";

/// The `type` discriminator of a message send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    Reaction,
    Location,
    Contacts,
    Interactive,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Reaction => "reaction",
            Self::Location => "location",
            Self::Contacts => "contacts",
            Self::Interactive => "interactive",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The variant-specific part of a message send.
///
/// Serializes as a single entry keyed by the kind name, e.g.
/// `"text": {...}` or `"contacts": [...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessagePayload {
    Text(TextMessage),
    Reaction(Reaction),
    Location(Location),
    Contacts(Vec<Contact>),
    Interactive(Interactive),
}

impl MessagePayload {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Text(_) => MessageKind::Text,
            Self::Reaction(_) => MessageKind::Reaction,
            Self::Location(_) => MessageKind::Location,
            Self::Contacts(_) => MessageKind::Contacts,
            Self::Interactive(_) => MessageKind::Interactive,
        }
    }

    /// Whether a reply context may accompany this payload.
    ///
    /// Reactions point at their target through `reaction.message_id` and
    /// never carry a context.
    pub fn accepts_context(&self) -> bool {
        !matches!(self, Self::Reaction(_))
    }
}

impl From<TextMessage> for MessagePayload {
    fn from(value: TextMessage) -> Self {
        Self::Text(value)
    }
}

impl From<Reaction> for MessagePayload {
    fn from(value: Reaction) -> Self {
        Self::Reaction(value)
    }
}

impl From<Location> for MessagePayload {
    fn from(value: Location) -> Self {
        Self::Location(value)
    }
}

impl From<Vec<Contact>> for MessagePayload {
    fn from(value: Vec<Contact>) -> Self {
        Self::Contacts(value)
    }
}

impl From<Interactive> for MessagePayload {
    fn from(value: Interactive) -> Self {
        Self::Interactive(value)
    }
}

/// A complete message-send body.
///
/// The protocol constants, recipient and discriminator are private and set by
/// [`OutboundMessage::new`]; the payload lives under its own key. A payload
/// therefore cannot shadow the envelope, and `type` always names the key the
/// payload is nested under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundMessage {
    messaging_product: &'static str,
    recipient_type: &'static str,
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<MessageContext>,
    #[serde(flatten)]
    payload: MessagePayload,
    #[serde(rename = "type")]
    kind: MessageKind,
}

impl OutboundMessage {
    /// Build a send body for `to`. A context is dropped for payloads that do
    /// not accept one.
    pub fn new(
        to: impl Into<String>,
        payload: impl Into<MessagePayload>,
        context: Option<MessageContext>,
    ) -> Self {
        let payload = payload.into();
        let context = context.filter(|_| payload.accepts_context());
        Self {
            messaging_product: MESSAGING_PRODUCT,
            recipient_type: RECIPIENT_TYPE_INDIVIDUAL,
            to: to.into(),
            context,
            kind: payload.kind(),
            payload,
        }
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn context(&self) -> Option<&MessageContext> {
        self.context.as_ref()
    }

    pub fn payload(&self) -> &MessagePayload {
        &self.payload
    }
}

/// Marks a received message as read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadReceipt {
    messaging_product: &'static str,
    status: &'static str,
    message_id: String,
}

impl ReadReceipt {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT,
            status: "read",
            message_id: message_id.into(),
        }
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactName;
    use crate::interactive::InteractiveLocationRequest;
    use serde_json::json;

    #[test]
    fn test_text_envelope() {
        let body = OutboundMessage::new("1555", TextMessage::new("hi"), None);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "messaging_product": "whatsapp",
                "recipient_type": "individual",
                "to": "1555",
                "type": "text",
                "text": { "body": "hi" }
            })
        );
    }

    #[test]
    fn test_type_names_the_payload_key() {
        let payloads: Vec<MessagePayload> = vec![
            TextMessage::new("a").into(),
            Reaction::new("wamid.1", "🔥").into(),
            Location::new(0.0, 0.0).into(),
            vec![Contact::new(ContactName::new("A", "B"))].into(),
            MessagePayload::Interactive(InteractiveLocationRequest::new("where?").into()),
        ];

        for payload in payloads {
            let kind = payload.kind();
            let message = OutboundMessage::new("1", payload, None);
            let value = serde_json::to_value(&message).unwrap();
            let object = value.as_object().unwrap();

            assert_eq!(object["type"], kind.as_str());
            assert!(object.contains_key(kind.as_str()));
            // envelope (4 keys) + payload key
            assert_eq!(object.len(), 5, "unexpected keys for {}", kind);
        }
    }

    #[test]
    fn test_context_is_attached() {
        let body = OutboundMessage::new(
            "1555",
            Location::new(1.0, 2.0),
            Some(MessageContext::new("wamid.Q")),
        );
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["context"], json!({ "message_id": "wamid.Q" }));
    }

    #[test]
    fn test_reaction_drops_context() {
        let body = OutboundMessage::new(
            "1555",
            Reaction::new("wamid.X", "👍"),
            Some(MessageContext::new("wamid.X")),
        );
        assert!(body.context().is_none());

        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("context").is_none());
        assert_eq!(
            value["reaction"],
            json!({ "message_id": "wamid.X", "emoji": "👍" })
        );
    }

    #[test]
    fn test_read_receipt_shape() {
        let value = serde_json::to_value(ReadReceipt::new("wamid.R")).unwrap();
        assert_eq!(
            value,
            json!({ "messaging_product": "whatsapp", "status": "read", "message_id": "wamid.R" })
        );
    }

    #[test]
    fn test_kind_serializes_like_display() {
        for kind in [
            MessageKind::Text,
            MessageKind::Reaction,
            MessageKind::Location,
            MessageKind::Contacts,
            MessageKind::Interactive,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.to_string());
        }
    }
}
