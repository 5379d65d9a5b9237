//! Response bodies returned by `/messages`.

use serde::{Deserialize, Serialize};

/// Successful reply to a message send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub messaging_product: String,
    /// Recipients as resolved by the API.
    #[serde(default)]
    pub contacts: Vec<ResponseContact>,
    /// Accepted messages, normally exactly one.
    #[serde(default)]
    pub messages: Vec<SentMessage>,
}

impl MessageResponse {
    /// Id of the first accepted message, usable as a later reply target.
    pub fn message_id(&self) -> Option<&str> {
        self.messages.first().map(|m| m.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseContact {
    /// Recipient as it was sent in `to`.
    pub input: String,
    pub wa_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_status: Option<String>,
}

/// Reply to a status update such as a read receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_send_response() {
        let response: MessageResponse = serde_json::from_value(json!({
            "messaging_product": "whatsapp",
            "contacts": [{ "input": "15551234567", "wa_id": "15551234567" }],
            "messages": [{ "id": "wamid.HBgL", "message_status": "accepted" }]
        }))
        .unwrap();

        assert_eq!(response.message_id(), Some("wamid.HBgL"));
        assert_eq!(response.contacts[0].wa_id, "15551234567");
        assert_eq!(
            response.messages[0].message_status.as_deref(),
            Some("accepted")
        );
    }

    #[test]
    fn test_parse_sparse_response() {
        let sparse = json!({ "messaging_product": "whatsapp" });
        let response: MessageResponse = serde_json::from_value(sparse).unwrap();
        assert!(response.message_id().is_none());
    }
}
