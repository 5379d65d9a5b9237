//! Flow messages.
//!
//! A flow either starts with a `data_exchange` round trip to the business
//! endpoint or `navigate`s straight to a screen with initial data. The
//! `flow_action` tag decides whether `flow_action_payload` is present.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::interactive::{InteractiveBody, InteractiveFooter, TextHeader};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractiveFlow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<TextHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<InteractiveBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<InteractiveFooter>,
    pub action: FlowAction,
}

impl InteractiveFlow {
    /// A published flow that opens with a data-exchange request.
    pub fn data_exchange(
        flow_id: impl Into<String>,
        flow_token: impl Into<String>,
        flow_cta: impl Into<String>,
    ) -> Self {
        Self::with_start(flow_id, flow_token, flow_cta, FlowStart::DataExchange)
    }

    /// A published flow that opens directly on `screen`.
    pub fn navigate(
        flow_id: impl Into<String>,
        flow_token: impl Into<String>,
        flow_cta: impl Into<String>,
        screen: impl Into<String>,
        data: BTreeMap<String, FlowValue>,
    ) -> Self {
        Self::with_start(
            flow_id,
            flow_token,
            flow_cta,
            FlowStart::Navigate {
                flow_action_payload: FlowNavigatePayload {
                    screen: screen.into(),
                    data,
                },
            },
        )
    }

    fn with_start(
        flow_id: impl Into<String>,
        flow_token: impl Into<String>,
        flow_cta: impl Into<String>,
        start: FlowStart,
    ) -> Self {
        Self {
            header: None,
            body: None,
            footer: None,
            action: FlowAction::Flow {
                parameters: FlowParameters {
                    mode: FlowMode::Published,
                    flow_message_version: FlowMessageVersion::V3,
                    flow_token: flow_token.into(),
                    flow_id: flow_id.into(),
                    flow_cta: flow_cta.into(),
                    start,
                },
            },
        }
    }

    /// Send the draft version of the flow instead of the published one.
    pub fn with_mode(mut self, mode: FlowMode) -> Self {
        let FlowAction::Flow { parameters } = &mut self.action;
        parameters.mode = mode;
        self
    }

    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(TextHeader::new(text));
        self
    }

    pub fn with_body(mut self, text: impl Into<String>) -> Self {
        self.body = Some(InteractiveBody::new(text));
        self
    }

    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(InteractiveFooter::new(text));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum FlowAction {
    Flow { parameters: FlowParameters },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowParameters {
    pub mode: FlowMode,
    #[serde(default)]
    pub flow_message_version: FlowMessageVersion,
    pub flow_token: String,
    pub flow_id: String,
    /// Label of the button that opens the flow.
    pub flow_cta: String,
    /// Serialized inline as `flow_action` (plus `flow_action_payload` for `navigate`).
    #[serde(flatten)]
    pub start: FlowStart,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowMode {
    Draft,
    #[default]
    Published,
}

/// Flow message version. Only `"3"` is accepted by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowMessageVersion {
    #[default]
    #[serde(rename = "3")]
    V3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "flow_action", rename_all = "snake_case")]
pub enum FlowStart {
    DataExchange,
    Navigate {
        flow_action_payload: FlowNavigatePayload,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNavigatePayload {
    /// Id of the first screen to show.
    pub screen: String,
    pub data: BTreeMap<String, FlowValue>,
}

/// A scalar handed to the first flow screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlowValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl From<bool> for FlowValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FlowValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Fractional numbers. NaN and infinities have no JSON form and are handed
/// back as the error.
impl TryFrom<f64> for FlowValue {
    type Error = f64;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        serde_json::Number::from_f64(value)
            .map(Self::Number)
            .ok_or(value)
    }
}

impl From<String> for FlowValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FlowValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Interactive;
    use serde_json::json;

    #[test]
    fn test_data_exchange_has_no_payload() {
        let flow = InteractiveFlow::data_exchange("1234", "tok-1", "Book now");
        let value = serde_json::to_value(Interactive::from(flow)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "flow",
                "action": {
                    "name": "flow",
                    "parameters": {
                        "mode": "published",
                        "flow_message_version": "3",
                        "flow_token": "tok-1",
                        "flow_id": "1234",
                        "flow_cta": "Book now",
                        "flow_action": "data_exchange"
                    }
                }
            })
        );
    }

    #[test]
    fn test_navigate_carries_screen_and_data() {
        let mut data = BTreeMap::new();
        data.insert("party_size".to_string(), FlowValue::from(4));
        data.insert("vip".to_string(), FlowValue::from(true));
        data.insert("name".to_string(), FlowValue::from("Ada"));

        let flow = InteractiveFlow::navigate("1234", "tok-2", "Reserve", "WELCOME", data)
            .with_mode(FlowMode::Draft)
            .with_body("Reserve a table");
        let value = serde_json::to_value(Interactive::from(flow)).unwrap();
        let params = &value["action"]["parameters"];

        assert_eq!(value["body"], json!({ "text": "Reserve a table" }));
        assert_eq!(params["mode"], "draft");
        assert_eq!(params["flow_action"], "navigate");
        assert_eq!(
            params["flow_action_payload"],
            json!({
                "screen": "WELCOME",
                "data": { "name": "Ada", "party_size": 4, "vip": true }
            })
        );
    }

    #[test]
    fn test_flow_roundtrip_keeps_start_variant() {
        let flow = InteractiveFlow::navigate("9", "t", "Go", "S1", BTreeMap::new());
        let expected = Interactive::Flow(flow.clone());
        let value = serde_json::to_value(Interactive::from(flow)).unwrap();
        let parsed: Interactive = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_fractional_values() {
        let mut data = BTreeMap::new();
        data.insert("rating".to_string(), FlowValue::try_from(4.5).unwrap());
        data.insert("count".to_string(), FlowValue::from(-2));

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value, json!({ "count": -2, "rating": 4.5 }));

        let parsed: FlowValue = serde_json::from_value(json!(0.25)).unwrap();
        assert_eq!(parsed, FlowValue::try_from(0.25).unwrap());
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        assert!(FlowValue::try_from(f64::NAN).is_err());
        assert_eq!(FlowValue::try_from(f64::INFINITY), Err(f64::INFINITY));
    }
}
