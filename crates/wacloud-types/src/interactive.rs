//! Interactive message payloads.
//!
//! [`Interactive`] is a closed union tagged by `type`. Each variant owns its
//! header/body/footer/action shape; action names that the API fixes per
//! variant (`cta_url`, `send_location`, ...) come from serde tags rather than
//! caller-supplied strings.

use serde::{Deserialize, Serialize};

use crate::address::InteractiveAddress;
use crate::flow::InteractiveFlow;

/// An interactive message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interactive {
    /// Menu of up to ten rows grouped in sections.
    List(InteractiveList),
    /// Call-to-action button that opens a URL.
    CtaUrl(InteractiveCta),
    /// Up to three quick-reply buttons.
    Button(InteractiveButton),
    /// Asks the user to share their location.
    #[serde(rename = "location_request_message")]
    LocationRequest(InteractiveLocationRequest),
    /// Launches a WhatsApp Flow.
    Flow(InteractiveFlow),
    /// Asks the user for a delivery address.
    #[serde(rename = "address_message")]
    Address(InteractiveAddress),
}

impl Interactive {
    /// The wire value of the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::CtaUrl(_) => "cta_url",
            Self::Button(_) => "button",
            Self::LocationRequest(_) => "location_request_message",
            Self::Flow(_) => "flow",
            Self::Address(_) => "address_message",
        }
    }
}

impl From<InteractiveList> for Interactive {
    fn from(value: InteractiveList) -> Self {
        Self::List(value)
    }
}

impl From<InteractiveCta> for Interactive {
    fn from(value: InteractiveCta) -> Self {
        Self::CtaUrl(value)
    }
}

impl From<InteractiveButton> for Interactive {
    fn from(value: InteractiveButton) -> Self {
        Self::Button(value)
    }
}

impl From<InteractiveLocationRequest> for Interactive {
    fn from(value: InteractiveLocationRequest) -> Self {
        Self::LocationRequest(value)
    }
}

impl From<InteractiveFlow> for Interactive {
    fn from(value: InteractiveFlow) -> Self {
        Self::Flow(value)
    }
}

impl From<InteractiveAddress> for Interactive {
    fn from(value: InteractiveAddress) -> Self {
        Self::Address(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared parts
// ─────────────────────────────────────────────────────────────────────────────

/// Body text of an interactive message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveBody {
    pub text: String,
}

impl InteractiveBody {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Footer text of an interactive message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveFooter {
    pub text: String,
}

impl InteractiveFooter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Header for messages that only accept a text header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextHeader {
    Text { text: String },
}

impl TextHeader {
    pub fn new(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// A media object referenced either by uploaded media id or by URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl MediaAsset {
    /// Reference previously uploaded media.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            url: None,
        }
    }

    /// Reference media hosted at a public URL.
    pub fn by_url(url: impl Into<String>) -> Self {
        Self {
            id: None,
            url: Some(url.into()),
        }
    }
}

/// Header of a reply-button message: exactly one of text or a media asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ButtonHeader {
    Text { text: String },
    Document { document: MediaAsset },
    Image { image: MediaAsset },
    Video { video: MediaAsset },
}

impl ButtonHeader {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn document(document: MediaAsset) -> Self {
        Self::Document { document }
    }

    pub fn image(image: MediaAsset) -> Self {
        Self::Image { image }
    }

    pub fn video(video: MediaAsset) -> Self {
        Self::Video { video }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// List
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<TextHeader>,
    pub body: InteractiveBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<InteractiveFooter>,
    pub action: ListAction,
}

impl InteractiveList {
    /// Create a list message. `button` is the label of the button that opens the menu.
    pub fn new(
        body: impl Into<String>,
        button: impl Into<String>,
        sections: Vec<ListSection>,
    ) -> Self {
        Self {
            header: None,
            body: InteractiveBody::new(body),
            footer: None,
            action: ListAction {
                sections,
                button: button.into(),
            },
        }
    }

    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(TextHeader::new(text));
        self
    }

    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(InteractiveFooter::new(text));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAction {
    pub sections: Vec<ListSection>,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
    pub title: String,
    pub rows: Vec<ListRow>,
}

impl ListSection {
    pub fn new(title: impl Into<String>, rows: Vec<ListRow>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRow {
    /// Returned in the user's reply when the row is picked.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListRow {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Call to action
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveCta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<TextHeader>,
    pub body: InteractiveBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<InteractiveFooter>,
    pub action: CtaAction,
}

impl InteractiveCta {
    pub fn new(
        body: impl Into<String>,
        display_text: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            header: None,
            body: InteractiveBody::new(body),
            footer: None,
            action: CtaAction::CtaUrl {
                parameters: CtaParameters {
                    display_text: display_text.into(),
                    url: url.into(),
                },
            },
        }
    }

    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(TextHeader::new(text));
        self
    }

    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(InteractiveFooter::new(text));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum CtaAction {
    CtaUrl { parameters: CtaParameters },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaParameters {
    pub display_text: String,
    pub url: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Reply buttons
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveButton {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ButtonHeader>,
    pub body: InteractiveBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<InteractiveFooter>,
    pub action: ButtonAction,
}

impl InteractiveButton {
    pub fn new(body: impl Into<String>, buttons: Vec<ButtonReply>) -> Self {
        Self {
            header: None,
            body: InteractiveBody::new(body),
            footer: None,
            action: ButtonAction {
                buttons: buttons
                    .into_iter()
                    .map(|reply| ReplyButton::Reply { reply })
                    .collect(),
            },
        }
    }

    pub fn with_header(mut self, header: ButtonHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(InteractiveFooter::new(text));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonAction {
    pub buttons: Vec<ReplyButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyButton {
    Reply { reply: ButtonReply },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonReply {
    pub id: String,
    pub title: String,
}

impl ButtonReply {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Location request
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveLocationRequest {
    pub body: InteractiveBody,
    #[serde(default)]
    pub action: LocationRequestAction,
}

impl InteractiveLocationRequest {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: InteractiveBody::new(body),
            action: LocationRequestAction::SendLocation,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum LocationRequestAction {
    #[default]
    SendLocation,
}
