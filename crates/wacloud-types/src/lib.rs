//! Outbound message schema for the WhatsApp Cloud API.
//!
//! Every message kind the client can send has one type here, and every
//! interactive sub-kind has one variant of [`Interactive`]. Shapes that depend
//! on a discriminating field (interactive `type`, flow `flow_action`, address
//! `country`, button header `type`) are serde-tagged enums, so only the fields
//! legal for the chosen case can be constructed.
//!
//! [`OutboundMessage`] assembles a full `/messages` body from a recipient, an
//! optional [`MessageContext`] and one [`MessagePayload`].

pub mod address;
pub mod contact;
pub mod flow;
pub mod interactive;
pub mod message;
pub mod request;
pub mod response;

pub use address::{
    AddressAction, AddressParameters, IndiaAddress, IndiaAddressParameters, IndiaValidationErrors,
    InteractiveAddress, RegionAddressParameters, SavedAddress, SingaporeAddress,
    SingaporeAddressParameters, SingaporeValidationErrors,
};
pub use contact::{
    Contact, ContactAddress, ContactEmail, ContactName, ContactOrg, ContactPhone, ContactUrl,
};
pub use flow::{
    FlowAction, FlowMessageVersion, FlowMode, FlowNavigatePayload, FlowParameters, FlowStart,
    FlowValue, InteractiveFlow,
};
pub use interactive::{
    ButtonAction, ButtonHeader, ButtonReply, CtaAction, CtaParameters, Interactive,
    InteractiveBody, InteractiveButton, InteractiveCta, InteractiveFooter, InteractiveList,
    InteractiveLocationRequest, ListAction, ListRow, ListSection, LocationRequestAction,
    MediaAsset, ReplyButton, TextHeader,
};
pub use message::{Location, MessageContext, Reaction, TextMessage};
pub use request::{
    MESSAGING_PRODUCT, MessageKind, MessagePayload, OutboundMessage, RECIPIENT_TYPE_INDIVIDUAL,
    ReadReceipt,
};
pub use response::{MessageResponse, ResponseContact, SentMessage, StatusResponse};

// Re-exported for `Contact::birthday`.
pub use chrono::NaiveDate;
