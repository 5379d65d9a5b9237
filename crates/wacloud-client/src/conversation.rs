//! Fluent per-recipient builders.
//!
//! [`WhatsApp::message`] yields a [`Conversation`]; [`WhatsApp::reply_to`] (or
//! [`Conversation::reply`]) yields a [`Reply`]. Both hand out drafts for text,
//! contacts and location that are dispatched with `send()`. Only a [`Reply`]
//! can produce a reaction, since a reaction needs a target message id.

use wacloud_types::{Contact, Location, MessageContext, MessageResponse, Reaction, TextMessage};

use crate::client::WhatsApp;
use crate::error::Result;
use crate::transport::Transport;

/// Recipient plus optional reply context shared by the fluent builders.
struct Chain<'a, T> {
    client: &'a WhatsApp<T>,
    to: String,
    context: Option<MessageContext>,
}

impl<'a, T> Chain<'a, T> {
    fn text(&self, body: String) -> TextDraft<'a, T> {
        TextDraft {
            client: self.client,
            to: self.to.clone(),
            context: self.context.clone(),
            text: TextMessage::new(body),
        }
    }

    fn contacts(&self, contacts: Vec<Contact>) -> ContactsDraft<'a, T> {
        ContactsDraft {
            client: self.client,
            to: self.to.clone(),
            context: self.context.clone(),
            contacts,
        }
    }

    fn location(&self, location: Location) -> LocationDraft<'a, T> {
        LocationDraft {
            client: self.client,
            to: self.to.clone(),
            context: self.context.clone(),
            location,
        }
    }
}

/// Messages to a recipient that are not replies.
pub struct Conversation<'a, T> {
    chain: Chain<'a, T>,
}

impl<'a, T> Conversation<'a, T> {
    pub(crate) fn new(client: &'a WhatsApp<T>, to: String) -> Self {
        Self {
            chain: Chain {
                client,
                to,
                context: None,
            },
        }
    }

    /// The recipient.
    pub fn to(&self) -> &str {
        &self.chain.to
    }

    /// Switch to replying to `message_id`.
    pub fn reply(&self, message_id: impl Into<String>) -> Reply<'a, T> {
        Reply::new(self.chain.client, self.chain.to.clone(), message_id.into())
    }

    pub fn text(&self, body: impl Into<String>) -> TextDraft<'a, T> {
        self.chain.text(body.into())
    }

    pub fn contacts(&self, contacts: Vec<Contact>) -> ContactsDraft<'a, T> {
        self.chain.contacts(contacts)
    }

    pub fn location(&self, location: Location) -> LocationDraft<'a, T> {
        self.chain.location(location)
    }
}

/// Replies to one message of a recipient.
pub struct Reply<'a, T> {
    chain: Chain<'a, T>,
    message_id: String,
}

impl<'a, T> Reply<'a, T> {
    pub(crate) fn new(client: &'a WhatsApp<T>, to: String, message_id: String) -> Self {
        Self {
            chain: Chain {
                client,
                to,
                context: (!message_id.is_empty())
                    .then(|| MessageContext::new(message_id.clone())),
            },
            message_id,
        }
    }

    /// The recipient.
    pub fn to(&self) -> &str {
        &self.chain.to
    }

    /// The message being replied to.
    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn text(&self, body: impl Into<String>) -> TextDraft<'a, T> {
        self.chain.text(body.into())
    }

    pub fn contacts(&self, contacts: Vec<Contact>) -> ContactsDraft<'a, T> {
        self.chain.contacts(contacts)
    }

    pub fn location(&self, location: Location) -> LocationDraft<'a, T> {
        self.chain.location(location)
    }

    /// React to the message with `emoji`.
    pub fn react(&self, emoji: impl Into<String>) -> ReactionDraft<'a, T> {
        ReactionDraft {
            client: self.chain.client,
            to: self.chain.to.clone(),
            reaction: Reaction::new(self.message_id.clone(), emoji),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Drafts
// ─────────────────────────────────────────────────────────────────────────────

/// A text message ready to send.
#[must_use = "a draft does nothing until `send` is awaited"]
pub struct TextDraft<'a, T> {
    client: &'a WhatsApp<T>,
    to: String,
    context: Option<MessageContext>,
    text: TextMessage,
}

impl<T: Transport> TextDraft<'_, T> {
    /// Enable or disable the URL preview.
    pub fn preview_url(mut self, preview: bool) -> Self {
        self.text.preview_url = Some(preview);
        self
    }

    pub async fn send(self) -> Result<MessageResponse> {
        self.client
            .send_text(self.to, self.text, self.context)
            .await
    }
}

/// Contact cards ready to send.
#[must_use = "a draft does nothing until `send` is awaited"]
pub struct ContactsDraft<'a, T> {
    client: &'a WhatsApp<T>,
    to: String,
    context: Option<MessageContext>,
    contacts: Vec<Contact>,
}

impl<T: Transport> ContactsDraft<'_, T> {
    pub async fn send(self) -> Result<MessageResponse> {
        self.client
            .send_contacts(self.to, self.contacts, self.context)
            .await
    }
}

/// A location pin ready to send.
#[must_use = "a draft does nothing until `send` is awaited"]
pub struct LocationDraft<'a, T> {
    client: &'a WhatsApp<T>,
    to: String,
    context: Option<MessageContext>,
    location: Location,
}

impl<T: Transport> LocationDraft<'_, T> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.location.name = Some(name.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.location.address = Some(address.into());
        self
    }

    pub async fn send(self) -> Result<MessageResponse> {
        self.client
            .send_location(self.to, self.location, self.context)
            .await
    }
}

/// A reaction ready to send.
#[must_use = "a draft does nothing until `send` is awaited"]
pub struct ReactionDraft<'a, T> {
    client: &'a WhatsApp<T>,
    to: String,
    reaction: Reaction,
}

impl<T: Transport> ReactionDraft<'_, T> {
    pub async fn send(self) -> Result<MessageResponse> {
        self.client.send_reaction(self.to, self.reaction).await
    }
}
