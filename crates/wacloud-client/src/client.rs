//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;
use wacloud_types::{
    Contact, Interactive, Location, MessageContext, MessageResponse, OutboundMessage, Reaction,
    ReadReceipt, StatusResponse, TextMessage,
};

use crate::conversation::{Conversation, Reply};
use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Transport};

/// Default Graph API host.
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";

/// Default Graph API version.
pub const DEFAULT_API_VERSION: &str = "v20.0";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Path that every send and status update is posted to.
const MESSAGES_PATH: &str = "/messages";

/// WhatsApp Cloud API client bound to one business phone number.
///
/// Cloning is cheap; clones share the underlying transport.
///
/// # Example
///
/// ```no_run
/// use wacloud_client::WhatsApp;
///
/// # async fn example() -> wacloud_client::Result<()> {
/// let wa = WhatsApp::new("106540352242922", "EAAG...")?;
///
/// let sent = wa.message("15551234567").text("Hello!").send().await?;
///
/// if let Some(id) = sent.message_id() {
///     wa.reply_to("15551234567", id).react("👋").send().await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct WhatsApp<T = HttpTransport> {
    transport: Arc<T>,
}

impl<T> Clone for WhatsApp<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> fmt::Debug for WhatsApp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhatsApp").finish_non_exhaustive()
    }
}

impl WhatsApp<HttpTransport> {
    /// Create a client for `phone_number_id` with default settings.
    ///
    /// No network activity happens until a message is sent.
    pub fn new(
        phone_number_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .phone_number_id(phone_number_id)
            .access_token(access_token)
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The phone-number endpoint, e.g. `https://graph.facebook.com/v20.0/123/`.
    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }
}

impl<T: Transport> WhatsApp<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Access the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Direct sends
    // ─────────────────────────────────────────────────────────────────────────

    /// Post a fully assembled message.
    pub async fn send(&self, message: &OutboundMessage) -> Result<MessageResponse> {
        tracing::debug!(
            to = %message.to(),
            kind = %message.kind(),
            reply = message.context().is_some(),
            "sending message"
        );
        self.transport.post(MESSAGES_PATH, message).await
    }

    /// Send a text message.
    pub async fn send_text(
        &self,
        to: impl Into<String>,
        text: TextMessage,
        context: Option<MessageContext>,
    ) -> Result<MessageResponse> {
        self.send(&OutboundMessage::new(to, text, context)).await
    }

    /// React to a message. Reactions never carry a reply context.
    pub async fn send_reaction(
        &self,
        to: impl Into<String>,
        reaction: Reaction,
    ) -> Result<MessageResponse> {
        self.send(&OutboundMessage::new(to, reaction, None)).await
    }

    /// Send a location pin.
    pub async fn send_location(
        &self,
        to: impl Into<String>,
        location: Location,
        context: Option<MessageContext>,
    ) -> Result<MessageResponse> {
        self.send(&OutboundMessage::new(to, location, context))
            .await
    }

    /// Send one or more contact cards, in the given order.
    pub async fn send_contacts(
        &self,
        to: impl Into<String>,
        contacts: Vec<Contact>,
        context: Option<MessageContext>,
    ) -> Result<MessageResponse> {
        self.send(&OutboundMessage::new(to, contacts, context))
            .await
    }

    /// Send an interactive message.
    pub async fn send_interactive(
        &self,
        to: impl Into<String>,
        interactive: impl Into<Interactive>,
    ) -> Result<MessageResponse> {
        self.send(&OutboundMessage::new(to, interactive.into(), None))
            .await
    }

    /// Mark a received message as read.
    pub async fn mark_read(&self, message_id: impl Into<String>) -> Result<StatusResponse> {
        let receipt = ReadReceipt::new(message_id);
        tracing::debug!(message_id = %receipt.message_id(), "marking message as read");
        self.transport.post(MESSAGES_PATH, &receipt).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fluent sends
    // ─────────────────────────────────────────────────────────────────────────

    /// Start a conversation with `to`. Messages sent through it are not replies.
    pub fn message(&self, to: impl Into<String>) -> Conversation<'_, T> {
        Conversation::new(self, to.into())
    }

    /// Reply to `message_id` in the conversation with `to`.
    pub fn reply_to(&self, to: impl Into<String>, message_id: impl Into<String>) -> Reply<'_, T> {
        Reply::new(self, to.into(), message_id.into())
    }
}

/// Builder for creating a [`WhatsApp`] client.
pub struct ClientBuilder {
    phone_number_id: Option<String>,
    access_token: Option<String>,
    api_version: String,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("phone_number_id", &self.phone_number_id)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            phone_number_id: None,
            access_token: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Create a builder from `WHATSAPP_*` environment variables.
    ///
    /// Reads `WHATSAPP_PHONE_NUMBER_ID` and `WHATSAPP_ACCESS_TOKEN`, plus the
    /// optional `WHATSAPP_API_VERSION` and `WHATSAPP_BASE_URL`. Empty values
    /// count as unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientBuilder::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::Config(format!("{} environment variable not set", key)))
        };

        let mut builder = Self::new()
            .phone_number_id(required("WHATSAPP_PHONE_NUMBER_ID")?)
            .access_token(required("WHATSAPP_ACCESS_TOKEN")?);

        let optional = |key: &str| lookup(key).filter(|value| !value.is_empty());
        if let Some(version) = optional("WHATSAPP_API_VERSION") {
            builder = builder.api_version(version);
        }
        if let Some(url) = optional("WHATSAPP_BASE_URL") {
            builder = builder.base_url(url);
        }
        Ok(builder)
    }

    /// Set the business phone number id messages are sent from.
    pub fn phone_number_id(mut self, id: impl Into<String>) -> Self {
        self.phone_number_id = Some(id.into());
        self
    }

    /// Set the access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the Graph API version, e.g. `v20.0`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the API host. Useful for proxies and tests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<WhatsApp<HttpTransport>> {
        let phone_number_id = self
            .phone_number_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Config("phone_number_id is required".to_string()))?;
        let access_token = self
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::Config("access_token is required".to_string()))?;

        // https://<host>/<version>/<phone-number-id>/
        let mut base_url = Url::parse(&self.base_url)?;
        let prefix = base_url.path().trim_end_matches('/').to_string();
        base_url.set_path(&format!(
            "{}/{}/{}/",
            prefix,
            self.api_version.trim_matches('/'),
            phone_number_id
        ));

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", access_token))
            .map_err(|_| Error::Config("Invalid access token".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("wacloud-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        tracing::debug!(%base_url, "built WhatsApp client");

        Ok(WhatsApp::with_transport(HttpTransport::new(http, base_url, self.timeout)))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
