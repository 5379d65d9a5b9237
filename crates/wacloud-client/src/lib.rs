//! Typed client for sending messages through the WhatsApp Cloud API.
//!
//! A [`WhatsApp`] client is bound to one business phone number and access
//! token. It assembles `/messages` request bodies from the typed payloads in
//! [`wacloud_types`] and posts them through a [`Transport`].
//!
//! # Example
//!
//! ```no_run
//! use wacloud_client::{WhatsApp, Result};
//! use wacloud_client::types::{ButtonReply, InteractiveButton, Location};
//!
//! # async fn example() -> Result<()> {
//! let wa = WhatsApp::new("106540352242922", "EAAG...")?;
//!
//! // Plain messages
//! let sent = wa.message("15551234567").text("Your order shipped").send().await?;
//!
//! // Threaded replies
//! if let Some(id) = sent.message_id() {
//!     let reply = wa.reply_to("15551234567", id);
//!     reply
//!         .location(Location::new(40.7128, -74.0060))
//!         .name("Pickup point")
//!         .send()
//!         .await?;
//!     reply.react("📦").send().await?;
//! }
//!
//! // Interactive messages
//! let confirm = InteractiveButton::new(
//!     "Deliver tomorrow?",
//!     vec![ButtonReply::new("yes", "Yes"), ButtonReply::new("no", "No")],
//! );
//! wa.send_interactive("15551234567", confirm).await?;
//!
//! // Read receipts
//! wa.mark_read("wamid.HBgLMTU1NTEyMzQ1Njc").await?;
//! # Ok(())
//! # }
//! ```
//!
//! Errors are returned exactly as the transport produced them; the client
//! performs no validation or retries of its own.

pub mod client;
pub mod conversation;
pub mod error;
pub mod transport;

pub use client::{ClientBuilder, DEFAULT_API_VERSION, DEFAULT_BASE_URL, WhatsApp};
pub use conversation::{
    ContactsDraft, Conversation, LocationDraft, ReactionDraft, Reply, TextDraft,
};
pub use error::{Error, Result};
pub use transport::{HttpTransport, MockTransport, RecordedRequest, Transport};

/// Message schema re-exported from [`wacloud_types`].
pub use wacloud_types as types;
