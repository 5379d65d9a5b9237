//! Send a text message and react to it.
//!
//! ```sh
//! WHATSAPP_PHONE_NUMBER_ID=... WHATSAPP_ACCESS_TOKEN=... \
//!     cargo run -p wacloud-client --example send_message -- 15551234567 "Hello"
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use wacloud_client::ClientBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wacloud_client=debug,info"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_filter(filter),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let to = args
        .next()
        .context("usage: send_message <recipient> [text]")?;
    let text = args
        .next()
        .unwrap_or_else(|| "Hello from wacloud".to_string());

    let wa = ClientBuilder::from_env()?.build()?;

    let sent = wa.message(&to).text(text).send().await?;
    let id = sent
        .message_id()
        .context("API accepted the message but returned no id")?;
    tracing::info!(message_id = %id, "message sent");

    wa.reply_to(&to, id).react("👋").send().await?;
    Ok(())
}
