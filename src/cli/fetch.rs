//! Non-interactive fetch: print the content items as JSON.

use crate::api::{ContentClient, FetchRequest};
use crate::cli::Settings;
use anyhow::{anyhow, Context, Result};
use std::io::Write;
use tokio::runtime::Runtime;

/// Fetch `title` for the configured user and write pretty JSON to `out`.
pub fn run(settings: &Settings, title: &str, out: &mut impl Write) -> Result<()> {
    let request = FetchRequest::new(settings.session.user_id(), Some(title)).ok_or_else(|| {
        anyhow!(
            "A user id and a title are required. Pass --user-id or add a [user] table to {}",
            settings.config_path.display()
        )
    })?;

    let client = ContentClient::from_config(&settings.config)?;
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    let items = runtime.block_on(client.fetch_items(&request))?;

    let json = serde_json::to_string_pretty(&items).context("Failed to serialize items")?;
    writeln!(out, "{}", json).context("Failed to write output")?;
    Ok(())
}
