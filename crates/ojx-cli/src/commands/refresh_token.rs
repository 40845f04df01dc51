//! Refresh token command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;

use super::{load_context, sync_storage};

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

pub async fn run(_args: RefreshTokenArgs) -> Result<()> {
    let ctx = load_context()?;

    eprintln!("{}", "Refreshing session...".dimmed());

    ctx.auth
        .refresh(&ctx.store)
        .await
        .context("Failed to refresh session")?;

    // Save the updated session with the new token
    sync_storage(&ctx).context("Failed to save refreshed session")?;

    output::success("Session refreshed successfully");

    Ok(())
}
