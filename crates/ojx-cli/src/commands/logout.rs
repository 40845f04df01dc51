//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use ojx_http::{ApiClient, AuthClient};

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    // Tolerate a missing session; logging out twice is fine
    if let Some((server, store)) = storage::load_session()? {
        let auth = AuthClient::new(ApiClient::new(server));
        // Best-effort remote invalidation; always clears locally
        auth.logout(&store).await;
    }

    storage::clear_session().context("Failed to remove session file")?;

    output::success("Logged out");
    Ok(())
}
