//! Fetch command implementation.

use anyhow::{Result, ensure};
use clap::Args;

use ojx_http::ApiGuard;

use crate::output;

use super::{boundary_hint, load_context, sync_storage};

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// API path to fetch (e.g. /api/courses)
    pub path: String,
}

pub async fn run(args: FetchArgs) -> Result<()> {
    ensure!(args.path.starts_with('/'), "API path must start with '/'");

    let ctx = load_context()?;

    // The request guard attaches the token and handles 401 recovery
    let guard = ApiGuard::new(ctx.api.clone(), ctx.store.clone());
    let result = guard.get::<serde_json::Value>(&args.path).await;

    // The guard may have renewed or cleared the session
    sync_storage(&ctx)?;

    let body = result.map_err(boundary_hint)?;
    output::json_pretty(&body)?;

    Ok(())
}
