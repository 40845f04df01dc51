//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use ojx_core::RouteRequirements;

use crate::output;

use super::{authorize, load_context};

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let ctx = load_context()?;
    authorize(&ctx, RouteRequirements::authenticated()).await?;

    let identity = ctx.store.identity().context("Session has no identity")?;

    output::field("User", &identity.username);
    output::field("Uid", &identity.uid);
    output::field("Role", identity.role.as_str());
    output::field("Server", ctx.server.as_str());

    if let Some(active) = ctx.store.active_course() {
        let name = ctx
            .store
            .enrollments()
            .iter()
            .find(|course| course.id == active)
            .map(|course| course.name.clone());
        match name {
            Some(name) => output::field("Active course", &format!("{} ({})", active, name)),
            None => output::field("Active course", &active.to_string()),
        }
    }

    Ok(())
}
