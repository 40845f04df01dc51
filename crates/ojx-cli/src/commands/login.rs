//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use ojx_core::{Credentials, Role, ServerUrl, SessionStore};
use ojx_http::{ApiClient, AuthClient};

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Platform server base URL
    #[arg(long)]
    pub server: String,

    /// Login uid (student number or staff id)
    #[arg(long)]
    pub uid: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Role to authenticate as (student, teacher or admin)
    #[arg(long, default_value = "student")]
    pub role: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let server = ServerUrl::new(&args.server).context("Invalid server URL")?;
    let role: Role = args.role.parse().context("Invalid role")?;
    let credentials = Credentials::new(&args.uid, &args.password, role);

    eprintln!("{}", "Logging in...".dimmed());

    let store = SessionStore::new();
    let auth = AuthClient::new(ApiClient::new(server.clone()));
    let identity = auth
        .login(&store, &credentials)
        .await
        .context("Failed to login")?;

    // Save session
    storage::save_session(&server, &store).context("Failed to save session")?;

    // Print success
    output::success("Logged in successfully");
    println!();
    output::field("User", &identity.username);
    output::field("Uid", &identity.uid);
    output::field("Role", identity.role.as_str());
    output::field("Server", server.as_str());

    Ok(())
}
