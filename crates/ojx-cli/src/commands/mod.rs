//! Command implementations.

pub mod courses;
pub mod fetch;
pub mod login;
pub mod logout;
pub mod refresh_token;
pub mod use_course;
pub mod whoami;

use anyhow::{Context as _, Result};

use ojx_core::{Boundary, Error, RouteRequirements, ServerUrl, SessionStore};
use ojx_http::{ApiClient, AuthClient, RouteGuard};

use crate::cli::Commands;
use crate::storage;

pub async fn handle(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args).await,
        Commands::Whoami(args) => whoami::run(args).await,
        Commands::Courses(args) => courses::run(args).await,
        Commands::UseCourse(args) => use_course::run(args).await,
        Commands::RefreshToken(args) => refresh_token::run(args).await,
        Commands::Fetch(args) => fetch::run(args).await,
        Commands::Logout(args) => logout::run(args).await,
    }
}

/// Everything a session-backed command needs.
pub(crate) struct CommandContext {
    pub server: ServerUrl,
    pub store: SessionStore,
    pub api: ApiClient,
    pub auth: AuthClient,
}

/// Load the stored session and build clients against its server.
pub(crate) fn load_context() -> Result<CommandContext> {
    let (server, store) =
        storage::load_session()?.context("No active session. Run 'ojx login' first.")?;

    let api = ApiClient::new(server.clone());
    let auth = AuthClient::new(api.clone());

    Ok(CommandContext {
        server,
        store,
        api,
        auth,
    })
}

/// Run the eager route guard for a protected command.
///
/// The stored session is kept in sync with whatever the guard did -
/// a renewed token is persisted, a cleared session drops the file.
pub(crate) async fn authorize(
    ctx: &CommandContext,
    requirements: RouteRequirements,
) -> Result<()> {
    let guard = RouteGuard::new(ctx.auth.clone(), ctx.store.clone());
    let outcome = guard.authorize(&requirements).await;

    sync_storage(ctx)?;

    outcome.map_err(boundary_hint)
}

/// Persist the current session state, or drop the file once it is cleared.
pub(crate) fn sync_storage(ctx: &CommandContext) -> Result<()> {
    if ctx.store.is_authenticated() {
        storage::save_session(&ctx.server, &ctx.store).context("Failed to save session")
    } else {
        storage::clear_session()
    }
}

/// Translate a guard redirect into an actionable message.
pub(crate) fn boundary_hint(err: Error) -> anyhow::Error {
    match err.boundary() {
        Some(Boundary::Login) => anyhow::anyhow!("Session expired. Run 'ojx login' again."),
        Some(Boundary::Forbidden) => {
            anyhow::anyhow!("Forbidden: your role does not permit this action.")
        }
        Some(Boundary::NotFound) => anyhow::anyhow!("Not found."),
        None => err.into(),
    }
}
