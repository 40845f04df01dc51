//! Session storage for persisting login state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use ojx_core::{
    AccessToken, CourseId, CourseRef, Identity, RefreshToken, Role, ServerUrl, Session,
    SessionStore, UserId,
};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
///
/// A deliberately plain mirror of the in-memory session; the token
/// newtypes themselves never implement Serialize.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    server: String,
    id: String,
    uid: String,
    username: String,
    role: Role,
    access_token: String,
    refresh_token: Option<String>,
    enrollments: Vec<StoredCourse>,
    active_course: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredCourse {
    id: i64,
    name: String,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "ojx").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save the session to disk, overwriting the previous state.
pub fn save_session(server: &ServerUrl, store: &SessionStore) -> Result<()> {
    let session = store.snapshot();
    let identity = session
        .identity()
        .context("Cannot persist a session without an identity")?;
    let access_token = session
        .access_token()
        .context("Cannot persist a session without a token")?;

    let stored = StoredSession {
        server: server.to_string(),
        id: identity.id.to_string(),
        uid: identity.uid.clone(),
        username: identity.username.clone(),
        role: identity.role,
        access_token: access_token.as_str().to_string(),
        refresh_token: session.refresh_token().map(|t| t.as_str().to_string()),
        enrollments: session
            .enrollments()
            .iter()
            .map(|course| StoredCourse {
                id: course.id.get(),
                name: course.name.clone(),
            })
            .collect(),
        active_course: session.active_course().map(CourseId::get),
    };

    let path = session_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load the stored session, if any.
pub fn load_session() -> Result<Option<(ServerUrl, SessionStore)>> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored: StoredSession = match serde_json::from_str(&json) {
        Ok(stored) => stored,
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring unreadable session file");
            return Ok(None);
        }
    };

    let server = ServerUrl::new(&stored.server).context("Invalid server URL in session")?;
    let identity = Identity {
        id: UserId::new(stored.id),
        uid: stored.uid,
        username: stored.username,
        role: stored.role,
    };
    let enrollments = stored
        .enrollments
        .into_iter()
        .map(|course| CourseRef::new(course.id, course.name))
        .collect();

    let session = Session::from_parts(
        identity,
        AccessToken::new(stored.access_token),
        stored.refresh_token.map(RefreshToken::new),
        enrollments,
        stored.active_course.map(CourseId::new),
    );

    Ok(Some((server, SessionStore::from_session(session))))
}

/// Remove the stored session.
pub fn clear_session() -> Result<()> {
    let path = session_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove session file")?;
    }

    Ok(())
}
