//! CLI integration tests against a mock platform server.
//!
//! Each test runs the real binary with an isolated data directory, so
//! stored sessions never leak between tests or into the user's own
//! session file.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path as url_path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary with an isolated home directory.
fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ojx"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// The session file path inside the isolated home.
fn session_file(home: &Path) -> PathBuf {
    home.join("data").join("ojx").join("session.json")
}

/// Mount a login endpoint answering with a student session.
async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(url_path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-token-1",
            "refresh_token": "refresh-token-1",
            "user": {
                "id": "8",
                "uid": "s1001",
                "username": "Wen",
                "role": "student",
                "courses": [
                    {"id": 1, "name": "Algorithms"},
                    {"id": 2, "name": "Compilers"}
                ]
            }
        })))
        .mount(server)
        .await;
}

fn login_args(uri: &str) -> Vec<&str> {
    vec![
        "login", "--server", uri, "--uid", "s1001", "--password", "pw",
    ]
}

#[test]
fn whoami_without_a_session_fails() {
    let home = TempDir::new().unwrap();

    let output = run_cli(&["whoami"], home.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session"));
}

#[tokio::test]
async fn login_session_round_trip() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(url_path("/api/auth/check_token"))
        .and(header("authorization", "Bearer access-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": "ok"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(url_path("/api/auth/logout"))
        .and(header("authorization", "Bearer access-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": "ok"})))
        .mount(&server)
        .await;

    let uri = server.uri();

    let stdout = run_cli_success(&login_args(&uri), home.path());
    assert!(stdout.contains("Wen"));
    assert!(session_file(home.path()).exists());

    let stdout = run_cli_success(&["whoami"], home.path());
    assert!(stdout.contains("s1001"));
    // Students default to their first enrollment
    assert!(stdout.contains("Algorithms"));

    let stdout = run_cli_success(&["courses"], home.path());
    assert!(stdout.contains("Algorithms"));
    assert!(stdout.contains("Compilers"));

    run_cli_success(&["use-course", "2"], home.path());
    let stdout = run_cli_success(&["whoami"], home.path());
    assert!(stdout.contains("Compilers"));

    // Switching to a course outside the enrollments is refused
    let output = run_cli(&["use-course", "99"], home.path());
    assert!(!output.status.success());

    run_cli_success(&["logout"], home.path());
    assert!(!session_file(home.path()).exists());

    let output = run_cli(&["whoami"], home.path());
    assert!(!output.status.success());
}

#[tokio::test]
async fn whoami_renews_an_expired_token_and_persists_it() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(url_path("/api/auth/check_token"))
        .and(header("authorization", "Bearer access-token-1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "token expired"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(url_path("/api/auth/refresh"))
        .and(header("authorization", "Bearer refresh-token-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "access-token-2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    run_cli_success(&login_args(&uri), home.path());
    run_cli_success(&["whoami"], home.path());

    // The renewed token replaced the stored one
    let stored = std::fs::read_to_string(session_file(home.path())).unwrap();
    assert!(stored.contains("access-token-2"));
    assert!(!stored.contains("access-token-1"));
}

#[tokio::test]
async fn fetch_recovers_from_a_401_with_one_refresh() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(url_path("/api/ping"))
        .and(header("authorization", "Bearer access-token-1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "token expired"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(url_path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "access-token-2"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(url_path("/api/ping"))
        .and(header("authorization", "Bearer access-token-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pong": true})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    run_cli_success(&login_args(&uri), home.path());

    let stdout = run_cli_success(&["fetch", "/api/ping"], home.path());
    assert!(stdout.contains("pong"));

    let stored = std::fs::read_to_string(session_file(home.path())).unwrap();
    assert!(stored.contains("access-token-2"));
}

#[tokio::test]
async fn failed_renewal_drops_the_stored_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(url_path("/api/auth/check_token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "token expired"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(url_path("/api/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "refresh expired"})),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    run_cli_success(&login_args(&uri), home.path());

    let output = run_cli(&["whoami"], home.path());
    assert!(!output.status.success());

    // The cleared session no longer exists on disk
    assert!(!session_file(home.path()).exists());
}
