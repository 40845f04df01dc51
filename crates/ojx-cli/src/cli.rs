//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{courses, fetch, login, logout, refresh_token, use_course, whoami};

/// Command-line client for a course platform.
#[derive(Parser, Debug)]
#[command(name = "ojx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new session (login)
    Login(login::LoginArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// List course enrollments
    Courses(courses::CoursesArgs),

    /// Switch the active course
    UseCourse(use_course::UseCourseArgs),

    /// Renew the access token
    RefreshToken(refresh_token::RefreshTokenArgs),

    /// Fetch an API path through the request guard
    Fetch(fetch::FetchArgs),

    /// Invalidate the session and clear stored state
    Logout(logout::LogoutArgs),
}
