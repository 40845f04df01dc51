//! Courses command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use ojx_core::RouteRequirements;

use super::{authorize, load_context};

#[derive(Args, Debug)]
pub struct CoursesArgs {}

pub async fn run(_args: CoursesArgs) -> Result<()> {
    let ctx = load_context()?;
    authorize(&ctx, RouteRequirements::authenticated()).await?;

    let enrollments = ctx.store.enrollments();
    if enrollments.is_empty() {
        println!("{}", "No course enrollments.".dimmed());
        return Ok(());
    }

    let active = ctx.store.active_course();
    for course in &enrollments {
        let marker = if active == Some(course.id) { "*" } else { " " };
        println!("{} {:>6}  {}", marker, course.id, course.name);
    }

    Ok(())
}
