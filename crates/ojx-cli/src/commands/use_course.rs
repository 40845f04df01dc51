//! Use-course command implementation.

use anyhow::{Result, bail};
use clap::Args;

use ojx_core::{CourseId, Role, RouteRequirements};

use crate::output;

use super::{authorize, load_context, sync_storage};

#[derive(Args, Debug)]
pub struct UseCourseArgs {
    /// Course id to make active
    pub course: i64,
}

pub async fn run(args: UseCourseArgs) -> Result<()> {
    let ctx = load_context()?;
    authorize(&ctx, RouteRequirements::authenticated()).await?;

    let course = CourseId::new(args.course);

    // The store itself does not validate membership; the caller does,
    // except for admins who may select any course.
    let is_admin = ctx.store.role().is_some_and(Role::is_admin);
    if !is_admin {
        let enrolled = ctx.store.enrollments().iter().any(|c| c.id == course);
        if !enrolled {
            bail!("Not enrolled in course {}", course);
        }
    }

    ctx.store.set_active_course(course);
    sync_storage(&ctx)?;

    output::success(&format!("Active course set to {}", course));
    Ok(())
}
