use std::io::Write;

use crate::cli::Context;
use crate::display;
use crate::error::Result;
use crate::models::{Tracker, TRACKER_DEFAULT};
use crate::store;

/// Record the life start date (`YYYY-MM-DD`)
pub fn start(ctx: &mut Context, date: &str) -> Result<()> {
    writeln!(ctx.status, "setting life start date...")?;

    store::transact(&ctx.tracker_path(), TRACKER_DEFAULT, |tracker: &mut Tracker| {
        tracker.life_start(date)
    })
}

/// Print how much of the estimated span has passed
pub fn end(ctx: &mut Context, verbose: bool) -> Result<()> {
    writeln!(
        ctx.status,
        "calculating approximately how long you may have till the end..."
    )?;

    let now = ctx.clock.now();
    let summary = store::transact(&ctx.tracker_path(), TRACKER_DEFAULT, |tracker: &mut Tracker| {
        tracker.life_end(now)
    })?;

    display::write_life_end(ctx.out, &summary, &ctx.config.life, verbose)?;
    Ok(())
}
