use std::io::Write;

use crate::cli::Context;
use crate::error::Result;
use crate::models::{Selector, Tracker, TRACKER_DEFAULT};
use crate::store;

/// Start tracking a new habit
pub fn track(ctx: &mut Context, habit: &str) -> Result<()> {
    writeln!(ctx.status, "tracking '{}'...", habit)?;

    let now = ctx.clock.now();
    store::transact(&ctx.tracker_path(), TRACKER_DEFAULT, |tracker: &mut Tracker| {
        tracker.track(habit, now);
        Ok(())
    })
}

/// Print the days since a single habit was last reset
pub fn since(ctx: &mut Context, selector: &str) -> Result<()> {
    writeln!(ctx.status, "reading days since {}...", selector)?;

    let now = ctx.clock.now();
    let selector = Selector::parse(selector);
    let line = store::transact(&ctx.tracker_path(), TRACKER_DEFAULT, |tracker: &mut Tracker| {
        Ok(tracker.since(&selector)?.describe(now))
    })?;

    writeln!(ctx.out, "{}", line)?;
    Ok(())
}

/// Print every habit with its day count
pub fn list(ctx: &mut Context) -> Result<()> {
    writeln!(ctx.status, "listing days since all habits...")?;

    let now = ctx.clock.now();
    let lines = store::transact(&ctx.tracker_path(), TRACKER_DEFAULT, |tracker: &mut Tracker| {
        Ok(tracker.list(now))
    })?;

    for line in lines {
        writeln!(ctx.out, "{}", line)?;
    }
    Ok(())
}

/// Restart the count for a habit
pub fn reset(ctx: &mut Context, selector: &str) -> Result<()> {
    writeln!(ctx.status, "resetting count for {}...", selector)?;

    let now = ctx.clock.now();
    let selector = Selector::parse(selector);
    store::transact(&ctx.tracker_path(), TRACKER_DEFAULT, |tracker: &mut Tracker| {
        tracker.reset(&selector, now)?;
        Ok(())
    })
}
