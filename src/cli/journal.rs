use std::io::{BufRead, Write};

use crate::cli::Context;
use crate::dates;
use crate::display;
use crate::error::{DaysError, Result};
use crate::models::{Journal, JOURNAL_DEFAULT};
use crate::store;

/// Prompt for one line of text and append it to the journal
pub fn write(ctx: &mut Context) -> Result<()> {
    let text = prompt_line(ctx, "write your entry below. Hit [Enter] when done:")?;

    let now = ctx.clock.now();
    store::transact(&ctx.journal_path(), JOURNAL_DEFAULT, |journal: &mut Journal| {
        journal.write(&text, now);
        Ok(())
    })
}

/// Print entries between `start` and `end` (inclusive, `YYYY-MM-DD`)
pub fn read(ctx: &mut Context, start: Option<&str>, end: Option<&str>) -> Result<()> {
    let start = start.map(dates::parse_date).transpose()?;
    let end = end.map(dates::parse_date).transpose()?;
    let today = dates::day_of(ctx.clock.now());

    let entries = store::transact(&ctx.journal_path(), JOURNAL_DEFAULT, |journal: &mut Journal| {
        Ok(journal.list_range(start, end, today).to_vec())
    })?;

    display::write_entries(ctx.out, &entries)?;
    Ok(())
}

fn prompt_line(ctx: &mut Context, message: &str) -> Result<String> {
    writeln!(ctx.status, "{}", message)?;
    ctx.status.flush()?;

    let mut line = String::new();
    if ctx.input.read_line(&mut line)? == 0 {
        return Err(DaysError::Usage("no journal entry was entered".to_string()));
    }

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
