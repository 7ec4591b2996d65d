use chrono::NaiveDate;
use std::io::{self, Write};

use crate::dates::{self, DATE_FORMAT};
use crate::models::journal::Entry;

/// Render entries grouped by day: one header per day, then each entry's time and text
pub fn write_entries(out: &mut dyn Write, entries: &[Entry]) -> io::Result<()> {
    let mut current_day: Option<NaiveDate> = None;

    for entry in entries {
        let day = entry.day();

        if current_day != Some(day) {
            writeln!(out)?;
            writeln!(out, "{}", day.format(DATE_FORMAT))?;
            writeln!(out, "----------")?;
            current_day = Some(day);
        }

        writeln!(out)?;
        writeln!(out, "{}", dates::military_time(entry.created_at))?;
        writeln!(out, "----")?;
        writeln!(out, "{}", entry.text)?;
    }

    Ok(())
}
