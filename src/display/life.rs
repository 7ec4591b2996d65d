use std::io::{self, Write};

use crate::config::LifeDisplay;
use crate::models::LifeSummary;

/// Render the `life end` report: summary, progress bar and, when `verbose`, the day grid
pub fn write_life_end(
    out: &mut dyn Write,
    summary: &LifeSummary,
    layout: &LifeDisplay,
    verbose: bool,
) -> io::Result<()> {
    write_summary(out, summary)?;
    write_progress_bar(out, summary, layout)?;

    if verbose {
        write_detail_grid(out, summary, layout)?;
    }

    Ok(())
}

fn write_summary(out: &mut dyn Write, summary: &LifeSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "days expected: {}", summary.days_expected)?;
    writeln!(out, "days exhausted: {}", summary.days_since_start)?;
    writeln!(out, "days till the END: {}", summary.days_to_end)
}

fn write_progress_bar(
    out: &mut dyn Write,
    summary: &LifeSummary,
    layout: &LifeDisplay,
) -> io::Result<()> {
    let fill = summary.fill_count(layout.progress_width);
    let bar = format!(
        "{}{}",
        layout.filled.repeat(fill),
        layout.empty.repeat(layout.progress_width - fill)
    );

    writeln!(out)?;
    writeln!(out, "Progress:")?;
    writeln!(out, "{} {}%", bar, summary.percentage())
}

fn write_detail_grid(
    out: &mut dyn Write,
    summary: &LifeSummary,
    layout: &LifeDisplay,
) -> io::Result<()> {
    let per_row = layout.cells_per_row() as i64;

    writeln!(out)?;
    writeln!(out, "Details:")?;
    writeln!(out, "{}", "=".repeat(layout.grid_width.saturating_sub(1)))?;

    for day in 0..summary.days_expected {
        if day % per_row == 0 {
            write!(out, "\n{:05}| ", day)?;
        }
        let cell = if day <= summary.days_since_start {
            &layout.passed
        } else {
            &layout.future
        };
        write!(out, "{}", cell)?;
    }

    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(summary: &LifeSummary, layout: &LifeDisplay, verbose: bool) -> String {
        let mut out = Vec::new();
        write_life_end(&mut out, summary, layout, verbose).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn summary(days_expected: i64, days_since_start: i64) -> LifeSummary {
        LifeSummary {
            days_expected,
            days_since_start,
            days_to_end: days_expected - days_since_start,
        }
    }

    #[test]
    fn test_summary_and_progress() {
        let output = render(&summary(25_550, 12_775), &LifeDisplay::default(), false);

        assert!(output.contains("days expected: 25550\n"));
        assert!(output.contains("days exhausted: 12775\n"));
        assert!(output.contains("days till the END: 12775\n"));
        let bar = format!("{}{} 50%\n", "#".repeat(25), "=".repeat(25));
        assert!(output.contains(&bar));
        assert!(!output.contains("Details:"));
    }

    #[test]
    fn test_progress_bar_width_is_fixed() {
        let output = render(&summary(25_550, 0), &LifeDisplay::default(), false);
        let bar_line = output
            .lines()
            .find(|l| l.ends_with('%'))
            .unwrap();
        assert_eq!(bar_line, format!("{} 0%", "=".repeat(50)));
    }

    #[test]
    fn test_detail_grid_wraps_rows() {
        let layout = LifeDisplay {
            grid_width: 13,
            grid_margin: 8,
            ..LifeDisplay::default()
        };
        let output = render(&summary(12, 6), &layout, true);

        assert!(output.contains("Details:\n============\n"));
        assert!(output.contains("00000| *****\n"));
        assert!(output.contains("00005| **ooo\n"));
        assert!(output.ends_with("00010| oo\n"));
    }
}
