use crate::cli::Context;
use crate::config::{self, Config};
use crate::error::Result;
use std::io::Write;
use std::path::PathBuf;

/// Write a default config.toml
pub fn init(ctx: &mut Context, path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| ctx.config_path.clone());

    // Check if file already exists
    if config_path.exists() {
        writeln!(
            ctx.status,
            "Configuration file already exists at: {}",
            config_path.display()
        )?;
        writeln!(ctx.status, "Remove it first if you want to reinitialize.")?;
        return Ok(());
    }

    config::save(&Config::default(), &config_path)?;

    writeln!(
        ctx.out,
        "Configuration file created: {}",
        config_path.display()
    )?;
    writeln!(
        ctx.out,
        "Edit it to change store file names or the life progress layout."
    )?;

    Ok(())
}
