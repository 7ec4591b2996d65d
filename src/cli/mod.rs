//! Command-line interface module
//!
//! One function per command. Each receives a `Context` carrying configuration,
//! the clock and the input/output sinks, and runs its store access through
//! `store::transact`.
//! - track / since / reset / list: habit tracker
//! - life start / life end: life span progress
//! - journal write / journal read: journal entries
//! - config init: write a default configuration file

pub mod config;
pub mod habit;
pub mod journal;
pub mod life;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::clock::Clock;
use crate::config::Config;

/// Everything a command needs from its environment
pub struct Context<'a> {
    pub config: Config,
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
    pub clock: &'a dyn Clock,
    pub input: &'a mut dyn BufRead,
    /// Command results
    pub out: &'a mut dyn Write,
    /// Progress messages and prompts
    pub status: &'a mut dyn Write,
}

impl Context<'_> {
    pub fn tracker_path(&self) -> PathBuf {
        self.data_dir.join(&self.config.files.tracker)
    }

    pub fn journal_path(&self) -> PathBuf {
        self.data_dir.join(&self.config.files.journal)
    }
}
