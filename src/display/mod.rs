//! Terminal display module
//!
//! Plain-text renderers for command output. Everything writes into the sink it
//! is handed, never directly to stdout.

mod journal;
mod life;

pub use journal::write_entries;
pub use life::write_life_end;
