//! Terminal frontend for the composition engine.
//!
//! Prints a key menu and the board, reads one line per turn and feeds it to
//! the turn engine. Logging goes to a per-session file so the board stays
//! readable.

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;

pub use app::{CliApp, SessionEnd};
pub use config::CliConfig;
pub use input::Command;
