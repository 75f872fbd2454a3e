//! Interactive TUI interface
//!
//! Terminal front end over the dictionary operations.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
