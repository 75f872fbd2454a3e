//! Word lists
//!
//! File loading and saving, plus a sample list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};
