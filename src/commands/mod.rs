//! Command implementations

pub mod benchmark;
pub mod load;
pub mod menu;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use load::{load_dictionary, validate_filename};
pub use menu::{MenuChoice, run_menu};
pub use stats::{TreeStats, collect_stats};
