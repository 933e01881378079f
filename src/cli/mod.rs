//! CLI layer - Command-line interface
//!
//! Contains argument parsing, payload input, envelope output, logging setup,
//! and the invocation runner.

pub mod app;
pub mod args;
pub mod input;
pub mod presenter;
pub mod telemetry;

// Re-export commonly used types
pub use app::{run, run_with_store};
pub use args::Cli;
pub use presenter::Presenter;
