//! Rask - dependency-ordered runner for phony build tasks

pub mod error;
pub mod executor;
pub mod graph;
pub mod taskfile;

pub use error::{FixSuggestion, RaskError, Result};
pub use executor::Executor;
pub use graph::TaskGraph;
pub use taskfile::{Task, Taskfile};
