//! Rask error types with error codes
//!
//! Error code ranges:
//! - RASK-000-009: Taskfile errors
//! - RASK-010-019: Resolution errors
//! - RASK-020-029: Execution errors
//! - RASK-030-039: IO errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RaskError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
#[derive(Error, Debug)]
pub enum RaskError {
    // ═══════════════════════════════════════════
    // TASKFILE ERRORS (000-009)
    // ═══════════════════════════════════════════
    #[error("[RASK-001] Taskfile not found: {path}")]
    TaskfileNotFound { path: String },

    #[error("[RASK-002] YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("[RASK-003] Task '{name}' is defined more than once")]
    DuplicateTask { name: String },

    #[error("[RASK-004] Invalid task name '{name}': {reason}")]
    InvalidTaskName { name: String, reason: String },

    // ═══════════════════════════════════════════
    // RESOLUTION ERRORS (010-019)
    // ═══════════════════════════════════════════
    #[error("[RASK-010] Unknown task '{name}'")]
    UnknownTask { name: String },

    #[error("[RASK-011] Cyclic dependency: {cycle}")]
    CyclicDependency { cycle: String },

    // ═══════════════════════════════════════════
    // EXECUTION ERRORS (020-029)
    // ═══════════════════════════════════════════
    #[error("[RASK-020] Task '{task}' failed: `{action}` exited with code {code}")]
    ActionFailed {
        task: String,
        action: String,
        code: i32,
    },

    #[error("[RASK-021] Task '{task}' failed: could not spawn `{action}`: {source}")]
    ActionSpawn {
        task: String,
        action: String,
        source: std::io::Error,
    },

    // ═══════════════════════════════════════════
    // IO ERRORS (030-039)
    // ═══════════════════════════════════════════
    #[error("[RASK-030] IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RaskError {
    /// Get the error code (e.g., "RASK-001")
    pub fn code(&self) -> &'static str {
        match self {
            Self::TaskfileNotFound { .. } => "RASK-001",
            Self::YamlParse(_) => "RASK-002",
            Self::DuplicateTask { .. } => "RASK-003",
            Self::InvalidTaskName { .. } => "RASK-004",
            Self::UnknownTask { .. } => "RASK-010",
            Self::CyclicDependency { .. } => "RASK-011",
            Self::ActionFailed { .. } => "RASK-020",
            Self::ActionSpawn { .. } => "RASK-021",
            Self::Io(_) => "RASK-030",
        }
    }

    /// Process exit code for this error.
    ///
    /// `ActionFailed` propagates the failing action's exit code; resolution
    /// failures get a distinguished code so callers can tell "your taskfile
    /// is wrong" apart from "a collaborator failed".
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ActionFailed { code, .. } => *code,
            Self::UnknownTask { .. } | Self::CyclicDependency { .. } => 2,
            _ => 1,
        }
    }
}

impl FixSuggestion for RaskError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            RaskError::TaskfileNotFound { .. } => {
                Some("Check the path, or pass one with --file")
            }
            RaskError::YamlParse(_) => Some("Check YAML syntax: indentation and quoting"),
            RaskError::DuplicateTask { .. } => Some("Remove or rename one of the definitions"),
            RaskError::InvalidTaskName { .. } => {
                Some("Task names use lowercase letters, digits, '-' and '_'")
            }
            RaskError::UnknownTask { .. } => {
                Some("Run with --list to see the tasks defined in the taskfile")
            }
            RaskError::CyclicDependency { .. } => {
                Some("Remove one of the 'needs' entries to break the cycle")
            }
            RaskError::ActionFailed { .. } => {
                Some("Re-run the failing command by hand to see what it objects to")
            }
            RaskError::ActionSpawn { .. } => Some("Check that 'sh' is on PATH"),
            RaskError::Io(_) => Some("Check file path and permissions"),
        }
    }
}
