//! Serial task execution
//!
//! Walks a resolved order and runs each task's actions as `sh -c`
//! subprocesses, one at a time, inheriting stdout/stderr. The runner never
//! interprets collaborator output; the only thing it reads is the exit
//! status. First non-zero exit aborts the run.

use std::process::Command;

use colored::Colorize;
use tracing::{debug, info};

use crate::error::{RaskError, Result};
use crate::taskfile::Task;

/// Executes a resolved task order
pub struct Executor {
    dry_run: bool,
}

impl Executor {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Run every task in `order`, fail-fast.
    ///
    /// Phony semantics: a task reached here always runs, regardless of any
    /// filesystem state. Side effects of already-completed actions are left
    /// in place on failure.
    pub fn execute(&self, order: &[&Task]) -> Result<()> {
        for task in order {
            info!(task = %task.name, actions = task.run.len(), "running task");
            println!("{} {}", "→".cyan(), task.name.bold());
            for action in &task.run {
                self.run_action(&task.name, action)?;
            }
        }
        Ok(())
    }

    fn run_action(&self, task: &str, action: &str) -> Result<()> {
        println!("  {} {}", "$".dimmed(), action);
        if self.dry_run {
            return Ok(());
        }

        debug!(task, action, "spawning");
        let status = Command::new("sh")
            .arg("-c")
            .arg(action)
            .status()
            .map_err(|source| RaskError::ActionSpawn {
                task: task.to_string(),
                action: action.to_string(),
                source,
            })?;

        if !status.success() {
            // Signal termination has no code; report it as 1.
            let code = status.code().unwrap_or(1);
            return Err(RaskError::ActionFailed {
                task: task.to_string(),
                action: action.to_string(),
                code,
            });
        }
        Ok(())
    }
}
