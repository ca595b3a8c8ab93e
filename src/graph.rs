//! Prerequisite graph resolution
//!
//! Resolves a requested task into a linear execution order over the
//! transitive closure of its prerequisites. Cycle detection uses DFS with
//! three-color marking:
//! - White: unvisited
//! - Gray: currently in the DFS stack (visiting)
//! - Black: fully processed, already in the order
//!
//! A cycle is detected when traversal reaches a Gray node. Ties between
//! independent prerequisites are broken by declaration order, so resolving
//! the same task twice yields the identical ordering.

use rustc_hash::FxHashMap;

use crate::error::{RaskError, Result};
use crate::taskfile::{Task, Taskfile};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Resolution view over a taskfile
pub struct TaskGraph<'a> {
    index: FxHashMap<&'a str, &'a Task>,
}

impl<'a> TaskGraph<'a> {
    pub fn new(taskfile: &'a Taskfile) -> Self {
        let index = taskfile
            .tasks
            .iter()
            .map(|t| (t.name.as_str(), t))
            .collect();
        Self { index }
    }

    /// Resolve `target` into an execution order.
    ///
    /// Every prerequisite of every included task appears strictly before
    /// it, each task at most once. Resolution is pure: nothing executes.
    pub fn resolve(&self, target: &str) -> Result<Vec<&'a Task>> {
        let mut colors: FxHashMap<&str, Color> = FxHashMap::default();
        let mut stack: Vec<&str> = Vec::new();
        let mut order: Vec<&'a Task> = Vec::new();

        self.visit(target, &mut colors, &mut stack, &mut order)?;
        Ok(order)
    }

    fn visit(
        &self,
        name: &str,
        colors: &mut FxHashMap<&'a str, Color>,
        stack: &mut Vec<&'a str>,
        order: &mut Vec<&'a Task>,
    ) -> Result<()> {
        let task = self
            .index
            .get(name)
            .copied()
            .ok_or_else(|| RaskError::UnknownTask {
                name: name.to_string(),
            })?;

        match colors.get(task.name.as_str()) {
            Some(Color::Black) => return Ok(()), // already ordered
            Some(Color::Gray) => {
                // Gray means the task is in the current DFS path: cycle.
                let start = stack
                    .iter()
                    .position(|n| *n == task.name)
                    .unwrap_or(0);
                let mut members: Vec<&str> = stack[start..].to_vec();
                members.push(&task.name);
                return Err(RaskError::CyclicDependency {
                    cycle: members.join(" -> "),
                });
            }
            Some(Color::White) | None => {}
        }

        colors.insert(&task.name, Color::Gray);
        stack.push(&task.name);

        for need in &task.needs {
            self.visit(need, colors, stack, order)?;
        }

        stack.pop();
        colors.insert(&task.name, Color::Black);
        order.push(task);
        Ok(())
    }
}
