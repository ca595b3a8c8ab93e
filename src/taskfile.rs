//! Taskfile parsing structures
//!
//! A taskfile is a static, declarative table of phony tasks. Declaration
//! order is preserved because it breaks ties between independent
//! prerequisites during resolution.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::{RaskError, Result};

/// Pattern for valid task names: lowercase, digits, '-' and '_'
static TASK_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap());

/// A single phony task: prerequisites first, then actions, every time.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub name: String,

    /// Prerequisite task names, in order
    #[serde(default)]
    pub needs: Vec<String>,

    /// Shell commands, passed through to `sh -c` in order
    #[serde(default)]
    pub run: Vec<String>,
}

/// Taskfile parsed from YAML
#[derive(Debug, Deserialize)]
pub struct Taskfile {
    pub tasks: Vec<Task>,
}

impl Taskfile {
    /// Load and validate a taskfile from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RaskError::TaskfileNotFound {
                path: path.display().to_string(),
            });
        }
        let yaml = fs::read_to_string(path)?;
        Self::parse(&yaml)
    }

    /// Parse and validate a taskfile from a YAML string
    pub fn parse(yaml: &str) -> Result<Self> {
        let taskfile: Taskfile = serde_yaml::from_str(yaml)?;
        taskfile.validate()?;
        Ok(taskfile)
    }

    /// Validate task names and reject duplicates
    fn validate(&self) -> Result<()> {
        let mut seen = rustc_hash::FxHashSet::default();
        for task in &self.tasks {
            if !TASK_NAME_PATTERN.is_match(&task.name) {
                return Err(RaskError::InvalidTaskName {
                    name: task.name.clone(),
                    reason: "must match [a-z0-9][a-z0-9_-]*".to_string(),
                });
            }
            if !seen.insert(task.name.as_str()) {
                return Err(RaskError::DuplicateTask {
                    name: task.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up a task by name
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
tasks:
  - name: all
  - name: format
    needs: [format-import, format-black]
  - name: format-black
    run:
      - black src
  - name: format-import
    run:
      - isort src
"#;

    #[test]
    fn parse_sample_taskfile() {
        let taskfile = Taskfile::parse(SAMPLE).unwrap();
        assert_eq!(taskfile.tasks.len(), 4);

        let format = taskfile.get("format").unwrap();
        assert_eq!(format.needs, vec!["format-import", "format-black"]);
        assert!(format.run.is_empty());

        let black = taskfile.get("format-black").unwrap();
        assert!(black.needs.is_empty());
        assert_eq!(black.run, vec!["black src"]);
    }

    #[test]
    fn needs_and_run_default_to_empty() {
        let taskfile = Taskfile::parse("tasks:\n  - name: all\n").unwrap();
        let all = taskfile.get("all").unwrap();
        assert!(all.needs.is_empty());
        assert!(all.run.is_empty());
    }

    #[test]
    fn declaration_order_is_preserved() {
        let taskfile = Taskfile::parse(SAMPLE).unwrap();
        let names: Vec<&str> = taskfile.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["all", "format", "format-black", "format-import"]
        );
    }

    #[test]
    fn duplicate_task_is_rejected() {
        let yaml = "tasks:\n  - name: a\n  - name: a\n";
        let err = Taskfile::parse(yaml).unwrap_err();
        assert_eq!(err.code(), "RASK-003");
    }

    #[test]
    fn invalid_task_name_is_rejected() {
        let yaml = "tasks:\n  - name: Format Stuff\n";
        let err = Taskfile::parse(yaml).unwrap_err();
        assert_eq!(err.code(), "RASK-004");
    }

    #[test]
    fn hyphen_underscore_digit_names_are_valid() {
        let yaml = "tasks:\n  - name: format-black\n  - name: py3_lint\n";
        assert!(Taskfile::parse(yaml).is_ok());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = Taskfile::parse("tasks: [unclosed").unwrap_err();
        assert_eq!(err.code(), "RASK-002");
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Taskfile::load(Path::new("/nonexistent/rask.yaml")).unwrap_err();
        assert_eq!(err.code(), "RASK-001");
    }

    #[test]
    fn get_unknown_returns_none() {
        let taskfile = Taskfile::parse(SAMPLE).unwrap();
        assert!(taskfile.get("deploy").is_none());
    }
}
