//! Rask CLI - phony task runner

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use rask::{Executor, FixSuggestion, RaskError, TaskGraph, Taskfile};

#[derive(Parser)]
#[command(name = "rask")]
#[command(about = "Rask - dependency-ordered runner for phony build tasks")]
#[command(version)]
struct Cli {
    /// Task to run
    #[arg(default_value = "all")]
    task: String,

    /// Path to the taskfile
    #[arg(short, long, default_value = "rask.yaml")]
    file: PathBuf,

    /// List the tasks defined in the taskfile and exit
    #[arg(short, long)]
    list: bool,

    /// Print the resolved order without executing anything
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        // ExitCode::from takes a u8; errors never map to 0.
        let code = e.exit_code().clamp(1, 255) as u8;
        return ExitCode::from(code);
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<(), RaskError> {
    let taskfile = Taskfile::load(&cli.file)?;

    if cli.list {
        list_tasks(&taskfile);
        return Ok(());
    }

    let graph = TaskGraph::new(&taskfile);
    let order = graph.resolve(&cli.task)?;

    Executor::new(cli.dry_run).execute(&order)?;

    let label = if cli.dry_run { "resolved" } else { "completed" };
    println!(
        "{} {} task(s) {}",
        "✓".green(),
        order.len(),
        label
    );
    Ok(())
}

fn list_tasks(taskfile: &Taskfile) {
    for task in &taskfile.tasks {
        if task.needs.is_empty() {
            println!("{}", task.name.bold());
        } else {
            println!("{} {}", task.name.bold(), task.needs.join(" ").dimmed());
        }
        for action in &task.run {
            println!("  {} {}", "$".dimmed(), action);
        }
    }
}
