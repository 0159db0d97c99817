//! Tasktab - interactive in-memory task list with tabular views

use anyhow::{Context, Result};
use clap::Parser;

use tasktab::cli::Cli;
use tasktab::repl;
use tasktab::table::TableOptions;
use tasktab::task::TaskStore;

/// The menu carries no add command; the list starts with a few rows so the
/// views have something to show. Overridable with `--empty`.
const SAMPLE_TASKS: [(&str, &str, &str); 3] = [
    ("Buy groceries", "Buy milk, eggs, and bread", "2024-08-06"),
    ("Workout", "Morning run for 30 minutes", "2024-08-06"),
    (
        "Learn Rust",
        "Work through the book, practice exercises, and build projects",
        "2024-08-10",
    ),
];

fn main() -> Result<()> {
    if std::env::var("TASKTAB_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("tasktab=debug")
            .init();
    }

    let cli = Cli::parse();

    let mut store = TaskStore::new();
    if !cli.empty {
        seed_sample_tasks(&mut store)?;
    }

    let opts = TableOptions {
        col_space: cli.col_space,
        wrap_width: cli.wrap_width,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut store, opts, &mut stdin.lock(), &mut stdout.lock())
}

fn seed_sample_tasks(store: &mut TaskStore) -> Result<()> {
    for (title, description, due) in SAMPLE_TASKS {
        store
            .add_task(title, description, due)
            .with_context(|| format!("Failed to seed sample task '{}'", title))?;
    }
    Ok(())
}
