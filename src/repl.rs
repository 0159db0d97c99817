//! Interactive command loop
//!
//! Re-prints a numbered menu each iteration, reads one line, and dispatches
//! against the task store. All user-facing printing happens here; the store
//! itself never writes to the terminal.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::table::{self, TableOptions};
use crate::task::{Task, TaskStore};

const MENU: &str = "\
Commands:
1. Show all tasks
2. Show pending tasks
3. Show completed tasks
4. Mark a task as completed
5. Mark a task as not completed
6. Remove a task
7. Exit";

/// One menu entry, parsed from the digit the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowAll,
    ShowPending,
    ShowCompleted,
    MarkCompleted,
    MarkNotCompleted,
    Remove,
    Exit,
}

impl Command {
    /// Parse a command number from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::ShowAll),
            "2" => Some(Self::ShowPending),
            "3" => Some(Self::ShowCompleted),
            "4" => Some(Self::MarkCompleted),
            "5" => Some(Self::MarkNotCompleted),
            "6" => Some(Self::Remove),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu loop until the user exits or input ends.
///
/// Generic over the input/output streams; the binary passes locked
/// stdin/stdout, tests pass in-memory buffers.
pub fn run<R: BufRead, W: Write>(
    store: &mut TaskStore,
    opts: TableOptions,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        writeln!(output, "\n{}", MENU)?;
        write!(output, "Enter a command number: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            // End of input behaves like exit so piped sessions terminate
            return Ok(());
        };

        let Some(command) = Command::parse(&line) else {
            writeln!(output, "Invalid command. Please try again.")?;
            continue;
        };
        debug!("Dispatching {:?}", command);

        match command {
            Command::ShowAll => {
                let all: Vec<&Task> = store.all_tasks().iter().collect();
                print_view(output, &all, "All Tasks", &opts)?;
            }
            Command::ShowPending => {
                print_view(output, &store.get_pending_tasks(), "Pending Tasks", &opts)?;
            }
            Command::ShowCompleted => {
                print_view(output, &store.get_completed_tasks(), "Completed Tasks", &opts)?;
            }
            Command::MarkCompleted => {
                let Some(title) =
                    prompt(input, output, "Enter the title of the task to mark as completed: ")?
                else {
                    return Ok(());
                };
                if store.contains_title(&title) {
                    store.mark_as_completed(&title);
                    writeln!(output, "Task '{}' marked as completed.", title)?;
                } else {
                    writeln!(output, "No task found with title '{}'.", title)?;
                }
            }
            Command::MarkNotCompleted => {
                let Some(title) = prompt(
                    input,
                    output,
                    "Enter the title of the task to mark as not completed: ",
                )?
                else {
                    return Ok(());
                };
                if store.contains_title(&title) {
                    store.mark_as_not_completed(&title);
                    writeln!(output, "Task '{}' marked as not completed.", title)?;
                } else {
                    writeln!(output, "No task found with title '{}'.", title)?;
                }
            }
            Command::Remove => {
                let Some(title) =
                    prompt(input, output, "Enter the title of the task to remove: ")?
                else {
                    return Ok(());
                };
                if store.contains_title(&title) {
                    store.remove_task(&title);
                    writeln!(output, "Task '{}' removed.", title)?;
                } else {
                    writeln!(output, "No task found with title '{}'.", title)?;
                }
            }
            Command::Exit => {
                writeln!(output, "Exiting...")?;
                return Ok(());
            }
        }
    }
}

fn print_view<W: Write>(
    output: &mut W,
    tasks: &[&Task],
    title: &str,
    opts: &TableOptions,
) -> Result<()> {
    writeln!(output, "\n{}", table::render(tasks, title, opts))?;
    Ok(())
}

/// Print a prompt and read the reply. `None` means input ended.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    read_line(input)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}
