//! Text-table rendering for task views

use unicode_width::UnicodeWidthStr;

use crate::task::Task;

pub const DEFAULT_COL_SPACE: usize = 20;
pub const DEFAULT_WRAP_WIDTH: usize = 30;

const SEPARATOR_WIDTH: usize = 40;
const HEADERS: [&str; 4] = ["TITLE", "DESCRIPTION", "DUE DATE", "COMPLETED"];

/// Rendering knobs for the task table
#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    /// Minimum printed width of each column
    pub col_space: usize,

    /// Characters per line within a cell; longer values hard-wrap
    pub wrap_width: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            col_space: DEFAULT_COL_SPACE,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Split `text` into consecutive chunks of exactly `width` characters; the
/// final chunk may be shorter. This is character-count chunking, not word
/// wrapping, so words can be cut mid-word. Chunks are counted in `char`s,
/// never bytes, so multi-byte input cannot be split inside a code point.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Render tasks as a column-aligned table under a `{title}:` header line,
/// framed by separator rules. An empty task list renders the same frame
/// around a "No tasks found." notice.
pub fn render(tasks: &[&Task], title: &str, opts: &TableOptions) -> String {
    let rule = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    out.push_str(title);
    out.push_str(":\n");
    out.push_str(&rule);
    out.push('\n');

    if tasks.is_empty() {
        out.push_str("No tasks found.\n");
        out.push_str(&rule);
        out.push('\n');
        return out;
    }

    // Wrap every cell up front so column widths can account for each chunk
    let rows: Vec<[Vec<String>; 4]> = tasks
        .iter()
        .map(|task| wrap_cells(task, opts.wrap_width))
        .collect();

    let mut widths = [0usize; 4];
    for (width, header) in widths.iter_mut().zip(HEADERS) {
        *width = opts.col_space.max(header.width());
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            for line in cell {
                *width = (*width).max(line.width());
            }
        }
    }

    push_line(&mut out, HEADERS, &widths);
    for row in &rows {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for line_idx in 0..height {
            let cols = [
                cell_line(&row[0], line_idx),
                cell_line(&row[1], line_idx),
                cell_line(&row[2], line_idx),
                cell_line(&row[3], line_idx),
            ];
            push_line(&mut out, cols, &widths);
        }
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

fn wrap_cells(task: &Task, wrap_width: usize) -> [Vec<String>; 4] {
    let completed = if task.completed { "true" } else { "false" };
    [
        wrap_text(&task.title, wrap_width),
        wrap_text(&task.description, wrap_width),
        wrap_text(&task.due_date_display(), wrap_width),
        wrap_text(completed, wrap_width),
    ]
}

fn cell_line(cell: &[String], line_idx: usize) -> &str {
    cell.get(line_idx).map(String::as_str).unwrap_or("")
}

/// Append one physical table line: columns padded to width, separated by a
/// single space, with trailing whitespace dropped
fn push_line(out: &mut String, cols: [&str; 4], widths: &[usize; 4]) {
    let mut line = String::new();
    for (col, width) in cols.iter().zip(widths) {
        line.push_str(col);
        // Pad by display width so wide glyphs keep columns aligned
        line.push_str(&" ".repeat(width.saturating_sub(col.width()) + 1));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, description: &str, due: &str, completed: bool) -> Task {
        let mut task = Task::new(title, description, due).unwrap();
        task.completed = completed;
        task
    }

    #[test]
    fn test_wrap_text_exact_chunks() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_text_shorter_than_width() {
        assert_eq!(wrap_text("ab", 10), vec!["ab"]);
    }

    #[test]
    fn test_wrap_text_width_multiple_of_len() {
        assert_eq!(wrap_text("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn test_wrap_text_empty_and_zero_width() {
        assert_eq!(wrap_text("", 5), vec![""]);
        assert_eq!(wrap_text("abc", 0), vec!["abc"]);
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        assert_eq!(wrap_text("héllo", 2), vec!["hé", "ll", "o"]);
    }

    #[test]
    fn test_render_empty() {
        let rendered = render(&[], "Pending Tasks", &TableOptions::default());
        let expected = format!(
            "Pending Tasks:\n{rule}\nNo tasks found.\n{rule}\n",
            rule = "-".repeat(40)
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_single_row_no_wrapping() {
        let t = task("Workout", "Morning run for 30 minutes", "2024-08-06", false);
        let rendered = render(&[&t], "All Tasks", &TableOptions::default());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5); // title, rule, header, one row, rule
        assert_eq!(lines[0], "All Tasks:");
        assert_eq!(lines[1], "-".repeat(40));
        assert!(lines[2].starts_with("TITLE"));
        assert!(lines[2].contains("DESCRIPTION"));
        assert!(lines[2].ends_with("COMPLETED"));
        assert!(lines[3].starts_with("Workout"));
        assert!(lines[3].contains("Morning run for 30 minutes"));
        assert!(lines[3].ends_with("false"));
        assert_eq!(lines[4], "-".repeat(40));
    }

    #[test]
    fn test_render_wraps_long_cells() {
        let t = task("Buy groceries", "Buy milk, eggs, and bread", "2024-08-06", false);
        let opts = TableOptions {
            col_space: 10,
            wrap_width: 12,
        };
        let rendered = render(&[&t], "All Tasks", &opts);
        let expected = "\
All Tasks:
----------------------------------------
TITLE        DESCRIPTION  DUE DATE   COMPLETED
Buy grocerie Buy milk, eg 2024-08-06 false
s            gs, and brea
             d
----------------------------------------
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_marks_completed_rows() {
        let done = task("Workout", "Morning run for 30 minutes", "2024-08-06", true);
        let rendered = render(&[&done], "Completed Tasks", &TableOptions::default());
        assert!(rendered.contains(" true"));
        assert!(!rendered.contains("false"));
    }

    #[test]
    fn test_render_keeps_insertion_order() {
        let first = task("Buy groceries", "Buy milk, eggs, and bread", "2024-08-06", false);
        let second = task("Workout", "Morning run for 30 minutes", "2024-08-06", false);
        let rendered = render(&[&first, &second], "All Tasks", &TableOptions::default());

        let groceries = rendered.find("Buy groceries").unwrap();
        let workout = rendered.find("Workout").unwrap();
        assert!(groceries < workout);
    }
}
