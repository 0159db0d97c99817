//! Command-line definition

use clap::Parser;

use crate::table::{DEFAULT_COL_SPACE, DEFAULT_WRAP_WIDTH};

/// Interactive task list with tabular terminal views
#[derive(Parser)]
#[command(name = "tasktab", version, about)]
pub struct Cli {
    /// Minimum printed width of each table column
    #[arg(long, default_value_t = DEFAULT_COL_SPACE)]
    pub col_space: usize,

    /// Characters per line within a table cell before hard-wrapping
    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    pub wrap_width: usize,

    /// Start with an empty list instead of the sample tasks
    #[arg(long)]
    pub empty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tasktab"]);
        assert_eq!(cli.col_space, DEFAULT_COL_SPACE);
        assert_eq!(cli.wrap_width, DEFAULT_WRAP_WIDTH);
        assert!(!cli.empty);
    }

    #[test]
    fn test_rendering_overrides() {
        let cli = Cli::parse_from(["tasktab", "--col-space", "12", "--wrap-width", "16", "--empty"]);
        assert_eq!(cli.col_space, 12);
        assert_eq!(cli.wrap_width, 16);
        assert!(cli.empty);
    }
}
