//! Command-line interface definitions.
//!
//! This module defines the CLI structure for the `diff-cache` binary using
//! clap, plus the plain-text rendering of a comparison.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::diff::{DiffKind, DiffResult};

/// Set-based file comparison.
///
/// Compares two CSV, TXT or JSON files as sets of rows, lines or entries.
#[derive(Parser, Debug)]
#[command(name = "diff-cache")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The command to execute.
    #[clap(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two files.
    ///
    /// Without --kind, both files must share an extension
    /// (csv, txt or json) which decides how they are compared.
    Compare {
        /// The first file (side A).
        file_a: PathBuf,
        /// The second file (side B).
        file_b: PathBuf,
        /// Compare as this kind regardless of file extensions.
        #[arg(long, value_enum)]
        kind: Option<DiffKind>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How a comparison is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary line followed by prefixed items.
    Text,
    /// The full result as pretty-printed JSON.
    Json,
}

/// Render a result for a terminal.
///
/// Items only in A are prefixed `- `, only in B `+ `, common items with two
/// spaces.
pub fn render_text(result: &DiffResult) -> String {
    let stats = &result.stats;
    let mut out = String::new();

    out.push_str(&format!(
        "A: {} items, B: {} items, only in A: {}, only in B: {}, common: {}\n",
        stats.total_a, stats.total_b, stats.only_a_count, stats.only_b_count, stats.common_count
    ));
    if result.is_identical() {
        out.push_str("files are identical\n");
    }
    for item in &result.only_in_a {
        out.push_str(&format!("- {}\n", item));
    }
    for item in &result.only_in_b {
        out.push_str(&format!("+ {}\n", item));
    }
    for item in &result.common {
        out.push_str(&format!("  {}\n", item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare;

    #[test]
    fn test_parse_compare() {
        let cli = Cli::parse_from(["test", "compare", "a.csv", "b.csv"]);
        match cli.command {
            Command::Compare {
                file_a,
                file_b,
                kind,
                format,
            } => {
                assert_eq!(file_a, PathBuf::from("a.csv"));
                assert_eq!(file_b, PathBuf::from("b.csv"));
                assert_eq!(kind, None);
                assert_eq!(format, OutputFormat::Text);
            }
        }
    }

    #[test]
    fn test_parse_kind_and_format() {
        let cli = Cli::parse_from([
            "test", "compare", "a.log", "b.log", "--kind", "lines", "--format", "json",
        ]);
        let Command::Compare { kind, format, .. } = cli.command;
        assert_eq!(kind, Some(DiffKind::Lines));
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_render_text() {
        let result = compare(DiffKind::Lines, "apple\nbanana", "banana\ncherry").unwrap();
        let text = render_text(&result);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "A: 2 items, B: 2 items, only in A: 1, only in B: 1, common: 1",
                "- apple",
                "+ cherry",
                "  banana",
            ]
        );
    }

    #[test]
    fn test_render_identical() {
        let result = compare(DiffKind::Lines, "a", "a").unwrap();
        assert!(render_text(&result).contains("files are identical"));
    }

    #[test]
    fn test_render_text_ends_every_line() {
        let result = compare(DiffKind::Lines, "same", "same").unwrap();
        assert_eq!(
            render_text(&result),
            "A: 1 items, B: 1 items, only in A: 0, only in B: 0, common: 1\n\
             files are identical\n  same\n"
        );
    }
}
