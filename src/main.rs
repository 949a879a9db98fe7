//! Command-line front end for file comparison.
//!
//! ```bash
//! diff-cache compare old.csv new.csv
//! diff-cache compare a.log b.log --kind lines --format json
//! ```
//!
//! Exits 0 when the files hold the same items, 1 when they differ and 2 on
//! any error.

use clap::Parser;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use diff_cache::cli::{render_text, Cli, Command, OutputFormat};
use diff_cache::{compare_files, compare_named, DiffResult};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(result) if result.is_identical() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<DiffResult, Box<dyn Error>> {
    match cli.command {
        Command::Compare {
            file_a,
            file_b,
            kind,
            format,
        } => {
            let name_a = display_name(&file_a);
            let name_b = display_name(&file_b);
            let content_a = read(&file_a)?;
            let content_b = read(&file_b)?;

            info!(file_a = %name_a, file_b = %name_b, ?kind, "comparing files");
            let result = match kind {
                Some(kind) => compare_named(kind, &name_a, &content_a, &name_b, &content_b)?,
                None => compare_files(&name_a, &content_a, &name_b, &content_b)?,
            };

            match format {
                OutputFormat::Text => print!("{}", render_text(&result)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
            Ok(result)
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path.display(), e).into())
}
