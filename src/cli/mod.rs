//! The `caiac` command line: render a declaration, or manage the Go file it describes.
//!
//! ## Commands
//!
//! - `render <DECL>` - Print the Go source generated from a declaration
//! - `plan <DECL> --filename <F>` - Show what `apply` would change
//! - `apply <DECL> --filename <F>` - Create or update the generated file
//! - `read <F>` - Print a file as it exists on disk
//! - `destroy <F>` - Delete a generated file and the directories it leaves empty
//!
//! `<DECL>` is a JSON file holding the declarative tree, or `-` to read it from stdin.
//!
//! Every command hands back the [`ExitCode`] it wants, or a [`CliError`] carrying the text to print on stderr.
//! [`run`] turns either into the process exit status.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::provider::BASE_DIR_ENV;

// ============================================================================
// Exit status
// ============================================================================

/// Process exit status of a `caiac` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// Bad declaration, generation error, or filesystem error.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// `plan --detailed-exitcode` found a file to create or update.
    pub const CHANGES_PENDING: ExitCode = ExitCode(2);
}

/// A command that could not finish. `message` is printed on stderr as is.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Wrap a generation or provider error as a miette report, keeping its `caiac::*` code and help text.
    pub fn report<E>(err: E) -> Self
    where
        E: miette::Diagnostic + Send + Sync + 'static,
    {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate Go source files from declarative descriptions
#[derive(Parser, Debug)]
#[command(name = "caiac")]
#[command(version = VERSION)]
#[command(about = "Generate Go source files from declarative descriptions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory that relative filenames are resolved against (default: current directory)
    #[arg(long, global = true, value_name = "DIR", env = BASE_DIR_ENV)]
    pub base_dir: Option<PathBuf>,

    /// Reject declaration blocks that do not match their declared kind
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the generated Go source
    Render {
        /// Declaration file (JSON), or `-` for stdin
        #[arg(value_name = "DECL")]
        decl: PathBuf,
    },

    /// Show what `apply` would change
    Plan {
        /// Declaration file (JSON), or `-` for stdin
        #[arg(value_name = "DECL")]
        decl: PathBuf,
        /// Generated file, relative to the base directory
        #[arg(long, value_name = "FILE")]
        filename: String,
        /// Exit with code 2 when there are pending changes
        #[arg(long)]
        detailed_exitcode: bool,
    },

    /// Create or update the generated file
    Apply {
        /// Declaration file (JSON), or `-` for stdin
        #[arg(value_name = "DECL")]
        decl: PathBuf,
        /// Generated file, relative to the base directory
        #[arg(long, value_name = "FILE")]
        filename: String,
    },

    /// Print a file as it exists on disk
    Read {
        #[arg(value_name = "FILE")]
        filename: String,
        /// Print the state as JSON instead of the raw contents
        #[arg(long)]
        json: bool,
    },

    /// Delete a generated file and any directories it leaves empty
    Destroy {
        #[arg(value_name = "FILE")]
        filename: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Parse the arguments, run the command, and exit with its status.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let opts = commands::GlobalOptions {
        base_dir: cli.base_dir,
        strict: cli.strict,
    };

    match cli.command {
        Command::Render { decl } => commands::render(&opts, &decl),
        Command::Plan {
            decl,
            filename,
            detailed_exitcode,
        } => commands::plan(&opts, &decl, &filename, detailed_exitcode),
        Command::Apply { decl, filename } => commands::apply(&opts, &decl, &filename),
        Command::Read { filename, json } => commands::read(&opts, &filename, json),
        Command::Destroy { filename } => commands::destroy(&opts, &filename),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_render() {
        let cli = Cli::try_parse_from(["caiac", "render", "main.json"]).unwrap();
        assert!(matches!(cli.command, Command::Render { ref decl } if decl == &PathBuf::from("main.json")));
        assert!(!cli.strict);
    }

    #[test]
    fn test_cli_parse_plan() {
        let cli = Cli::try_parse_from(["caiac", "plan", "-", "--filename", "cmd/main.go", "--detailed-exitcode"])
            .unwrap();
        if let Command::Plan {
            decl,
            filename,
            detailed_exitcode,
        } = cli.command
        {
            assert_eq!(decl, PathBuf::from("-"));
            assert_eq!(filename, "cmd/main.go");
            assert!(detailed_exitcode);
        } else {
            panic!("Expected Plan command");
        }
    }

    #[test]
    fn test_cli_apply_requires_filename() {
        assert!(Cli::try_parse_from(["caiac", "apply", "main.json"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["caiac", "read", "main.go", "--base-dir", "/tmp/out", "--strict"]).unwrap();
        assert_eq!(cli.base_dir, Some(PathBuf::from("/tmp/out")));
        assert!(cli.strict);
    }

    #[test]
    fn test_cli_parse_destroy() {
        let cli = Cli::try_parse_from(["caiac", "destroy", "main.go"]).unwrap();
        assert!(matches!(cli.command, Command::Destroy { ref filename } if filename == "main.go"));
    }
}
