//! Subcommand bodies. Each loads its inputs, drives the `go_source` resource or data source, prints the result, and
//! returns the exit status for [`super::run`].

use std::fs;
use std::io::{self, Read as _};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::backend::GoCodegen;
use crate::provider::{GoSourceDataSource, GoSourceResource, PlanOutcome, ProviderConfig};

use super::{CliError, CliResult, ExitCode};

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub base_dir: Option<PathBuf>,
    pub strict: bool,
}

impl GlobalOptions {
    fn codegen(&self) -> GoCodegen {
        if self.strict { GoCodegen::strict() } else { GoCodegen::new() }
    }

    fn config(&self) -> CliResult<ProviderConfig> {
        ProviderConfig::resolve(self.base_dir.as_deref()).map_err(CliError::report)
    }

    fn resource(&self) -> CliResult<GoSourceResource> {
        Ok(GoSourceResource::from_config(&self.config()?).with_codegen(self.codegen()))
    }
}

// ============================================================================
// Declaration loading
// ============================================================================

/// Load a declarative tree from a JSON file, or from stdin when the path is `-`.
pub fn load_declaration(path: &Path) -> CliResult<Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::failure(format!("Error reading declaration from stdin: {}", e)))?;
        buf
    } else {
        fs::read_to_string(path)
            .map_err(|e| CliError::failure(format!("Error reading {}: {}", path.display(), e)))?
    };

    serde_json::from_str(&text)
        .map_err(|e| CliError::failure(format!("Error parsing declaration {}: {}", path.display(), e)))
}

// ============================================================================
// Commands
// ============================================================================

/// Print the generated source to stdout.
pub fn render(opts: &GlobalOptions, decl: &Path) -> CliResult<ExitCode> {
    let tree = load_declaration(decl)?;
    let source = opts.codegen().try_generate(&tree).map_err(CliError::report)?;
    print!("{}", source);
    Ok(ExitCode::SUCCESS)
}

pub fn plan(opts: &GlobalOptions, decl: &Path, filename: &str, detailed_exitcode: bool) -> CliResult<ExitCode> {
    let tree = load_declaration(decl)?;
    let resource = opts.resource()?;

    let outcome = resource.plan(filename, &tree).map_err(CliError::report)?;
    let pending = !matches!(outcome, PlanOutcome::NoChange);
    print_plan(filename, &outcome);

    if detailed_exitcode && pending {
        Ok(ExitCode::CHANGES_PENDING)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Create the file, or update it when the generated text differs from what is on disk.
pub fn apply(opts: &GlobalOptions, decl: &Path, filename: &str) -> CliResult<ExitCode> {
    let tree = load_declaration(decl)?;
    let resource = opts.resource()?;

    let (state, outcome) = resource.apply(filename, &tree).map_err(CliError::report)?;
    let path = resource.store().resolve(&state.filename);
    match outcome {
        PlanOutcome::Create { .. } => {
            println!("Created: {}", path.display());
        }
        PlanOutcome::Update { diff } => {
            print!("{}", diff);
            println!("Updated: {}", path.display());
        }
        PlanOutcome::NoChange => {
            println!("✓ {} is up to date", filename);
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn read(opts: &GlobalOptions, filename: &str, json: bool) -> CliResult<ExitCode> {
    let data_source = GoSourceDataSource::from_config(&opts.config()?);
    let state = data_source.read(filename).map_err(CliError::report)?;

    if json {
        let out = serde_json::to_string_pretty(&state)
            .map_err(|e| CliError::failure(format!("Error serializing state: {}", e)))?;
        println!("{}", out);
    } else {
        print!("{}", state.contents);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn destroy(opts: &GlobalOptions, filename: &str) -> CliResult<ExitCode> {
    let config = opts.config()?;
    let state = GoSourceDataSource::from_config(&config)
        .read(filename)
        .map_err(CliError::report)?;
    opts.resource()?.delete(&state).map_err(CliError::report)?;
    println!("Destroyed: {}", filename);
    Ok(ExitCode::SUCCESS)
}

fn print_plan(filename: &str, outcome: &PlanOutcome) {
    match outcome {
        PlanOutcome::Create { contents } => {
            println!("+ create {}", filename);
            for (i, line) in contents.lines().enumerate() {
                println!("+{:4} | {}", i + 1, line);
            }
        }
        PlanOutcome::Update { diff } => {
            println!("~ update {}", filename);
            print!("{}", diff);
        }
        PlanOutcome::NoChange => println!("No changes. {} is up to date.", filename),
    }
}
