//! restmold model scaffolder
//!
//! Writes a new `RestModel` boilerplate file.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use restmold_gen::errors::GeneratorError;
use restmold_gen::output::{ScaffoldOptions, ScaffoldOutcome, scaffold};
use restmold_gen::scaffold::{DEFAULT_DIR, DEFAULT_NAMESPACE};
use tracing_subscriber::EnvFilter;

/// Generate new REST model boilerplate
#[derive(Parser, Debug)]
#[command(name = "restmold-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Model name (e.g. "user" or "order items"), normalized to PascalCase
    name: String,

    /// Directory the model file is written to
    #[arg(short, long, default_value = DEFAULT_DIR)]
    dir: PathBuf,

    /// Module path recorded in the generated file
    #[arg(long, alias = "module-path", default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ScaffoldOptions {
        name: cli.name,
        dir: cli.dir,
        namespace: cli.namespace,
        dry_run: cli.dry_run,
    };

    match scaffold(&options)? {
        ScaffoldOutcome::Created(path) => {
            println!("{}", format!("File : {} created", path.display()).green());
        }
        ScaffoldOutcome::AlreadyExists(path) => {
            println!("{}", format!("File : {} already exists", path.display()).yellow());
        }
        ScaffoldOutcome::DryRun { path, code } => {
            println!("=== {} ===\n{}", path.display(), code);
        }
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "restmold_gen=info".to_string(),
            2 => "restmold_gen=debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
