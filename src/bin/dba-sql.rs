//! dba-sql — learning standards JSON to MySQL
//!
//! # Usage
//!
//! ```bash
//! # Convert logica_dba.json into logica_dba.sql
//! dba-sql
//!
//! # Explicit paths
//! dba-sql estandares.json -o estandares.sql
//!
//! # Print the script instead of writing it
//! dba-sql --stdout
//! ```

use anyhow::Result;
use clap::Parser;
use colored::*;
use dba_sql::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dba-sql")]
#[command(version)]
#[command(about = "Convert learning-standards JSON into a MySQL script", long_about = None)]
#[command(after_help = "EXAMPLES:
    dba-sql
    dba-sql logica_dba.json -o logica_dba.sql
    dba-sql --stdout > estandares.sql")]
struct Cli {
    /// Input JSON document [default: logica_dba.json]
    input: Option<PathBuf>,

    /// Output SQL file [default: logica_dba.sql]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file [default: ./dba-sql.toml if present]
    #[arg(short, long, env = "DBA_SQL_CONFIG")]
    config: Option<PathBuf>,

    /// Print the script to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "dba_sql=debug" } else { "dba_sql=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::discover(&std::env::current_dir()?)?,
    }
    .with_overrides(cli.input.clone(), cli.output.clone());

    if cli.stdout {
        let (script, _) = dba_sql::build(&config.input)?;
        emit(&mut std::io::stdout().lock(), &script)?;
        return Ok(());
    }

    let summary = dba_sql::run(&config)?;

    if cli.verbose {
        eprintln!(
            "{} {} standard(s), {} example-only, {} evidence(s), {} skipped",
            "✓".green(),
            summary.standards.to_string().cyan(),
            summary.examples.to_string().cyan(),
            summary.evidences.to_string().cyan(),
            summary.skipped.to_string().dimmed()
        );
    }
    println!(
        "¡Conversión completada! Revisa el archivo {}.",
        config.output.display()
    );
    Ok(())
}
