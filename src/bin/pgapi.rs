use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pgapi_bridge::prelude::*;
use pgapi_bridge::{bridge, registry, CaseFile};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pgapi")]
#[command(about = "Drive the action dispatch bridge without a database host", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch a single action and print the result
    Dispatch {
        /// Registered action name
        #[arg(value_name = "ACTION")]
        action: String,

        /// Action input as JSON text
        #[arg(value_name = "INPUT", default_value = "{}")]
        input: String,

        /// Plugin config as JSON text
        #[arg(short, long, default_value = "{}")]
        config: String,
    },

    /// List registered actions
    List,

    /// Run a YAML file of dispatch cases and check their expectations
    Run {
        /// Path to the case file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "pgapi_bridge=debug"
    } else {
        "pgapi_bridge=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %e, "pgapi failed");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Commands::Dispatch {
            action,
            input,
            config,
        } => Ok(dispatch_one(&action, &input, &config)),
        Commands::List => {
            list_actions();
            Ok(true)
        }
        Commands::Run { file } => run_cases(file),
    }
}

fn dispatch_one(action: &str, input: &str, config: &str) -> bool {
    let output = bridge::handle(registry::global(), action, input, config);
    println!("{}", output);

    match ResultMessage::from_json(&output) {
        Ok(result) => !result.state.is_error(),
        Err(e) => {
            tracing::error!(error = %e, "Bridge returned unparseable output");
            false
        }
    }
}

fn list_actions() {
    let registry = registry::global();
    println!("Registered actions ({}):", registry.len());
    for info in registry.infos() {
        println!("  {:<12} {}", info.name, info.description);
    }
}

#[tracing::instrument(skip_all, fields(file = %file.display()))]
fn run_cases(file: PathBuf) -> anyhow::Result<bool> {
    let cases = CaseFile::load(&file)?;
    if cases.cases.is_empty() {
        tracing::warn!("Case file contains no cases");
    }

    let outcomes = cases.run(registry::global());
    let mut failed = 0;

    for outcome in &outcomes {
        if outcome.passed() {
            println!("✓ {}", outcome.label);
        } else {
            failed += 1;
            println!("✗ {}", outcome.label);
            for failure in &outcome.failures {
                println!("    {}", failure);
            }
        }
        println!("    {}", outcome.output);
    }

    println!();
    println!(
        "{} passed, {} failed, {} total",
        outcomes.len() - failed,
        failed,
        outcomes.len()
    );

    Ok(failed == 0)
}
