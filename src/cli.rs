use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::runner::{RunnerError, run_targets};
use crate::targets::{default_targets, validate_targets};
use crate::tool::{CargoInstall, ensure_available};

#[derive(Debug, Parser)]
#[command(
    name = "install-all",
    version,
    about = "Install a checkout's primary crate and its bundled plugins in one pass"
)]
pub struct Cli {
    /// Root of the source checkout (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// External install tool to invoke
    #[arg(long, global = true, default_value = "cargo")]
    tool: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the install targets as JSON without running anything
    List {
        /// Emit compact JSON instead of pretty output
        #[arg(long)]
        raw: bool,
    },
    /// Install every target in order, stopping at the first failure
    Install {
        /// Emit the final report as compact JSON
        #[arg(long)]
        raw: bool,
    },
}

pub fn run() -> i32 {
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err:#}");
            err.downcast_ref::<RunnerError>()
                .map(RunnerError::exit_code)
                .unwrap_or(1)
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    // Bare invocation installs everything, matching the script this replaces.
    let command = cli.command.unwrap_or(Commands::Install { raw: false });

    match command {
        Commands::List { raw } => {
            let targets = default_targets();
            if raw {
                println!("{}", serde_json::to_string(&targets)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&targets)?);
            }
        }
        Commands::Install { raw } => {
            let root = match cli.root {
                Some(root) => root,
                None => std::env::current_dir().context("resolving the invocation directory")?,
            };

            let targets = default_targets();
            validate_targets(&targets).context("validating the built-in target list")?;
            ensure_available(&cli.tool)?;

            let mut tool = CargoInstall::new(&cli.tool);
            let report = run_targets(&root, &targets, &mut tool)?;

            println!();
            if raw {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("Installed {}/{} targets", report.completed, report.total);
            }
        }
    }

    Ok(())
}
