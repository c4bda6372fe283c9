pub mod cli;
pub mod runner;
pub mod targets;
pub mod tool;

/// Run the command line interface and return an exit code.
pub fn run_cli() -> i32 {
    cli::run()
}
