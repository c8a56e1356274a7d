//! Main entry point for the sanepath CLI.
//!
//! Reads the current `PATH` value, runs the sanitize pipeline over it, and
//! prints the resulting shell assignment statement on a single line of
//! standard output. The statement takes effect only when the invoking shell
//! evaluates it, e.g. `source <(sanepath -s bash)`.

mod cli;
mod error;

use std::env;
use std::io::{self, Write};

use clap::Parser;

use cli::Cli;
use error::CliError;
use sanepath::{FsProbe, Logger, SanitizeOptions};

fn main() {
    // Parse CLI arguments; clap reports usage errors and exits on its own
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = sanepath::init_logger(cli.verbose, cli.quiet);

    match run(&cli, &logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Run the pipeline and print the assignment statement.
fn run(cli: &Cli, logger: &Logger) -> Result<(), CliError> {
    let current = read_path_env()?;
    logger.debug(&format!("current search path: {current}"));

    let options = SanitizeOptions::new(cli.shell)
        .include_current_dir(!cli.no_current_dir)
        .prepend(!cli.append);

    let line = sanepath::sanitize_path(&current, &cli.dirs, &options, &FsProbe);
    logger.info(&format!("emitting {} statement", cli.shell));

    writeln!(io::stdout(), "{line}")?;
    Ok(())
}

/// Read the current `PATH` value from the environment.
///
/// A missing variable is treated as an empty path; a value that is not
/// valid UTF-8 is a fatal error.
fn read_path_env() -> Result<String, CliError> {
    match env::var("PATH") {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(String::new()),
        Err(env::VarError::NotUnicode(_)) => Err(CliError::InvalidEnvironment(
            "PATH is not valid UTF-8".to_string(),
        )),
    }
}
