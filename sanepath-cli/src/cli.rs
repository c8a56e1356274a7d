//! CLI structure definition.
//!
//! This module defines the command-line surface using clap's derive macros.
//! The tool has no subcommands: it parses flags and candidate directories,
//! and the pipeline runs once.

use clap::Parser;
use sanepath::Shell;

const AFTER_HELP: &str = "\
The DIR arguments must point to directories just above bin/ or sbin/
(e.g. /usr/local).

Examples:
  sanepath -s bash /opt/local   # adds /opt/local/{bin,sbin} when these exist
  sanepath -s fish -C           # leaves out the current (dot) directory

Usage from a shell startup file:
  source <(sanepath ...)        # bash
  eval \"$(sanepath ...)\"        # zsh or fish";

/// Command-line tool for sanitizing and extending the shell search path.
#[derive(Parser)]
#[command(name = "sanepath")]
#[command(version, about = "Sanitize and extend the shell search path", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Do not add the current (dot) directory to the path
    #[arg(long = "no-current-dir", short = 'C')]
    pub no_current_dir: bool,

    /// Append new entries instead of prepending them
    #[arg(long, short = 'a')]
    pub append: bool,

    /// Shell dialect to emit the assignment for
    #[arg(long, short, value_enum, value_name = "SHELL")]
    pub shell: Shell,

    /// Base directories whose bin/ and sbin/ subdirectories are added
    #[arg(value_name = "DIR")]
    pub dirs: Vec<String>,
}
