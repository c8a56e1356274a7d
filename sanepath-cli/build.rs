//! Build script for sanepath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying flags, update both files.
fn build_cli() -> Command {
    Command::new("sanepath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sanitize and extend the shell search path")
        .long_about(
            "Sanitizes the PATH environment setting, optionally adds the current (dot) \
             directory and the bin/ and sbin/ subdirectories of the given base directories, \
             and emits an assignment statement for the selected shell.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-current-dir")
                .long("no-current-dir")
                .short('C')
                .help("Do not add the current (dot) directory to the path")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("append")
                .long("append")
                .short('a')
                .help("Append new entries instead of prepending them")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("shell")
                .long("shell")
                .short('s')
                .help("Shell dialect to emit the assignment for")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish"])
                .required(true),
        )
        .arg(
            Arg::new("dirs")
                .help("Base directories whose bin/ and sbin/ subdirectories are added")
                .value_name("DIR")
                .num_args(0..),
        )
}

fn main() {
    // Generate the man page at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("sanepath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
