#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sanepath
//!
//! A library for sanitizing and extending the shell search path.
//!
//! This library provides the core pipeline for turning a raw, possibly messy
//! `PATH` value into a clean shell assignment statement: extending it with
//! candidate `bin`/`sbin` directories, collapsing separator artifacts,
//! deduplicating entries, and rendering the result for a specific shell
//! dialect.
//!
//! ## Core Types
//!
//! - [`SanitizeOptions`]: Pipeline configuration built once by the CLI
//! - [`Shell`]: Supported shell dialects and their assignment syntax
//! - [`DirProbe`] and [`FsProbe`]: Injectable filesystem existence checks
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use sanepath::{sanitize_path, FsProbe, SanitizeOptions, Shell};
//!
//! let options = SanitizeOptions::new(Shell::Bash).include_current_dir(false);
//! let line = sanitize_path("/bin:/usr/bin:/bin", &[], &options, &FsProbe);
//! assert_eq!(line, r#"export PATH="/bin:/usr/bin""#);
//! ```

pub mod error;
pub mod logging;
pub mod options;
pub mod path;
pub mod sanitize;
pub mod shell;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use options::SanitizeOptions;
pub use path::{DirProbe, FsProbe};
pub use sanitize::sanitize_path;
pub use shell::Shell;
