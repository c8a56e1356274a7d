//! Error types for the sanepath library.
//!
//! This module provides the error type for the library, using `thiserror`
//! for ergonomic error handling. The pipeline itself is infallible by
//! design: filesystem probe failures are negative existence results, not
//! errors. The only fallible operation is converting a user-supplied shell
//! name into a [`crate::Shell`] dialect.

use thiserror::Error;

/// Result type alias for operations that may fail with a sanepath error.
///
/// # Examples
///
/// ```
/// use sanepath::{Result, Shell};
///
/// fn parse_dialect(name: &str) -> Result<Shell> {
///     name.parse()
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sanepath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An unrecognized shell dialect name was supplied.
    #[error("unsupported shell '{name}': must be one of 'bash', 'zsh' or 'fish'")]
    UnsupportedShell {
        /// The unrecognized shell name.
        name: String,
    },
}
