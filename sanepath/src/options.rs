//! Pipeline configuration.
//!
//! The CLI builds a [`SanitizeOptions`] once from its parsed arguments and
//! passes it into the pipeline entry point. There is no process-wide mutable
//! configuration state.

use crate::shell::Shell;

/// Configuration for a single sanitize run.
///
/// # Examples
///
/// ```
/// use sanepath::{SanitizeOptions, Shell};
///
/// let options = SanitizeOptions::new(Shell::Zsh);
/// assert!(options.include_current_dir);
/// assert!(options.prepend);
///
/// let options = SanitizeOptions::new(Shell::Fish)
///     .include_current_dir(false)
///     .prepend(false);
/// assert!(!options.include_current_dir);
/// assert!(!options.prepend);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Ensure the current (dot) directory is present in the path.
    pub include_current_dir: bool,

    /// Place new entries before the existing path instead of after it.
    pub prepend: bool,

    /// Shell dialect for the emitted assignment statement.
    pub shell: Shell,
}

impl SanitizeOptions {
    /// Creates options for the given shell with the default behavior:
    /// include the current directory and prepend new entries.
    #[must_use]
    pub const fn new(shell: Shell) -> Self {
        Self {
            include_current_dir: true,
            prepend: true,
            shell,
        }
    }

    /// Sets whether the current (dot) directory is added to the path.
    #[must_use]
    pub const fn include_current_dir(mut self, include: bool) -> Self {
        self.include_current_dir = include;
        self
    }

    /// Sets whether new entries are prepended (true) or appended (false).
    #[must_use]
    pub const fn prepend(mut self, prepend: bool) -> Self {
        self.prepend = prepend;
        self
    }
}
