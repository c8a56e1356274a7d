//! The sanitize pipeline entry point.
//!
//! Composes the three stages: extend the raw path with new entries, split
//! and deduplicate it, and render the assignment statement for the chosen
//! shell dialect.

use crate::options::SanitizeOptions;
use crate::path::{extend, split_path, DirProbe};

/// Runs the full sanitize pipeline over a raw search-path value.
///
/// `path` is the current `PATH` value as read from the environment; `dirs`
/// are the candidate base directories whose `bin`/`sbin` subdirectories are
/// added when the probe confirms they exist. The returned string is the
/// complete assignment statement for the shell selected in `options`,
/// without a trailing newline.
///
/// # Examples
///
/// ```
/// use sanepath::{sanitize_path, FsProbe, SanitizeOptions, Shell};
///
/// let options = SanitizeOptions::new(Shell::Fish).include_current_dir(false);
/// let line = sanitize_path(":::/bin:::/usr/bin:/bin", &[], &options, &FsProbe);
/// assert_eq!(line, r#"set -gx PATH "/bin:/usr/bin""#);
/// ```
#[must_use]
pub fn sanitize_path(
    path: &str,
    dirs: &[String],
    options: &SanitizeOptions,
    probe: &dyn DirProbe,
) -> String {
    let extended = extend(
        path,
        options.include_current_dir,
        dirs,
        options.prepend,
        probe,
    );
    options.shell.eval_string(&split_path(&extended))
}
