//! Path extension and separator cleanup.
//!
//! This stage builds the addition to the search path (the dot directory and
//! any existing `bin`/`sbin` subdirectories of the candidate base
//! directories), splices it before or after the original value, and cleans
//! the separator artifacts the concatenation can introduce.

use std::fs;
use std::path::Path;

/// Filesystem existence check used by the extension stage.
///
/// A probe failure of any kind (missing path, permission denied, not a
/// directory) is a negative result, never an error. Tests inject fake
/// probes to exercise the stage without a real filesystem.
pub trait DirProbe {
    /// Returns true when `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Production [`DirProbe`] backed by `stat` on the real filesystem.
///
/// # Examples
///
/// ```
/// use sanepath::{DirProbe, FsProbe};
/// use std::path::Path;
///
/// assert!(FsProbe.is_dir(Path::new("/")));
/// assert!(!FsProbe.is_dir(Path::new("/this/does/not/exist")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl DirProbe for FsProbe {
    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }
}

/// Extends a search-path string with new entries, then cleans it up.
///
/// The addition is built in a fixed order: the current (dot) directory when
/// `include_current_dir` is set, then for each candidate base directory in
/// input order its `bin` and `sbin` subdirectories, keeping only those the
/// probe confirms exist. The addition is prepended or appended according to
/// `prepend`.
///
/// Cleanup collapses runs of slashes and colons (of any length) to a single
/// character and strips leading and trailing colons, so an empty addition
/// never leaves stray separators behind.
///
/// # Examples
///
/// ```
/// use sanepath::path::extend;
/// use sanepath::FsProbe;
///
/// // Assuming /bin and /sbin exist:
/// let extended = extend(
///     "/where/ever:/where/ever/else",
///     false,
///     &["/".to_string()],
///     false,
///     &FsProbe,
/// );
/// assert_eq!(extended, "/where/ever:/where/ever/else:/bin:/sbin");
/// ```
#[must_use]
pub fn extend(
    path: &str,
    include_current_dir: bool,
    dirs: &[String],
    prepend: bool,
    probe: &dyn DirProbe,
) -> String {
    // Build the addition: the dot directory plus every bin/sbin that exists.
    let mut extra = String::new();
    if include_current_dir {
        extra.push('.');
    }
    for dir in dirs {
        for sub in ["bin", "sbin"] {
            let subdir = format!("{dir}/{sub}");
            if probe.is_dir(Path::new(&subdir)) {
                extra.push(':');
                extra.push_str(&subdir);
            }
        }
    }

    let combined = if prepend {
        format!("{extra}:{path}")
    } else {
        format!("{path}:{extra}")
    };

    // Collapse slash and colon runs left by concatenation or already present
    // in the input, then strip the colons the splice can leave at the ends.
    let combined = collapse_runs(&combined, '/');
    let combined = collapse_runs(&combined, ':');
    combined.trim_matches(':').to_string()
}

/// Collapses every run of two or more `sep` characters into a single one.
fn collapse_runs(s: &str, sep: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_was_sep = false;
    for c in s.chars() {
        if c == sep {
            if previous_was_sep {
                continue;
            }
            previous_was_sep = true;
        } else {
            previous_was_sep = false;
        }
        out.push(c);
    }
    out
}
