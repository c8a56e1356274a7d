//! Search-path transformation stages.
//!
//! This module provides the two path-level stages of the sanitize pipeline:
//!
//! # Extension
//!
//! [`extend`] adds new entries to a raw `PATH` string: optionally the
//! current (dot) directory, then the `bin` and `sbin` subdirectories of each
//! candidate base directory that actually exist on disk. It then cleans the
//! concatenation artifacts (repeated slashes, repeated/leading/trailing
//! colons).
//!
//! Filesystem existence is checked through the [`DirProbe`] trait so the
//! stage can be tested without touching a real filesystem; [`FsProbe`] is
//! the production implementation.
//!
//! # Splitting and deduplication
//!
//! [`split_path`] breaks a path string into its component directories,
//! dropping empty segments and duplicates while preserving the order of
//! first appearance.
//!
//! # Examples
//!
//! ```
//! use sanepath::path::split_path;
//!
//! let parts = split_path("/bin:/usr/bin:/bin");
//! assert_eq!(parts, vec!["/bin".to_string(), "/usr/bin".to_string()]);
//! ```

pub mod extend;
pub mod split;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key items
pub use extend::{extend, DirProbe, FsProbe};
pub use split::split_path;
