//! Path splitting and deduplication.

use std::collections::HashSet;

/// Splits a search-path string into its unique component directories.
///
/// Segments are compared byte-exact, without trimming. Empty segments are
/// dropped; of duplicate segments, the first occurrence wins and the
/// relative order of first appearance is preserved.
///
/// # Examples
///
/// ```
/// use sanepath::path::split_path;
///
/// assert_eq!(
///     split_path("/bin:/usr/bin:/bin:/usr/bin"),
///     vec!["/bin".to_string(), "/usr/bin".to_string()],
/// );
/// ```
#[must_use]
pub fn split_path(path: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(""); // empty segments are never emitted

    let mut parts = Vec::new();
    for segment in path.split(':') {
        if seen.insert(segment) {
            parts.push(segment.to_string());
        }
    }
    parts
}
