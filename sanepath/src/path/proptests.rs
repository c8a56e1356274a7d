//! Property-based tests for the path stages.
//!
//! Run with `cargo test --features property-tests`.

use std::collections::HashSet;
use std::path::Path;

use proptest::prelude::*;

use super::extend::{extend, DirProbe};
use super::split::split_path;

/// Probe that approves every path it is asked about.
struct YesProbe;

impl DirProbe for YesProbe {
    fn is_dir(&self, _path: &Path) -> bool {
        true
    }
}

/// Probe that rejects every path it is asked about.
struct NoProbe;

impl DirProbe for NoProbe {
    fn is_dir(&self, _path: &Path) -> bool {
        false
    }
}

// Colon-separated path strings with messy separators mixed in.
fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9/:]{0,12}", 0..=6).prop_map(|parts| parts.join(":"))
}

// Candidate base directories without separators in their names.
fn dirs_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("/[a-z]{1,8}", 0..=4)
}

proptest! {
    /// Split output never contains empty segments or duplicates.
    #[test]
    fn split_unique_and_nonempty(p in path_strategy()) {
        let parts = split_path(&p);
        let mut seen = HashSet::new();
        for part in &parts {
            prop_assert!(!part.is_empty());
            prop_assert!(seen.insert(part.clone()));
        }
    }

    /// Split preserves the order of first appearance of distinct segments.
    #[test]
    fn split_first_appearance_order(p in path_strategy()) {
        let mut expected = Vec::new();
        for segment in p.split(':') {
            if !segment.is_empty() && !expected.contains(&segment.to_string()) {
                expected.push(segment.to_string());
            }
        }
        prop_assert_eq!(split_path(&p), expected);
    }

    /// Splitting a joined split is a fixed point.
    #[test]
    fn split_idempotent(p in path_strategy()) {
        let first = split_path(&p);
        let second = split_path(&first.join(":"));
        prop_assert_eq!(first, second);
    }

    /// Extension output carries no separator artifacts.
    #[test]
    fn extend_output_is_clean(
        p in path_strategy(),
        dirs in dirs_strategy(),
        dot in any::<bool>(),
        prepend in any::<bool>(),
    ) {
        let extended = extend(&p, dot, &dirs, prepend, &YesProbe);
        prop_assert!(!extended.contains("::"));
        prop_assert!(!extended.contains("//"));
        prop_assert!(!extended.starts_with(':'));
        prop_assert!(!extended.ends_with(':'));
    }

    /// Prepended additions come first, in dot, bin, sbin order per candidate.
    #[test]
    fn extend_prepend_places_additions_first(
        p in "[a-z/]{1,12}",
        dirs in dirs_strategy(),
        dot in any::<bool>(),
    ) {
        let mut additions = Vec::new();
        if dot {
            additions.push(".".to_string());
        }
        for dir in &dirs {
            additions.push(format!("{dir}/bin"));
            additions.push(format!("{dir}/sbin"));
        }
        let extended = extend(&p, dot, &dirs, true, &YesProbe);
        let prefix = split_path(&additions.join(":"));
        let got = split_path(&extended);
        prop_assert!(got.len() >= prefix.len());
        prop_assert_eq!(&got[..prefix.len()], &prefix[..]);
    }

    /// A probe that rejects everything adds nothing beyond the dot.
    #[test]
    fn extend_rejecting_probe_adds_nothing(
        p in "[a-z/:]{0,16}",
        dirs in dirs_strategy(),
        prepend in any::<bool>(),
    ) {
        let extended = extend(&p, false, &dirs, prepend, &NoProbe);
        let cleaned = extend(&p, false, &[], prepend, &NoProbe);
        prop_assert_eq!(extended, cleaned);
    }
}
