//! Ordering and selection of the largest entries.

use std::cmp::Reverse;

use crate::scan::Entry;

/// Default number of entries shown in the report.
pub const DEFAULT_TOP: usize = 100;

/// Sort entries by size, largest first. The relative order of entries with
/// equal sizes is unspecified.
pub fn rank(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_unstable_by_key(|e| Reverse(e.size));
    entries
}

/// Truncate a ranked list to its first `n` entries.
pub fn top(mut entries: Vec<Entry>, n: usize) -> Vec<Entry> {
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(name: &str, size: u64) -> Entry {
        Entry {
            path: PathBuf::from(name),
            size,
        }
    }

    #[test]
    fn rank_orders_largest_first() {
        let ranked = rank(vec![
            entry("small", 10),
            entry("big", 4096),
            entry("mid", 512),
            entry("also-mid", 512),
        ]);

        for pair in ranked.windows(2) {
            assert!(pair[0].size >= pair[1].size);
        }
        assert_eq!(ranked[0].path, PathBuf::from("big"));
        assert_eq!(ranked[3].path, PathBuf::from("small"));
    }

    #[test]
    fn top_bounds_the_list() {
        let entries = vec![entry("a", 3), entry("b", 2), entry("c", 1)];

        assert_eq!(top(entries.clone(), 2).len(), 2);
        assert_eq!(top(entries.clone(), 3).len(), 3);
        // Asking for more than exists returns everything.
        assert_eq!(top(entries, 100).len(), 3);
    }
}
