//! Recursive directory traversal and bottom-up size aggregation.
//!
//! The walk is depth-first and synchronous. Each recursive call returns its
//! own aggregate and its own locally produced entries; the caller merges the
//! child results into its result, so no collection is ever shared across the
//! call tree. Directory handles (`ReadDir`) are dropped on every exit path.

use std::fs;
use std::path::{Path, PathBuf};

/// Which filesystem objects produce an [`Entry`] during a scan.
///
/// Directories are always recursed into regardless of the mode; the mode only
/// gates whether an entry is recorded for a given object type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// Record an entry for every file.
    FilesOnly,
    /// Record an entry for every directory.
    DirectoriesOnly,
    /// Record an entry for every file and every directory.
    Both,
}

impl SelectionMode {
    pub fn records_files(self) -> bool {
        matches!(self, SelectionMode::FilesOnly | SelectionMode::Both)
    }

    pub fn records_dirs(self) -> bool {
        matches!(self, SelectionMode::DirectoriesOnly | SelectionMode::Both)
    }
}

/// One reported filesystem object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    /// For a file, its byte length. For a directory, the sum of the byte
    /// lengths of all files transitively contained in it.
    pub size: u64,
}

/// Everything a single traversal produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Entries recorded per the active [`SelectionMode`].
    pub entries: Vec<Entry>,
    /// Sum of file byte lengths under the root. Directory entries contribute
    /// nothing extra to this sum.
    pub total_bytes: u64,
    /// Paths that could not be read and were treated as empty subtrees.
    pub skipped: Vec<PathBuf>,
}

/// Walk `root` depth-first and collect size entries per `mode`.
///
/// An inaccessible directory (the root included) degrades to an empty
/// subtree: it contributes 0 bytes, records no entry and lands in
/// [`ScanOutcome::skipped`] instead of aborting the scan. An unreadable or
/// nonexistent root therefore yields an outcome with zero entries rather
/// than an error.
pub fn scan(root: &Path, mode: SelectionMode) -> ScanOutcome {
    match walk(root, mode) {
        Some(outcome) => outcome,
        None => ScanOutcome {
            skipped: vec![root.to_path_buf()],
            ..ScanOutcome::default()
        },
    }
}

/// Returns the merged result for the subtree rooted at `dir`, or `None` when
/// `dir` itself cannot be listed. On success the directory is recorded as its
/// own entry (post-order, after all children) when the mode asks for
/// directories.
fn walk(dir: &Path, mode: SelectionMode) -> Option<ScanOutcome> {
    let reader = fs::read_dir(dir).ok()?;
    let mut local = ScanOutcome::default();

    for entry in reader {
        // An entry that errors mid-enumeration has no usable name; skip it
        // and keep listing the rest of the directory.
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(_) => {
                local.skipped.push(path);
                continue;
            }
        };

        if file_type.is_dir() {
            match walk(&path, mode) {
                Some(child) => {
                    local.total_bytes += child.total_bytes;
                    local.entries.extend(child.entries);
                    local.skipped.extend(child.skipped);
                }
                None => local.skipped.push(path),
            }
        } else {
            // Symlinks land here: `file_type` comes from the directory entry
            // without following the link, so a link to a directory is never
            // recursed into and cycles through links cannot occur.
            let len = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(_) => {
                    local.skipped.push(path);
                    continue;
                }
            };
            local.total_bytes += len;
            if mode.records_files() {
                local.entries.push(Entry { path, size: len });
            }
        }
    }

    if mode.records_dirs() {
        local.entries.push(Entry {
            path: dir.to_path_buf(),
            size: local.total_bytes,
        });
    }
    Some(local)
}
