//! Human-readable byte counts and the ranked output table.

use crate::scan::Entry;

const SUFFIXES: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count with binary (1024-based) units and exactly two
/// fractional digits: `1536` -> `"1.50 KB"`. Values at or beyond the EB
/// range stay in EB rather than advancing further.
pub fn pretty_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut suffix = 0;
    while value >= 1024.0 && suffix < SUFFIXES.len() - 1 {
        value /= 1024.0;
        suffix += 1;
    }
    format!("{:.2} {}", value, SUFFIXES[suffix])
}

/// Width of the terminal the report goes to, when it can be determined.
pub fn terminal_width() -> Option<usize> {
    term_size::dimensions().map(|(w, _)| w)
}

/// Render ranked entries as display lines: 1-based rank (width 3), pretty
/// size (width 10), exact byte count, full path. When `width` is known, long
/// paths are middle-truncated so each line fits on one terminal row.
pub fn render_table(entries: &[Entry], width: Option<usize>) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let head = format!(
                "{:>3}. {:>10} ({} bytes) - ",
                i + 1,
                pretty_bytes(entry.size),
                entry.size
            );
            let path = entry.path.display().to_string();
            let path = match width {
                Some(w) if head.len() + path.chars().count() > w => {
                    shorten(&path, w.saturating_sub(head.len()))
                }
                _ => path,
            };
            format!("{head}{path}")
        })
        .collect()
}

/// Middle-truncate `path` to at most `budget` characters, keeping both the
/// start and the filename end visible. Budgets too small to show anything
/// useful leave the path untouched.
fn shorten(path: &str, budget: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if budget < 5 || chars.len() <= budget {
        return path.to_string();
    }
    let keep = budget - 3;
    let front = keep / 2;
    let back = keep - front;

    let mut out = String::with_capacity(budget);
    out.extend(&chars[..front]);
    out.push_str("...");
    out.extend(&chars[chars.len() - back..]);
    out
}
