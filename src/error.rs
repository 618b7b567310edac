/// The primary error type for `diskrank` operations.
///
/// Traversal failures are deliberately not represented here: an unreadable
/// subtree degrades to an empty one inside the scan instead of erroring, so
/// the only fallible surface left is the console boundary.
#[derive(Debug)]
pub enum ScanError {
    /// An I/O error on the console streams while prompting or reporting.
    Console(std::io::Error),

    /// Input read at the boundary that cannot be used (for example the input
    /// stream ending before a value was entered).
    Input(String),
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::Console(e) => write!(f, "console I/O error: {}", e),
            ScanError::Input(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Console(e) => Some(e),
            ScanError::Input(_) => None,
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Console(err)
    }
}
