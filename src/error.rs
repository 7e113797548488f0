use thiserror::Error;
use tracing::warn;

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,    // expected outcome, nothing to fix
    Warning, // recoverable
    Error,   // operation failed
}

/// Why an insertion was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Content was empty
    Empty,
    /// History already holds its maximum number of entries
    Full,
    /// Content exceeds the per-entry size cap
    TooLarge { size: usize, max: usize },
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "content is empty"),
            Self::Full => write!(f, "history is full"),
            Self::TooLarge { size, max } => {
                write!(f, "content is {} bytes, limit is {} bytes", size, max)
            }
        }
    }
}

/// Errors produced by the clipboard history core.
///
/// None of these are fatal: every variant is an expected outcome the
/// caller is meant to handle (e.g. show "history full" in the UI).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Insertion rejected: {0}")]
    Rejected(RejectReason),

    #[error("Index {index} out of range for history of {len} entries")]
    OutOfRange { index: usize, len: usize },

    #[error("No history entry at index {index}")]
    NotFound { index: usize },

    #[error("Failed to write to the system clipboard")]
    WriteFailed,
}

impl HistoryError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Rejected(RejectReason::Empty) => ErrorSeverity::Info,
            Self::Rejected(_) => ErrorSeverity::Warning,
            Self::OutOfRange { .. } => ErrorSeverity::Warning,
            Self::NotFound { .. } => ErrorSeverity::Warning,
            Self::WriteFailed => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(RejectReason::Empty) => "Nothing to save".to_string(),
            Self::Rejected(RejectReason::Full) => "Clipboard history is full".to_string(),
            Self::Rejected(RejectReason::TooLarge { max, .. }) => {
                format!("Item is larger than the {} KB limit", max / 1024)
            }
            Self::OutOfRange { .. } | Self::NotFound { .. } => {
                "That history item no longer exists".to_string()
            }
            Self::WriteFailed => "Could not copy to the clipboard".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Turn a recoverable failure into `None` after logging it.
///
/// For fallible steps with a sensible fallback (config loading falls back
/// to defaults). The log line carries the action that failed and the call
/// site.
///
/// ```ignore
/// use edgeboard_clipboard::error::ResultExt;
///
/// let config = read_config(path)
///     .ok_or_warn("read clipboard config")
///     .unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    fn ok_or_warn(self, action: &'static str) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn ok_or_warn(self, action: &'static str) -> Option<T> {
        let error = match self {
            Ok(value) => return Some(value),
            Err(error) => error,
        };
        let location = std::panic::Location::caller();
        warn!(action, error = ?error, location = %location, "Falling back after failure");
        None
    }
}
