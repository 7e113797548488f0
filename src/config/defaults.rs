//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Maximum number of entries kept in clipboard history
pub const MAX_HISTORY: usize = 100;

/// Maximum size of a single clipboard entry (1 MiB)
pub const MAX_CONTENT_SIZE: usize = 1_048_576;

/// Flag entries that look like they contain secrets (default: true)
pub const DEFAULT_FLAG_SENSITIVE: bool = true;

/// Config file location, tilde-expanded at load time
pub const DEFAULT_CONFIG_PATH: &str = "~/.edgeboard/clipboard.json";
