//! Configuration module - clipboard history settings
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (HistoryConfig, CapacityPolicy)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_FLAG_SENSITIVE, MAX_CONTENT_SIZE, MAX_HISTORY};
pub use loader::{config_path, load_config, load_config_from};
pub use types::{CapacityPolicy, HistoryConfig};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
