//! Command implementations.

pub mod clean;
pub mod config;
pub mod process;

pub use self::clean::execute_clean;
pub use self::config::{execute_config, resolve_config};
pub use self::process::execute_process;
