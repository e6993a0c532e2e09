//! CLI command handlers.

mod checksum;

pub use checksum::run_checksum;
