//! Checksum command: sum the first 32 KiB of a file and print the report line.

use anyhow::Result;
use fwsum_core::checksum;
use std::path::Path;

/// Compute and print the additive checksum of the given file.
pub fn run_checksum(path: &Path, read_buffer_bytes: usize) -> Result<()> {
    tracing::info!("checksumming {}", path.display());
    let report = checksum::checksum_path(path, read_buffer_bytes)?;
    tracing::info!(
        bytes_checksummed = report.bytes_checksummed,
        checksum = report.checksum,
        "checksum computed"
    );
    println!("{}", report);
    Ok(())
}
