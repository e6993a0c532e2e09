//! CLI for the fwsum firmware checksum tool.

mod commands;

use anyhow::Result;
use clap::Parser;
use fwsum_core::checksum::DEFAULT_FIRMWARE_FILE;
use fwsum_core::config;
use std::path::PathBuf;

use commands::run_checksum;

/// Additive checksum of the first 32 KiB of a firmware image, reported mod 65536.
#[derive(Debug, Parser)]
#[command(name = "fwsum", version)]
#[command(about = "Checksum the first 32768 bytes of a firmware image", long_about = None)]
pub struct Cli {
    /// Firmware image to checksum.
    #[arg(default_value = DEFAULT_FIRMWARE_FILE)]
    pub path: PathBuf,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load();
        tracing::debug!("loaded config: {:?}", cfg);

        run_checksum(&cli.path, cfg.read_buffer_bytes)
    }
}
