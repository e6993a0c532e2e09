use fwsum_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    let file_logging = logging::init_logging().is_ok();
    if !file_logging {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        // The stderr sink would repeat the message below.
        if file_logging {
            tracing::error!("fwsum failed: {:#}", err);
        }
        eprintln!("fwsum error: {:#}", err);
        std::process::exit(1);
    }
}
