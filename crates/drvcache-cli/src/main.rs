use drvcache_core::logging;
use drvcache_core::DriverError;

mod cli;

use crate::cli::CliCommand;

/// Exit code when the freshly installed driver cannot report its version.
const EXIT_VERIFY_FAILED: i32 = 2;

/// Process exit status for a failed command.
fn exit_code(err: &anyhow::Error) -> i32 {
    let fatal_verify = err
        .downcast_ref::<DriverError>()
        .is_some_and(DriverError::is_fatal_verify);
    if fatal_verify {
        EXIT_VERIFY_FAILED
    } else {
        1
    }
}

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("drvcache error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}
