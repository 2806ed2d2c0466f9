/// Shared tracing setup for both binaries.
///
/// Diagnostics go to stderr so that stdout carries only the operator-facing
/// status lines ("Killed process ...", etc.). `RUST_LOG` overrides the
/// flag-derived level when set.
use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();
}
