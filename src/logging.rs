//! Logging setup.
//!
//! Events go to stderr so stdout stays clean for `--stdin` output.
//! `RUST_LOG` takes precedence over the `--verbose` flag:
//!
//! ```bash
//! RUST_LOG=belt_index=trace belt-index
//! ```

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Quiet (`warn`) unless `verbose` is set.
pub fn init(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .compact()
        .init();
}
