// SPDX-License-Identifier: PMPL-1.0-or-later

//! Logging setup for the CLI
//!
//! Events go to stderr so rendered reports can be piped from stdout.
//! `RUST_LOG` overrides the level picked from `--verbose`.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "transtat=debug" } else { "transtat=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
