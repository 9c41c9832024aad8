//! Diagnostic logging for the CLI.
//!
//! Logs always go to stderr so stdout carries only the report. `RUST_LOG`
//! takes precedence over the `-q`/`-v` flags.

use std::io::IsTerminal;

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;

use crate::args::GlobalArgs;

fn default_directive(global: &GlobalArgs) -> &'static str {
    if global.quiet {
        return "error";
    }
    match global.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_tracing(global: &GlobalArgs) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(global)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .with_filter(env_filter);

    // A subscriber may already be installed (tests).
    let _ = Registry::default().with(stderr_layer).try_init();
}
