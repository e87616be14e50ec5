//! conform CLI entry point

use std::io::IsTerminal;

fn main() {
    // Structured logging goes to stderr so stdout only carries the report
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    conform::cli::run();
}
