//! Subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`-style directives, or `default_level` when they are
/// missing, blank, or fail to parse.
pub fn env_filter(directives: Option<&str>, default_level: &str) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Installs the stderr fmt subscriber, honoring `RUST_LOG` when set.
pub fn init_logging(default_level: &str) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref(), default_level))
        .with_writer(std::io::stderr)
        .init();
}
