pub mod discord;

use tracing_subscriber::EnvFilter;

/// Initialises the tracing subscriber for a mantabot process.
///
/// `RUST_LOG` takes priority when set; otherwise our own crates log at trace
/// and everything else at info.
pub fn tracing_init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mantabot_reply=trace"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
