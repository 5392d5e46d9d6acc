//! Tracing subscriber setup for dormatch tools.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging output for session tooling.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `dormatch_session=info` directive.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive("dormatch_session=info".parse().expect("static directive"))
            .from_env_lossy();

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
