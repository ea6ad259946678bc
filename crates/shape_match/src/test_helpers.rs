//! Shared helpers for unit tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for test output.
///
/// Safe to call from every test. Enable with
/// `RUST_LOG=shape_match=trace cargo test`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(filter)
                .init();
        }
    });
}
