//! One-time tracing setup shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

/// Install the test tracing subscriber, at most once per process.
///
/// Verbosity comes from `TEST_LOG` when set, then `RUST_LOG`, and
/// defaults to `warn` so passing runs stay quiet. Safe to call from
/// every test; repeated calls are no-ops.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // with_test_writer keeps output inside the harness capture;
        // try_init tolerates a subscriber installed by another crate.
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
