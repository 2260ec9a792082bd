//! Tracing subscriber setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_DIRECTIVE: &str = "finsight=info";

/// Install the global subscriber once; later calls are no-ops.
///
/// Logs go to stderr so report output on stdout stays clean. `verbose`
/// lowers the crate's level to `debug`.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let directive = if verbose { "finsight=debug" } else { DEFAULT_DIRECTIVE };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
        tracing::info!("still alive after double init");
    }
}
