//! Logging setup for the Dato CLI
//!
//! `RUST_LOG` wins over the `--verbose` flag when set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
///
/// Targets are prefixed with the binary's crate name (`dato`), not the package name.
fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(format!("{}=debug,info", env!("CARGO_CRATE_NAME")))
    } else {
        EnvFilter::new("warn")
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn debug_enabled(verbose: bool) -> bool {
        let subscriber = tracing_subscriber::registry().with(default_filter(verbose));
        tracing::subscriber::with_default(subscriber, || tracing::enabled!(Level::DEBUG))
    }

    #[test]
    fn test_verbose_enables_debug_for_own_events() {
        assert!(debug_enabled(true));
    }

    #[test]
    fn test_quiet_hides_debug() {
        assert!(!debug_enabled(false));
    }
}
