//! Tracing subscriber setup for hosts and demos.
//!
//! The widget crates only emit `tracing` events; nothing is printed unless a
//! subscriber is installed, usually once from `main`.

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Directive used when neither `RUST_LOG` nor the caller supplies a valid one.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter: `RUST_LOG` wins, then `directive`, then [`DEFAULT_FILTER`].
#[must_use]
pub fn filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr fmt subscriber filtered by [`filter`].
///
/// Returns `false` if a global subscriber was already installed; that is not
/// an error, so calling this from several tests is fine.
pub fn init(directive: &str) -> bool {
    let filter = filter(directive);
    let summary = filter.to_string();
    let installed = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok();
    if installed {
        debug!(filter = %summary, "tracing subscriber installed");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Logging Tests =====

    #[test]
    fn test_init_twice_is_not_an_error() {
        init("switchy=debug");
        assert!(!init("switchy=trace"));
    }

    #[test]
    fn test_filter_accepts_directive() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(filter("switchy_widgets=debug").to_string(), "switchy_widgets=debug");
        }
    }

    #[test]
    fn test_filter_falls_back_on_garbage() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(filter("switchy=loud").to_string(), DEFAULT_FILTER);
        }
    }
}
