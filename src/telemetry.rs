//! Opt-in tracing setup for hosts embedding `fn-graph`.
//!
//! The engine only emits `tracing` events; installing a subscriber is the
//! host's decision. With the `telemetry` feature these helpers install a
//! compact `fmt` subscriber so detection diagnostics become visible.

/// Filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "fn_graph=info";

/// Installs a compact subscriber honoring `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Installs a compact subscriber with an explicit fallback directive such as
/// `"fn_graph::analysis=trace"`.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
