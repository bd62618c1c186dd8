//! Telemetry helpers for applications embedding `schedule-grid`.
//!
//! The layout pipeline only emits `tracing` events; installing a subscriber is
//! left to the host. `init_default_tracing` is a convenience for tools and tests.

/// Environment variable read before `RUST_LOG` when building the filter.
pub const LOG_ENV_VAR: &str = "SCHEDULE_GRID_LOG";

/// Filter used when neither [`LOG_ENV_VAR`] nor `RUST_LOG` is set: layout
/// stage summaries from this crate, warnings from everything else.
pub const DEFAULT_LOG_FILTER: &str = "warn,schedule_grid=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
