//! Opt-in `tracing` setup for the conversion pipeline.
//!
//! The library only emits events. Hosts install their own subscriber, or call
//! one of the helpers below when built with the `telemetry` feature.

/// Filter used when neither the caller nor `RUST_LOG` names one.
pub const DEFAULT_FILTER: &str = "info";

/// Picks the filter directive: an explicit one, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`]. Blank values are skipped.
#[must_use]
pub fn resolve_filter(explicit: Option<&str>) -> String {
    explicit
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .map(str::to_owned)
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .filter(|directive| !directive.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Installs a compact stderr subscriber filtered by `directive`.
///
/// Returns `false` without the `telemetry` feature, when the directive does
/// not parse, or when a global subscriber is already set.
#[must_use]
pub fn init_tracing_with_filter(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let Ok(filter) = tracing_subscriber::EnvFilter::try_new(directive) else {
            return false;
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}

/// [`init_tracing_with_filter`] with the directive from [`resolve_filter`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(&resolve_filter(None))
}
