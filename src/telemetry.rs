//! Telemetry helpers for applications embedding `datepick-rs`.
//!
//! The library itself only emits events: hover transitions and close-timer
//! activity at `debug` (`interaction`), month and day selections at `debug`
//! (`api`), and locale fallbacks at `warn` (`locale`). Subscriber setup stays
//! explicit and opt-in; consumers can either call `init_default_tracing` or
//! wire their own `tracing` subscriber and filters. A
//! `RUST_LOG=datepick_rs=debug` filter surfaces the interaction events.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
