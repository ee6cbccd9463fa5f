//! Optional log output for hosts embedding the camera.
//!
//! Camera events are emitted under the `canvas_camera` target: command
//! classification and inertia steps at `trace`, gesture and scheduler
//! transitions at `debug`, dropped payloads and late frames at `warn`.

/// Installs a compact fmt subscriber showing `canvas_camera=info` unless
/// `RUST_LOG` says otherwise.
///
/// Needs the `telemetry` feature. Returns `false` when the feature is off or
/// the host already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("canvas_camera=info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
