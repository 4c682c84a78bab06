use crate::Environment;
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre for binaries. Safe to call multiple times.
///
/// Shows the file:line of the error and hides the environment section.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing for command-line tools.
///
/// Events go to stderr so stdout stays reserved for command output.
///
/// - **Production** (`APP_ENV=production`): JSON lines, `warn` by default
/// - **Development**: compact human-readable lines, `info` by default
///
/// `RUST_LOG` overrides the default filter. Calling this more than once is a
/// no-op.
pub fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("warn")
        } else {
            EnvFilter::new("info")
        }
    });

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    if result.is_err() {
        // Already initialized (common in tests)
        debug!("Tracing already initialized, skipping re-initialization");
    }
}
