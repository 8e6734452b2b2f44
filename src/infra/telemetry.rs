use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::error::InfraError;

/// Install a global tracing subscriber. `RUST_LOG` refines the default
/// `info` directive.
pub fn init() -> Result<(), InfraError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt::layer().compact().with_target(true))
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}
