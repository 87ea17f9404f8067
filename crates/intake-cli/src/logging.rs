use tracing_subscriber::EnvFilter;

use crate::config::{IntakeConfig, LogFormat};

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// filter. Logs go to stderr so command output stays pipeable.
pub fn init(config: &IntakeConfig) -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| eyre::eyre!("invalid log filter {:?}: {e}", config.log_filter))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))
}
