use crate::config::LogConfig;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Install the global subscriber.
///
/// Output goes to stderr so stdout stays free for the interface. `RUST_LOG`
/// takes precedence over the configured filter.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))?;

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoLocal::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoLocal::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}
