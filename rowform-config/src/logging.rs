//! `tracing` subscriber setup

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_directives` (e.g.
/// `"rowform_core=debug,info"`). Returns an error when a subscriber is
/// already installed.
pub fn init_logging(default_directives: &str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directives)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}
