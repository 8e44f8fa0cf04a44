use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber. Events go to stderr because stdout belongs
/// to the table; `RUST_LOG` wins over the configured filter.
pub fn init_tracing(cfg: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
